//! Catalog CSV parsing

use super::open_file;
use crate::error::{CatalogError, Result};
use crate::model::{CardCollection, CardRecord};
use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Number of columns a catalog row must carry
pub const CATALOG_FIELDS: usize = 7;

/// A catalog row as it appears in the file, before coercion
#[derive(Debug, Deserialize)]
struct RawCardRow {
    id: String,
    name: String,
    card_type: String,
    description: String,
    race: String,
    archetype: String,
    price: String,
}

impl RawCardRow {
    fn into_card(self, line: u64) -> Result<CardRecord> {
        let price = parse_price(&self.price).ok_or_else(|| CatalogError::MalformedPrice {
            line,
            value: self.price.clone(),
        })?;

        Ok(CardRecord::new(self.id, &self.name, price)
            .with_type(self.card_type)
            .with_description(self.description)
            .with_race(self.race)
            .with_archetype(self.archetype))
    }
}

/// Parse a price, accepting surrounding whitespace but only finite numbers
fn parse_price(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|p| p.is_finite())
}

/// Line breaks embedded in quoted fields of `record`
fn embedded_newlines(record: &StringRecord) -> u64 {
    record.iter().map(|f| f.matches('\n').count() as u64).sum()
}

/// Read a catalog from CSV content.
///
/// The first row is a header and is skipped. Any bad row fails the whole
/// load, including a blank line, which counts as a row with no fields; no
/// partial collection is returned.
pub fn read_catalog<R: Read>(mut source: R) -> Result<CardCollection> {
    let mut content = String::new();
    source.read_to_string(&mut content)?;
    let total_lines = content.lines().count() as u64;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    // The csv reader drops blank lines, so track where the next row must start
    let mut next_line = 2 + embedded_newlines(reader.headers()?);
    let mut cards = Vec::new();
    let mut record = StringRecord::new();

    while reader.read_record(&mut record)? {
        let line = record.position().map(|p| p.line()).unwrap_or(next_line);
        if line > next_line {
            return Err(CatalogError::MissingField {
                line: next_line,
                found: 0,
            });
        }
        next_line = line + 1 + embedded_newlines(&record);

        if record.len() < CATALOG_FIELDS {
            return Err(CatalogError::MissingField {
                line,
                found: record.len(),
            });
        }

        // Columns past the seventh are ignored
        let fields: StringRecord = record.iter().take(CATALOG_FIELDS).collect();
        let row: RawCardRow = fields.deserialize(None)?;
        cards.push(row.into_card(line)?);
    }

    if total_lines >= next_line {
        return Err(CatalogError::MissingField {
            line: next_line,
            found: 0,
        });
    }

    log::debug!("Parsed {} catalog rows", cards.len());
    Ok(CardCollection::new(cards))
}

/// Read a catalog from a CSV file
pub fn read_catalog_file(path: &Path) -> Result<CardCollection> {
    let file = open_file(path)?;
    let cards = read_catalog(file)?;
    log::info!("Loaded {} cards from {}", cards.len(), path.display());
    Ok(cards)
}
