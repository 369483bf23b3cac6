//! Decklist parsing and resolution against a catalog

use super::open_file;
use crate::error::Result;
use crate::model::CardCollection;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read decklist identifiers, one per line, trimmed.
///
/// Blank lines are kept as empty identifiers; they never match a card.
pub fn read_decklist<R: BufRead>(source: R) -> Result<Vec<String>> {
    let mut ids = Vec::new();
    for line in source.lines() {
        ids.push(line?.trim().to_string());
    }
    Ok(ids)
}

/// Read decklist identifiers from a file
pub fn read_decklist_file(path: &Path) -> Result<Vec<String>> {
    let file = open_file(path)?;
    let ids = read_decklist(BufReader::new(file))?;
    log::debug!("Read {} decklist entries from {}", ids.len(), path.display());
    Ok(ids)
}

/// Look up each identifier in `catalog`.
///
/// Each identifier contributes the first card carrying it, so an id listed
/// twice yields the card twice. Unknown identifiers are dropped. The result
/// is in catalog order, not decklist order.
pub fn resolve_decklist<S: AsRef<str>>(ids: &[S], catalog: &CardCollection) -> CardCollection {
    let mut cards = Vec::with_capacity(ids.len());
    for id in ids {
        let id = id.as_ref();
        match catalog.find_by_id(id) {
            Some(card) => cards.push(card.clone()),
            None => log::warn!("Decklist id {:?} not found in catalog", id),
        }
    }
    CardCollection::new(cards)
}

/// Read a decklist file and resolve it against `catalog`
pub fn load_decklist(path: &Path, catalog: &CardCollection) -> Result<CardCollection> {
    let ids = read_decklist_file(path)?;
    Ok(resolve_decklist(&ids, catalog))
}
