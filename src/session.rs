//! Menu-driven interactive session and the report blocks it prints

use crate::catalog::load_decklist;
use crate::error::{CatalogError, Result};
use crate::model::{CardCollection, Category};
use crate::report::{render_stats, render_table};
use crate::stats::PriceStats;
use std::io::{BufRead, Write};
use std::path::Path;

pub const MENU: &str = "\nYu-Gi-Oh! Card Data Analysis\
                        \n1) Check All Cards\
                        \n2) Search Cards\
                        \n3) View Decklist\
                        \n4) Exit\
                        \nEnter option: ";

pub const CATALOG_PROMPT: &str = "\nEnter cards file name: ";
pub const DECKLIST_PROMPT: &str = "\nEnter decklist filename: ";
pub const QUERY_PROMPT: &str = "\nEnter query: ";
pub const CATEGORY_PROMPT: &str = "\nEnter category to search: ";

/// Rows shown by "Check All Cards" unless configured otherwise
pub const DEFAULT_DISPLAY_LIMIT: usize = 50;

/// Line-oriented prompt/answer channel
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print `text` and read one line, without its line terminator
    pub fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CatalogError::InputClosed);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(line)
    }

    /// Ask for a file name until `load` finds the file.
    ///
    /// Recoverable errors (a missing file) re-prompt; any other failure is returned.
    pub fn prompt_file<T, F>(&mut self, text: &str, mut load: F) -> Result<T>
    where
        F: FnMut(&Path) -> Result<T>,
    {
        loop {
            let name = self.prompt(text)?;
            match load(Path::new(&name)) {
                Err(e) if e.is_recoverable() => {
                    log::warn!("{}", e);
                    self.say("\nFile not Found. Please try again!")?;
                }
                other => return other,
            }
        }
    }

    /// Ask for a search category until a valid one is given
    pub fn prompt_category(&mut self) -> Result<Category> {
        loop {
            let answer = self.prompt(CATEGORY_PROMPT)?;
            match answer.parse::<Category>() {
                Ok(category) => return Ok(category),
                Err(e) if e.is_recoverable() => {
                    log::debug!("{}", e);
                    self.say("\nIncorrect category was selected!")?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Print the catalog size, its first `limit` rows and full-catalog statistics
pub fn write_catalog_listing<W: Write>(
    out: &mut W,
    catalog: &CardCollection,
    limit: usize,
) -> Result<()> {
    writeln!(out, "\nThere are {} cards in the dataset.", catalog.len())?;
    write!(out, "{}", render_table(catalog.head(limit)))?;
    write_stats(out, catalog)
}

/// Print a search result view, or the no-match message
pub fn write_search_results<W: Write>(
    out: &mut W,
    results: &CardCollection,
    query: &str,
    category: Category,
) -> Result<()> {
    writeln!(out, "\nSearch results")?;
    if results.is_empty() {
        writeln!(
            out,
            "\nThere are no cards with '{}' in the '{}' category.",
            query, category
        )?;
        return Ok(());
    }
    writeln!(
        out,
        "\nThere are {} cards with '{}' in the '{}' category.",
        results.len(),
        query,
        category
    )?;
    write!(out, "{}", render_table(results))?;
    write_stats(out, results)
}

/// Print a resolved decklist view
pub fn write_decklist<W: Write>(out: &mut W, deck: &CardCollection) -> Result<()> {
    writeln!(out, "\nSearch results")?;
    write!(out, "{}", render_table(deck))?;
    write_stats(out, deck)
}

/// Statistics are only printed for non-empty views
fn write_stats<W: Write>(out: &mut W, view: &CardCollection) -> Result<()> {
    if view.is_empty() {
        return Ok(());
    }
    let stats = PriceStats::compute(view)?;
    write!(out, "{}", render_stats(&stats))?;
    Ok(())
}

/// The interactive menu loop over a loaded catalog
pub struct Session<R, W> {
    catalog: CardCollection,
    console: Console<R, W>,
    display_limit: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(catalog: CardCollection, console: Console<R, W>) -> Self {
        Self {
            catalog,
            console,
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }

    pub fn with_display_limit(mut self, limit: usize) -> Self {
        self.display_limit = limit;
        self
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        match self.menu_loop() {
            Ok(()) | Err(CatalogError::InputClosed) => {}
            Err(e) => return Err(e),
        }
        self.console.say("\nThanks for your support in Yu-Gi-Oh! TCG")
    }

    fn menu_loop(&mut self) -> Result<()> {
        loop {
            let option = self.console.prompt(MENU)?;
            match option.as_str() {
                "1" => self.check_all_cards()?,
                "2" => self.search_cards()?,
                "3" => self.view_decklist()?,
                "4" => return Ok(()),
                _ => self.console.say("Invalid option. Please try again!")?,
            }
        }
    }

    fn check_all_cards(&mut self) -> Result<()> {
        write_catalog_listing(self.console.output(), &self.catalog, self.display_limit)
    }

    fn search_cards(&mut self) -> Result<()> {
        let query = self.console.prompt(QUERY_PROMPT)?;
        let category = self.console.prompt_category()?;
        let results = self.catalog.search(&query, category);
        write_search_results(self.console.output(), &results, &query, category)
    }

    fn view_decklist(&mut self) -> Result<()> {
        let catalog = &self.catalog;
        let deck = self
            .console
            .prompt_file(DECKLIST_PROMPT, |path| load_decklist(path, catalog))?;
        log::debug!("decklist resolved to {} cards", deck.len());
        write_decklist(self.console.output(), &deck)
    }
}
