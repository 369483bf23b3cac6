pub mod decklist;
pub mod reader;

pub use decklist::{load_decklist, read_decklist, read_decklist_file, resolve_decklist};
pub use reader::{read_catalog, read_catalog_file};

use crate::error::{CatalogError, Result};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Open an input file, reporting a missing path as `FileNotFound`
pub(crate) fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound(path.to_path_buf()),
        _ => CatalogError::Io(e),
    })
}
