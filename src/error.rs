use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Malformed price on line {line}: {value:?}")]
    MalformedPrice { line: u64, value: String },

    #[error("Missing field on line {line}: expected 7 fields, found {found}")]
    MissingField { line: u64, found: usize },

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Cannot compute statistics over an empty collection")]
    EmptyCollection,

    #[error("Input closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl CatalogError {
    /// Errors the interactive layer answers with a re-prompt instead of aborting
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CatalogError::FileNotFound(_) | CatalogError::InvalidCategory(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        assert!(CatalogError::FileNotFound(PathBuf::from("cards.csv")).is_recoverable());
        assert!(CatalogError::InvalidCategory("attack".to_string()).is_recoverable());

        assert!(!CatalogError::MissingField { line: 2, found: 0 }.is_recoverable());
        assert!(!CatalogError::MalformedPrice {
            line: 2,
            value: "x".to_string()
        }
        .is_recoverable());
        assert!(!CatalogError::EmptyCollection.is_recoverable());
        assert!(!CatalogError::InputClosed.is_recoverable());
    }
}
