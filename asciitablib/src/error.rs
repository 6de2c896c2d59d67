//! Error types for asciitablib

use thiserror::Error;

/// Errors that can occur while rendering a table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The table is absent or malformed (e.g. a row with the wrong cell count)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Locale tag not recognised when parsing render options
    #[error("unknown locale '{0}'")]
    UnknownLocale(String),
}

impl TableError {
    /// Shorthand for the error raised when no table was supplied.
    pub fn missing_table() -> Self {
        TableError::InvalidInput("no table supplied".to_string())
    }

    /// Shorthand for a row whose cell count does not match the columns.
    pub fn row_length(row: usize, expected: usize, found: usize) -> Self {
        TableError::InvalidInput(format!(
            "row {} has {} cells, expected {}",
            row, found, expected
        ))
    }
}
