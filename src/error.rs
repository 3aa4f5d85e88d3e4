//! Error type for table reading and writing

use thiserror::Error;

/// Errors surfaced by table lookup, cell conversion and row writing
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Row lookup for a column that was never populated in that row
    #[error("Key '{0}' doesn't exist")]
    ColumnNotFound(String),

    /// Cell text is not a valid lexeme for the requested numeric type
    #[error("Cannot convert '{value}' to {target}")]
    InvalidNumber {
        value: String,
        target: &'static str,
    },

    /// Row written with a field count different from the header length
    #[error(
        "Row field count doesn't match the specified column count (expected {expected}, got {actual})"
    )]
    RowShape { expected: usize, actual: usize },

    /// [std::io::Error]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, Error>;
