//! Error types for spreadbase-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in spreadbase-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Table constructed without a name
    #[error("Table name required")]
    MissingTableName,

    /// Row index outside the table
    #[error("Invalid row index ({index}) - allowed 0 to {max}")]
    InvalidRowIndex { index: isize, max: isize },

    /// Negative integer used as a column index
    #[error("Negative column indexes not allowed: {0}")]
    InvalidColumnIndex(isize),

    /// Column letters outside `A`-`Z`
    #[error("Invalid letter in column identifier {0:?} (allowed 'a/A' to 'z/Z')")]
    InvalidLetterIdentifier(String),

    /// Column index beyond the sheet width or the addressed row
    #[error("Invalid column index ({index}) - allowed 0 to {max}")]
    ColumnOutOfRange { index: usize, max: isize },

    /// Inserted column doesn't match the number of rows
    #[error("Inserting column size ({actual}) different than existing columns size ({expected})")]
    ColumnSizeMismatch { expected: usize, actual: usize },

    /// Text that can't be normalized to UTF-8
    #[error("Invalid text: {0}")]
    InvalidText(String),

    /// Saving a document without tables
    #[error("At least one table must be present")]
    NoTablesPresent,

    /// Saving a document that was never bound to a path
    #[error("Document path not specified")]
    DestinationNotSpecified,
}
