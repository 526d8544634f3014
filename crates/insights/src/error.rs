//! Error types for loading and querying.

use thiserror::Error;

/// Failures while reading the spreadsheet.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("The file was not found at {0}")]
    FileNotFound(String),

    #[error("An error occurred: {0}")]
    Read(String),

    #[error("An error occurred: worksheet '{0}' not found")]
    SheetNotFound(String),

    #[error("An error occurred: workbook has no worksheets")]
    EmptyWorkbook,

    #[error("An error occurred: failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Failures while answering a query against a loaded table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Column '{0}' not found in the spreadsheet")]
    MissingColumn(String),
}

/// Result type for load operations.
pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Result type for query operations.
pub type QueryResult<T> = std::result::Result<T, QueryError>;
