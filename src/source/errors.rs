//! Source errors

use thiserror::Error;

/// Result type for source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors raised by the bundled sources
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("No result set registered for query: {0}")]
    UnknownQuery(String),

    #[error("Row {row} has {actual} values, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Scan called with no current row")]
    NoCurrentRow,

    #[error("Cursor is closed")]
    Closed,

    #[error("Cannot decode column '{column}': {reason}")]
    Decode { column: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid fixture JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SourceError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SourceError::UnknownQuery(_) => "SOURCE_UNKNOWN_QUERY",
            SourceError::RowWidth { .. } => "SOURCE_ROW_WIDTH",
            SourceError::NoCurrentRow => "SOURCE_NO_CURRENT_ROW",
            SourceError::Closed => "SOURCE_CLOSED",
            SourceError::Decode { .. } => "SOURCE_DECODE",
            SourceError::Io(_) => "SOURCE_IO",
            SourceError::Json(_) => "SOURCE_JSON",
        }
    }
}
