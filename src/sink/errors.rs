//! Sink errors

use std::io;

use thiserror::Error;

/// Result type for sink operations
pub type SinkResult<T> = Result<T, SinkError>;

/// Errors raised by the bundled sinks
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Row written before schema was accepted")]
    NotStarted,

    #[error("Schema already accepted")]
    AlreadyStarted,

    #[error("Row has {actual} values, schema has {expected} columns")]
    WidthMismatch { expected: usize, actual: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SinkError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SinkError::NotStarted => "SINK_NOT_STARTED",
            SinkError::AlreadyStarted => "SINK_ALREADY_STARTED",
            SinkError::WidthMismatch { .. } => "SINK_WIDTH_MISMATCH",
            SinkError::Csv(_) => "SINK_CSV",
            SinkError::Json(_) => "SINK_JSON",
            SinkError::Io(_) => "SINK_IO",
        }
    }
}
