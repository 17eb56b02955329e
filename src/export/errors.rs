//! Export error types
//!
//! Error codes:
//! - EXPORT_QUERY_FAILED (ERROR)
//! - EXPORT_SCHEMA_FAILED (ERROR)
//! - EXPORT_ROW_SCAN_FAILED (ERROR)
//! - EXPORT_SINK_FAILED (ERROR)
//! - EXPORT_CLOSE_FAILED (WARN, never returned from an export)

use std::fmt;

use thiserror::Error;

use crate::observability::Severity;
use crate::BoxError;

/// Which sink call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkStage {
    /// `pre_write`
    Schema,
    /// `write_row` for the given 1-based row number
    Row(u64),
    /// `post_write`
    Completion,
}

impl fmt::Display for SinkStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkStage::Schema => write!(f, "schema"),
            SinkStage::Row(n) => write!(f, "row {}", n),
            SinkStage::Completion => write!(f, "completion"),
        }
    }
}

/// Failure of one export
///
/// Each variant wraps the collaborator's error unchanged as its `source()`.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("query failed: {0}")]
    Query(#[source] BoxError),

    #[error("schema unavailable: {0}")]
    Schema(#[source] BoxError),

    #[error("row {row} could not be scanned: {source}")]
    RowScan {
        row: u64,
        #[source]
        source: BoxError,
    },

    #[error("sink rejected {stage}: {source}")]
    Sink {
        stage: SinkStage,
        #[source]
        source: BoxError,
    },

    #[error("cursor close failed: {0}")]
    Close(#[source] BoxError),
}

impl ExportError {
    pub(crate) fn sink(stage: SinkStage, source: BoxError) -> Self {
        ExportError::Sink { stage, source }
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ExportError::Query(_) => "EXPORT_QUERY_FAILED",
            ExportError::Schema(_) => "EXPORT_SCHEMA_FAILED",
            ExportError::RowScan { .. } => "EXPORT_ROW_SCAN_FAILED",
            ExportError::Sink { .. } => "EXPORT_SINK_FAILED",
            ExportError::Close(_) => "EXPORT_CLOSE_FAILED",
        }
    }

    /// Close failures are diagnostics; everything else aborts the export
    pub fn severity(&self) -> Severity {
        match self {
            ExportError::Close(_) => Severity::Warn,
            _ => Severity::Error,
        }
    }

    /// The collaborator's original error
    pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        match self {
            ExportError::Query(e)
            | ExportError::Schema(e)
            | ExportError::Close(e)
            | ExportError::RowScan { source: e, .. }
            | ExportError::Sink { source: e, .. } => e.as_ref(),
        }
    }

    /// Consume the error, returning the collaborator's original error
    pub fn into_inner(self) -> BoxError {
        match self {
            ExportError::Query(e)
            | ExportError::Schema(e)
            | ExportError::Close(e)
            | ExportError::RowScan { source: e, .. }
            | ExportError::Sink { source: e, .. } => e,
        }
    }
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
