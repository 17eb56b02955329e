//! rowexport - stream query result sets from a tabular source into a sink
//!
//! The export pipeline pulls rows from a [`source::RowSource`] one at a time
//! and hands them to a [`sink::Sink`]. [`value::stringify`] is the shared
//! text normalization for sinks that need it.

pub mod cli;
pub mod export;
pub mod observability;
pub mod sink;
pub mod source;
pub mod value;

/// Error type crossing the source and sink boundaries
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub use export::{ExportError, ExportResult, ExportSummary, Exporter};
pub use sink::Sink;
pub use source::{Cursor, RowSource};
pub use value::{stringify, Value};
