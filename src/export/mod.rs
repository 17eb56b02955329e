//! Export pipeline
//!
//! Streams the result of one query from a [`RowSource`](crate::source::RowSource)
//! into a [`Sink`](crate::sink::Sink).
//!
//! # Execution Flow (strict order)
//!
//! 1. Execute the query
//! 2. Discover column names, then declared type names
//! 3. Deliver the schema to the sink
//! 4. Scan and deliver rows one at a time
//! 5. Complete the sink, only if every row was delivered
//!
//! # Invariants
//!
//! - The cursor is closed on every exit path
//! - The first failure is the export's result; a close failure never is
//! - At most one row is in flight; nothing is buffered
//! - No retries

mod errors;
mod pipeline;
mod state;
mod summary;

pub use errors::{ExportError, ExportResult, SinkStage};
pub use pipeline::Exporter;
pub use state::ExportState;
pub use summary::{ExportSummary, Schema};
