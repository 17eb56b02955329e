//! Observability for exports
//!
//! - Structured logging (JSON lines on stderr)
//! - Export counters
//! - Lifecycle events and scopes
//!
//! # Principles
//!
//! 1. Observability is read-only: it never changes an export's outcome
//! 2. No background threads
//! 3. Deterministic output ordering
//!
//! # Usage
//!
//! ```ignore
//! use rowexport::observability::{Event, Logger, ObservationScope};
//!
//! Logger::info("CONFIG_LOADED", &[("format", "csv")]);
//!
//! let scope = ObservationScope::new("EXPORT");
//! // ... do work ...
//! scope.complete();
//! ```

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{ExportMetrics, MetricsSnapshot};
pub use scope::{ObservationScope, Timer};

/// Log a lifecycle event with fields
///
/// Failure events go out at WARN; everything else at INFO, except per-row
/// events which are TRACE.
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    let severity = match event {
        Event::RowDelivered => Severity::Trace,
        e if e.is_failure() => Severity::Warn,
        _ => Severity::Info,
    };
    Logger::log(severity, event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // Verifies no panic
        log_event(Event::QueryExecuted, &[("export_id", "abc")]);
        log_event(Event::CloseFailed, &[("reason", "connection reset")]);
        log_event(Event::RowDelivered, &[]);
    }
}
