//! Observable export events
//!
//! Events are explicit and typed. The export's own BEGIN/COMPLETE/FAILED
//! lines come from an [`ObservationScope`](super::ObservationScope).

use std::fmt;

/// Observable events during an export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Source accepted the query and opened a cursor
    QueryExecuted,
    /// Sink accepted the schema
    SchemaDelivered,
    /// One row handed to the sink (TRACE only)
    RowDelivered,
    /// Cursor released
    CursorClosed,
    /// Cursor release failed (non-fatal)
    CloseFailed,
    /// Configuration loaded
    ConfigLoaded,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::QueryExecuted => "QUERY_EXECUTED",
            Event::SchemaDelivered => "SCHEMA_DELIVERED",
            Event::RowDelivered => "ROW_DELIVERED",
            Event::CursorClosed => "CURSOR_CLOSED",
            Event::CloseFailed => "CLOSE_FAILED",
            Event::ConfigLoaded => "CONFIG_LOADED",
        }
    }

    /// Returns true if this event reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::CloseFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
