//! Export lifecycle state
//!
//! ```text
//! Idle -> QueryExecuted -> SchemaDelivered -> RowDelivered* -> Completed
//!   \__________\________________\_______________\_________-> Aborted
//! ```
//!
//! `Completed` and `Aborted` are terminal.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportState {
    Idle,
    QueryExecuted,
    SchemaDelivered,
    RowDelivered,
    Completed,
    Aborted,
}

impl ExportState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportState::Idle => "IDLE",
            ExportState::QueryExecuted => "QUERY_EXECUTED",
            ExportState::SchemaDelivered => "SCHEMA_DELIVERED",
            ExportState::RowDelivered => "ROW_DELIVERED",
            ExportState::Completed => "COMPLETED",
            ExportState::Aborted => "ABORTED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ExportState::Completed | ExportState::Aborted)
    }

    /// Whether `next` is a legal successor of `self`
    pub fn can_transition_to(&self, next: ExportState) -> bool {
        use ExportState::*;

        match (*self, next) {
            (Completed | Aborted, _) => false,
            (_, Aborted) => true,
            (Idle, QueryExecuted) => true,
            (QueryExecuted, SchemaDelivered) => true,
            (SchemaDelivered | RowDelivered, RowDelivered) => true,
            (SchemaDelivered | RowDelivered, Completed) => true,
            _ => false,
        }
    }

    /// Move to `next`
    pub fn transition(&mut self, next: ExportState) {
        debug_assert!(
            self.can_transition_to(next),
            "illegal export transition {} -> {}",
            self,
            next
        );
        *self = next;
    }
}

impl fmt::Display for ExportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
