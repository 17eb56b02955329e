//! Schema and per-export summary

use uuid::Uuid;

use super::state::ExportState;

/// Ordered column names and declared type names of one result set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub names: Vec<String>,
    pub types: Vec<String>,
}

impl Schema {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `(name, type)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.types.iter().map(String::as_str))
    }
}

/// Outcome of a successful export
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Identifier carried on every log line of this export
    pub export_id: Uuid,
    pub schema: Schema,
    /// Rows delivered to the sink
    pub rows: u64,
    /// Always `Completed` for a returned summary
    pub state: ExportState,
}
