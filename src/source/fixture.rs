//! JSON fixture files
//!
//! A fixture is a list of canned result sets keyed by query text:
//!
//! ```json
//! {"results": [{"query": "SELECT * FROM t",
//!               "columns": [{"name": "id", "type": "INTEGER"}],
//!               "rows": [[1], [2]]}]}
//! ```
//!
//! Cells are decoded into [`Value`]s the way a driver would, using the
//! declared column type as the wire hint: RFC 3339 strings in timestamp
//! columns become timestamps, `\x`-prefixed hex in binary columns becomes
//! bytes.

use std::fs;
use std::path::Path;

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use super::errors::{SourceError, SourceResult};
use super::memory::{ColumnDef, MemorySource, ResultSet};
use crate::value::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureColumn {
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureResult {
    pub query: String,
    pub columns: Vec<FixtureColumn>,
    #[serde(default)]
    pub rows: Vec<Vec<serde_json::Value>>,
}

/// Top-level fixture document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureFile {
    #[serde(default)]
    pub results: Vec<FixtureResult>,
}

impl FixtureFile {
    /// Load a fixture from a JSON file
    pub fn load(path: &Path) -> SourceResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a fixture from JSON text
    pub fn parse(content: &str) -> SourceResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Decode every result set and register it in a [`MemorySource`]
    pub fn into_source(self) -> SourceResult<MemorySource> {
        let mut source = MemorySource::new();
        for result in self.results {
            let query = result.query.clone();
            source.insert(query, result.decode()?);
        }
        Ok(source)
    }
}

impl FixtureResult {
    fn decode(self) -> SourceResult<ResultSet> {
        let columns: Vec<ColumnDef> = self
            .columns
            .into_iter()
            .map(|c| ColumnDef::new(c.name, c.type_name))
            .collect();

        let mut rows = Vec::with_capacity(self.rows.len());
        for raw in self.rows {
            let mut row = Vec::with_capacity(raw.len());
            for (i, cell) in raw.into_iter().enumerate() {
                // Cells past the declared width decode untyped; scan rejects the row later
                let value = match columns.get(i) {
                    Some(col) => decode_cell(cell, col)?,
                    None => decode_cell(cell, &ColumnDef::new(format!("#{}", i), ""))?,
                };
                row.push(value);
            }
            rows.push(row);
        }

        Ok(ResultSet { columns, rows })
    }
}

/// Wire class implied by a declared type name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WireClass {
    Timestamp,
    Binary,
    Plain,
}

fn wire_class(type_name: &str) -> WireClass {
    let upper = type_name.trim().to_ascii_uppercase();
    if upper.starts_with("TIMESTAMP") || upper == "DATETIME" {
        WireClass::Timestamp
    } else if matches!(upper.as_str(), "BLOB" | "BYTEA" | "BINARY" | "VARBINARY") {
        WireClass::Binary
    } else {
        WireClass::Plain
    }
}

fn decode_cell(cell: serde_json::Value, column: &ColumnDef) -> SourceResult<Value> {
    let class = wire_class(&column.type_name);
    let s = match cell {
        serde_json::Value::String(s) if class != WireClass::Plain => s,
        other => return Ok(Value::from(other)),
    };

    if class == WireClass::Timestamp {
        let t = DateTime::parse_from_rfc3339(&s).map_err(|e| SourceError::Decode {
            column: column.name.clone(),
            reason: format!("invalid RFC 3339 timestamp '{}': {}", s, e),
        })?;
        return Ok(Value::Timestamp(t));
    }

    match s.strip_prefix("\\x") {
        Some(digits) => hex::decode(digits)
            .map(Value::Bytes)
            .map_err(|e| SourceError::Decode {
                column: column.name.clone(),
                reason: format!("invalid hex: {}", e),
            }),
        None => Ok(Value::Bytes(s.into_bytes())),
    }
}
