//! In-memory source serving canned result sets

use std::collections::HashMap;
use std::sync::Arc;

use super::errors::SourceError;
use super::{ColumnType, Cursor, RowSource};
use crate::value::Value;
use crate::BoxError;

/// Name and declared type of one result column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    pub type_name: String,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// A complete, materialized result set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    pub columns: Vec<ColumnDef>,
    pub rows: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Creates an empty result set with the given `(name, type)` columns
    pub fn new<N, T>(columns: impl IntoIterator<Item = (N, T)>) -> Self
    where
        N: Into<String>,
        T: Into<String>,
    {
        Self {
            columns: columns
                .into_iter()
                .map(|(n, t)| ColumnDef::new(n, t))
                .collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row
    pub fn with_row(mut self, row: Vec<Value>) -> Self {
        self.rows.push(row);
        self
    }
}

/// Source that maps exact query text to a canned result set
#[derive(Debug, Default)]
pub struct MemorySource {
    results: HashMap<String, Arc<ResultSet>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a result set for `query`, replacing any earlier one
    pub fn insert(&mut self, query: impl Into<String>, result: ResultSet) {
        self.results.insert(query.into(), Arc::new(result));
    }

    /// Builder form of [`MemorySource::insert`]
    pub fn with_result(mut self, query: impl Into<String>, result: ResultSet) -> Self {
        self.insert(query, result);
        self
    }

    /// Registered queries, sorted
    pub fn queries(&self) -> Vec<&str> {
        let mut queries: Vec<&str> = self.results.keys().map(String::as_str).collect();
        queries.sort_unstable();
        queries
    }
}

impl RowSource for MemorySource {
    type Cursor = MemoryCursor;

    fn select(&mut self, query: &str) -> Result<MemoryCursor, BoxError> {
        let result = self
            .results
            .get(query)
            .ok_or_else(|| SourceError::UnknownQuery(query.to_string()))?;
        Ok(MemoryCursor::new(Arc::clone(result)))
    }
}

/// Cursor over a [`ResultSet`]
#[derive(Debug)]
pub struct MemoryCursor {
    result: Arc<ResultSet>,
    /// Index of the current row; None before the first `advance` and once exhausted
    current: Option<usize>,
    /// Rows handed out so far; stops at the row count
    position: usize,
    closed: bool,
}

impl MemoryCursor {
    pub fn new(result: Arc<ResultSet>) -> Self {
        Self {
            result,
            current: None,
            position: 0,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Cursor for MemoryCursor {
    fn columns(&self) -> Result<Vec<String>, BoxError> {
        if self.closed {
            return Err(SourceError::Closed.into());
        }
        Ok(self.result.columns.iter().map(|c| c.name.clone()).collect())
    }

    fn column_types(&self) -> Result<Vec<ColumnType>, BoxError> {
        if self.closed {
            return Err(SourceError::Closed.into());
        }
        Ok(self
            .result
            .columns
            .iter()
            .map(|c| ColumnType::new(c.type_name.clone()))
            .collect())
    }

    fn advance(&mut self) -> bool {
        if self.closed {
            return false;
        }
        if self.position < self.result.rows.len() {
            self.current = Some(self.position);
            self.position += 1;
            true
        } else {
            self.current = None;
            false
        }
    }

    fn scan(&mut self, out: &mut [Value]) -> Result<(), BoxError> {
        if self.closed {
            return Err(SourceError::Closed.into());
        }
        let index = self.current.ok_or(SourceError::NoCurrentRow)?;
        let row = &self.result.rows[index];
        if row.len() != out.len() {
            return Err(SourceError::RowWidth {
                row: index + 1,
                expected: out.len(),
                actual: row.len(),
            }
            .into());
        }
        out.clone_from_slice(row);
        Ok(())
    }

    fn close(&mut self) -> Result<(), BoxError> {
        self.closed = true;
        self.current = None;
        Ok(())
    }
}
