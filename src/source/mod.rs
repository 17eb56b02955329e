//! Row sources
//!
//! A source executes a query and hands back a [`Cursor`] over the result set.
//! The export pipeline owns the cursor for the duration of one export and is
//! responsible for closing it on every exit path.
//!
//! The crate ships an in-memory source ([`MemorySource`]) that serves canned
//! result sets, plus a JSON fixture format that loads into it.

mod errors;
mod fixture;
mod memory;

pub use errors::{SourceError, SourceResult};
pub use fixture::{FixtureColumn, FixtureFile, FixtureResult};
pub use memory::{ColumnDef, MemoryCursor, MemorySource, ResultSet};

use crate::value::Value;
use crate::BoxError;

/// Declared type metadata for one result column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnType {
    database_type_name: String,
}

impl ColumnType {
    /// Creates a column type from the provider's type name
    pub fn new(database_type_name: impl Into<String>) -> Self {
        Self {
            database_type_name: database_type_name.into(),
        }
    }

    /// Provider-specific type name, e.g. `INTEGER` or `VARCHAR`
    pub fn database_type_name(&self) -> &str {
        &self.database_type_name
    }
}

/// Something that can execute a query and produce a cursor
pub trait RowSource {
    /// Cursor type over an open result set
    type Cursor: Cursor;

    /// Execute a query, returning an open cursor
    fn select(&mut self, query: &str) -> Result<Self::Cursor, BoxError>;
}

/// Live handle over an in-progress result set
pub trait Cursor {
    /// Column names in result order. Names may repeat.
    fn columns(&self) -> Result<Vec<String>, BoxError>;

    /// Declared column types, same length and order as `columns`
    fn column_types(&self) -> Result<Vec<ColumnType>, BoxError>;

    /// Move to the next row. Returns false once the result set is exhausted.
    fn advance(&mut self) -> bool;

    /// Decode the current row into `out`, one slot per column
    fn scan(&mut self, out: &mut [Value]) -> Result<(), BoxError>;

    /// Release the underlying resources
    fn close(&mut self) -> Result<(), BoxError>;
}

impl<S: RowSource + ?Sized> RowSource for &mut S {
    type Cursor = S::Cursor;

    fn select(&mut self, query: &str) -> Result<Self::Cursor, BoxError> {
        (**self).select(query)
    }
}
