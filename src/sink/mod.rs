//! Output sinks
//!
//! A sink receives the schema once, then every row in result order, then a
//! single completion call. The sink owns the output encoding; the export
//! pipeline only guarantees the call order:
//!
//! 1. `pre_write` exactly once, before any row
//! 2. `write_row` once per row
//! 3. `post_write` exactly once, only if every row was written

mod delimited;
mod errors;
mod jsonl;

pub use delimited::{DelimitedOptions, DelimitedSink};
pub use errors::{SinkError, SinkResult};
pub use jsonl::JsonLinesSink;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::value::Value;
use crate::BoxError;

/// Row consumer driven by the export pipeline
pub trait Sink {
    /// Accept the schema. Called once, before any row.
    fn pre_write(&mut self, column_names: &[String], column_types: &[String]) -> Result<(), BoxError>;

    /// Accept one row. `values` is aligned with `column_names`.
    fn write_row(&mut self, values: &[Value], column_names: &[String]) -> Result<(), BoxError>;

    /// Finalize output after the last row
    fn post_write(&mut self) -> Result<(), BoxError>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn pre_write(&mut self, column_names: &[String], column_types: &[String]) -> Result<(), BoxError> {
        (**self).pre_write(column_names, column_types)
    }

    fn write_row(&mut self, values: &[Value], column_names: &[String]) -> Result<(), BoxError> {
        (**self).write_row(values, column_names)
    }

    fn post_write(&mut self) -> Result<(), BoxError> {
        (**self).post_write()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn pre_write(&mut self, column_names: &[String], column_types: &[String]) -> Result<(), BoxError> {
        (**self).pre_write(column_names, column_types)
    }

    fn write_row(&mut self, values: &[Value], column_names: &[String]) -> Result<(), BoxError> {
        (**self).write_row(values, column_names)
    }

    fn post_write(&mut self) -> Result<(), BoxError> {
        (**self).post_write()
    }
}

/// Output format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Csv,
    Tsv,
    Jsonl,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Tsv => "tsv",
            Format::Jsonl => "jsonl",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Format::Csv),
            "tsv" => Ok(Format::Tsv),
            "jsonl" | "ndjson" => Ok(Format::Jsonl),
            other => Err(format!("unknown format '{}'", other)),
        }
    }
}

/// Build a sink for `format` writing to `out`
///
/// For TSV the delimiter in `options` is ignored.
pub fn build_sink<'a, W: Write + 'a>(
    format: Format,
    options: DelimitedOptions,
    out: W,
) -> Box<dyn Sink + 'a> {
    match format {
        Format::Csv => Box::new(DelimitedSink::new(out, options)),
        Format::Tsv => Box::new(DelimitedSink::new(
            out,
            DelimitedOptions {
                delimiter: b'\t',
                ..options
            },
        )),
        Format::Jsonl => Box::new(JsonLinesSink::new(out)),
    }
}
