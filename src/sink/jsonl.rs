//! JSON lines sink: one object per row, keyed by column name

use std::io::Write;

use serde_json::{Map, Number, Value as Json};

use super::errors::SinkError;
use super::Sink;
use crate::value::{stringify, Value};
use crate::BoxError;

/// Writes each row as a JSON object on its own line
///
/// Numbers, booleans and nulls stay JSON scalars, structured fallback values
/// are embedded as-is, everything else goes through [`stringify`]. Keys follow
/// column order. When a column name repeats, the key keeps its first position
/// and the last value wins.
pub struct JsonLinesSink<W: Write> {
    out: W,
    started: bool,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            started: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn to_json(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::I32(n) => Json::from(*n),
        Value::I64(n) => Json::from(*n),
        Value::U64(n) => Json::from(*n),
        Value::F64(f) => Number::from_f64(*f)
            .map(Json::Number)
            .unwrap_or_else(|| Json::String(stringify(value))),
        Value::Other(v) => v.clone(),
        v => Json::String(stringify(v)),
    }
}

impl<W: Write> Sink for JsonLinesSink<W> {
    fn pre_write(&mut self, _column_names: &[String], _column_types: &[String]) -> Result<(), BoxError> {
        if self.started {
            return Err(SinkError::AlreadyStarted.into());
        }
        self.started = true;
        Ok(())
    }

    fn write_row(&mut self, values: &[Value], column_names: &[String]) -> Result<(), BoxError> {
        if !self.started {
            return Err(SinkError::NotStarted.into());
        }
        if values.len() != column_names.len() {
            return Err(SinkError::WidthMismatch {
                expected: column_names.len(),
                actual: values.len(),
            }
            .into());
        }

        let mut object = Map::with_capacity(values.len());
        for (name, value) in column_names.iter().zip(values) {
            object.insert(name.clone(), to_json(value));
        }

        serde_json::to_writer(&mut self.out, &object).map_err(SinkError::from)?;
        self.out.write_all(b"\n").map_err(SinkError::from)?;
        Ok(())
    }

    fn post_write(&mut self) -> Result<(), BoxError> {
        self.out.flush().map_err(SinkError::from)?;
        Ok(())
    }
}
