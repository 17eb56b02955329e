//! Delimited text sink (CSV, TSV)

use std::io::Write;

use csv::{Writer, WriterBuilder};

use super::errors::{SinkError, SinkResult};
use super::Sink;
use crate::value::{stringify, Value};
use crate::BoxError;

/// Options for [`DelimitedSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedOptions {
    /// Field separator
    pub delimiter: u8,
    /// Write column names as the first record
    pub header: bool,
    /// Text written for null values
    pub null_text: String,
}

impl Default for DelimitedOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            header: true,
            null_text: String::new(),
        }
    }
}

/// Writes each row as one delimited record of stringified values
pub struct DelimitedSink<W: Write> {
    writer: Writer<W>,
    options: DelimitedOptions,
    /// Column count, known once the schema arrives
    width: Option<usize>,
    record: Vec<String>,
}

impl<W: Write> DelimitedSink<W> {
    pub fn new(out: W, options: DelimitedOptions) -> Self {
        let writer = WriterBuilder::new()
            .delimiter(options.delimiter)
            .has_headers(false)
            .from_writer(out);

        Self {
            writer,
            options,
            width: None,
            record: Vec::new(),
        }
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> SinkResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| SinkError::Io(e.into_error()))
    }

    fn render(&self, value: &Value) -> String {
        match value {
            Value::Null => self.options.null_text.clone(),
            v => stringify(v),
        }
    }
}

impl<W: Write> Sink for DelimitedSink<W> {
    fn pre_write(&mut self, column_names: &[String], _column_types: &[String]) -> Result<(), BoxError> {
        if self.width.is_some() {
            return Err(SinkError::AlreadyStarted.into());
        }
        self.width = Some(column_names.len());
        if self.options.header {
            self.writer
                .write_record(column_names)
                .map_err(SinkError::from)?;
        }
        Ok(())
    }

    fn write_row(&mut self, values: &[Value], _column_names: &[String]) -> Result<(), BoxError> {
        let expected = self.width.ok_or(SinkError::NotStarted)?;
        if values.len() != expected {
            return Err(SinkError::WidthMismatch {
                expected,
                actual: values.len(),
            }
            .into());
        }

        let mut record = std::mem::take(&mut self.record);
        record.clear();
        record.extend(values.iter().map(|v| self.render(v)));
        let written = self.writer.write_record(&record).map_err(SinkError::from);
        self.record = record;
        written?;
        Ok(())
    }

    fn post_write(&mut self) -> Result<(), BoxError> {
        self.writer.flush().map_err(SinkError::from)?;
        Ok(())
    }
}
