//! Export pipeline
//!
//! Drives one query from execution to sink completion:
//! 1. Execute the query, obtaining a cursor
//! 2. Read column names and declared types
//! 3. Deliver the schema to the sink
//! 4. For each row: scan into the slot array, deliver to the sink
//! 5. Complete the sink
//!
//! The cursor is closed on every exit path. A close failure is logged and
//! counted, never returned.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use uuid::Uuid;

use crate::observability::{
    log_event, Event, ExportMetrics, Logger, MetricsSnapshot, ObservationScope, Severity, Timer,
};
use crate::sink::Sink;
use crate::source::{Cursor, RowSource};
use crate::value::Value;

use super::errors::{ExportError, ExportResult, SinkStage};
use super::state::ExportState;
use super::summary::{ExportSummary, Schema};

/// Closes the wrapped cursor when dropped
struct CursorGuard<'a, C: Cursor> {
    cursor: C,
    export_id: &'a str,
    metrics: &'a ExportMetrics,
}

impl<'a, C: Cursor> CursorGuard<'a, C> {
    fn new(cursor: C, export_id: &'a str, metrics: &'a ExportMetrics) -> Self {
        Self {
            cursor,
            export_id,
            metrics,
        }
    }
}

impl<C: Cursor> Deref for CursorGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.cursor
    }
}

impl<C: Cursor> DerefMut for CursorGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.cursor
    }
}

impl<C: Cursor> Drop for CursorGuard<'_, C> {
    fn drop(&mut self) {
        match self.cursor.close() {
            Ok(()) => log_event(Event::CursorClosed, &[("export_id", self.export_id)]),
            Err(e) => {
                self.metrics.increment_close_failures();
                let err = ExportError::Close(e);
                log_event(
                    Event::CloseFailed,
                    &[
                        ("code", err.code()),
                        ("export_id", self.export_id),
                        ("reason", &err.inner().to_string()),
                    ],
                );
            }
        }
    }
}

/// Streams query results from a source into a sink
pub struct Exporter<K: Sink> {
    sink: K,
    metrics: Arc<ExportMetrics>,
}

impl<K: Sink> Exporter<K> {
    /// Creates an exporter writing to `sink`
    pub fn new(sink: K) -> Self {
        Self::with_metrics(sink, Arc::new(ExportMetrics::new()))
    }

    /// Creates an exporter sharing a metrics registry with other exporters
    pub fn with_metrics(sink: K, metrics: Arc<ExportMetrics>) -> Self {
        Self { sink, metrics }
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    pub fn into_sink(self) -> K {
        self.sink
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Executes `query` against `source` and streams the result into the sink.
    ///
    /// Returns the first error from query execution, schema discovery, row
    /// scanning or the sink. `post_write` is only called if every row was
    /// delivered.
    pub fn export<S>(&mut self, source: &mut S, query: &str) -> ExportResult<ExportSummary>
    where
        S: RowSource + ?Sized,
    {
        let export_id = Uuid::new_v4();
        let id = export_id.to_string();
        let timer = Timer::new();
        let scope = ObservationScope::with_fields("EXPORT", &[("export_id", &id), ("query", query)]);
        self.metrics.increment_started();

        let mut state = ExportState::Idle;
        let mut rows = 0u64;

        let outcome = self.run(source, query, &id, &mut state, &mut rows);
        self.metrics.add_rows(rows);

        match outcome {
            Ok(schema) => {
                self.metrics.increment_completed();
                scope.complete_with_fields(&[
                    ("columns", &schema.len().to_string()),
                    ("elapsed_ms", &timer.elapsed_ms()),
                    ("rows", &rows.to_string()),
                ]);
                Ok(ExportSummary {
                    export_id,
                    schema,
                    rows,
                    state,
                })
            }
            Err(err) => {
                let failed_in = state;
                state.transition(ExportState::Aborted);
                self.metrics.increment_failed();
                scope.fail(
                    &err.to_string(),
                    &[
                        ("code", err.code()),
                        ("elapsed_ms", &timer.elapsed_ms()),
                        ("rows", &rows.to_string()),
                        ("state", failed_in.as_str()),
                    ],
                );
                Err(err)
            }
        }
    }

    fn run<S>(
        &mut self,
        source: &mut S,
        query: &str,
        export_id: &str,
        state: &mut ExportState,
        rows: &mut u64,
    ) -> ExportResult<Schema>
    where
        S: RowSource + ?Sized,
    {
        let cursor = source.select(query).map_err(ExportError::Query)?;
        let mut cursor = CursorGuard::new(cursor, export_id, &self.metrics);
        state.transition(ExportState::QueryExecuted);
        log_event(Event::QueryExecuted, &[("export_id", export_id)]);

        let names = cursor.columns().map_err(ExportError::Schema)?;
        let types: Vec<String> = cursor
            .column_types()
            .map_err(ExportError::Schema)?
            .iter()
            .map(|t| t.database_type_name().to_string())
            .collect();
        if types.len() != names.len() {
            return Err(ExportError::Schema(
                format!(
                    "cursor reported {} column types for {} columns",
                    types.len(),
                    names.len()
                )
                .into(),
            ));
        }

        self.sink
            .pre_write(&names, &types)
            .map_err(|e| ExportError::sink(SinkStage::Schema, e))?;
        state.transition(ExportState::SchemaDelivered);
        log_event(
            Event::SchemaDelivered,
            &[("columns", &names.len().to_string()), ("export_id", export_id)],
        );

        // One row in flight; the slot array is reused for every row
        let mut slots = vec![Value::Null; names.len()];
        while cursor.advance() {
            let row = *rows + 1;
            cursor
                .scan(&mut slots)
                .map_err(|source| ExportError::RowScan { row, source })?;
            self.sink
                .write_row(&slots, &names)
                .map_err(|e| ExportError::sink(SinkStage::Row(row), e))?;
            *rows = row;
            state.transition(ExportState::RowDelivered);

            if Logger::enabled(Severity::Trace) {
                log_event(
                    Event::RowDelivered,
                    &[("export_id", export_id), ("row", &row.to_string())],
                );
            }
        }

        self.sink
            .post_write()
            .map_err(|e| ExportError::sink(SinkStage::Completion, e))?;
        state.transition(ExportState::Completed);

        Ok(Schema { names, types })
    }
}
