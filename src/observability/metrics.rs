//! Export counters
//!
//! - Counters only, monotonic
//! - Thread-safe; one registry may be shared by concurrent exports

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters across all exports run by one exporter
#[derive(Debug, Default)]
pub struct ExportMetrics {
    exports_started: AtomicU64,
    exports_completed: AtomicU64,
    exports_failed: AtomicU64,
    rows_exported: AtomicU64,
    close_failures: AtomicU64,
}

impl ExportMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_started(&self) {
        self.exports_started.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_completed(&self) {
        self.exports_completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_failed(&self) {
        self.exports_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_rows(&self, rows: u64) {
        self.rows_exported.fetch_add(rows, Ordering::Relaxed);
    }

    pub fn increment_close_failures(&self) {
        self.close_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of every counter
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            exports_started: self.exports_started.load(Ordering::Relaxed),
            exports_completed: self.exports_completed.load(Ordering::Relaxed),
            exports_failed: self.exports_failed.load(Ordering::Relaxed),
            rows_exported: self.rows_exported.load(Ordering::Relaxed),
            close_failures: self.close_failures.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub exports_started: u64,
    pub exports_completed: u64,
    pub exports_failed: u64,
    pub rows_exported: u64,
    pub close_failures: u64,
}

impl MetricsSnapshot {
    /// Serialize as a single JSON object
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_new_registry_is_zero() {
        let snapshot = ExportMetrics::new().snapshot();
        assert_eq!(snapshot.exports_started, 0);
        assert_eq!(snapshot.rows_exported, 0);
        assert_eq!(snapshot.close_failures, 0);
    }

    #[test]
    fn test_counters() {
        let metrics = ExportMetrics::new();
        metrics.increment_started();
        metrics.increment_started();
        metrics.increment_completed();
        metrics.increment_failed();
        metrics.add_rows(10);
        metrics.add_rows(5);
        metrics.increment_close_failures();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.exports_started, 2);
        assert_eq!(snapshot.exports_completed, 1);
        assert_eq!(snapshot.exports_failed, 1);
        assert_eq!(snapshot.rows_exported, 15);
        assert_eq!(snapshot.close_failures, 1);
    }

    #[test]
    fn test_to_json() {
        let metrics = ExportMetrics::new();
        metrics.add_rows(1234);

        let parsed: serde_json::Value = serde_json::from_str(&metrics.snapshot().to_json()).unwrap();
        assert_eq!(parsed["rows_exported"], 1234);
        assert_eq!(parsed["exports_failed"], 0);
    }

    #[test]
    fn test_thread_safety() {
        let metrics = Arc::new(ExportMetrics::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let m = Arc::clone(&metrics);
                thread::spawn(move || {
                    for _ in 0..100 {
                        m.add_rows(1);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(metrics.snapshot().rows_exported, 800);
    }
}
