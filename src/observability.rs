//! In-process request counters

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics handle for recording counters
#[derive(Debug, Default)]
pub struct Metrics {
    index_served: AtomicU64,
    details_served: AtomicU64,
    details_failed: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index_served(&self) {
        self.index_served.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "index_served", "Metric incremented");
    }

    pub fn detail_served(&self) {
        self.details_served.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "details_served", "Metric incremented");
    }

    pub fn detail_failed(&self) {
        self.details_failed.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "details_failed", "Metric incremented");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            index_served: self.index_served.load(Ordering::Relaxed),
            details_served: self.details_served.load(Ordering::Relaxed),
            details_failed: self.details_failed.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub index_served: u64,
    pub details_served: u64,
    pub details_failed: u64,
}
