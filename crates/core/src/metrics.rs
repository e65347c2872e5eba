use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Default)]
pub struct Metrics {
    submissions: AtomicU64,
    completions: AtomicU64,
    failures: AtomicU64,
    stale_discarded: AtomicU64,
    unknown_tools: AtomicU64,
}

impl Metrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_submissions(&self) {
        self.submissions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_completions(&self) {
        self.completions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_failures(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_stale_discarded(&self) {
        self.stale_discarded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_unknown_tools(&self) {
        self.unknown_tools.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            submissions: self.submissions.load(Ordering::Relaxed),
            completions: self.completions.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            stale_discarded: self.stale_discarded.load(Ordering::Relaxed),
            unknown_tools: self.unknown_tools.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub submissions: u64,
    pub completions: u64,
    pub failures: u64,
    pub stale_discarded: u64,
    pub unknown_tools: u64,
}

impl MetricsSnapshot {
    /// Fraction of finished calls that succeeded. Stale results count as finished.
    pub fn success_rate(&self) -> f64 {
        let finished = self.completions + self.failures;
        if finished == 0 {
            return 1.0;
        }
        1.0 - (self.failures as f64 / finished as f64)
    }
}
