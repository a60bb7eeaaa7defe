//! Decision path counters: how often each classification tier decided.
//!
//! Lock-free so a classifier shared across rayon workers can record from
//! any thread.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use triage_core::models::DecisionPath;

/// Per-path decision counters plus model-tier failure count.
#[derive(Debug, Default)]
pub struct DecisionMetrics {
    model_exact: AtomicU64,
    model_repaired: AtomicU64,
    keyword: AtomicU64,
    general: AtomicU64,
    first_category: AtomicU64,
    model_failures: AtomicU64,
}

/// Point-in-time copy of [`DecisionMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DecisionMetricsSnapshot {
    pub model_exact: u64,
    pub model_repaired: u64,
    pub keyword: u64,
    pub general: u64,
    pub first_category: u64,
    pub model_failures: u64,
}

impl DecisionMetricsSnapshot {
    /// Total decisions made.
    pub fn total(&self) -> u64 {
        self.model_exact + self.model_repaired + self.keyword + self.general + self.first_category
    }

    /// Fraction of decisions made without the model, 0 when empty.
    pub fn degraded_ratio(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.keyword + self.general + self.first_category) as f64 / total as f64
    }
}

impl DecisionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record which path decided a classification.
    pub fn record(&self, path: DecisionPath) {
        let counter = match path {
            DecisionPath::ModelExact => &self.model_exact,
            DecisionPath::ModelRepaired => &self.model_repaired,
            DecisionPath::Keyword => &self.keyword,
            DecisionPath::General => &self.general,
            DecisionPath::FirstCategory => &self.first_category,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed or unusable model call.
    pub fn record_model_failure(&self) {
        self.model_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> DecisionMetricsSnapshot {
        DecisionMetricsSnapshot {
            model_exact: self.model_exact.load(Ordering::Relaxed),
            model_repaired: self.model_repaired.load(Ordering::Relaxed),
            keyword: self.keyword.load(Ordering::Relaxed),
            general: self.general.load(Ordering::Relaxed),
            first_category: self.first_category.load(Ordering::Relaxed),
            model_failures: self.model_failures.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters (useful for testing or periodic rotation).
    pub fn reset(&self) {
        for counter in [
            &self.model_exact,
            &self.model_repaired,
            &self.keyword,
            &self.general,
            &self.first_category,
            &self.model_failures,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}
