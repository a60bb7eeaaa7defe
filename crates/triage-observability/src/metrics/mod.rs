//! Metrics for the classification engine.

pub mod decision_metrics;

pub use decision_metrics::{DecisionMetrics, DecisionMetricsSnapshot};
