//! # triage-observability
//!
//! Structured tracing with span definitions and event helpers, plus
//! thread-safe counters of which classification path decided each example.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{DecisionMetrics, DecisionMetricsSnapshot};
pub use tracing_setup::{events, init_from_config, init_tracing, init_tracing_with_filter};
