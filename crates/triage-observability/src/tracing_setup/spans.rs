//! Span definitions per operation: continuous run, cycle, classification.
//!
//! Each span carries its identifying metadata via the `tracing` crate.

/// Create a continuous-run span.
#[macro_export]
macro_rules! continuous_span {
    ($cycles:expr, $batch_size:expr) => {
        tracing::info_span!("triage.continuous", cycles = $cycles, batch_size = $batch_size)
    };
}

/// Create a cycle span.
#[macro_export]
macro_rules! cycle_span {
    ($cycle:expr, $batch_size:expr) => {
        tracing::info_span!("triage.cycle", cycle = $cycle, batch_size = $batch_size)
    };
}

/// Create a classification span.
#[macro_export]
macro_rules! classification_span {
    ($example_id:expr) => {
        tracing::debug_span!("triage.classification", example_id = $example_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const CONTINUOUS: &str = "triage.continuous";
    pub const CYCLE: &str = "triage.cycle";
    pub const CLASSIFICATION: &str = "triage.classification";
}
