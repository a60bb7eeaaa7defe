use std::time::Duration;

use serde::{Deserialize, Serialize};
use triage_core::models::CycleFailure;

/// A cycle of a continuous run that produced no result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailedCycle {
    /// 1-based position within the run.
    pub cycle: u32,
    pub failure: CycleFailure,
}

/// Aggregate outcome of [`crate::TrainingOrchestrator::run_continuous`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinuousReport {
    /// Cycles requested.
    pub total_cycles: u32,
    /// Cycles started before the run ended or was cancelled.
    pub cycles_attempted: u32,
    pub successful_cycles: u32,
    pub failed_cycles: u32,
    pub failures: Vec<FailedCycle>,
    pub total_duration: Duration,
    pub total_examples_generated: usize,
    pub total_classifications: usize,
    pub total_feedback_applied: usize,
    pub total_feedback_failed: usize,
    /// Mean of per-cycle accuracies; 0 when no cycle completed.
    pub average_accuracy: f64,
    /// Per-cycle accuracies in run order.
    pub accuracy_trend: Vec<f64>,
    pub cancelled: bool,
}
