//! Per-cycle outcome types.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Accuracy as a percentage; 0 when nothing was classified.
pub fn accuracy_percent(correct: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    correct as f64 * 100.0 / total as f64
}

/// Result of one completed generate → classify → correct cycle.
///
/// Invariant: `correct + incorrect == total`, where `total` counts
/// successfully classified examples only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleResult {
    /// When the cycle started.
    pub started_at: DateTime<Utc>,
    /// Examples returned by the generator.
    pub generated: usize,
    /// Examples successfully classified.
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    /// Examples skipped (classification failure or missing ground truth).
    pub skipped: usize,
    /// Mismatches whose feedback write succeeded.
    pub feedback_applied: usize,
    /// Mismatches whose feedback write failed.
    pub feedback_failed: usize,
    /// `correct / total * 100`.
    pub accuracy: f64,
    pub duration: Duration,
}

impl CycleResult {
    /// Assemble a result from tallies. Accuracy is derived, never supplied.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        started_at: DateTime<Utc>,
        generated: usize,
        correct: usize,
        incorrect: usize,
        skipped: usize,
        feedback_applied: usize,
        feedback_failed: usize,
        duration: Duration,
    ) -> Self {
        let total = correct + incorrect;
        Self {
            started_at,
            generated,
            total,
            correct,
            incorrect,
            skipped,
            feedback_applied,
            feedback_failed,
            accuracy: accuracy_percent(correct, total),
            duration,
        }
    }

    /// Feedback write attempts made during this cycle.
    pub fn feedback_attempts(&self) -> usize {
        self.feedback_applied + self.feedback_failed
    }
}

/// Why a whole cycle produced no result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum CycleFailure {
    /// The generator returned no examples (or failed outright).
    GenerationFailed { detail: String },
    /// No example in the batch was both classified and scorable.
    ClassificationFailed { attempted: usize },
}

impl CycleFailure {
    /// Stable reason code.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::GenerationFailed { .. } => "generation_failed",
            Self::ClassificationFailed { .. } => "classification_failed",
        }
    }
}

impl std::fmt::Display for CycleFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GenerationFailed { detail } => write!(f, "generation_failed: {detail}"),
            Self::ClassificationFailed { attempted } => {
                write!(f, "classification_failed: 0 of {attempted} examples scored")
            }
        }
    }
}
