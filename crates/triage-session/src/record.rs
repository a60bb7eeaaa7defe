use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use triage_core::models::CycleResult;

/// One completed cycle as kept in the session log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleRecord {
    pub timestamp: DateTime<Utc>,
    pub duration_secs: f64,
    /// Examples the generator returned.
    pub example_count: usize,
    /// Examples successfully classified.
    pub classifications_count: usize,
    pub accuracy: f64,
    pub feedback_applied: usize,
}

impl From<&CycleResult> for CycleRecord {
    fn from(r: &CycleResult) -> Self {
        Self {
            timestamp: r.started_at,
            duration_secs: r.duration.as_secs_f64(),
            example_count: r.generated,
            classifications_count: r.total,
            accuracy: r.accuracy,
            feedback_applied: r.feedback_applied,
        }
    }
}
