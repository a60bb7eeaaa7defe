//! Serializable export of a session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::CycleRecord;

/// Session state as written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub session_id: Uuid,
    pub total_emails_generated: usize,
    pub total_classifications: usize,
    pub total_feedback_applied: usize,
    pub accuracy_history: Vec<f64>,
    pub training_sessions: Vec<CycleRecord>,
}

/// `training_stats_YYYYMMDD_HHMMSS.json` for the given instant.
pub fn default_snapshot_filename(now: DateTime<Utc>) -> String {
    format!("training_stats_{}.json", now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn filename_uses_compact_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(default_snapshot_filename(at), "training_stats_20240309_070501.json");
    }
}
