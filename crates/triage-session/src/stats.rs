//! Running totals and accuracy history for one session.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use triage_core::errors::{StoreError, TriageResult};
use triage_core::models::{CycleFailure, CycleResult};
use uuid::Uuid;

use crate::record::CycleRecord;
use crate::snapshot::StatsSnapshot;
use crate::trend::Trend;

/// Aggregates over every cycle run in this session.
///
/// Only completed cycles add an accuracy sample. A cycle that failed after
/// generation still counts toward `total_emails_generated`.
#[derive(Debug, Clone)]
pub struct SessionStats {
    session_id: Uuid,
    total_emails_generated: usize,
    total_classifications: usize,
    total_feedback_applied: usize,
    total_feedback_failed: usize,
    failed_cycles: usize,
    accuracy_history: Vec<f64>,
    training_sessions: Vec<CycleRecord>,
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStats {
    pub fn new() -> Self {
        Self::with_session_id(Uuid::new_v4())
    }

    pub fn with_session_id(session_id: Uuid) -> Self {
        Self {
            session_id,
            total_emails_generated: 0,
            total_classifications: 0,
            total_feedback_applied: 0,
            total_feedback_failed: 0,
            failed_cycles: 0,
            accuracy_history: Vec::new(),
            training_sessions: Vec::new(),
        }
    }

    /// Fold a completed cycle into the session.
    pub fn record_cycle(&mut self, result: &CycleResult) {
        self.total_emails_generated += result.generated;
        self.total_classifications += result.total;
        self.total_feedback_applied += result.feedback_applied;
        self.total_feedback_failed += result.feedback_failed;
        self.accuracy_history.push(result.accuracy);
        self.training_sessions.push(CycleRecord::from(result));
    }

    /// Count a failed cycle. No accuracy sample is added.
    pub fn record_failure(&mut self, failure: &CycleFailure) {
        self.failed_cycles += 1;
        if let CycleFailure::ClassificationFailed { attempted } = failure {
            self.total_emails_generated += attempted;
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn total_emails_generated(&self) -> usize {
        self.total_emails_generated
    }

    pub fn total_classifications(&self) -> usize {
        self.total_classifications
    }

    pub fn total_feedback_applied(&self) -> usize {
        self.total_feedback_applied
    }

    pub fn total_feedback_failed(&self) -> usize {
        self.total_feedback_failed
    }

    pub fn completed_cycles(&self) -> usize {
        self.training_sessions.len()
    }

    pub fn failed_cycles(&self) -> usize {
        self.failed_cycles
    }

    pub fn accuracy_history(&self) -> &[f64] {
        &self.accuracy_history
    }

    pub fn cycle_records(&self) -> &[CycleRecord] {
        &self.training_sessions
    }

    pub fn mean_accuracy(&self) -> Option<f64> {
        if self.accuracy_history.is_empty() {
            return None;
        }
        let sum: f64 = self.accuracy_history.iter().sum();
        Some(sum / self.accuracy_history.len() as f64)
    }

    pub fn best_accuracy(&self) -> Option<f64> {
        self.accuracy_history.iter().copied().reduce(f64::max)
    }

    pub fn worst_accuracy(&self) -> Option<f64> {
        self.accuracy_history.iter().copied().reduce(f64::min)
    }

    pub fn trend(&self) -> Option<Trend> {
        Trend::from_history(&self.accuracy_history)
    }

    /// Copy of the current state. Does not modify the session.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            session_id: self.session_id,
            total_emails_generated: self.total_emails_generated,
            total_classifications: self.total_classifications,
            total_feedback_applied: self.total_feedback_applied,
            accuracy_history: self.accuracy_history.clone(),
            training_sessions: self.training_sessions.clone(),
        }
    }

    /// Write the snapshot as pretty JSON.
    pub fn save_snapshot(&self, path: &Path) -> TriageResult<()> {
        let json = serde_json::to_string_pretty(&self.snapshot()).map_err(|e| {
            StoreError::Serialization {
                reason: e.to_string(),
            }
        })?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
        fs::write(path, json).map_err(|e| StoreError::io(path, e))?;
        tracing::info!(path = %path.display(), "training statistics saved");
        Ok(())
    }

    /// Plain-text summary for terminals and logs.
    pub fn render_summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Training session {}", self.session_id);
        let _ = writeln!(out, "  emails generated:  {}", self.total_emails_generated);
        let _ = writeln!(out, "  classifications:   {}", self.total_classifications);
        let _ = writeln!(out, "  feedback applied:  {}", self.total_feedback_applied);
        if self.total_feedback_failed > 0 {
            let _ = writeln!(out, "  feedback failed:   {}", self.total_feedback_failed);
        }
        let _ = writeln!(
            out,
            "  cycles:            {} completed, {} failed",
            self.completed_cycles(),
            self.failed_cycles
        );

        if let (Some(mean), Some(best), Some(worst)) =
            (self.mean_accuracy(), self.best_accuracy(), self.worst_accuracy())
        {
            let _ = writeln!(out, "  average accuracy:  {mean:.1}%");
            let _ = writeln!(out, "  best accuracy:     {best:.1}%");
            let _ = writeln!(out, "  worst accuracy:    {worst:.1}%");
        }
        if let Some(trend) = self.trend() {
            let _ = writeln!(out, "  accuracy trend:    {trend}");
        }
        out
    }
}
