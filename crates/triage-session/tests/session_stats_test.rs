use std::time::Duration;

use chrono::Utc;
use proptest::prelude::*;
use triage_core::models::{CycleFailure, CycleResult};
use triage_session::{SessionStats, StatsSnapshot, Trend};

fn cycle(correct: usize, incorrect: usize, feedback_applied: usize) -> CycleResult {
    CycleResult::new(
        Utc::now(),
        correct + incorrect,
        correct,
        incorrect,
        0,
        feedback_applied,
        0,
        Duration::from_millis(1500),
    )
}

#[test]
fn empty_session_has_no_aggregates() {
    let stats = SessionStats::new();
    assert_eq!(stats.mean_accuracy(), None);
    assert_eq!(stats.best_accuracy(), None);
    assert_eq!(stats.trend(), None);
    assert!(!stats.render_summary().contains("average accuracy"));
}

#[test]
fn completed_cycles_accumulate() {
    let mut stats = SessionStats::new();
    stats.record_cycle(&cycle(7, 3, 3));
    stats.record_cycle(&cycle(9, 1, 1));

    assert_eq!(stats.accuracy_history(), &[70.0, 90.0]);
    assert_eq!(stats.total_emails_generated(), 20);
    assert_eq!(stats.total_classifications(), 20);
    assert_eq!(stats.total_feedback_applied(), 4);
    assert!((stats.mean_accuracy().unwrap() - 80.0).abs() < 1e-9);
    assert_eq!(stats.best_accuracy(), Some(90.0));
    assert_eq!(stats.worst_accuracy(), Some(70.0));
    assert_eq!(stats.trend(), Some(Trend::Improving));

    let rec = &stats.cycle_records()[0];
    assert_eq!(rec.example_count, 10);
    assert_eq!(rec.classifications_count, 10);
    assert!((rec.duration_secs - 1.5).abs() < 1e-9);
}

#[test]
fn failed_cycles_add_no_sample() {
    let mut stats = SessionStats::new();
    stats.record_cycle(&cycle(5, 5, 5));
    stats.record_failure(&CycleFailure::ClassificationFailed { attempted: 10 });
    stats.record_failure(&CycleFailure::GenerationFailed {
        detail: "empty".into(),
    });

    assert_eq!(stats.accuracy_history().len(), 1);
    assert_eq!(stats.failed_cycles(), 2);
    assert_eq!(stats.total_emails_generated(), 20);
}

#[test]
fn snapshot_does_not_mutate_and_uses_stable_keys() {
    let mut stats = SessionStats::new();
    stats.record_cycle(&cycle(1, 1, 1));

    let a = stats.snapshot();
    let b = stats.snapshot();
    assert_eq!(a, b);
    assert_eq!(stats.accuracy_history().len(), 1);

    let json = serde_json::to_value(&a).unwrap();
    for key in [
        "session_id",
        "total_emails_generated",
        "total_classifications",
        "total_feedback_applied",
        "accuracy_history",
        "training_sessions",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
}

#[test]
fn save_snapshot_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stats/out.json");
    let mut stats = SessionStats::new();
    stats.record_cycle(&cycle(3, 1, 1));
    stats.save_snapshot(&path).unwrap();

    let loaded: StatsSnapshot =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded.session_id, stats.session_id());
    assert_eq!(loaded.accuracy_history, vec![75.0]);
}

#[test]
fn summary_reports_trend_with_two_samples() {
    let mut stats = SessionStats::new();
    stats.record_cycle(&cycle(8, 2, 2));
    stats.record_cycle(&cycle(6, 4, 4));
    let summary = stats.render_summary();
    assert!(summary.contains("average accuracy:  70.0%"));
    assert!(summary.contains("accuracy trend:    declining"));
}

proptest! {
    #[test]
    fn mean_lies_between_worst_and_best(
        samples in prop::collection::vec((0usize..50, 0usize..50), 1..20)
    ) {
        let mut stats = SessionStats::new();
        for (c, i) in &samples {
            stats.record_cycle(&cycle(*c, *i, *i));
        }
        let mean = stats.mean_accuracy().unwrap();
        prop_assert!(stats.worst_accuracy().unwrap() <= mean + 1e-9);
        prop_assert!(mean <= stats.best_accuracy().unwrap() + 1e-9);
        prop_assert_eq!(stats.accuracy_history().len(), samples.len());
    }
}
