use std::sync::Arc;

use triage_core::config::ObservabilityConfig;
use triage_core::models::DecisionPath;
use triage_observability::tracing_setup::{events, spans};
use triage_observability::{init_from_config, DecisionMetrics};

#[test]
fn events_and_spans_do_not_panic_without_subscriber() {
    let span = triage_observability::cycle_span!(1u32, 10usize);
    let _guard = span.enter();
    events::cycle_started(1, 10);
    events::tier_degraded("model", "timeout", "keyword");
    events::cycle_completed(1, 10, 7, 70.0, 42);
    events::continuous_completed(2, 1, 65.0, false);
    assert_eq!(spans::names::CYCLE, "triage.cycle");
}

#[test]
fn second_init_reports_existing_subscriber() {
    let config = ObservabilityConfig {
        log_level: "warn".to_string(),
        json_logs: false,
    };
    let _ = init_from_config(&config);
    assert!(!init_from_config(&config));
}

#[test]
fn metrics_are_shared_across_threads() {
    let metrics = Arc::new(DecisionMetrics::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let metrics = Arc::clone(&metrics);
            std::thread::spawn(move || {
                for _ in 0..25 {
                    metrics.record(DecisionPath::ModelExact);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    let snap = metrics.snapshot();
    assert_eq!(snap.model_exact, 100);
    let json = serde_json::to_value(snap).unwrap();
    assert_eq!(json["model_exact"], 100);
}
