use std::collections::HashMap;

use triage_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = TriageConfig::from_toml("").unwrap();

    // Inference defaults
    assert!(config.inference.enabled);
    assert_eq!(config.inference.base_url, "http://localhost:11434");
    assert_eq!(config.inference.model, "llama3.2:3b");
    assert_eq!(config.inference.timeout_secs, 10);
    assert_eq!(config.inference.max_tokens, 50);

    // Backend defaults
    assert_eq!(config.backend.base_url, "http://localhost:5000");
    assert_eq!(config.backend.generation_timeout_secs, 120);
    assert_eq!(config.backend.classify_timeout_secs, 30);
    assert_eq!(config.backend.feedback_timeout_secs, 10);

    // Training defaults
    assert_eq!(config.training.cycles, 3);
    assert_eq!(config.training.batch_size, 10);
    assert_eq!(config.training.delay_secs, 30);
    assert!(!config.training.parallel_classification);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn generation_timeout_exceeds_classification_timeouts() {
    let config = TriageConfig::default();
    assert!(config.backend.generation_timeout() > config.backend.classify_timeout());
    assert!(config.backend.generation_timeout() > config.backend.feedback_timeout());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[training]
batch_size = 25
parallel_classification = true

[feedback]
feedback_path = "/var/lib/triage/feedback.json"
"#;
    let config = TriageConfig::from_toml(toml).unwrap();
    assert_eq!(config.training.batch_size, 25);
    assert!(config.training.parallel_classification);
    assert_eq!(
        config.feedback.feedback_path.to_str(),
        Some("/var/lib/triage/feedback.json")
    );
    // Non-overridden fields keep defaults
    assert_eq!(config.training.cycles, 3);
    assert_eq!(config.feedback.categories_path.to_str(), Some("data/categories.json"));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = TriageConfig::from_toml("[training\nbatch_size = ").unwrap_err();
    assert!(matches!(err, triage_core::errors::ConfigError::ParseError { .. }));
}

#[test]
fn env_overrides_take_priority() {
    let vars: HashMap<&str, &str> = [
        ("TRIAGE_BACKEND_URL", "http://backend:9000"),
        ("TRIAGE_TRAINING_CYCLES", "7"),
        ("TRIAGE_TRAINING_BATCH_SIZE", "not-a-number"),
        ("TRIAGE_INFERENCE_ENABLED", "false"),
    ]
    .into_iter()
    .collect();

    let mut config = TriageConfig::default();
    config.apply_env_overrides_from(|k| vars.get(k).map(|v| v.to_string()));

    assert_eq!(config.backend.base_url, "http://backend:9000");
    assert_eq!(config.training.cycles, 7);
    // Unparseable values are ignored.
    assert_eq!(config.training.batch_size, 10);
    assert!(!config.inference.enabled);
}

#[test]
fn validation_rejects_oversized_batch() {
    let config = TriageConfig::from_toml("[training]\nbatch_size = 51").unwrap();
    let err = TriageConfig::validate(&config).unwrap_err();
    match err {
        triage_core::errors::ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "training.batch_size")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn validation_rejects_zero_timeout() {
    let config = TriageConfig::from_toml("[backend]\nfeedback_timeout_secs = 0").unwrap();
    assert!(TriageConfig::validate(&config).is_err());
}

#[test]
fn load_reads_project_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("triage.toml"),
        "[inference]\nmodel = \"mistral:7b\"\n",
    )
    .unwrap();
    let config = TriageConfig::load(dir.path()).unwrap();
    assert_eq!(config.inference.model, "mistral:7b");
}

#[test]
fn config_serde_roundtrip() {
    let config = TriageConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = TriageConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.inference.model, config.inference.model);
    assert_eq!(roundtripped.training.batch_size, config.training.batch_size);
}
