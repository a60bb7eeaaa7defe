//! Top-level triage configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{BackendConfig, FeedbackConfig, InferenceConfig, ObservabilityConfig, TrainingConfig};
use crate::constants::MAX_GENERATION_BATCH;
use crate::errors::ConfigError;

/// Name of the project config file looked up in the root directory.
pub const PROJECT_CONFIG_FILE: &str = "triage.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`TRIAGE_*`)
/// 2. Project config (`triage.toml` in the root directory)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TriageConfig {
    pub inference: InferenceConfig,
    pub backend: BackendConfig,
    pub feedback: FeedbackConfig,
    pub training: TrainingConfig,
    pub observability: ObservabilityConfig,
}

impl TriageConfig {
    /// Load configuration for a project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(PROJECT_CONFIG_FILE);
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides_from(|key| std::env::var(key).ok());
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file without env overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `TRIAGE_*` overrides using `lookup` to read variables.
    /// Values that fail to parse are ignored.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("TRIAGE_INFERENCE_URL") {
            self.inference.base_url = v;
        }
        if let Some(v) = lookup("TRIAGE_INFERENCE_MODEL") {
            self.inference.model = v;
        }
        if let Some(v) = lookup("TRIAGE_INFERENCE_ENABLED").and_then(|v| v.parse().ok()) {
            self.inference.enabled = v;
        }
        if let Some(v) = lookup("TRIAGE_BACKEND_URL") {
            self.backend.base_url = v;
        }
        if let Some(v) = lookup("TRIAGE_TRAINING_CYCLES").and_then(|v| v.parse().ok()) {
            self.training.cycles = v;
        }
        if let Some(v) = lookup("TRIAGE_TRAINING_BATCH_SIZE").and_then(|v| v.parse().ok()) {
            self.training.batch_size = v;
        }
        if let Some(v) = lookup("TRIAGE_TRAINING_DELAY_SECS").and_then(|v| v.parse().ok()) {
            self.training.delay_secs = v;
        }
        if let Some(v) = lookup("TRIAGE_FEEDBACK_PATH") {
            self.feedback.feedback_path = PathBuf::from(v);
        }
        if let Some(v) = lookup("TRIAGE_CATEGORIES_PATH") {
            self.feedback.categories_path = PathBuf::from(v);
        }
        if let Some(v) = lookup("TRIAGE_LOG_LEVEL") {
            self.observability.log_level = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(config: &TriageConfig) -> Result<(), ConfigError> {
        let batch = config.training.batch_size;
        if batch == 0 || batch > MAX_GENERATION_BATCH {
            return Err(ConfigError::ValidationFailed {
                field: "training.batch_size".to_string(),
                message: format!("must be between 1 and {MAX_GENERATION_BATCH}"),
            });
        }
        if config.inference.model.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "inference.model".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if !(0.0..=2.0).contains(&config.inference.temperature) {
            return Err(ConfigError::ValidationFailed {
                field: "inference.temperature".to_string(),
                message: "must be between 0.0 and 2.0".to_string(),
            });
        }
        let timeouts = [
            ("inference.timeout_secs", config.inference.timeout_secs),
            ("backend.generation_timeout_secs", config.backend.generation_timeout_secs),
            ("backend.classify_timeout_secs", config.backend.classify_timeout_secs),
            ("backend.feedback_timeout_secs", config.backend.feedback_timeout_secs),
            ("backend.health_timeout_secs", config.backend.health_timeout_secs),
        ];
        for (field, secs) in timeouts {
            if secs == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }
}
