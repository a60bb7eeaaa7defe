use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Locations of the persisted feedback and category collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub feedback_path: PathBuf,
    pub categories_path: PathBuf,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            feedback_path: PathBuf::from(defaults::DEFAULT_FEEDBACK_PATH),
            categories_path: PathBuf::from(defaults::DEFAULT_CATEGORIES_PATH),
        }
    }
}
