use serde::{Deserialize, Serialize};

use crate::constants;

/// Which decision path produced a category. Each path carries a fixed
/// confidence; the number is a policy tier, not a calibrated probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionPath {
    /// Model returned an exact category label.
    ModelExact,
    /// Model label repaired to a category by substring match.
    ModelRepaired,
    /// Keyword group hit in the deterministic fallback.
    Keyword,
    /// No keyword hit; a general/inquiry category was chosen.
    General,
    /// Nothing matched; first category (or the unknown sentinel).
    FirstCategory,
}

impl DecisionPath {
    pub fn confidence(self) -> f64 {
        match self {
            Self::ModelExact => constants::CONFIDENCE_MODEL_EXACT,
            Self::ModelRepaired => constants::CONFIDENCE_MODEL_REPAIRED,
            Self::Keyword => constants::CONFIDENCE_KEYWORD,
            Self::General => constants::CONFIDENCE_GENERAL,
            Self::FirstCategory => constants::CONFIDENCE_FIRST_CATEGORY,
        }
    }
}

/// A classifier's answer for one example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub category: String,
    /// Always within `[0.0, 1.0]`.
    pub confidence: f64,
}

impl Prediction {
    /// Create a prediction, clamping confidence into `[0.0, 1.0]`.
    pub fn new(category: impl Into<String>, confidence: f64) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        Self {
            category: category.into(),
            confidence,
        }
    }

    /// Create a prediction with the confidence of `path`.
    pub fn from_path(category: impl Into<String>, path: DecisionPath) -> Self {
        Self::new(category, path.confidence())
    }
}
