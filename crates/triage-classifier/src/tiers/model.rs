use std::sync::Arc;

use triage_core::models::{CategorySet, DecisionPath};
use triage_core::traits::IInference;

use super::{ClassificationTier, TierOutcome};
use crate::prompt::build_prompt;
use crate::repair::{exact_match, fuzzy_repair, normalize_label};

/// Asks the inference service for a label, then repairs near misses.
pub struct ModelTier {
    inference: Arc<dyn IInference>,
}

impl ModelTier {
    pub fn new(inference: Arc<dyn IInference>) -> Self {
        Self { inference }
    }
}

impl ClassificationTier for ModelTier {
    fn name(&self) -> &'static str {
        "model"
    }

    fn attempt(&self, subject: &str, body: &str, categories: &CategorySet) -> TierOutcome {
        if categories.is_empty() {
            return TierOutcome::NoMatch;
        }

        let prompt = build_prompt(subject, body, categories);
        let raw = match self.inference.complete(&prompt) {
            Ok(raw) => raw,
            Err(e) => {
                return TierOutcome::Unavailable {
                    reason: e.to_string(),
                }
            }
        };

        let Some(label) = normalize_label(&raw) else {
            return TierOutcome::Unavailable {
                reason: format!("{} returned an empty label", self.inference.name()),
            };
        };

        if let Some(category) = exact_match(&label, categories) {
            return TierOutcome::decided(category, DecisionPath::ModelExact);
        }
        if let Some(category) = fuzzy_repair(&label, categories) {
            return TierOutcome::decided(category, DecisionPath::ModelRepaired);
        }
        TierOutcome::Unavailable {
            reason: format!("label {label:?} matches no category"),
        }
    }
}
