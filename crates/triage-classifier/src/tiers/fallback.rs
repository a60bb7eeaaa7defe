use triage_core::constants::UNKNOWN_CATEGORY;
use triage_core::models::{CategorySet, DecisionPath};

use super::{ClassificationTier, TierOutcome};

/// Picks the first category mentioning "general" or "inquiry".
pub struct GeneralTier;

impl ClassificationTier for GeneralTier {
    fn name(&self) -> &'static str {
        "general"
    }

    fn attempt(&self, _subject: &str, _body: &str, categories: &CategorySet) -> TierOutcome {
        categories
            .find(|c| {
                let lower = c.to_lowercase();
                lower.contains("general") || lower.contains("inquiry")
            })
            .map(|c| TierOutcome::decided(c, DecisionPath::General))
            .unwrap_or(TierOutcome::NoMatch)
    }
}

/// Terminal tier. Always decides: the first category, or the unknown
/// sentinel for an empty set.
pub struct FirstCategoryTier;

impl ClassificationTier for FirstCategoryTier {
    fn name(&self) -> &'static str {
        "first_category"
    }

    fn attempt(&self, _subject: &str, _body: &str, categories: &CategorySet) -> TierOutcome {
        TierOutcome::decided(
            categories.first().unwrap_or(UNKNOWN_CATEGORY),
            DecisionPath::FirstCategory,
        )
    }
}
