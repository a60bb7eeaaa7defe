//! Classification tiers, tried in order until one decides.

mod fallback;
mod keyword;
mod model;

pub use fallback::{FirstCategoryTier, GeneralTier};
pub use keyword::{KeywordGroup, KeywordTier, KEYWORD_GROUPS};
pub use model::ModelTier;

use triage_core::models::{CategorySet, DecisionPath};

/// Result of one tier's attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum TierOutcome {
    /// The tier chose a category from the set.
    Decided { category: String, path: DecisionPath },
    /// The tier had nothing to say; try the next one.
    NoMatch,
    /// The tier's backing service failed; try the next one.
    Unavailable { reason: String },
}

impl TierOutcome {
    pub fn decided(category: impl Into<String>, path: DecisionPath) -> Self {
        Self::Decided {
            category: category.into(),
            path,
        }
    }
}

/// One step of the fallback chain.
///
/// A tier must only decide on a category present in `categories`, except
/// the terminal tier which may fall back to the unknown sentinel when the
/// set is empty.
pub trait ClassificationTier: Send + Sync {
    fn name(&self) -> &'static str;

    fn attempt(&self, subject: &str, body: &str, categories: &CategorySet) -> TierOutcome;
}
