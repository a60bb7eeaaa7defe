//! The tiered classification engine.

use std::sync::Arc;

use triage_core::constants::UNKNOWN_CATEGORY;
use triage_core::errors::TriageResult;
use triage_core::models::{CategorySet, DecisionPath, Prediction};
use triage_core::traits::{ICategorySource, IClassifier, IInference};
use triage_observability::{events, DecisionMetrics};

use crate::tiers::{
    ClassificationTier, FirstCategoryTier, GeneralTier, KeywordTier, ModelTier, TierOutcome,
};

/// A prediction plus the tier that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub prediction: Prediction,
    pub path: DecisionPath,
}

impl Decision {
    fn new(category: String, path: DecisionPath) -> Self {
        Self {
            prediction: Prediction::from_path(category, path),
            path,
        }
    }
}

/// Tries each tier in order; the first decision wins.
///
/// Category additions through [`ClassificationEngine::add_category`] are
/// visible to the next call. A call already in flight keeps the snapshot
/// it started with.
pub struct ClassificationEngine {
    tiers: Vec<Box<dyn ClassificationTier>>,
    categories: Arc<dyn ICategorySource>,
    metrics: Arc<DecisionMetrics>,
}

impl ClassificationEngine {
    /// Standard chain: model, keyword, general, first category.
    pub fn new(categories: Arc<dyn ICategorySource>, inference: Arc<dyn IInference>) -> Self {
        Self::with_tiers(
            categories,
            vec![
                Box::new(ModelTier::new(inference)),
                Box::new(KeywordTier::new()),
                Box::new(GeneralTier),
                Box::new(FirstCategoryTier),
            ],
        )
    }

    /// Custom chain. [`FirstCategoryTier`] semantics still apply if every
    /// tier passes.
    pub fn with_tiers(
        categories: Arc<dyn ICategorySource>,
        tiers: Vec<Box<dyn ClassificationTier>>,
    ) -> Self {
        Self {
            tiers,
            categories,
            metrics: Arc::new(DecisionMetrics::new()),
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<DecisionMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Arc<DecisionMetrics> {
        &self.metrics
    }

    pub fn tier_names(&self) -> Vec<&'static str> {
        self.tiers.iter().map(|t| t.name()).collect()
    }

    /// Classify against an explicit category snapshot. Never fails.
    pub fn classify_with(&self, subject: &str, body: &str, categories: &CategorySet) -> Decision {
        for (idx, tier) in self.tiers.iter().enumerate() {
            match tier.attempt(subject, body, categories) {
                TierOutcome::Decided { category, path } => {
                    self.metrics.record(path);
                    return Decision::new(category, path);
                }
                TierOutcome::NoMatch => {
                    tracing::trace!(tier = tier.name(), "tier passed");
                }
                TierOutcome::Unavailable { reason } => {
                    self.metrics.record_model_failure();
                    let fallback = self
                        .tiers
                        .get(idx + 1)
                        .map(|t| t.name())
                        .unwrap_or("first_category");
                    events::tier_degraded(tier.name(), &reason, fallback);
                }
            }
        }

        let category = categories.first().unwrap_or(UNKNOWN_CATEGORY).to_string();
        self.metrics.record(DecisionPath::FirstCategory);
        Decision::new(category, DecisionPath::FirstCategory)
    }

    /// Classify against the current category list.
    pub fn decide(&self, subject: &str, body: &str) -> TriageResult<Decision> {
        let categories = self.categories.categories()?;
        Ok(self.classify_with(subject, body, &categories))
    }

    pub fn categories(&self) -> TriageResult<CategorySet> {
        self.categories.categories()
    }

    /// Extend the category list; later classifications may choose it.
    pub fn add_category(&self, name: &str) -> TriageResult<bool> {
        self.categories.add_category(name)
    }
}

impl IClassifier for ClassificationEngine {
    fn classify(&self, subject: &str, body: &str) -> TriageResult<Prediction> {
        self.decide(subject, body).map(|d| d.prediction)
    }
}
