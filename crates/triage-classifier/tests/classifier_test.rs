//! Engine behaviour across the fallback chain.

use std::sync::Arc;

use test_fixtures::fakes::ScriptedInference;
use triage_classifier::tiers::{ClassificationTier, KeywordTier, TierOutcome};
use triage_classifier::{ClassificationEngine, InMemoryCategories};
use triage_core::constants::{DEFAULT_CATEGORIES, UNKNOWN_CATEGORY};
use triage_core::models::{CategorySet, DecisionPath};
use triage_core::traits::{IClassifier, NoInference};

fn defaults() -> CategorySet {
    CategorySet::from_names(DEFAULT_CATEGORIES)
}

fn engine_with(inference: ScriptedInference, cats: CategorySet) -> ClassificationEngine {
    ClassificationEngine::new(
        Arc::new(InMemoryCategories::new(cats)),
        Arc::new(inference),
    )
}

#[test]
fn exact_model_label_wins() {
    let engine = engine_with(ScriptedInference::always("General Inquiry"), defaults());
    let decision = engine.decide("Hi", "Broken product!").unwrap();
    assert_eq!(decision.prediction.category, "General Inquiry");
    assert_eq!(decision.path, DecisionPath::ModelExact);
    assert!((decision.prediction.confidence - 0.85).abs() < 1e-9);
}

#[test]
fn noisy_model_label_is_repaired() {
    let engine = engine_with(ScriptedInference::always("  \"complaint\"  \n"), defaults());
    let decision = engine.decide("x", "y").unwrap();
    assert_eq!(decision.prediction.category, "Complaint - Product/Service");
    assert_eq!(decision.path, DecisionPath::ModelRepaired);
    assert!((decision.prediction.confidence - 0.75).abs() < 1e-9);
}

#[test]
fn unrepairable_label_falls_to_keywords() {
    let engine = engine_with(ScriptedInference::always("Weather report"), defaults());
    let decision = engine.decide("Defective unit", "It arrived broken.").unwrap();
    assert_eq!(decision.prediction.category, "Complaint - Product/Service");
    assert_eq!(decision.path, DecisionPath::Keyword);
    assert_eq!(engine.metrics().snapshot().model_failures, 1);
}

#[test]
fn unreachable_model_uses_keyword_fallback() {
    let engine = engine_with(ScriptedInference::failing(), defaults());
    let p = engine
        .classify("Order issue", "My order arrived broken and defective")
        .unwrap();
    assert_eq!(p.category, "Complaint - Product/Service");
    assert!((p.confidence - 0.6).abs() < 1e-9);
}

#[test]
fn no_keywords_picks_general_category() {
    let engine = engine_with(ScriptedInference::failing(), defaults());
    let decision = engine.decide("Hello", "Just saying hi.").unwrap();
    assert_eq!(decision.prediction.category, "General Inquiry");
    assert_eq!(decision.path, DecisionPath::General);
    assert!((decision.prediction.confidence - 0.3).abs() < 1e-9);
}

#[test]
fn no_general_category_picks_first() {
    let cats = CategorySet::from_names(["Alpha", "Beta"]);
    let engine = engine_with(ScriptedInference::failing(), cats);
    let decision = engine.decide("Hello", "Just saying hi.").unwrap();
    assert_eq!(decision.prediction.category, "Alpha");
    assert_eq!(decision.path, DecisionPath::FirstCategory);
    assert!((decision.prediction.confidence - 0.2).abs() < 1e-9);
}

#[test]
fn empty_category_set_yields_unknown() {
    let inference = ScriptedInference::always("General Inquiry");
    let engine = engine_with(inference, CategorySet::new());
    let decision = engine.decide("Hello", "broken").unwrap();
    assert_eq!(decision.prediction.category, UNKNOWN_CATEGORY);
    assert_eq!(decision.path, DecisionPath::FirstCategory);
}

#[test]
fn empty_category_set_skips_the_model_call() {
    let inference = Arc::new(ScriptedInference::always("General Inquiry"));
    let engine = ClassificationEngine::new(
        Arc::new(InMemoryCategories::new(CategorySet::new())),
        inference.clone(),
    );
    engine.decide("Hello", "there").unwrap();
    assert!(inference.prompts().is_empty());
}

#[test]
fn added_category_is_offered_to_the_model() {
    let inference = Arc::new(ScriptedInference::always("Partnership Proposal"));
    let engine = ClassificationEngine::new(
        Arc::new(InMemoryCategories::new(defaults())),
        inference.clone(),
    );

    let before = engine.decide("Let's team up", "Joint venture?").unwrap();
    assert_ne!(before.prediction.category, "Partnership Proposal");

    assert!(engine.add_category("  Partnership Proposal ").unwrap());
    assert!(!engine.add_category("Partnership Proposal").unwrap());

    let after = engine.decide("Let's team up", "Joint venture?").unwrap();
    assert_eq!(after.prediction.category, "Partnership Proposal");
    assert_eq!(after.path, DecisionPath::ModelExact);
    assert!(inference.prompts().last().unwrap().contains("- Partnership Proposal"));
}

#[test]
fn adding_blank_category_is_rejected() {
    let engine = engine_with(ScriptedInference::failing(), defaults());
    let err = engine.add_category("   ").unwrap_err();
    assert!(err.to_string().contains("category"));
    assert_eq!(engine.categories().unwrap().len(), DEFAULT_CATEGORIES.len());
}

#[test]
fn disabled_inference_never_blocks_classification() {
    let engine = ClassificationEngine::new(
        Arc::new(InMemoryCategories::new(defaults())),
        Arc::new(NoInference),
    );
    let p = engine
        .classify("Legal notice", "Our lawyer will be in touch about the breach.")
        .unwrap();
    assert_eq!(p.category, "Legal Escalation - Threat/Litigation");
}

#[test]
fn metrics_count_each_path() {
    let engine = engine_with(ScriptedInference::failing(), defaults());
    engine.decide("broken", "").unwrap();
    engine.decide("hello", "").unwrap();
    let snap = engine.metrics().snapshot();
    assert_eq!(snap.keyword, 1);
    assert_eq!(snap.general, 1);
    assert_eq!(snap.model_failures, 2);
    assert_eq!(snap.total(), 2);
}

struct AlwaysPass;

impl ClassificationTier for AlwaysPass {
    fn name(&self) -> &'static str {
        "always_pass"
    }

    fn attempt(&self, _: &str, _: &str, _: &CategorySet) -> TierOutcome {
        TierOutcome::NoMatch
    }
}

#[test]
fn chain_without_terminal_tier_still_decides() {
    let engine = ClassificationEngine::with_tiers(
        Arc::new(InMemoryCategories::new(defaults())),
        vec![Box::new(AlwaysPass)],
    );
    let decision = engine.decide("x", "y").unwrap();
    assert_eq!(decision.prediction.category, DEFAULT_CATEGORIES[0]);
    assert_eq!(decision.path, DecisionPath::FirstCategory);
}

#[test]
fn keyword_priority_follows_group_order() {
    // "urgent" and "lawsuit" both hit; complaint/sales groups miss, urgent comes first.
    let tier = KeywordTier::new();
    let out = tier.attempt("URGENT", "A lawsuit has been filed.", &defaults());
    assert_eq!(
        out,
        TierOutcome::decided("Action Required - Urgent Response", DecisionPath::Keyword)
    );
}

#[test]
fn default_chain_order() {
    let engine = engine_with(ScriptedInference::failing(), defaults());
    assert_eq!(
        engine.tier_names(),
        vec!["model", "keyword", "general", "first_category"]
    );
}
