//! Classification is total: any text, any category set, any model behaviour.

use std::sync::Arc;

use proptest::prelude::*;
use test_fixtures::fakes::ScriptedInference;
use triage_classifier::{ClassificationEngine, InMemoryCategories};
use triage_core::constants::UNKNOWN_CATEGORY;
use triage_core::models::CategorySet;

fn model_reply() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), any::<String>().prop_map(Some), "[A-Za-z \\-]{0,30}".prop_map(Some)]
}

proptest! {
    #[test]
    fn always_returns_a_member_or_unknown(
        subject in any::<String>(),
        body in any::<String>(),
        names in prop::collection::vec("[A-Za-z][A-Za-z /\\-]{0,24}", 0..8),
        reply in model_reply(),
    ) {
        let cats = CategorySet::from_names(names);
        let engine = ClassificationEngine::new(
            Arc::new(InMemoryCategories::new(cats.clone())),
            Arc::new(ScriptedInference::new(vec![reply])),
        );

        let decision = engine.classify_with(&subject, &body, &cats);
        let p = decision.prediction;

        prop_assert!((0.0..=1.0).contains(&p.confidence));
        if cats.is_empty() {
            prop_assert_eq!(p.category.as_str(), UNKNOWN_CATEGORY);
        } else {
            prop_assert!(cats.contains(&p.category));
        }
        prop_assert!((p.confidence - decision.path.confidence()).abs() < 1e-12);
    }
}
