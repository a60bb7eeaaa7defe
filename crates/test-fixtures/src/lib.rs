//! Fixture loader and scripted collaborators shared by the workspace's tests.
//!
//! Fixture files live under `data/` next to this crate's manifest.

pub mod fakes;

use serde::de::DeserializeOwned;
use std::path::PathBuf;

use triage_core::models::LabeledExample;

/// Root directory of the fixture data.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Raw contents of a fixture file.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn read_fixture(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let content = read_fixture(relative_path);
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {relative_path}: {e}"))
}

/// A batch of `n` examples for use with [`fakes::ScriptedClassifier::oracle`].
///
/// Every example names its own prediction in the body. The first `wrong`
/// examples predict [`fakes::WRONG_CATEGORY`]; the rest predict their true
/// category.
pub fn oracle_batch(n: usize, wrong: usize) -> Vec<LabeledExample> {
    const CYCLE: [&str; 3] = [
        "Sales Opportunity - New Business",
        "Legal Escalation - Threat/Litigation",
        "General Inquiry",
    ];
    (0..n)
        .map(|i| {
            let true_category = CYCLE[i % CYCLE.len()].to_string();
            let predicted = if i < wrong {
                fakes::WRONG_CATEGORY
            } else {
                true_category.as_str()
            };
            LabeledExample {
                id: i as u64 + 1,
                subject: format!("Example {}", i + 1),
                body: format!("Message number {}.\n{}{}", i + 1, fakes::PREDICT_PREFIX, predicted),
                true_category,
            }
        })
        .collect()
}
