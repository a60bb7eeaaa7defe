//! Scoring any labeler's answers against an answer key.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use triage_core::errors::{TriageResult, ValidationError};
use triage_core::models::{accuracy_percent, AnswerKeyEntry};

/// Verdict for one labeled item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelOutcome {
    pub id: u64,
    pub given_category: String,
    /// `None` when the answer key has no entry for `id`.
    pub correct_category: Option<String>,
    pub is_correct: bool,
}

/// Aggregate verdict over a set of labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub results: Vec<LabelOutcome>,
    pub correct_count: usize,
    pub total_count: usize,
    pub accuracy: f64,
}

/// Compare `(id, category)` labels with an answer key.
///
/// A label whose id is missing from the key counts as incorrect.
pub fn score_labels(
    labels: &[(u64, String)],
    answer_key: &[AnswerKeyEntry],
) -> TriageResult<LabelScore> {
    if labels.is_empty() {
        return Err(ValidationError::EmptyField {
            field: "categorizations".to_string(),
        }
        .into());
    }
    if answer_key.is_empty() {
        return Err(ValidationError::EmptyField {
            field: "answer_key".to_string(),
        }
        .into());
    }

    let key: HashMap<u64, &str> = answer_key
        .iter()
        .map(|e| (e.id, e.correct_category.as_str()))
        .collect();

    let results: Vec<LabelOutcome> = labels
        .iter()
        .map(|(id, given)| {
            let correct = key.get(id).copied();
            LabelOutcome {
                id: *id,
                given_category: given.clone(),
                correct_category: correct.map(str::to_string),
                is_correct: correct == Some(given.as_str()),
            }
        })
        .collect();

    let correct_count = results.iter().filter(|r| r.is_correct).count();
    let total_count = results.len();
    Ok(LabelScore {
        accuracy: accuracy_percent(correct_count, total_count),
        results,
        correct_count,
        total_count,
    })
}
