use serde::{Deserialize, Serialize};

/// A generated example with its ground-truth category.
///
/// Immutable once created; `id` is unique within one generation batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledExample {
    pub id: u64,
    pub subject: String,
    pub body: String,
    pub true_category: String,
}

/// One entry of a generator's answer key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerKeyEntry {
    pub id: u64,
    pub correct_category: String,
}
