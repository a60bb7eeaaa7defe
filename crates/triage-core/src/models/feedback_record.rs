use serde::{Deserialize, Serialize};

use crate::fingerprint;

/// One correction: "content with this fingerprint belongs in this category".
///
/// Append-only; never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Older stores wrote this field as `email_hash`.
    #[serde(alias = "email_hash")]
    pub content_fingerprint: String,
    pub correct_category: String,
}

impl FeedbackRecord {
    /// Build a record from raw content. The text itself is not retained.
    pub fn from_content(subject: &str, body: &str, correct_category: &str) -> Self {
        Self {
            content_fingerprint: fingerprint::fingerprint(subject, body),
            correct_category: correct_category.to_string(),
        }
    }
}
