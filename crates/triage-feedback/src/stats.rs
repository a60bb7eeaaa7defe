use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Summary of the feedback collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackStats {
    pub total_feedback_items: usize,
    /// Corrections per category.
    pub category_distribution: BTreeMap<String, usize>,
    pub available_categories: Vec<String>,
    pub total_categories: usize,
}
