use triage_core::models::{CategorySet, DecisionPath};

use super::{ClassificationTier, TierOutcome};

/// A keyword group: trigger words plus the key used to find its category.
#[derive(Debug, Clone, Copy)]
pub struct KeywordGroup {
    pub key: &'static str,
    pub keywords: &'static [&'static str],
}

/// Groups in priority order.
///
/// Keywords match as plain substrings of the lowercased text, so short ones
/// also fire inside longer words: "sue" hits "issue" and "pursue", "buy"
/// hits "buyer". Complaint precedes legal, which keeps "issue" with the
/// complaint category whenever one exists.
pub const KEYWORD_GROUPS: &[KeywordGroup] = &[
    KeywordGroup {
        key: "complaint",
        keywords: &[
            "complaint",
            "problem",
            "issue",
            "broken",
            "defective",
            "poor",
            "terrible",
            "awful",
            "disappointed",
        ],
    },
    KeywordGroup {
        key: "sales",
        keywords: &[
            "quote",
            "pricing",
            "proposal",
            "interested",
            "buy",
            "purchase",
            "upgrade",
            "partnership",
        ],
    },
    KeywordGroup {
        key: "urgent",
        keywords: &[
            "urgent",
            "asap",
            "immediate",
            "emergency",
            "critical",
            "time sensitive",
        ],
    },
    KeywordGroup {
        key: "legal",
        keywords: &[
            "legal",
            "lawsuit",
            "attorney",
            "lawyer",
            "contract",
            "breach",
            "violation",
            "sue",
        ],
    },
    KeywordGroup {
        key: "good news",
        keywords: &[
            "success",
            "award",
            "recognition",
            "excellent",
            "outstanding",
            "fantastic",
            "impressed",
        ],
    },
    KeywordGroup {
        key: "technical",
        keywords: &[
            "bug",
            "error",
            "technical",
            "support",
            "help",
            "not working",
            "malfunction",
        ],
    },
];

/// Deterministic keyword matching over subject and body.
///
/// A group hit selects the first category whose squashed name (lowercase,
/// no spaces or hyphens) contains the group key. A hit with no such
/// category moves on to the next group.
pub struct KeywordTier {
    groups: &'static [KeywordGroup],
}

impl KeywordTier {
    pub fn new() -> Self {
        Self {
            groups: KEYWORD_GROUPS,
        }
    }

    pub fn with_groups(groups: &'static [KeywordGroup]) -> Self {
        Self { groups }
    }
}

impl Default for KeywordTier {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassificationTier for KeywordTier {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn attempt(&self, subject: &str, body: &str, categories: &CategorySet) -> TierOutcome {
        let text = format!("{subject} {body}").to_lowercase();

        for group in self.groups {
            if !contains_any(&text, group.keywords) {
                continue;
            }
            let key = squash(group.key);
            if let Some(category) = categories.find(|c| squash(c).contains(&key)) {
                return TierOutcome::decided(category, DecisionPath::Keyword);
            }
        }
        TierOutcome::NoMatch
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}
