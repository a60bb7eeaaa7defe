//! Label normalization and fuzzy repair of model output.
//!
//! Exact matching is case-sensitive on the normalized label. Repair accepts
//! the first category, in canonical order, where either string contains the
//! other case-insensitively.

use triage_core::models::CategorySet;

const QUOTE_CHARS: &[char] = &['"', '\'', '`', '*'];

/// Extract a single label from raw completion text.
///
/// Takes the first non-empty line, drops a leading `Category:` prefix and
/// surrounding quotes/backticks. Returns `None` when nothing is left.
pub fn normalize_label(raw: &str) -> Option<String> {
    let line = raw.lines().map(str::trim).find(|l| !l.is_empty())?;
    let line = strip_prefix_ci(line, "category:").unwrap_or(line).trim();
    let label = line.trim_matches(QUOTE_CHARS).trim();
    if label.is_empty() {
        None
    } else {
        Some(label.to_string())
    }
}

fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        s.get(prefix.len()..)
    } else {
        None
    }
}

/// Exact, case-sensitive membership.
pub fn exact_match<'a>(label: &str, categories: &'a CategorySet) -> Option<&'a str> {
    categories.find(|c| c == label)
}

/// First category where either string is a case-insensitive substring of
/// the other.
pub fn fuzzy_repair<'a>(label: &str, categories: &'a CategorySet) -> Option<&'a str> {
    let label = label.to_lowercase();
    if label.is_empty() {
        return None;
    }
    categories.find(|c| {
        let cat = c.to_lowercase();
        cat.contains(&label) || label.contains(&cat)
    })
}
