//! Canonical ordered, deduplicated category list.

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Ordered, deduplicated category names.
///
/// Append-only: names can be inserted but never removed. Insertion order is
/// the canonical order used for every tie-break during classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CategorySet {
    names: Vec<String>,
}

impl CategorySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from names, trimming each, skipping blanks and duplicates.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for name in names {
            let _ = set.insert(name.as_ref());
        }
        set
    }

    /// Append a category. Returns `Ok(false)` if the name was already present.
    pub fn insert(&mut self, name: &str) -> Result<bool, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyField {
                field: "category".to_string(),
            });
        }
        if self.contains(name) {
            return Ok(false);
        }
        self.names.push(name.to_string());
        Ok(true)
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// First category in canonical order matching `pred`.
    pub fn find<P>(&self, mut pred: P) -> Option<&str>
    where
        P: FnMut(&str) -> bool,
    {
        self.names.iter().map(String::as_str).find(|n| pred(n))
    }

    pub fn first(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }
}

impl From<Vec<String>> for CategorySet {
    fn from(names: Vec<String>) -> Self {
        Self::from_names(names)
    }
}

impl From<CategorySet> for Vec<String> {
    fn from(set: CategorySet) -> Self {
        set.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedupes_and_keeps_order() {
        let set = CategorySet::from_names(["Sales", "Complaint", "Sales", "  ", "Legal"]);
        assert_eq!(set.as_slice(), &["Sales", "Complaint", "Legal"]);
    }

    #[test]
    fn insert_reports_duplicates() {
        let mut set = CategorySet::from_names(["Sales"]);
        assert_eq!(set.insert("Sales"), Ok(false));
        assert_eq!(set.insert(" Legal "), Ok(true));
        assert!(set.contains("Legal"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn insert_rejects_blank() {
        let mut set = CategorySet::new();
        assert!(set.insert("   ").is_err());
        assert!(set.is_empty());
    }

    #[test]
    fn serde_as_plain_list() {
        let set: CategorySet = serde_json::from_str(r#"["A","B","A"]"#).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["A","B"]"#);
    }
}
