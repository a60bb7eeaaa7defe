use crate::errors::TriageResult;
use crate::models::CategorySet;

/// Owner of the canonical category list.
pub trait ICategorySource: Send + Sync {
    /// Current snapshot of the category list.
    fn categories(&self) -> TriageResult<CategorySet>;

    /// Append a category. `Ok(false)` means the name was already present
    /// and nothing changed.
    fn add_category(&self, name: &str) -> TriageResult<bool>;
}
