//! Process-local category source.

use std::sync::RwLock;

use triage_core::errors::TriageResult;
use triage_core::models::CategorySet;
use triage_core::traits::ICategorySource;

/// Category list held in memory. Used when no category file is configured
/// and by tests.
#[derive(Debug, Default)]
pub struct InMemoryCategories {
    inner: RwLock<CategorySet>,
}

impl InMemoryCategories {
    pub fn new(categories: CategorySet) -> Self {
        Self {
            inner: RwLock::new(categories),
        }
    }
}

impl ICategorySource for InMemoryCategories {
    fn categories(&self) -> TriageResult<CategorySet> {
        let guard = self.inner.read().unwrap_or_else(|p| p.into_inner());
        Ok(guard.clone())
    }

    fn add_category(&self, name: &str) -> TriageResult<bool> {
        let mut guard = self.inner.write().unwrap_or_else(|p| p.into_inner());
        let added = guard.insert(name)?;
        if added {
            triage_observability::events::category_added(name.trim(), guard.len());
        }
        Ok(added)
    }
}
