//! Persisted category list.

use std::path::{Path, PathBuf};

use triage_core::constants::DEFAULT_CATEGORIES;
use triage_core::errors::TriageResult;
use triage_core::models::CategorySet;
use triage_core::traits::ICategorySource;
use triage_observability::events;

use crate::json_file::{read_array, write_array};
use crate::lock::CollectionLock;

/// Category list stored as a JSON array of names.
///
/// A missing file, or one that does not parse, reads as the default categories.
pub struct CategoryStore {
    path: PathBuf,
    lock: CollectionLock,
}

impl CategoryStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let lock = CollectionLock::for_file(&path);
        Self { path, lock }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> TriageResult<CategorySet> {
        let loaded = read_array::<String>(&self.path)?;
        if let Some(details) = &loaded.corruption {
            events::store_recovered(&self.path.display().to_string(), details);
            return Ok(CategorySet::from_names(DEFAULT_CATEGORIES));
        }
        if !self.path.exists() {
            return Ok(CategorySet::from_names(DEFAULT_CATEGORIES));
        }
        Ok(CategorySet::from_names(loaded.items))
    }
}

impl ICategorySource for CategoryStore {
    fn categories(&self) -> TriageResult<CategorySet> {
        self.lock.with_exclusive(|| self.load())
    }

    fn add_category(&self, name: &str) -> TriageResult<bool> {
        let (added, total) = self.lock.with_exclusive(|| -> TriageResult<_> {
            let mut set = self.load()?;
            let added = set.insert(name)?;
            if added {
                write_array(&self.path, set.as_slice())?;
            }
            Ok((added, set.len()))
        })?;
        if added {
            events::category_added(name.trim(), total);
        }
        Ok(added)
    }
}
