//! Exclusive access to a persisted collection.
//!
//! A process-local mutex serializes threads; an advisory lock on a
//! `<file>.lock` sidecar serializes processes sharing the directory.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use triage_core::errors::StoreError;

pub(crate) struct CollectionLock {
    lock_path: PathBuf,
    local: Mutex<()>,
}

impl CollectionLock {
    pub(crate) fn for_file(path: &Path) -> Self {
        let mut name = path.file_name().unwrap_or_default().to_os_string();
        name.push(".lock");
        Self {
            lock_path: path.with_file_name(name),
            local: Mutex::new(()),
        }
    }

    /// Run `f` while holding both locks.
    pub(crate) fn with_exclusive<T, E>(&self, f: impl FnOnce() -> Result<T, E>) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        let _local = self.local.lock().unwrap_or_else(|p| p.into_inner());

        if let Some(parent) = self.lock_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| E::from(StoreError::io(parent, e)))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(&self.lock_path)
            .map_err(|e| E::from(StoreError::io(&self.lock_path, e)))?;
        let mut lock = fd_lock::RwLock::new(file);
        let _guard = lock.write().map_err(|e| {
            E::from(StoreError::Lock {
                path: self.lock_path.display().to_string(),
                reason: e.to_string(),
            })
        })?;

        f()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidecar_sits_next_to_the_file() {
        let lock = CollectionLock::for_file(Path::new("/tmp/data/feedback.json"));
        assert_eq!(lock.lock_path, PathBuf::from("/tmp/data/feedback.json.lock"));
    }
}
