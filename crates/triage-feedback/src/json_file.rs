//! JSON-array files: tolerant reads, atomic rewrites.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use triage_core::errors::StoreError;

/// Items read from disk. `corruption` is set when unreadable content was
/// replaced by an empty collection.
pub(crate) struct Loaded<T> {
    pub items: Vec<T>,
    pub corruption: Option<String>,
}

/// Read a JSON array. A missing file is an empty collection. A blank or
/// unparseable one is reported through `corruption`, never as an error.
pub(crate) fn read_array<T: DeserializeOwned>(path: &Path) -> Result<Loaded<T>, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Ok(Loaded {
                items: Vec::new(),
                corruption: None,
            })
        }
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            return Ok(Loaded {
                items: Vec::new(),
                corruption: Some(format!("not valid UTF-8: {e}")),
            })
        }
        Err(e) => return Err(StoreError::io(path, e)),
    };

    if content.trim().is_empty() {
        return Ok(Loaded {
            items: Vec::new(),
            corruption: Some("file is empty".to_string()),
        });
    }

    match serde_json::from_str::<Vec<T>>(&content) {
        Ok(items) => Ok(Loaded {
            items,
            corruption: None,
        }),
        Err(e) => Ok(Loaded {
            items: Vec::new(),
            corruption: Some(e.to_string()),
        }),
    }
}

/// Replace the file's content: write a sibling temp file, then rename it
/// over the target so readers never see a partial array.
pub(crate) fn write_array<T: Serialize>(path: &Path, items: &[T]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }

    let bytes = serde_json::to_vec_pretty(items).map_err(|e| StoreError::Serialization {
        reason: e.to_string(),
    })?;

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    fs::write(&tmp, bytes).map_err(|e| StoreError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| StoreError::io(path, e))?;
    tracing::debug!(path = %path.display(), items = items.len(), "collection rewritten");
    Ok(())
}
