//! Append-only correction store.
//!
//! Each record maps a content fingerprint to the category a reviewer says
//! it belongs in. Records are never mutated or deleted; duplicates for the
//! same content accumulate.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use triage_core::errors::{TriageResult, ValidationError};
use triage_core::models::{CategorySet, FeedbackRecord};
use triage_core::traits::IFeedbackSink;
use triage_observability::events;

use crate::json_file::{read_array, write_array};
use crate::lock::CollectionLock;
use crate::stats::FeedbackStats;

/// One correction submitted in a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub subject: String,
    pub body: String,
    pub correct_category: String,
}

/// Outcome of [`FeedbackStore::record_batch`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub processed: usize,
    pub successful: usize,
    pub failed: usize,
    /// Per-item error messages, by batch index.
    pub errors: Vec<(usize, String)>,
}

/// File-backed feedback collection.
pub struct FeedbackStore {
    path: PathBuf,
    lock: CollectionLock,
}

impl FeedbackStore {
    /// Open the store at `path`. The file is created on first write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let lock = CollectionLock::for_file(&path);
        Self { path, lock }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one correction and return the persisted record.
    ///
    /// The record is durable when this returns `Ok`. A corrupt store is
    /// replaced by a collection holding only this record.
    pub fn record(
        &self,
        subject: &str,
        body: &str,
        correct_category: &str,
    ) -> TriageResult<FeedbackRecord> {
        let correct_category = correct_category.trim();
        if correct_category.is_empty() {
            return Err(ValidationError::EmptyField {
                field: "correct_category".to_string(),
            }
            .into());
        }

        let record = FeedbackRecord::from_content(subject, body, correct_category);
        self.lock.with_exclusive(|| {
            let mut records = self.load()?;
            records.push(record.clone());
            write_array(&self.path, &records)
        })?;

        events::feedback_recorded(&record.content_fingerprint, &record.correct_category);
        Ok(record)
    }

    /// Record each item independently; one failure does not stop the rest.
    /// Items with neither subject nor body are rejected.
    pub fn record_batch(&self, items: &[FeedbackItem]) -> BatchSummary {
        let mut summary = BatchSummary {
            processed: items.len(),
            ..BatchSummary::default()
        };
        for (idx, item) in items.iter().enumerate() {
            if item.subject.trim().is_empty() && item.body.trim().is_empty() {
                summary.failed += 1;
                summary.errors.push((idx, "email content missing".to_string()));
                continue;
            }
            match self.record(&item.subject, &item.body, &item.correct_category) {
                Ok(_) => summary.successful += 1,
                Err(e) => {
                    summary.failed += 1;
                    summary.errors.push((idx, e.to_string()));
                }
            }
        }
        summary
    }

    /// All records, oldest first.
    pub fn records(&self) -> TriageResult<Vec<FeedbackRecord>> {
        Ok(self.lock.with_exclusive(|| self.load())?)
    }

    pub fn len(&self) -> TriageResult<usize> {
        self.records().map(|r| r.len())
    }

    pub fn is_empty(&self) -> TriageResult<bool> {
        self.len().map(|n| n == 0)
    }

    /// Record counts per category alongside the current category list.
    pub fn stats(&self, categories: &CategorySet) -> TriageResult<FeedbackStats> {
        let records = self.records()?;
        let mut category_distribution = BTreeMap::new();
        for r in &records {
            *category_distribution
                .entry(r.correct_category.clone())
                .or_insert(0) += 1;
        }
        Ok(FeedbackStats {
            total_feedback_items: records.len(),
            category_distribution,
            available_categories: categories.as_slice().to_vec(),
            total_categories: categories.len(),
        })
    }

    fn load(&self) -> Result<Vec<FeedbackRecord>, triage_core::errors::StoreError> {
        let loaded = read_array(&self.path)?;
        if let Some(details) = loaded.corruption {
            events::store_recovered(&self.path.display().to_string(), &details);
        }
        Ok(loaded.items)
    }
}

impl IFeedbackSink for FeedbackStore {
    fn record_feedback(&self, subject: &str, body: &str, correct_category: &str) -> TriageResult<()> {
        self.record(subject, body, correct_category).map(|_| ())
    }
}
