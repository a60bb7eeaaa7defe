//! # triage-feedback
//!
//! Durable, append-only correction records keyed by content fingerprint,
//! plus the persisted category list. Both are JSON arrays on disk, written
//! by full rewrite under an exclusive lock.

pub mod category_store;
pub mod feedback_store;
mod json_file;
mod lock;
pub mod stats;

pub use category_store::CategoryStore;
pub use feedback_store::{BatchSummary, FeedbackItem, FeedbackStore};
pub use stats::FeedbackStats;
