//! # triage-classifier
//!
//! Classification engine: an ordered list of tiers tried until one decides.
//! model label (exact, then fuzzy repair) → keyword groups → general/inquiry
//! category → first category. The last tier always decides, so
//! classification is total even with the model unreachable.

pub mod categories;
pub mod engine;
pub mod prompt;
pub mod repair;
pub mod tiers;

pub use categories::InMemoryCategories;
pub use engine::{ClassificationEngine, Decision};
pub use tiers::{ClassificationTier, TierOutcome};
