//! # triage-session
//!
//! Per-session aggregation over completed training cycles. Pure in-memory
//! accounting; persistence happens only through an explicit
//! [`SessionStats::save_snapshot`].

pub mod record;
pub mod snapshot;
pub mod stats;
pub mod trend;

pub use record::CycleRecord;
pub use snapshot::{default_snapshot_filename, StatsSnapshot};
pub use stats::SessionStats;
pub use trend::Trend;
