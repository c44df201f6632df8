//! Aggregated report types.
//!
//! The [`OverviewReport`] is the single accumulation structure for a run.
//! It is owned by the runner and passed by mutable reference into the
//! extractors, never held as ambient state.

mod overview;
mod record;

pub use overview::OverviewReport;
pub use record::{AddonRecord, TestsuiteStatus};
