//! Run summary types and helpers.

mod run_summary;
mod skip;

pub use run_summary::RunSummary;
pub use skip::SkipRecord;
