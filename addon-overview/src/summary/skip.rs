//! Skip record types.

/// A repository or addon that was left out of the report, with the reason.
#[derive(Debug, Clone)]
pub struct SkipRecord {
    /// What was skipped, e.g. "mundialis/some-repo" or "r.example".
    pub subject: String,

    /// Why it was skipped.
    pub reason: String,
}
