//! Run summary types.

use super::skip::SkipRecord;

/// Summary of a complete overview generation run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories returned by discovery.
    pub repositories_discovered: usize,

    /// Number of repositories partitioned as dedicated addon repositories.
    pub dedicated_repos: usize,

    /// Number of repositories partitioned as embedded addon repositories.
    pub embedded_repos: usize,

    /// Number of addon records collected into the report.
    pub addons_collected: usize,

    /// Number of records that replaced an earlier record with the same key.
    pub records_overwritten: usize,

    /// Repositories and addons that were skipped, with reasons.
    pub skipped: Vec<SkipRecord>,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a skipped repository or addon.
    pub fn record_skip(&mut self, subject: impl Into<String>, reason: impl Into<String>) {
        self.skipped.push(SkipRecord {
            subject: subject.into(),
            reason: reason.into(),
        });
    }

    /// Returns true if anything was skipped during the run.
    #[must_use]
    pub fn has_skips(&self) -> bool {
        !self.skipped.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_record_skips() {
        let mut summary = RunSummary::new();
        assert!(!summary.has_skips());

        summary.record_skip("mundialis/broken-repo", "tree unavailable");
        summary.record_skip("r.example", "no description marker");

        assert!(summary.has_skips());
        assert_eq!(summary.skipped.len(), 2);
        assert_eq!(summary.skipped[0].subject, "mundialis/broken-repo");
        assert_eq!(summary.skipped[1].reason, "no description marker");
    }
}
