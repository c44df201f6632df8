//! Per-addon record types.

use serde::{Serialize, Serializer};

/// Test-suite status of an addon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestsuiteStatus {
    /// No testsuite directory exists for the addon.
    Absent,

    /// A testsuite exists but no workflow run matched the tracked branch.
    Unknown,

    /// Status of the most recent workflow run on the tracked branch,
    /// e.g. "success" or "failure".
    Run(String),
}

impl TestsuiteStatus {
    /// Returns the display string used in the rendered overview.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Absent => "no",
            Self::Unknown => "unknown",
            Self::Run(status) => status,
        }
    }
}

impl Serialize for TestsuiteStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Metadata collected for a single addon.
#[derive(Debug, Clone, Serialize)]
pub struct AddonRecord {
    /// Homepage URL, or a synthesized source-tree URL when no homepage is set.
    pub url: String,

    /// Addon description; absent when the repository has none.
    pub description: Option<String>,

    /// Test-suite status.
    pub testsuite: TestsuiteStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testsuite_status_display_strings() {
        assert_eq!(TestsuiteStatus::Absent.as_str(), "no");
        assert_eq!(TestsuiteStatus::Unknown.as_str(), "unknown");
        assert_eq!(TestsuiteStatus::Run("success".to_string()).as_str(), "success");
    }

    #[test]
    fn testsuite_status_serializes_as_string() {
        let json = serde_json::to_string(&TestsuiteStatus::Run("failure".to_string())).unwrap();
        assert_eq!(json, "\"failure\"");

        let json = serde_json::to_string(&TestsuiteStatus::Absent).unwrap();
        assert_eq!(json, "\"no\"");
    }
}
