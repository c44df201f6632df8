//! Repository reference and metadata types.

use serde::Serialize;

/// A repository discovered in the scanned organization.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RepositoryRef {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,

    /// Full repository name in "owner/name" format.
    pub full_name: String,
}

impl RepositoryRef {
    /// Creates a reference from owner and name.
    #[must_use]
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        let owner = owner.into();
        let name = name.into();
        let full_name = format!("{owner}/{name}");
        Self {
            owner,
            name,
            full_name,
        }
    }
}

/// Repository-level metadata used for addon records.
///
/// Both fields are routinely absent on real repositories; absence is not
/// an error.
#[derive(Debug, Clone, Default)]
pub struct RepoMetadata {
    /// Configured homepage URL, e.g. a GitHub Pages site.
    pub homepage_url: Option<String>,

    /// Repository description.
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_is_owner_slash_name() {
        let repo = RepositoryRef::new("mundialis", "r.example");
        assert_eq!(repo.full_name, "mundialis/r.example");
    }
}
