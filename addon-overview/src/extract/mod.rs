//! Metadata extraction strategies.
//!
//! Two divergent strategies produce [`AddonRecord`](crate::report::AddonRecord)s:
//!
//! - [`extract_dedicated`] for repositories whose entire content is a single
//!   addon (repository name contains a "." or is a configured exception),
//! - [`extract_embedded`] for repositories hosting several addons'
//!   documentation pages among unrelated content.

mod dedicated;
mod description;
mod embedded;
mod error;

pub use dedicated::extract_dedicated;
pub use description::{compose_description, description_from_html, description_from_python};
pub use embedded::extract_embedded;
pub use error::ExtractError;

use crate::directory::RepositoryRef;

/// Synthesizes the source-tree homepage URL used when a repository has no
/// homepage configured.
///
/// `subpath` is the addon's path inside the repository: the bare addon name
/// for dedicated repositories, or the addons-subdirectory prefix plus the
/// addon name for embedded repositories.
fn source_tree_url(repo: &RepositoryRef, branch: &str, subpath: &str) -> String {
    format!("https://github.com/{}/tree/{branch}/{subpath}", repo.full_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_url_for_dedicated_repo() {
        let repo = RepositoryRef::new("mundialis", "r.example");
        assert_eq!(
            source_tree_url(&repo, "main", "r.example"),
            "https://github.com/mundialis/r.example/tree/main/r.example"
        );
    }

    #[test]
    fn fallback_url_for_embedded_addon_keeps_subdir_prefix() {
        let repo = RepositoryRef::new("mundialis", "openeo-addons");
        assert_eq!(
            source_tree_url(&repo, "main", "grass-gis-addons/r.x"),
            "https://github.com/mundialis/openeo-addons/tree/main/grass-gis-addons/r.x"
        );
    }

    #[test]
    fn fallback_url_uses_configured_branch() {
        let repo = RepositoryRef::new("mundialis", "v.example");
        assert_eq!(
            source_tree_url(&repo, "develop", "v.example"),
            "https://github.com/mundialis/v.example/tree/develop/v.example"
        );
    }
}
