//! Extraction for dedicated addon repositories.

use super::ExtractError;
use crate::config::OverviewConfig;
use crate::directory::{RepositoryDirectory, RepositoryRef};
use crate::report::{AddonRecord, TestsuiteStatus};
use tracing::{debug, info_span, Instrument};

/// Extracts the single addon of a dedicated repository.
///
/// The addon name is the repository name. The homepage falls back to a
/// synthesized source-tree URL when the repository has none configured.
/// The test status always comes from the latest workflow run; the presence
/// of a `testsuite` directory in the tree is checked but never overrides
/// the workflow result.
///
/// # Errors
///
/// Returns [`ExtractError`] if a directory query fails. The caller is
/// expected to skip the repository and continue.
pub async fn extract_dedicated(
    directory: &RepositoryDirectory,
    config: &OverviewConfig,
    repo: &RepositoryRef,
) -> Result<(String, AddonRecord), ExtractError> {
    let span = info_span!("dedicated", repo = %repo.full_name);

    async {
        let addon_name = repo.name.clone();

        let metadata = directory.repo_metadata(repo).await?;
        let url = metadata
            .homepage_url
            .unwrap_or_else(|| super::source_tree_url(repo, &config.branch, &addon_name));

        let tree = directory.file_tree(repo, &config.branch).await?;
        let has_testsuite_dir = tree.iter().any(|path| path == "testsuite");
        debug!(has_testsuite_dir, "Checked testsuite directory presence");

        // The workflow result takes precedence over directory presence.
        let testsuite = match directory
            .last_workflow_run(repo, &config.workflow_name, &config.branch)
            .await?
        {
            Some(status) => TestsuiteStatus::Run(status),
            None => TestsuiteStatus::Unknown,
        };

        Ok((
            addon_name,
            AddonRecord {
                url,
                description: metadata.description,
                testsuite,
            },
        ))
    }
    .instrument(span)
    .await
}
