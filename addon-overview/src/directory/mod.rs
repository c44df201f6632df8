//! Repository directory client.
//!
//! Wraps the GitHub API behind the four queries the aggregation pipeline
//! needs: topic-scoped repository discovery, repository metadata, recursive
//! file trees and workflow-run status.

mod error;
mod repository;

pub use error::DirectoryError;
pub use repository::{RepoMetadata, RepositoryRef};

use octocrab::Octocrab;
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Results per page for repository search.
const RESULTS_PER_PAGE: u8 = 100;

/// Client for repository discovery and per-repository queries.
pub struct RepositoryDirectory {
    octocrab: Octocrab,
}

impl RepositoryDirectory {
    /// Creates a directory client from an authenticated GitHub client.
    #[must_use]
    pub fn new(octocrab: Octocrab) -> Self {
        Self { octocrab }
    }

    /// Lists public repositories of `owner` carrying `topic`.
    ///
    /// Results are capped at `limit`. An empty result is valid and means
    /// the organization has no matching repositories.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Unavailable`] if the search fails.
    pub async fn list_repositories(
        &self,
        owner: &str,
        topic: &str,
        limit: usize,
    ) -> Result<Vec<RepositoryRef>, DirectoryError> {
        let query = format!("org:{owner} topic:{topic} is:public");
        debug!(query = %query, "Executing repository search");

        let mut repositories = Vec::new();
        let mut page = self
            .octocrab
            .search()
            .repositories(&query)
            .per_page(RESULTS_PER_PAGE)
            .send()
            .await?;

        extract_repositories(&page.items, &mut repositories);

        while repositories.len() < limit {
            let Some(next_page) = self
                .octocrab
                .get_page::<octocrab::models::Repository>(&page.next)
                .await?
            else {
                break;
            };
            extract_repositories(&next_page.items, &mut repositories);
            page.next = next_page.next;
        }

        repositories.truncate(limit);
        info!(count = repositories.len(), "Repository discovery complete");
        Ok(repositories)
    }

    /// Fetches homepage URL and description for a repository.
    ///
    /// Missing homepage or description is expected and yields `None` fields.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Unavailable`] if the API call fails.
    pub async fn repo_metadata(&self, repo: &RepositoryRef) -> Result<RepoMetadata, DirectoryError> {
        let info = self.octocrab.repos(&repo.owner, &repo.name).get().await?;
        Ok(RepoMetadata {
            homepage_url: info.homepage.filter(|url| !url.is_empty()),
            description: info.description.filter(|desc| !desc.is_empty()),
        })
    }

    /// Lists the flat recursive file tree of a repository at `branch`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::TreeUnavailable`] if the branch does not
    /// exist or the API call fails.
    pub async fn file_tree(
        &self,
        repo: &RepositoryRef,
        branch: &str,
    ) -> Result<Vec<String>, DirectoryError> {
        let route = format!("/repos/{}/git/trees/{branch}?recursive=true", repo.full_name);
        let tree: GitTree = self.octocrab.get(route, None::<&()>).await.map_err(|source| {
            DirectoryError::TreeUnavailable {
                repo: repo.full_name.clone(),
                branch: branch.to_string(),
                source,
            }
        })?;

        if tree.truncated {
            warn!(repo = %repo.full_name, "File tree was truncated by the API");
        }

        Ok(tree.tree.into_iter().map(|entry| entry.path).collect())
    }

    /// Returns the status of the most recent run of `workflow_name` on
    /// `branch`, preferring the conclusion ("success", "failure", ...) over
    /// the raw status.
    ///
    /// `None` means no run of that workflow has happened on the branch; the
    /// caller decides how to surface the absence.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Unavailable`] if the API call fails.
    pub async fn last_workflow_run(
        &self,
        repo: &RepositoryRef,
        workflow_name: &str,
        branch: &str,
    ) -> Result<Option<String>, DirectoryError> {
        let route = format!(
            "/repos/{}/actions/runs?branch={branch}&per_page=100",
            repo.full_name
        );
        let runs: WorkflowRuns = self.octocrab.get(route, None::<&()>).await?;
        Ok(select_run(&runs.workflow_runs, workflow_name, branch))
    }
}

/// Converts search results into repository references.
fn extract_repositories(items: &[octocrab::models::Repository], out: &mut Vec<RepositoryRef>) {
    for item in items {
        let Some(owner) = item.owner.as_ref() else {
            warn!(repo = %item.name, "Search result without owner, skipping");
            continue;
        };
        out.push(RepositoryRef::new(owner.login.clone(), item.name.clone()));
    }
}

/// Picks the most recent run of `workflow_name` with an exact branch match.
///
/// Runs are returned newest-first by the API, so the first match wins. The
/// branch comparison is strict equality, never a substring match.
fn select_run(runs: &[WorkflowRun], workflow_name: &str, branch: &str) -> Option<String> {
    runs.iter()
        .find(|run| {
            run.name.as_deref() == Some(workflow_name)
                && run.head_branch.as_deref() == Some(branch)
        })
        .map(|run| {
            run.conclusion
                .clone()
                .unwrap_or_else(|| run.status.clone())
        })
}

/// Git tree API response.
#[derive(Debug, Deserialize)]
struct GitTree {
    #[serde(default)]
    tree: Vec<GitTreeEntry>,
    #[serde(default)]
    truncated: bool,
}

/// A single entry in a git tree listing.
#[derive(Debug, Deserialize)]
struct GitTreeEntry {
    path: String,
}

/// Workflow runs API response.
#[derive(Debug, Deserialize)]
struct WorkflowRuns {
    #[serde(default)]
    workflow_runs: Vec<WorkflowRun>,
}

/// A recorded workflow run.
#[derive(Debug, Deserialize)]
struct WorkflowRun {
    name: Option<String>,
    head_branch: Option<String>,
    status: String,
    conclusion: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(name: &str, branch: &str, status: &str, conclusion: Option<&str>) -> WorkflowRun {
        WorkflowRun {
            name: Some(name.to_string()),
            head_branch: Some(branch.to_string()),
            status: status.to_string(),
            conclusion: conclusion.map(ToString::to_string),
        }
    }

    #[test]
    fn select_run_takes_first_matching_run() {
        let runs = vec![
            run("Run tests", "main", "completed", Some("failure")),
            run("Run tests", "main", "completed", Some("success")),
        ];
        assert_eq!(
            select_run(&runs, "Run tests", "main"),
            Some("failure".to_string())
        );
    }

    #[test]
    fn select_run_requires_exact_branch_equality() {
        // "maintenance" contains "main" but must not match.
        let runs = vec![run("Run tests", "maintenance", "completed", Some("success"))];
        assert_eq!(select_run(&runs, "Run tests", "main"), None);
    }

    #[test]
    fn select_run_ignores_other_workflows() {
        let runs = vec![
            run("Lint", "main", "completed", Some("success")),
            run("Run tests", "main", "completed", Some("failure")),
        ];
        assert_eq!(
            select_run(&runs, "Run tests", "main"),
            Some("failure".to_string())
        );
    }

    #[test]
    fn select_run_falls_back_to_status_without_conclusion() {
        let runs = vec![run("Run tests", "main", "in_progress", None)];
        assert_eq!(
            select_run(&runs, "Run tests", "main"),
            Some("in_progress".to_string())
        );
    }

    #[test]
    fn select_run_empty_history_is_none() {
        assert_eq!(select_run(&[], "Run tests", "main"), None);
    }

    #[test]
    fn git_tree_deserializes_paths() {
        let json = r#"{
            "sha": "abc",
            "tree": [
                {"path": "r.example", "type": "tree"},
                {"path": "r.example/r.example.py", "type": "blob"}
            ],
            "truncated": false
        }"#;
        let tree: GitTree = serde_json::from_str(json).unwrap();
        let paths: Vec<String> = tree.tree.into_iter().map(|e| e.path).collect();
        assert_eq!(paths, vec!["r.example", "r.example/r.example.py"]);
    }
}
