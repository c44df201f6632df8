//! Repository directory error types.

use thiserror::Error;

/// Errors that can occur while talking to the repository directory service.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The directory service failed or returned malformed data.
    #[error("GitHub API error: {0}")]
    Unavailable(#[from] octocrab::Error),

    /// The file tree for a repository could not be listed, e.g. because the
    /// branch does not exist.
    #[error("File tree of '{repo}' at branch '{branch}' unavailable: {source}")]
    TreeUnavailable {
        repo: String,
        branch: String,
        #[source]
        source: octocrab::Error,
    },
}
