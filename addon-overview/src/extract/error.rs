//! Extraction error types.

use crate::content::ContentError;
use crate::directory::DirectoryError;
use thiserror::Error;

/// Errors that can occur during metadata extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Repository directory query failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// Raw content fetch failed.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// No recognized description marker was found in the fetched content.
    #[error("No description marker found for addon '{addon}' in '{path}'")]
    DescriptionNotFound { addon: String, path: String },
}
