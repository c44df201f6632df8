//! Content fetch error types.

use thiserror::Error;

/// Errors that can occur while fetching raw content.
///
/// A 404 is not represented here; it is a normal
/// [`FetchOutcome::NotFound`](super::FetchOutcome::NotFound).
#[derive(Debug, Error)]
pub enum ContentError {
    /// Transport failure or a non-404 HTTP error status.
    #[error("Fetching '{url}' failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The configured raw host or the composed URL is invalid.
    #[error("Invalid raw content URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
