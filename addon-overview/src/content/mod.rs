//! Raw content fetcher.
//!
//! Fetches raw files from the raw-content host. A 404 is a first-class
//! outcome here, not an error: the embedded extractor uses it to fall back
//! from the Python source convention to the legacy HTML convention.

mod error;

pub use error::ContentError;

use crate::directory::RepositoryRef;
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

/// Outcome of a raw content fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The file exists; its decoded content.
    Found(String),

    /// The file does not exist at the given path.
    NotFound,
}

/// Client for fetching raw file content from repositories.
pub struct ContentFetcher {
    client: reqwest::Client,
    base: Url,
}

impl ContentFetcher {
    /// Creates a fetcher for the given raw-content host,
    /// e.g. `https://raw.githubusercontent.com`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidUrl`] if the host is not a valid URL.
    pub fn new(raw_host: &str) -> Result<Self, ContentError> {
        let base = Url::parse(raw_host).map_err(|source| ContentError::InvalidUrl {
            url: raw_host.to_string(),
            source,
        })?;
        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }

    /// Fetches the raw content of `path` in `repo` at `branch`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] on transport failures or non-404 HTTP
    /// errors. A 404 is returned as [`FetchOutcome::NotFound`].
    pub async fn fetch_raw(
        &self,
        repo: &RepositoryRef,
        branch: &str,
        path: &str,
    ) -> Result<FetchOutcome, ContentError> {
        let url = raw_url(&self.base, repo, branch, path)?;
        debug!(url = %url, "Fetching raw content");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| ContentError::Http {
                url: url.to_string(),
                source,
            })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(FetchOutcome::NotFound);
        }

        let response = response
            .error_for_status()
            .map_err(|source| ContentError::Http {
                url: url.to_string(),
                source,
            })?;

        let body = response
            .text()
            .await
            .map_err(|source| ContentError::Http {
                url: url.to_string(),
                source,
            })?;

        Ok(FetchOutcome::Found(body))
    }
}

/// Builds the raw content URL: `{base}/{owner}/{repo}/{branch}/{path}`.
fn raw_url(
    base: &Url,
    repo: &RepositoryRef,
    branch: &str,
    path: &str,
) -> Result<Url, ContentError> {
    let joined = format!("{}/{branch}/{path}", repo.full_name);
    base.join(&joined).map_err(|source| ContentError::InvalidUrl {
        url: format!("{base}{joined}"),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_url_follows_host_pattern() {
        let base = Url::parse("https://raw.githubusercontent.com").unwrap();
        let repo = RepositoryRef::new("mundialis", "openeo-addons");
        let url = raw_url(&base, &repo, "main", "grass-gis-addons/r.example/r.example.py").unwrap();
        assert_eq!(
            url.as_str(),
            "https://raw.githubusercontent.com/mundialis/openeo-addons/main/grass-gis-addons/r.example/r.example.py"
        );
    }

    #[test]
    fn invalid_host_is_rejected() {
        let result = ContentFetcher::new("not a url");
        assert!(matches!(result, Err(ContentError::InvalidUrl { .. })));
    }
}
