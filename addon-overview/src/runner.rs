//! Orchestrates a full overview generation run.

use crate::config::{ConfigError, OverviewConfig};
use crate::content::{ContentError, ContentFetcher};
use crate::directory::{DirectoryError, RepositoryDirectory, RepositoryRef};
use crate::extract::{extract_dedicated, extract_embedded};
use crate::render::{RenderError, ReportRenderer};
use crate::report::OverviewReport;
use crate::summary::RunSummary;
use octocrab::Octocrab;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuration for running the overview generator.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// What to scan and how.
    overview: OverviewConfig,
    /// Optional GitHub token; anonymous access works for public data but
    /// hits much lower rate limits.
    token: Option<String>,
    /// Path to the HTML template.
    template_path: PathBuf,
    /// Path of the output file, overwritten on every run.
    output_path: PathBuf,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    #[must_use]
    pub fn new(overview: OverviewConfig, template_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            overview,
            token: None,
            template_path,
            output_path,
        }
    }

    /// Sets a GitHub token for authenticated API access.
    #[must_use]
    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    /// Returns the overview configuration.
    #[must_use]
    pub fn overview(&self) -> &OverviewConfig {
        &self.overview
    }

    /// Returns the configured GitHub token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the template file path.
    #[must_use]
    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    /// Returns the output file path.
    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

/// Errors that can occur while running the overview generator.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),
    /// Repository discovery errors; fatal since there is nothing to report
    /// without a repository list.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    /// Raw content client initialization errors.
    #[error(transparent)]
    Content(#[from] ContentError),
    /// Template rendering and output errors.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Orchestrates a full overview generation run.
pub struct Runner {
    config: RunnerConfig,
    directory: RepositoryDirectory,
    fetcher: ContentFetcher,
    renderer: ReportRenderer,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if a client cannot be constructed.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let mut builder = Octocrab::builder();
        if let Some(token) = config.token() {
            builder = builder.personal_token(token.to_string());
        }
        let octocrab = builder.build()?;
        let fetcher = ContentFetcher::new(&config.overview.raw_host)?;
        Ok(Self {
            config,
            directory: RepositoryDirectory::new(octocrab),
            fetcher,
            renderer: ReportRenderer::new(),
        })
    }

    /// Executes the full aggregation and rendering flow.
    ///
    /// Repositories are processed sequentially, dedicated repositories
    /// first, so embedded results overwrite dedicated ones on key
    /// collisions. Per-repository failures are recorded in the summary and
    /// never abort the run; the output is a best-effort report over every
    /// repository that succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] only for failures that leave nothing to
    /// report: discovery itself, or writing the output file.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new();
        let cfg = &self.config.overview;

        info!(owner = %cfg.owner, topic = %cfg.topic, "Listing repositories");
        let repositories = self
            .directory
            .list_repositories(&cfg.owner, &cfg.topic, cfg.repo_limit)
            .await?;
        summary.repositories_discovered = repositories.len();

        let (dedicated, embedded) = partition_repositories(&repositories, cfg);
        summary.dedicated_repos = dedicated.len();
        summary.embedded_repos = embedded.len();
        info!(
            dedicated = dedicated.len(),
            embedded = embedded.len(),
            "Partitioned repositories"
        );

        let mut report = OverviewReport::new();

        for repo in &dedicated {
            match extract_dedicated(&self.directory, cfg, repo).await {
                Ok((addon_name, record)) => {
                    if report.insert(&addon_name, record).is_some() {
                        warn!(addon = %addon_name, "Overwrote an earlier record for this addon");
                        summary.records_overwritten += 1;
                    }
                    summary.addons_collected += 1;
                }
                Err(e) => {
                    warn!(repo = %repo.full_name, error = %e, "Skipping repository");
                    summary.record_skip(&repo.full_name, e.to_string());
                }
            }
        }

        for repo in &embedded {
            if let Err(e) =
                extract_embedded(&self.directory, &self.fetcher, cfg, repo, &mut report, &mut summary)
                    .await
            {
                warn!(repo = %repo.full_name, error = %e, "Skipping repository");
                summary.record_skip(&repo.full_name, e.to_string());
            }
        }

        self.renderer.render_to_file(
            self.config.template_path(),
            self.config.output_path(),
            &report,
        )?;

        Ok(summary)
    }
}

/// Partitions discovered repositories into dedicated and embedded sets.
///
/// Dedicated: name contains "." or the repository is a configured
/// multi-addon exception. Embedded: everything else. Configured no-addon
/// repositories are dropped from both sets.
fn partition_repositories<'a>(
    repositories: &'a [RepositoryRef],
    config: &OverviewConfig,
) -> (Vec<&'a RepositoryRef>, Vec<&'a RepositoryRef>) {
    let mut dedicated = Vec::new();
    let mut embedded = Vec::new();

    for repo in repositories {
        if config.no_addon_repos.iter().any(|r| r == &repo.full_name) {
            continue;
        }
        if repo.name.contains('.')
            || config.multi_addon_repos.iter().any(|r| r == &repo.full_name)
        {
            dedicated.push(repo);
        } else {
            embedded.push(repo);
        }
    }

    (dedicated, embedded)
}
