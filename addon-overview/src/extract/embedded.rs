//! Extraction for embedded addon repositories.
//!
//! Embedded repositories host several addons' documentation pages among
//! unrelated content. Each addon lives in its own directory containing an
//! index page named after the directory (`{addon}/{addon}.html`), optionally
//! below a well-known addons subdirectory.

use super::description::{compose_description, description_from_html, description_from_python};
use super::ExtractError;
use crate::config::OverviewConfig;
use crate::content::{ContentFetcher, FetchOutcome};
use crate::directory::{RepositoryDirectory, RepositoryRef};
use crate::report::{AddonRecord, OverviewReport, TestsuiteStatus};
use crate::summary::RunSummary;
use tracing::{debug, info, info_span, warn, Instrument};

/// Extracts all addons of an embedded repository into the report.
///
/// Records are inserted as they are found; a record with an already-present
/// `(family, addon_name)` key overwrites the earlier one (last write wins),
/// which is logged and counted in the summary. Addons whose description
/// cannot be located are skipped with a summary entry instead of failing
/// the repository.
///
/// A repository with no addon documentation pages inserts nothing and
/// registers no family.
///
/// # Errors
///
/// Returns [`ExtractError`] if a directory query fails. The caller is
/// expected to skip the repository and continue.
pub async fn extract_embedded(
    directory: &RepositoryDirectory,
    fetcher: &ContentFetcher,
    config: &OverviewConfig,
    repo: &RepositoryRef,
    report: &mut OverviewReport,
    summary: &mut RunSummary,
) -> Result<(), ExtractError> {
    let span = info_span!("embedded", repo = %repo.full_name);

    async {
        let tree = directory.file_tree(repo, &config.branch).await?;
        let prefix = addons_dir_prefix(&tree, &config.addons_dir_candidates);
        let pages = candidate_pages(&tree, &prefix);

        if pages.is_empty() {
            debug!("No addon documentation pages found");
            return Ok(());
        }

        // Repository metadata and workflow status apply to every addon in
        // this repository; fetch them at most once.
        let metadata = directory.repo_metadata(repo).await?;
        let mut run_status: Option<TestsuiteStatus> = None;

        for page in &pages {
            let addon_name = page_addon_name(page);

            let addon_description =
                match fetch_addon_description(fetcher, config, repo, &prefix, page, addon_name)
                    .await
                {
                    Ok(description) => description,
                    Err(e) => {
                        warn!(addon = addon_name, error = %e, "Skipping addon");
                        summary.record_skip(addon_name, e.to_string());
                        continue;
                    }
                };

            let description =
                compose_description(metadata.description.as_deref(), &addon_description);

            let url = metadata.homepage_url.clone().unwrap_or_else(|| {
                super::source_tree_url(repo, &config.branch, &format!("{prefix}{addon_name}"))
            });

            let testsuite = if has_testsuite_dir(&tree, &prefix, page) {
                match &run_status {
                    Some(status) => status.clone(),
                    None => {
                        let status = match directory
                            .last_workflow_run(repo, &config.workflow_name, &config.branch)
                            .await?
                        {
                            Some(status) => TestsuiteStatus::Run(status),
                            None => TestsuiteStatus::Unknown,
                        };
                        run_status = Some(status.clone());
                        status
                    }
                }
            } else {
                TestsuiteStatus::Absent
            };

            let record = AddonRecord {
                url,
                description: Some(description),
                testsuite,
            };

            if report.insert(addon_name, record).is_some() {
                warn!(addon = addon_name, "Overwrote an earlier record for this addon");
                summary.records_overwritten += 1;
            }
            summary.addons_collected += 1;
        }

        info!(count = pages.len(), "Embedded extraction complete");
        Ok(())
    }
    .instrument(span)
    .await
}

/// Fetches the description for one addon.
///
/// Tries the Python source next to the documentation page first; a 404
/// falls back to the HTML page itself.
async fn fetch_addon_description(
    fetcher: &ContentFetcher,
    config: &OverviewConfig,
    repo: &RepositoryRef,
    prefix: &str,
    page: &str,
    addon_name: &str,
) -> Result<String, ExtractError> {
    let py_page = python_twin(page);
    let py_path = format!("{prefix}{py_page}");

    match fetcher.fetch_raw(repo, &config.branch, &py_path).await? {
        FetchOutcome::Found(source) => description_from_python(&source).ok_or_else(|| {
            ExtractError::DescriptionNotFound {
                addon: addon_name.to_string(),
                path: py_path,
            }
        }),
        FetchOutcome::NotFound => {
            let html_path = format!("{prefix}{page}");
            match fetcher.fetch_raw(repo, &config.branch, &html_path).await? {
                FetchOutcome::Found(content) => description_from_html(&content, addon_name)
                    .ok_or_else(|| ExtractError::DescriptionNotFound {
                        addon: addon_name.to_string(),
                        path: html_path,
                    }),
                FetchOutcome::NotFound => Err(ExtractError::DescriptionNotFound {
                    addon: addon_name.to_string(),
                    path: html_path,
                }),
            }
        }
    }
}

/// Determines the addons subdirectory prefix for a repository tree.
///
/// Returns the first configured candidate present in the tree as
/// `"{candidate}/"`, or an empty prefix when addons live at the repo root.
fn addons_dir_prefix(tree: &[String], candidates: &[String]) -> String {
    for candidate in candidates {
        let candidate_prefix = format!("{candidate}/");
        if tree
            .iter()
            .any(|path| path == candidate || path.starts_with(&candidate_prefix))
        {
            return candidate_prefix;
        }
    }
    String::new()
}

/// Collects addon index pages from a repository tree.
///
/// An index page is an ".html" path (relative to the addons subdirectory)
/// whose final segment names its own first directory segment:
/// `r.example/r.example.html` qualifies, `r.example/extra/notes.html` and
/// top-level `index.html` do not.
fn candidate_pages(tree: &[String], prefix: &str) -> Vec<String> {
    let mut pages = Vec::new();
    for path in tree {
        if !path.ends_with(".html") {
            continue;
        }
        let page = path.strip_prefix(prefix).unwrap_or(path);
        let first = page_addon_name(page);
        let last = page.rsplit('/').next().unwrap_or(page);
        if format!("{first}.html") == last {
            pages.push(page.to_string());
        }
    }
    pages
}

/// First path segment of a page, which is the addon name.
fn page_addon_name(page: &str) -> &str {
    page.split('/').next().unwrap_or(page)
}

/// Swaps the ".html" extension of a page path for ".py".
fn python_twin(page: &str) -> String {
    match page.strip_suffix(".html") {
        Some(stem) => format!("{stem}.py"),
        None => page.to_string(),
    }
}

/// Checks whether the addon's own directory contains a testsuite.
fn has_testsuite_dir(tree: &[String], prefix: &str, page: &str) -> bool {
    let Some((addon_dir, _)) = page.rsplit_once('/') else {
        return false;
    };
    let testsuite_dir = format!("{prefix}{addon_dir}/testsuite");
    let testsuite_prefix = format!("{testsuite_dir}/");
    tree.iter()
        .any(|path| path == &testsuite_dir || path.starts_with(&testsuite_prefix))
}
