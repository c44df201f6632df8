#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod content;
pub mod directory;
pub mod extract;
pub mod family;
pub mod render;
pub mod report;
pub mod runner;
pub mod summary;

pub use config::{ConfigError, OverviewConfig};
pub use content::{ContentError, ContentFetcher, FetchOutcome};
pub use directory::{DirectoryError, RepoMetadata, RepositoryDirectory, RepositoryRef};
pub use extract::{extract_dedicated, extract_embedded, ExtractError};
pub use family::{family_key, section_for_family, FAMILY_SECTIONS};
pub use render::{create_handlebars_registry, RenderError, ReportRenderer};
pub use report::{AddonRecord, OverviewReport, TestsuiteStatus};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::{RunSummary, SkipRecord};
