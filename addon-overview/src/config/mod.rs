//! Overview configuration.
//!
//! This module handles loading and validating the `overview.toml` file that
//! describes which organization and repositories to scan.

mod error;

pub use error::ConfigError;

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Configuration for an overview generation run.
///
/// Every field has a default matching the mundialis GRASS GIS addons setup,
/// so an empty or missing config file yields a usable configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct OverviewConfig {
    /// GitHub organization to scan.
    pub owner: String,

    /// Repository topic that marks addon repositories.
    pub topic: String,

    /// Maximum number of repositories to discover.
    pub repo_limit: usize,

    /// Branch to read trees, raw content and workflow runs from.
    pub branch: String,

    /// Name of the workflow whose latest run provides the test status.
    pub workflow_name: String,

    /// Repositories carrying the topic but containing no addons at all.
    pub no_addon_repos: Vec<String>,

    /// Repositories without a "." in their name that are still dedicated
    /// addon repositories (e.g. "mundialis/d_rast_multi").
    pub multi_addon_repos: Vec<String>,

    /// Candidate subdirectories holding addons inside embedded repositories,
    /// checked in order; the first one present in the tree wins.
    pub addons_dir_candidates: Vec<String>,

    /// Base URL for raw file content.
    pub raw_host: String,
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self {
            owner: "mundialis".to_string(),
            topic: "grass-gis-addons".to_string(),
            repo_limit: 100,
            branch: "main".to_string(),
            workflow_name: "Run tests for GRASS GIS addons".to_string(),
            no_addon_repos: vec!["mundialis/grass-gis-helpers".to_string()],
            multi_addon_repos: vec!["mundialis/d_rast_multi".to_string()],
            addons_dir_candidates: vec![
                "grass-gis-addons".to_string(),
                "grass_addons".to_string(),
            ],
            raw_host: "https://raw.githubusercontent.com".to_string(),
        }
    }
}

impl OverviewConfig {
    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, parsed or
    /// validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading overview config");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file, falling back to defaults when the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an existing file cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            info!(path = %path.display(), "No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for empty required fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.owner.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "owner must not be empty".to_string(),
            });
        }
        if self.topic.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "topic must not be empty".to_string(),
            });
        }
        if self.branch.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "branch must not be empty".to_string(),
            });
        }
        if self.repo_limit == 0 {
            return Err(ConfigError::ValidationError {
                message: "repo-limit must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_valid() {
        let config = OverviewConfig::default();
        config.validate().unwrap();
        assert_eq!(config.owner, "mundialis");
        assert_eq!(config.topic, "grass-gis-addons");
        assert_eq!(config.branch, "main");
        assert_eq!(
            config.addons_dir_candidates,
            vec!["grass-gis-addons", "grass_addons"]
        );
    }

    #[test]
    fn can_load_config_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("overview.toml");
        fs::write(
            &path,
            r#"
owner = "someorg"
topic = "plugins"
repo-limit = 50
no-addon-repos = ["someorg/helpers"]
"#,
        )
        .unwrap();

        let config = OverviewConfig::load(&path).unwrap();
        assert_eq!(config.owner, "someorg");
        assert_eq!(config.topic, "plugins");
        assert_eq!(config.repo_limit, 50);
        assert_eq!(config.no_addon_repos, vec!["someorg/helpers"]);
        // Unset fields keep their defaults.
        assert_eq!(config.branch, "main");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let config = OverviewConfig::load_or_default(&temp.path().join("nope.toml")).unwrap();
        assert_eq!(config.owner, "mundialis");
    }

    #[test]
    fn rejects_empty_owner() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("overview.toml");
        fs::write(&path, "owner = \"\"\n").unwrap();

        let result = OverviewConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn rejects_unknown_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("overview.toml");
        fs::write(&path, "unknown-key = true\n").unwrap();

        let result = OverviewConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }
}
