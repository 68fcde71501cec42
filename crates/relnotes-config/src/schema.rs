//! Configuration schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Document title.
    #[serde(default = "default_title")]
    pub title: String,

    /// Release notes file destination.
    #[serde(default = "default_file")]
    pub file: String,

    /// Concatenate pre-existing file content after the generated document.
    #[serde(default)]
    pub append: bool,

    /// Base URL for issue links; issue links are omitted when unset.
    #[serde(default)]
    pub issue_link_base_url: Option<String>,

    /// Base URL for pull request links; PR links are omitted when unset.
    #[serde(default)]
    pub pull_request_link_base_url: Option<String>,

    /// Default branch for releases that do not name one.
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Commit source configuration.
    #[serde(default)]
    pub source: SourceConfig,

    /// Section definitions in the order they should appear; empty means the
    /// built-in defaults.
    #[serde(default)]
    pub sections: Vec<SectionConfig>,

    /// Release windows, in document order. At least one is required.
    #[serde(default)]
    pub releases: Vec<ReleaseConfig>,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a blank title or file path, an
    /// empty release list, or a section without labels.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Invalid("title must not be blank".to_string()));
        }

        if self.file.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "file destination must not be blank".to_string(),
            ));
        }

        if self.releases.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one release is required".to_string(),
            ));
        }

        for section in &self.sections {
            if section.title.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "section title must not be blank".to_string(),
                ));
            }
            if section.labels.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "section {:?} must accept at least one label",
                    section.title
                )));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            file: default_file(),
            append: false,
            issue_link_base_url: None,
            pull_request_link_base_url: None,
            branch: default_branch(),
            source: SourceConfig::default(),
            sections: Vec::new(),
            releases: Vec::new(),
        }
    }
}

fn default_title() -> String {
    "Release Notes".to_string()
}

fn default_file() -> String {
    "RELEASENOTES.md".to_string()
}

fn default_branch() -> String {
    "master".to_string()
}

/// Commit source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Path of the JSON commit export.
    #[serde(default = "default_export")]
    pub export: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            export: default_export(),
        }
    }
}

fn default_export() -> String {
    "commits.json".to_string()
}

/// One section definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfig {
    /// Section title.
    pub title: String,

    /// Emoji shortcode rendered before the title.
    #[serde(default)]
    pub emoji: String,

    /// Accepted change-type labels, in order.
    #[serde(default)]
    pub labels: Vec<String>,
}

/// One release window definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseConfig {
    /// Release title.
    pub title: String,

    /// Window start.
    pub from_date: DateTime<Utc>,

    /// Window end.
    pub to_date: DateTime<Utc>,

    /// Branch name; falls back to the top-level branch when unset.
    #[serde(default)]
    pub branch: Option<String>,
}
