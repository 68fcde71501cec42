//! Pull request metadata as supplied by the pull request source.

use serde::{Deserialize, Serialize};

/// Metadata for one pull request, keyed by its numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestMeta {
    /// The numeric pull request id.
    pub id: i32,

    /// Host-side status (e.g. "completed").
    #[serde(default)]
    pub status: String,

    /// Pull request title.
    #[serde(default)]
    pub title: String,

    /// Free-text description; may carry a breaking-change marker.
    #[serde(default)]
    pub description: String,

    /// Label names, in the order the host supplies them.
    #[serde(default)]
    pub labels: Vec<String>,
}

impl PullRequestMeta {
    /// Creates pull request metadata with empty status, title and labels.
    #[must_use]
    pub fn new(id: i32, description: impl Into<String>) -> Self {
        Self {
            id,
            status: String::new(),
            title: String::new(),
            description: description.into(),
            labels: Vec::new(),
        }
    }

    /// Replaces the label set.
    #[must_use]
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }
}
