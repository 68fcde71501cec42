//! Raw commit type as retrieved from the commit source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author or committer identity attached to a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Display name.
    pub name: String,

    /// Email address.
    pub email: String,

    /// Timestamp of the action.
    pub date: DateTime<Utc>,
}

/// A commit as retrieved from the commit source, before parsing.
///
/// Raw commits are immutable once produced: the core reads `comment` but
/// never rewrites it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCommit {
    /// The commit id (SHA).
    pub commit_id: String,

    /// The free-text commit comment.
    pub comment: String,

    /// The commit author, when the host supplies one.
    #[serde(default)]
    pub author: Option<Signature>,

    /// The committer, when the host supplies one.
    #[serde(default)]
    pub committer: Option<Signature>,

    /// API URL of the commit.
    #[serde(default)]
    pub url: Option<String>,

    /// Web URL of the commit.
    #[serde(default)]
    pub remote_url: Option<String>,
}

impl RawCommit {
    /// Creates a new raw commit with no author or URL metadata.
    #[must_use]
    pub fn new(commit_id: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            commit_id: commit_id.into(),
            comment: comment.into(),
            author: None,
            committer: None,
            url: None,
            remote_url: None,
        }
    }

    /// Returns the short commit id (first 8 characters).
    #[must_use]
    pub fn short_id(&self) -> &str {
        &self.commit_id[..8.min(self.commit_id.len())]
    }
}
