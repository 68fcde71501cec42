//! File-backed source reading a JSON export of host payloads.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use relnotes_commit::{PullRequestMeta, RawCommit};
use serde::Deserialize;
use tracing::debug;

use crate::{CommitSource, PullRequestSource, SourceError, SourceResult};

/// Shape of the export file: the host's commit and pull request payloads,
/// camelCase field names as delivered over the wire.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportPayload {
    #[serde(default)]
    commits: Vec<RawCommit>,

    #[serde(default)]
    pull_requests: Vec<PullRequestMeta>,
}

/// A [`CommitSource`] and [`PullRequestSource`] backed by one JSON export
/// file.
///
/// The export is assumed to be already scoped to the branch the host query
/// ran against; the branch argument is accepted for the contract but not
/// used for filtering. Unknown pull request ids yield empty labels and an
/// empty description, so a partial export degrades instead of failing.
#[derive(Debug, Clone)]
pub struct ExportSource {
    commits: Vec<RawCommit>,
    pull_requests: HashMap<i32, PullRequestMeta>,
}

impl ExportSource {
    /// Loads an export from the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or not a valid
    /// export payload.
    pub fn from_file(path: impl AsRef<Path>) -> SourceResult<Self> {
        let path = path.as_ref();
        debug!(?path, "loading commit export");

        if !path.exists() {
            return Err(SourceError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses an export from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not valid export JSON.
    pub fn from_json(content: &str) -> SourceResult<Self> {
        let payload: ExportPayload = serde_json::from_str(content)?;

        let pull_requests = payload
            .pull_requests
            .into_iter()
            .map(|pr| (pr.id, pr))
            .collect();

        Ok(Self {
            commits: payload.commits,
            pull_requests,
        })
    }

    /// Returns true when a commit falls inside the window.
    ///
    /// The committer date wins over the author date; a commit carrying
    /// neither cannot be placed and is included as-is.
    fn in_window(commit: &RawCommit, from: DateTime<Utc>, to: DateTime<Utc>) -> bool {
        let date = commit
            .committer
            .as_ref()
            .or(commit.author.as_ref())
            .map(|sig| sig.date);

        match date {
            Some(date) => from <= date && date <= to,
            None => true,
        }
    }
}

impl CommitSource for ExportSource {
    fn commits_in_period(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        branch: &str,
    ) -> SourceResult<Vec<RawCommit>> {
        debug!(%from, %to, branch, "selecting commits from export");

        Ok(self
            .commits
            .iter()
            .filter(|commit| Self::in_window(commit, from, to))
            .cloned()
            .collect())
    }
}

impl PullRequestSource for ExportSource {
    fn labels(&self, pull_request_id: i32) -> SourceResult<Vec<String>> {
        Ok(self
            .pull_requests
            .get(&pull_request_id)
            .map(|pr| pr.labels.clone())
            .unwrap_or_default())
    }

    fn description(&self, pull_request_id: i32) -> SourceResult<String> {
        Ok(self
            .pull_requests
            .get(&pull_request_id)
            .map(|pr| pr.description.clone())
            .unwrap_or_default())
    }
}
