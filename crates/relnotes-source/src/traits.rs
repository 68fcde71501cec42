//! Collaborator contracts consumed by the core pipeline.

use chrono::{DateTime, Utc};
use relnotes_commit::RawCommit;

use crate::SourceResult;

/// Supplies raw commits for a release window.
pub trait CommitSource {
    /// Returns the commits on `branch` between `from` and `to`, inclusive,
    /// in the order the host reports them.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source fails; the pipeline
    /// propagates it unmodified and aborts the run.
    fn commits_in_period(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        branch: &str,
    ) -> SourceResult<Vec<RawCommit>>;
}

/// Supplies pull request metadata on demand, keyed by PR id.
pub trait PullRequestSource {
    /// Returns the label names of the given pull request, in the order the
    /// host supplies them.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source fails.
    fn labels(&self, pull_request_id: i32) -> SourceResult<Vec<String>>;

    /// Returns the free-text description of the given pull request.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source fails.
    fn description(&self, pull_request_id: i32) -> SourceResult<String>;
}
