//! Batch pipeline: fetch, parse, dedupe, classify, render.

use chrono::{DateTime, Utc};
use relnotes_commit::{ChangeType, CommitRecord, RawCommit};
use relnotes_source::{CommitSource, PullRequestSource};
use tracing::{debug, info};

use crate::render::{ClassifiedRelease, DocumentRenderer, RenderOptions};
use crate::{CoreResult, SectionList, comment, dedupe};

const SKIP_LABEL: &str = "skip";

/// One configured release window.
#[derive(Debug, Clone)]
pub struct ReleaseWindow {
    /// Release title.
    pub title: String,

    /// Window start.
    pub from_date: DateTime<Utc>,

    /// Window end.
    pub to_date: DateTime<Utc>,

    /// Branch name; falls back to the run's default branch when unset.
    pub branch: Option<String>,
}

/// Runs the release-notes pipeline over configured release windows.
///
/// Windows are processed strictly one after another; the only state crossing
/// window iterations is the output buffer. Any source or parse failure
/// propagates immediately and aborts the run.
pub struct Generator {
    commits: Box<dyn CommitSource>,
    pull_requests: Box<dyn PullRequestSource>,
    sections: SectionList,
    renderer: DocumentRenderer,
}

impl Generator {
    /// Creates a generator over the given sources.
    #[must_use]
    pub fn new(
        commits: Box<dyn CommitSource>,
        pull_requests: Box<dyn PullRequestSource>,
        sections: SectionList,
        options: RenderOptions,
    ) -> Self {
        Self {
            commits,
            pull_requests,
            sections,
            renderer: DocumentRenderer::new(options),
        }
    }

    /// Generates the full release-notes document.
    ///
    /// # Errors
    ///
    /// Returns an error on the first source failure or malformed merge
    /// commit; no partial document is produced.
    pub fn generate(
        &self,
        title: &str,
        default_branch: &str,
        windows: &[ReleaseWindow],
    ) -> CoreResult<String> {
        let mut releases = Vec::new();

        for window in windows {
            let branch = window.branch.as_deref().unwrap_or(default_branch);
            let records = self.collect_records(window, branch)?;
            let sections = self.sections.collate(records);

            releases.push(ClassifiedRelease {
                title: window.title.clone(),
                sections,
            });
        }

        Ok(self.renderer.render(title, &releases))
    }

    /// Fetches and parses one window's commits into deduplicated records.
    fn collect_records(
        &self,
        window: &ReleaseWindow,
        branch: &str,
    ) -> CoreResult<Vec<CommitRecord>> {
        let commits = self
            .commits
            .commits_in_period(window.from_date, window.to_date, branch)?;

        info!(
            release = %window.title,
            branch,
            count = commits.len(),
            "fetched commits for release window"
        );

        let commits = prefer_merge_commits(commits);

        let mut records = Vec::new();
        for commit in &commits {
            if let Some(record) = self.record_for(commit)? {
                records.push(record);
            }
        }

        let before = records.len();
        let records = dedupe(records);
        debug!(
            release = %window.title,
            records = records.len(),
            duplicates = before - records.len(),
            "parsed commit records"
        );

        Ok(records)
    }

    /// Builds the record for one commit, or `None` when the commit is
    /// skip-marked.
    fn record_for(&self, commit: &RawCommit) -> CoreResult<Option<CommitRecord>> {
        let comment = &commit.comment;
        let pull_request_id = comment::pull_request_id(comment)?;

        let labels = if pull_request_id == CommitRecord::NO_PULL_REQUEST {
            Vec::new()
        } else {
            self.pull_requests.labels(pull_request_id)?
        };

        if has_skip_label(&labels) || comment::has_skip_marker(comment) {
            debug!(commit = commit.short_id(), "skip marker, excluding commit");
            return Ok(None);
        }

        let change_type = resolve_change_type(&labels, comment);
        if change_type.is_none() {
            info!(
                commit = commit.short_id(),
                "no resolvable change type, commit will not be rendered"
            );
        }

        let description = if pull_request_id == CommitRecord::NO_PULL_REQUEST {
            None
        } else {
            Some(self.pull_requests.description(pull_request_id)?)
        };

        Ok(Some(
            CommitRecord::builder(commit.clone())
                .pull_request_id(pull_request_id)
                .change_type(change_type)
                .issue_code(comment::issue_code(comment))
                .component(comment::component(comment))
                .message(comment::message(comment))
                .breaking_change(comment::breaking_change(description.as_deref()))
                .build(),
        ))
    }
}

/// When a window contains pull request merge commits, only those are used;
/// otherwise every fetched commit is.
fn prefer_merge_commits(commits: Vec<RawCommit>) -> Vec<RawCommit> {
    let merged: Vec<RawCommit> = commits
        .iter()
        .filter(|commit| comment::is_merge_commit(&commit.comment))
        .cloned()
        .collect();

    if merged.is_empty() { commits } else { merged }
}

/// Resolves the change type from pull request labels first, then from the
/// comment body.
fn resolve_change_type(labels: &[String], comment: &str) -> Option<ChangeType> {
    labels
        .iter()
        .find_map(|label| ChangeType::safe_lookup(label))
        .or_else(|| comment::change_type(comment))
}

/// Returns true when any label is the skip label, case-insensitively.
fn has_skip_label(labels: &[String]) -> bool {
    labels
        .iter()
        .any(|label| label.eq_ignore_ascii_case(SKIP_LABEL))
}
