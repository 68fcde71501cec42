//! Parsed commit record, the unit of classification and rendering.

use crate::{ChangeType, RawCommit};

/// A commit after parsing and type resolution.
///
/// Records are built once via [`CommitRecord::builder`] and never mutated.
/// Empty `issue_code`, `component` and `breaking_change` strings mean
/// "absent"; a `None` change type marks the record unclassifiable (it is
/// dropped at classification time, not an error).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Associated pull request id, or [`CommitRecord::NO_PULL_REQUEST`].
    pub pull_request_id: i32,

    /// Resolved change type, if any.
    pub change_type: Option<ChangeType>,

    /// Issue tracker reference, upper-cased; empty when absent.
    pub issue_code: String,

    /// Component/scope, lower-cased; empty when absent.
    pub component: String,

    /// Human message, trimmed and capitalized.
    pub message: String,

    /// Breaking-change text from the pull request description; empty when
    /// absent.
    pub breaking_change: String,

    /// The originating raw commit.
    pub commit: RawCommit,
}

impl CommitRecord {
    /// Sentinel id for "no associated pull request".
    pub const NO_PULL_REQUEST: i32 = -1;

    /// Creates a new record builder around the originating commit.
    #[must_use]
    pub fn builder(commit: RawCommit) -> CommitRecordBuilder {
        CommitRecordBuilder::new(commit)
    }

    /// Returns true if this record has an associated pull request.
    #[must_use]
    pub fn has_pull_request(&self) -> bool {
        self.pull_request_id != Self::NO_PULL_REQUEST
    }

    /// Returns true if this record carries an issue reference.
    #[must_use]
    pub fn has_issue(&self) -> bool {
        !self.issue_code.is_empty()
    }
}

/// Builder for [`CommitRecord`].
#[derive(Debug)]
pub struct CommitRecordBuilder {
    pull_request_id: i32,
    change_type: Option<ChangeType>,
    issue_code: String,
    component: String,
    message: String,
    breaking_change: String,
    commit: RawCommit,
}

impl CommitRecordBuilder {
    fn new(commit: RawCommit) -> Self {
        Self {
            pull_request_id: CommitRecord::NO_PULL_REQUEST,
            change_type: None,
            issue_code: String::new(),
            component: String::new(),
            message: String::new(),
            breaking_change: String::new(),
            commit,
        }
    }

    /// Sets the pull request id.
    #[must_use]
    pub fn pull_request_id(mut self, id: i32) -> Self {
        self.pull_request_id = id;
        self
    }

    /// Sets the change type.
    #[must_use]
    pub fn change_type(mut self, change_type: Option<ChangeType>) -> Self {
        self.change_type = change_type;
        self
    }

    /// Sets the issue code.
    #[must_use]
    pub fn issue_code(mut self, issue_code: impl Into<String>) -> Self {
        self.issue_code = issue_code.into();
        self
    }

    /// Sets the component.
    #[must_use]
    pub fn component(mut self, component: impl Into<String>) -> Self {
        self.component = component.into();
        self
    }

    /// Sets the message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the breaking-change text.
    #[must_use]
    pub fn breaking_change(mut self, text: impl Into<String>) -> Self {
        self.breaking_change = text.into();
        self
    }

    /// Builds the [`CommitRecord`].
    #[must_use]
    pub fn build(self) -> CommitRecord {
        CommitRecord {
            pull_request_id: self.pull_request_id,
            change_type: self.change_type,
            issue_code: self.issue_code,
            component: self.component,
            message: self.message,
            breaking_change: self.breaking_change,
            commit: self.commit,
        }
    }
}
