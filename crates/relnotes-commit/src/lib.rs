//! Commit types for Relnotes.
//!
//! This crate provides the core data types used throughout Relnotes:
//! - [`RawCommit`]: A commit as retrieved from the commit source
//! - [`PullRequestMeta`]: Pull request metadata supplied by the host
//! - [`CommitRecord`]: A commit after parsing and type resolution
//! - [`ChangeType`]: The closed vocabulary of recognized change types

mod change_type;
mod pull_request;
mod raw;
mod record;

pub use change_type::ChangeType;
pub use pull_request::PullRequestMeta;
pub use raw::{RawCommit, Signature};
pub use record::{CommitRecord, CommitRecordBuilder};
