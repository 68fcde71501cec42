//! Source contracts for Relnotes.
//!
//! This crate defines where commits and pull request metadata come from:
//! - [`CommitSource`]: supplies raw commits for a time window and branch
//! - [`PullRequestSource`]: supplies labels and descriptions by PR id
//! - [`ExportSource`]: file-backed implementation of both, reading a JSON
//!   export of the host's commit and pull request payloads

mod error;
mod export;
mod traits;

pub use error::{SourceError, SourceResult};
pub use export::ExportSource;
pub use traits::{CommitSource, PullRequestSource};
