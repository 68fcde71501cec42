//! Core library for Relnotes.
//!
//! This crate turns raw commits and pull request metadata into a grouped
//! release-notes document:
//!
//! - [`comment`]: tokenizer slicing a commit comment into its parts
//! - [`dedupe`]: collapses records sharing an issue code
//! - [`Section`] / [`SectionList`]: ordered first-match-wins classification
//! - [`DocumentRenderer`]: deterministic markdown assembly
//! - [`Generator`]: the per-release-window batch pipeline

pub mod comment;

mod dedupe;
mod error;
mod pipeline;
mod render;
mod section;

pub use dedupe::dedupe;
pub use error::{CoreError, CoreResult};
pub use pipeline::{Generator, ReleaseWindow};
pub use render::{ClassifiedRelease, DocumentRenderer, RenderOptions, write_document};
pub use section::{Section, SectionList};
