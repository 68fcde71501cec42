//! Ordered release-notes sections and first-match-wins classification.

use std::fmt;

use relnotes_commit::{ChangeType, CommitRecord};
use tracing::debug;

/// One named bucket of change types.
///
/// A section's identity for classification purposes is its position in the
/// configured [`SectionList`]; the list order drives both tie-break and
/// rendering order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section title.
    pub title: String,

    /// Emoji shortcode rendered before the title.
    pub emoji: String,

    /// Accepted change-type labels, matched case-insensitively.
    pub labels: Vec<String>,
}

impl Section {
    /// Creates a new section.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        emoji: impl Into<String>,
        labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            emoji: emoji.into(),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true when this section accepts the given change type.
    #[must_use]
    pub fn accepts(&self, change_type: ChangeType) -> bool {
        self.labels
            .iter()
            .any(|label| label.eq_ignore_ascii_case(change_type.label()))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji, self.title)
    }
}

/// The ordered, immutable list of sections for one run.
#[derive(Debug, Clone)]
pub struct SectionList {
    sections: Vec<Section>,
}

impl SectionList {
    /// Builds a section list, falling back to the built-in defaults when
    /// the configured list is empty.
    #[must_use]
    pub fn new(sections: Vec<Section>) -> Self {
        if sections.is_empty() {
            return Self::defaults();
        }

        Self { sections }
    }

    /// Returns the built-in default sections.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            sections: vec![
                Section::new("New Features", ":star:", ["feat", "test", "perf"]),
                Section::new("Bug Fixes", ":beetle:", ["bug", "fix"]),
                Section::new(
                    "Documentation",
                    ":notebook_with_decorative_cover:",
                    ["doc", "docs", "style", "chore"],
                ),
                Section::new("Refactorings", ":wrench:", ["refactor"]),
            ],
        }
    }

    /// Returns the sections in configured order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the first section accepting the given change type.
    #[must_use]
    pub fn section_for(&self, change_type: ChangeType) -> Option<&Section> {
        self.sections
            .iter()
            .find(|section| section.accepts(change_type))
    }

    /// Buckets records into sections, first match wins.
    ///
    /// The result iterates in configured section order and only contains
    /// sections that received at least one record. Records without a
    /// resolved change type, or whose type no section accepts, are dropped.
    #[must_use]
    pub fn collate(&self, records: Vec<CommitRecord>) -> Vec<(&Section, Vec<CommitRecord>)> {
        let mut buckets: Vec<Vec<CommitRecord>> =
            (0..self.sections.len()).map(|_| Vec::new()).collect();

        for record in records {
            let Some(change_type) = record.change_type else {
                debug!(
                    commit = record.commit.short_id(),
                    "no resolvable change type, dropping record"
                );
                continue;
            };

            let position = self
                .sections
                .iter()
                .position(|section| section.accepts(change_type));

            match position {
                Some(index) => buckets[index].push(record),
                None => debug!(
                    commit = record.commit.short_id(),
                    change_type = %change_type,
                    "no section accepts change type, dropping record"
                ),
            }
        }

        self.sections
            .iter()
            .zip(buckets)
            .filter(|(_, bucket)| !bucket.is_empty())
            .collect()
    }
}

impl Default for SectionList {
    fn default() -> Self {
        Self::defaults()
    }
}
