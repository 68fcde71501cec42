//! Closed vocabulary of recognized change-type tokens.

use std::fmt;

/// The closed set of change types a commit can be classified as.
///
/// Tokens are matched case-insensitively; anything outside this set is
/// simply not a change type (see [`ChangeType::safe_lookup`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeType {
    /// A new feature.
    Feat,
    /// A bug fix.
    Fix,
    /// A documentation-only change.
    Doc,
    /// A documentation-only change (plural alias).
    Docs,
    /// Formatting, whitespace, or other non-semantic changes.
    Style,
    /// A code change that neither fixes a bug nor adds a feature.
    Refactor,
    /// A performance improvement.
    Perf,
    /// Test additions or corrections.
    Test,
    /// Build process or auxiliary tooling changes.
    Chore,
}

impl ChangeType {
    /// Every recognized change type, in declaration order.
    pub const ALL: [ChangeType; 9] = [
        ChangeType::Feat,
        ChangeType::Fix,
        ChangeType::Doc,
        ChangeType::Docs,
        ChangeType::Style,
        ChangeType::Refactor,
        ChangeType::Perf,
        ChangeType::Test,
        ChangeType::Chore,
    ];

    /// Returns the canonical uppercase token for this change type.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            ChangeType::Feat => "FEAT",
            ChangeType::Fix => "FIX",
            ChangeType::Doc => "DOC",
            ChangeType::Docs => "DOCS",
            ChangeType::Style => "STYLE",
            ChangeType::Refactor => "REFACTOR",
            ChangeType::Perf => "PERF",
            ChangeType::Test => "TEST",
            ChangeType::Chore => "CHORE",
        }
    }

    /// Returns the lowercase label for this change type, as written in
    /// commit comments and pull request labels.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ChangeType::Feat => "feat",
            ChangeType::Fix => "fix",
            ChangeType::Doc => "doc",
            ChangeType::Docs => "docs",
            ChangeType::Style => "style",
            ChangeType::Refactor => "refactor",
            ChangeType::Perf => "perf",
            ChangeType::Test => "test",
            ChangeType::Chore => "chore",
        }
    }

    /// Looks up a change type by token, case-insensitively.
    ///
    /// Unknown tokens return `None`; this never fails.
    #[must_use]
    pub fn safe_lookup(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(text))
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
