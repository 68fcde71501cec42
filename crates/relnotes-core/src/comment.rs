//! Commit comment tokenizer.
//!
//! Slices a raw commit comment into its structured parts through named
//! extraction steps: locate the merge marker, split on the first colon,
//! split on parentheses, then the trailing parenthetical. Each absent or
//! unbalanced delimiter is an explicit branch, never an index error.
//!
//! A comment has the overall shape
//! `Merged PR <id>: <type>(<component>): <message> (<issue>)`, where every
//! part except the message is optional.

use relnotes_commit::{ChangeType, CommitRecord};
use thiserror::Error;

const MERGED_TEXT: &str = "Merged";
const MERGED_PR_TEXT: &str = "Merged PR";
const BREAKING_CHANGE_MARKER: &str = "BREAKING CHANGE:";
const SKIP_SUFFIX: &str = "[skip]";

/// Errors raised for comments that violate the merge-marker contract.
#[derive(Debug, Error)]
pub enum CommentError {
    /// "Merged PR" marker present but no colon terminates the id.
    #[error("missing ':' after \"Merged PR\" in comment: {comment:?}")]
    MissingColon {
        /// The offending comment.
        comment: String,
    },

    /// The text between "Merged PR" and the colon is not an integer.
    #[error("invalid pull request id {id_text:?} in comment: {comment:?}")]
    InvalidPullRequestId {
        /// The text that failed to parse.
        id_text: String,
        /// The offending comment.
        comment: String,
        /// The underlying parse failure.
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Returns true when the comment is a pull request merge commit.
#[must_use]
pub fn is_merge_commit(comment: &str) -> bool {
    comment.contains(MERGED_PR_TEXT)
}

/// Extracts the pull request id from the comment.
///
/// Without the `"Merged PR"` marker the comment has no associated pull
/// request and [`CommitRecord::NO_PULL_REQUEST`] is returned. With the
/// marker, the id sits between the marker and the next colon; the marker's
/// presence is an explicit contract, so a missing colon or an unparsable id
/// is a hard error.
///
/// # Errors
///
/// Returns [`CommentError`] when the marker is present but the id cannot be
/// extracted.
pub fn pull_request_id(comment: &str) -> Result<i32, CommentError> {
    let Some(marker) = comment.find(MERGED_PR_TEXT) else {
        return Ok(CommitRecord::NO_PULL_REQUEST);
    };

    let after_marker = &comment[marker + MERGED_PR_TEXT.len()..];
    let Some(colon) = after_marker.find(':') else {
        return Err(CommentError::MissingColon {
            comment: comment.to_string(),
        });
    };

    let id_text = after_marker[..colon].trim();
    id_text
        .parse()
        .map_err(|source| CommentError::InvalidPullRequestId {
            id_text: id_text.to_string(),
            comment: comment.to_string(),
            source,
        })
}

/// Strips the leading `"Merged …:"` prefix, if present.
///
/// Comments without the merge marker (or with a marker but no colon) pass
/// through unchanged.
#[must_use]
pub fn effective_body(comment: &str) -> &str {
    if !comment.contains(MERGED_TEXT) {
        return comment;
    }

    match comment.find(':') {
        Some(colon) => &comment[colon + 1..],
        None => comment,
    }
}

/// Splits the effective body at its first colon into head and rest.
fn head_and_rest(body: &str) -> Option<(&str, &str)> {
    body.find(':').map(|colon| (&body[..colon], &body[colon + 1..]))
}

/// Extracts the change-type token from the comment, if one is present and
/// recognized.
///
/// The token is the head before the first colon of the effective body, with
/// any parenthesized component removed. A body without a colon carries no
/// token; the type must then come from pull request labels.
#[must_use]
pub fn change_type(comment: &str) -> Option<ChangeType> {
    let body = effective_body(comment);
    let (head, _) = head_and_rest(body)?;

    let token = match head.find('(') {
        Some(open) => &head[..open],
        None => head,
    };

    ChangeType::safe_lookup(token)
}

/// Extracts the component from the comment, lower-cased.
///
/// The component is the text between parentheses inside the head before the
/// first colon. No colon, no parenthesis, or an unclosed parenthesis all
/// yield an empty component.
#[must_use]
pub fn component(comment: &str) -> String {
    let body = effective_body(comment);
    let Some((head, _)) = head_and_rest(body) else {
        return String::new();
    };

    let Some(open) = head.find('(') else {
        return String::new();
    };

    match head[open + 1..].find(')') {
        Some(close) => head[open + 1..open + 1 + close].to_lowercase(),
        None => String::new(),
    }
}

/// Extracts the human message from the comment.
///
/// The message is the rest after the first colon of the effective body (or
/// the whole body when no colon exists), with a trailing parenthesized
/// issue reference stripped, trimmed, and its first letter capitalized.
#[must_use]
pub fn message(comment: &str) -> String {
    let body = effective_body(comment);
    let text = match head_and_rest(body) {
        Some((_, rest)) => rest,
        None => body,
    };

    let text = strip_trailing_parenthetical(text.trim());
    capitalize(text.trim())
}

/// Extracts the issue code from the comment, upper-cased.
///
/// The code is the text between the last opening parenthesis and a closing
/// parenthesis ending the effective body. A body not ending in `)` — or
/// ending in `)` with no `(` before it — has no issue code.
#[must_use]
pub fn issue_code(comment: &str) -> String {
    let body = effective_body(comment).trim();
    if !body.ends_with(')') {
        return String::new();
    }

    match body.rfind('(') {
        Some(open) => body[open + 1..body.len() - 1].to_uppercase(),
        None => String::new(),
    }
}

/// Extracts the breaking-change text from a pull request description.
///
/// Everything after the `"BREAKING CHANGE:"` marker, trimmed and
/// capitalized; an absent description or marker yields an empty string,
/// never an error.
#[must_use]
pub fn breaking_change(description: Option<&str>) -> String {
    let Some(description) = description else {
        return String::new();
    };

    let Some(marker) = description.find(BREAKING_CHANGE_MARKER) else {
        return String::new();
    };

    let text = &description[marker + BREAKING_CHANGE_MARKER.len()..];
    capitalize(text.trim())
}

/// Returns true when the comment ends with the `[skip]` marker,
/// case-insensitively.
#[must_use]
pub fn has_skip_marker(comment: &str) -> bool {
    let trimmed = comment.trim_end();
    trimmed
        .get(trimmed.len().saturating_sub(SKIP_SUFFIX.len())..)
        .is_some_and(|tail| tail.eq_ignore_ascii_case(SKIP_SUFFIX))
}

/// Drops a trailing parenthetical, leaving text without a matching `(`
/// intact.
fn strip_trailing_parenthetical(text: &str) -> &str {
    if !text.ends_with(')') {
        return text;
    }

    match text.rfind('(') {
        Some(open) => &text[..open],
        None => text,
    }
}

/// Upper-cases the first letter; empty text stays empty.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pull_request_id_with_marker() {
        let id = pull_request_id("Merged PR 123: feat(core): add X (ISSUE-1)").unwrap();
        assert_eq!(id, 123);
    }

    #[test]
    fn test_pull_request_id_trims_whitespace() {
        let id = pull_request_id("Merged PR   42  : fix: repair leak").unwrap();
        assert_eq!(id, 42);
    }

    #[test]
    fn test_pull_request_id_without_marker() {
        let id = pull_request_id("fix: repair leak").unwrap();
        assert_eq!(id, CommitRecord::NO_PULL_REQUEST);
    }

    #[test]
    fn test_pull_request_id_missing_colon_is_error() {
        let result = pull_request_id("Merged PR 123 without colon");
        assert!(matches!(result, Err(CommentError::MissingColon { .. })));
    }

    #[test]
    fn test_pull_request_id_unparsable_is_error() {
        let result = pull_request_id("Merged PR abc: fix: repair leak");
        assert!(matches!(
            result,
            Err(CommentError::InvalidPullRequestId { .. })
        ));
    }

    #[test]
    fn test_effective_body_strips_merge_prefix() {
        assert_eq!(
            effective_body("Merged PR 123: feat(core): add X"),
            " feat(core): add X"
        );
    }

    #[test]
    fn test_effective_body_without_marker() {
        assert_eq!(effective_body("fix: repair leak"), "fix: repair leak");
    }

    #[test]
    fn test_effective_body_marker_without_colon() {
        assert_eq!(effective_body("Merged without colon"), "Merged without colon");
    }

    #[test]
    fn test_change_type_plain() {
        assert_eq!(change_type("fix: repair leak"), Some(ChangeType::Fix));
    }

    #[test]
    fn test_change_type_with_component() {
        assert_eq!(
            change_type("feat(core): add X (ISSUE-1)"),
            Some(ChangeType::Feat)
        );
    }

    #[test]
    fn test_change_type_from_merge_commit() {
        assert_eq!(
            change_type("Merged PR 123: feat(core): add X (ISSUE-1)"),
            Some(ChangeType::Feat)
        );
    }

    #[test]
    fn test_change_type_case_insensitive() {
        assert_eq!(change_type("FIX: repair leak"), Some(ChangeType::Fix));
    }

    #[test]
    fn test_change_type_unknown_token() {
        assert_eq!(change_type("wip: not done yet"), None);
    }

    #[test]
    fn test_change_type_no_colon() {
        assert_eq!(change_type("just a plain message"), None);
    }

    #[test]
    fn test_component_present() {
        assert_eq!(component("feat(core): add X"), "core");
    }

    #[test]
    fn test_component_lower_cased() {
        assert_eq!(component("feat(Core): add X"), "core");
    }

    #[test]
    fn test_component_absent() {
        assert_eq!(component("fix: repair leak"), "");
    }

    #[test]
    fn test_component_no_colon() {
        assert_eq!(component("plain message (with parens)"), "");
    }

    #[test]
    fn test_component_unclosed_parenthesis() {
        assert_eq!(component("feat(core: add X"), "");
    }

    #[test]
    fn test_component_from_merge_commit() {
        assert_eq!(component("Merged PR 123: feat(core): add X"), "core");
    }

    #[test]
    fn test_message_plain() {
        assert_eq!(message("fix: repair leak"), "Repair leak");
    }

    #[test]
    fn test_message_strips_trailing_issue() {
        assert_eq!(message("feat(core): add X (ISSUE-1)"), "Add X");
    }

    #[test]
    fn test_message_from_merge_commit() {
        assert_eq!(
            message("Merged PR 123: feat(core): add X (ISSUE-1)"),
            "Add X"
        );
    }

    #[test]
    fn test_message_no_colon_uses_whole_body() {
        assert_eq!(message("plain message"), "Plain message");
    }

    #[test]
    fn test_message_trailing_paren_without_open_left_intact() {
        assert_eq!(message("fix: repair leak)"), "Repair leak)");
    }

    #[test]
    fn test_message_empty_body() {
        assert_eq!(message(""), "");
    }

    #[test]
    fn test_message_already_capitalized() {
        assert_eq!(message("fix: Repair leak"), "Repair leak");
    }

    #[test]
    fn test_issue_code_present() {
        assert_eq!(issue_code("feat(core): add X (ISSUE-1)"), "ISSUE-1");
    }

    #[test]
    fn test_issue_code_upper_cased() {
        assert_eq!(issue_code("feat(core): add X (issue-1)"), "ISSUE-1");
    }

    #[test]
    fn test_issue_code_absent() {
        assert_eq!(issue_code("fix: repair leak"), "");
    }

    #[test]
    fn test_issue_code_takes_last_parenthetical() {
        assert_eq!(issue_code("feat(core): add X (ISSUE-1)"), "ISSUE-1");
        assert_eq!(issue_code("fix: handle (edge) case (ISSUE-2)"), "ISSUE-2");
    }

    #[test]
    fn test_issue_code_trailing_paren_without_open() {
        assert_eq!(issue_code("fix: repair leak)"), "");
    }

    #[test]
    fn test_issue_code_from_merge_commit() {
        assert_eq!(
            issue_code("Merged PR 123: feat(core): add X (ISSUE-1)"),
            "ISSUE-1"
        );
    }

    #[test]
    fn test_breaking_change_present() {
        let text = breaking_change(Some(
            "Adds feature X.\n\nBREAKING CHANGE: removes legacy flag",
        ));
        assert_eq!(text, "Removes legacy flag");
    }

    #[test]
    fn test_breaking_change_marker_absent() {
        assert_eq!(breaking_change(Some("Adds feature X.")), "");
    }

    #[test]
    fn test_breaking_change_description_absent() {
        assert_eq!(breaking_change(None), "");
    }

    #[test]
    fn test_breaking_change_empty_description() {
        assert_eq!(breaking_change(Some("")), "");
    }

    #[test]
    fn test_is_merge_commit() {
        assert!(is_merge_commit("Merged PR 123: feat: add X"));
        assert!(!is_merge_commit("feat: add X"));
        assert!(!is_merge_commit("Merged branch 'develop'"));
    }

    #[test]
    fn test_has_skip_marker() {
        assert!(has_skip_marker("chore: bump deps [skip]"));
        assert!(has_skip_marker("chore: bump deps [SKIP]"));
        assert!(has_skip_marker("chore: bump deps [skip]  "));
        assert!(!has_skip_marker("chore: bump deps"));
        assert!(!has_skip_marker("[skip] chore: bump deps"));
        assert!(!has_skip_marker(""));
    }

    #[test]
    fn test_capitalize_multibyte_first_letter() {
        assert_eq!(message("fix: éviter la fuite"), "Éviter la fuite");
    }
}
