//! Markdown document assembly and output.

use std::fmt::Write;
use std::fs;
use std::io;
use std::path::Path;

use relnotes_commit::CommitRecord;
use tracing::debug;

use crate::Section;

/// Link configuration for the renderer.
///
/// A link kind is only rendered when its base URL is configured.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Base URL for issue links.
    pub issue_link_base_url: Option<String>,

    /// Base URL for pull request links.
    pub pull_request_link_base_url: Option<String>,
}

/// One release block ready for rendering: its title and the collated,
/// section-ordered records.
#[derive(Debug)]
pub struct ClassifiedRelease<'a> {
    /// Release title.
    pub title: String,

    /// Non-empty sections in configured order.
    pub sections: Vec<(&'a Section, Vec<CommitRecord>)>,
}

/// Assembles the release-notes markdown document.
///
/// Rendering is pure string assembly: the same input always produces
/// byte-identical output.
#[derive(Debug)]
pub struct DocumentRenderer {
    options: RenderOptions,
}

impl DocumentRenderer {
    /// Creates a renderer with the given link options.
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Renders the full document: header, one block per release, separated
    /// by horizontal rules.
    #[must_use]
    pub fn render(&self, title: &str, releases: &[ClassifiedRelease<'_>]) -> String {
        let mut output = String::new();

        _ = writeln!(output, "# {title}");
        output.push('\n');

        for release in releases {
            _ = write!(output, "## {}", release.title);
            output.push('\n');
            self.render_sections(&mut output, release);
            output.push_str("\n***\n\n");
        }

        output
    }

    fn render_sections(&self, output: &mut String, release: &ClassifiedRelease<'_>) {
        for (section, records) in &release.sections {
            _ = write!(output, "\n### {section}\n\n");

            for record in records {
                output.push_str(&self.record_line(record));
            }
        }
    }

    /// Renders one bullet line, plus the breaking-change sub-line when the
    /// record carries one.
    fn record_line(&self, record: &CommitRecord) -> String {
        let mut line = String::from("- ");

        if !record.component.is_empty() {
            _ = write!(line, "{}: ", record.component);
        }

        line.push_str(&record.message);

        if record.has_issue() {
            if let Some(base) = &self.options.issue_link_base_url {
                _ = write!(
                    line,
                    " ([#{issue}]({base}/{issue}))",
                    issue = record.issue_code
                );
            }
        }

        if record.has_pull_request() {
            if let Some(base) = &self.options.pull_request_link_base_url {
                _ = write!(
                    line,
                    " ([#PR {id}]({base}/{id}))",
                    id = record.pull_request_id
                );
            }
        }

        line.push('\n');

        if !record.breaking_change.is_empty() {
            _ = writeln!(
                line,
                "    * :warning: **BREAKING CHANGE:** {}",
                record.breaking_change
            );
        }

        line
    }
}

/// Writes the document to its destination path.
///
/// In append mode, pre-existing content is concatenated AFTER the newly
/// generated content (new content first), with the old content's lines
/// re-joined by `\n`. See DESIGN.md before changing the ordering.
///
/// # Errors
///
/// Returns an error if the destination cannot be read (append mode) or
/// written.
pub fn write_document(path: &Path, content: &str, append: bool) -> io::Result<()> {
    let mut output = content.to_string();

    if append && path.exists() {
        debug!(?path, "appending pre-existing document content");
        let existing = fs::read_to_string(path)?;
        output.push_str(&existing.lines().collect::<Vec<_>>().join("\n"));
    }

    fs::write(path, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use relnotes_commit::{ChangeType, RawCommit};

    fn make_record(message: &str) -> CommitRecord {
        CommitRecord::builder(RawCommit::new("abc123", "comment"))
            .change_type(Some(ChangeType::Feat))
            .message(message)
            .build()
    }

    fn linked_options() -> RenderOptions {
        RenderOptions {
            issue_link_base_url: Some("https://tracker.example.com/browse".to_string()),
            pull_request_link_base_url: Some(
                "https://host.example.com/_git/repo/pullrequest".to_string(),
            ),
        }
    }

    fn features_section() -> Section {
        Section::new("New Features", ":star:", ["feat"])
    }

    #[test]
    fn test_render_header_and_release() {
        let renderer = DocumentRenderer::new(RenderOptions::default());
        let section = features_section();
        let releases = vec![ClassifiedRelease {
            title: "v1.0.0".to_string(),
            sections: vec![(&section, vec![make_record("Add X")])],
        }];

        let output = renderer.render("Release Notes", &releases);

        assert_eq!(
            output,
            "# Release Notes\n\n\
             ## v1.0.0\n\n\
             ### :star: New Features\n\n\
             - Add X\n\
             \n***\n\n"
        );
    }

    #[test]
    fn test_render_component_prefix() {
        let renderer = DocumentRenderer::new(RenderOptions::default());
        let record = CommitRecord::builder(RawCommit::new("abc123", "comment"))
            .change_type(Some(ChangeType::Feat))
            .component("core")
            .message("Add X")
            .build();

        let line = renderer.record_line(&record);
        assert_eq!(line, "- core: Add X\n");
    }

    #[test]
    fn test_render_issue_link_before_pr_link() {
        let renderer = DocumentRenderer::new(linked_options());
        let record = CommitRecord::builder(RawCommit::new("abc123", "comment"))
            .pull_request_id(123)
            .change_type(Some(ChangeType::Feat))
            .issue_code("ISSUE-1")
            .message("Add X")
            .build();

        let line = renderer.record_line(&record);
        assert_eq!(
            line,
            "- Add X \
             ([#ISSUE-1](https://tracker.example.com/browse/ISSUE-1)) \
             ([#PR 123](https://host.example.com/_git/repo/pullrequest/123))\n"
        );
    }

    #[test]
    fn test_render_no_links_without_base_urls() {
        let renderer = DocumentRenderer::new(RenderOptions::default());
        let record = CommitRecord::builder(RawCommit::new("abc123", "comment"))
            .pull_request_id(123)
            .change_type(Some(ChangeType::Feat))
            .issue_code("ISSUE-1")
            .message("Add X")
            .build();

        let line = renderer.record_line(&record);
        assert_eq!(line, "- Add X\n");
    }

    #[test]
    fn test_render_no_issue_link_without_issue() {
        let renderer = DocumentRenderer::new(linked_options());
        let record = CommitRecord::builder(RawCommit::new("abc123", "comment"))
            .change_type(Some(ChangeType::Feat))
            .message("Add X")
            .build();

        let line = renderer.record_line(&record);
        assert_eq!(line, "- Add X\n");
    }

    #[test]
    fn test_render_breaking_change_sub_line() {
        let renderer = DocumentRenderer::new(RenderOptions::default());
        let record = CommitRecord::builder(RawCommit::new("abc123", "comment"))
            .change_type(Some(ChangeType::Feat))
            .message("Add X")
            .breaking_change("Removes legacy flag")
            .build();

        let line = renderer.record_line(&record);
        assert_eq!(
            line,
            "- Add X\n    * :warning: **BREAKING CHANGE:** Removes legacy flag\n"
        );
    }

    #[test]
    fn test_render_multiple_releases_separated_by_rule() {
        let renderer = DocumentRenderer::new(RenderOptions::default());
        let section = features_section();
        let releases = vec![
            ClassifiedRelease {
                title: "v1.1.0".to_string(),
                sections: vec![(&section, vec![make_record("Add X")])],
            },
            ClassifiedRelease {
                title: "v1.0.0".to_string(),
                sections: vec![(&section, vec![make_record("Add Y")])],
            },
        ];

        let output = renderer.render("Release Notes", &releases);

        assert_eq!(output.matches("\n***\n\n").count(), 2);
        let first = output.find("## v1.1.0").unwrap();
        let second = output.find("## v1.0.0").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_render_release_without_sections() {
        let renderer = DocumentRenderer::new(RenderOptions::default());
        let releases = vec![ClassifiedRelease {
            title: "v1.0.0".to_string(),
            sections: Vec::new(),
        }];

        let output = renderer.render("Release Notes", &releases);
        assert_eq!(output, "# Release Notes\n\n## v1.0.0\n\n***\n\n");
    }

    #[test]
    fn test_render_idempotent() {
        let renderer = DocumentRenderer::new(linked_options());
        let section = features_section();
        let releases = vec![ClassifiedRelease {
            title: "v1.0.0".to_string(),
            sections: vec![(&section, vec![make_record("Add X")])],
        }];

        let first = renderer.render("Release Notes", &releases);
        let second = renderer.render("Release Notes", &releases);
        assert_eq!(first, second);
    }

    #[test]
    fn test_write_document_plain() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("RELEASENOTES.md");

        write_document(&path, "# Notes\n", false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Notes\n");
    }

    #[test]
    fn test_write_document_overwrites_without_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("RELEASENOTES.md");
        fs::write(&path, "old content\n").unwrap();

        write_document(&path, "# Notes\n", false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Notes\n");
    }

    #[test]
    fn test_write_document_append_puts_new_content_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("RELEASENOTES.md");
        fs::write(&path, "old line one\nold line two\n").unwrap();

        write_document(&path, "# Notes\n\n", true).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "# Notes\n\nold line one\nold line two");
    }

    #[test]
    fn test_write_document_append_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("RELEASENOTES.md");

        write_document(&path, "# Notes\n", true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Notes\n");
    }
}
