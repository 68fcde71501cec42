//! Issue-code deduplication.

use std::collections::HashSet;

use relnotes_commit::CommitRecord;
use tracing::debug;

/// Collapses records sharing a non-empty issue code to the first
/// occurrence, preserving arrival order.
///
/// Records with an empty issue code never deduplicate against each other.
#[must_use]
pub fn dedupe(records: Vec<CommitRecord>) -> Vec<CommitRecord> {
    let mut seen: HashSet<String> = HashSet::new();

    records
        .into_iter()
        .filter(|record| {
            if record.issue_code.is_empty() {
                return true;
            }

            let first = seen.insert(record.issue_code.clone());
            if !first {
                debug!(
                    commit = record.commit.short_id(),
                    issue = %record.issue_code,
                    "dropping duplicate issue reference"
                );
            }
            first
        })
        .collect()
}
