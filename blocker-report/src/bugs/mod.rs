//! Bug records and field extraction.

mod blocker;
mod bug;
mod extract;

pub use blocker::BlockerFlag;
pub use bug::Bug;
pub use extract::{
    normalize_priority, normalize_status, parse_severity, remove_bracket_prefix,
    UNKNOWN_LINK, UNKNOWN_SEVERITY,
};

use crate::config::FieldIds;
use crate::jira::Issue;
use tracing::debug;

/// Extracts one bug record per fetched issue, preserving order.
#[must_use]
pub fn bugs_from_issues(issues: &[Issue], field_ids: &FieldIds) -> Vec<Bug> {
    let bugs: Vec<Bug> = issues
        .iter()
        .map(|issue| Bug::from_issue(issue, field_ids))
        .collect();
    debug!(count = bugs.len(), "Extracted bug records");
    bugs
}
