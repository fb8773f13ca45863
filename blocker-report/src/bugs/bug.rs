//! Bug records derived from Jira issues.

use super::blocker::BlockerFlag;
use super::extract::{
    normalize_priority, normalize_status, parse_severity, remove_bracket_prefix,
    UNKNOWN_LINK, UNKNOWN_SEVERITY,
};
use crate::config::FieldIds;
use crate::jira::{join_names, FieldLookup, Issue};
use tracing::debug;

/// A bug report with its fields extracted and normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bug {
    /// Jira issue key.
    pub key: String,

    /// Summary without the leading `[...]` tag.
    pub summary: String,

    /// Comma-joined component names.
    pub component: String,

    /// Affected versions.
    pub versions: Vec<String>,

    /// Target (fix) versions.
    pub target_versions: Vec<String>,

    /// Blocker flag, `None` when unset.
    pub blocker: Option<BlockerFlag>,

    /// Lowercase severity label, `-` when unknown.
    pub severity: String,

    /// Lowercase priority name, empty when unprioritised.
    pub priority: String,

    /// Lowercase status without spaces.
    pub status: String,

    /// External bug tracker link, `<unknown>` when missing.
    pub link: String,
}

impl Bug {
    /// Extracts a bug record from a fetched issue.
    ///
    /// Missing or malformed custom fields fall back to their defaults.
    #[must_use]
    pub fn from_issue(issue: &Issue, field_ids: &FieldIds) -> Self {
        let fields = &issue.fields;
        let custom = fields.custom();

        let blocker = log_soft_failure(
            &issue.key,
            &field_ids.blocker,
            custom.string_list(&field_ids.blocker),
        )
        .and_then(BlockerFlag::first_in);

        let link = log_soft_failure(&issue.key, &field_ids.link, custom.string(&field_ids.link))
            .map_or_else(|| UNKNOWN_LINK.to_string(), str::to_string);

        let severity = log_soft_failure(
            &issue.key,
            &field_ids.severity,
            custom.nested_string(&field_ids.severity, "value"),
        )
        .and_then(parse_severity)
        .unwrap_or_else(|| UNKNOWN_SEVERITY.to_string());

        Self {
            key: issue.key.clone(),
            summary: remove_bracket_prefix(&fields.summary).to_string(),
            component: join_names(&fields.components),
            versions: names(&fields.versions),
            target_versions: names(&fields.fix_versions),
            blocker,
            severity,
            priority: fields
                .priority
                .as_ref()
                .map(|p| normalize_priority(&p.name))
                .unwrap_or_default(),
            status: fields
                .status
                .as_ref()
                .map(|s| normalize_status(&s.name))
                .unwrap_or_default(),
            link,
        }
    }

    /// Returns the target versions joined with commas.
    #[must_use]
    pub fn target_version(&self) -> String {
        self.target_versions.join(",")
    }
}

fn names(items: &[crate::jira::Named]) -> Vec<String> {
    items.iter().map(|item| item.name.clone()).collect()
}

/// Logs malformed custom fields and returns the found value, if any.
fn log_soft_failure<T>(key: &str, field: &str, lookup: FieldLookup<T>) -> Option<T> {
    if let FieldLookup::Malformed { reason } = &lookup {
        debug!(issue = key, field, reason = %reason, "Ignoring malformed custom field");
    }
    lookup.found()
}
