//! Normalisation of raw issue field values.

/// Severity shown when the severity field is missing or unreadable.
pub const UNKNOWN_SEVERITY: &str = "-";

/// Link shown when the external link field is missing or unreadable.
pub const UNKNOWN_LINK: &str = "<unknown>";

/// Removes a leading `[...]` tag (e.g. a Bugzilla ID) from a summary.
///
/// Everything up to and including the first `]` is dropped and the rest is
/// trimmed. Summaries without `]` are returned unchanged.
#[must_use]
pub fn remove_bracket_prefix(summary: &str) -> &str {
    match summary.find(']') {
        Some(i) => summary[i + 1..].trim(),
        None => summary,
    }
}

/// Lowercases a status and removes its spaces ("In Progress" -> "inprogress").
#[must_use]
pub fn normalize_status(status: &str) -> String {
    status.replace(' ', "").to_lowercase()
}

/// Extracts a severity label from a value that may embed markup.
///
/// The text after the last `>` is used, or the whole value when there is none.
/// Returns `None` when nothing is left after trimming.
#[must_use]
pub fn parse_severity(raw: &str) -> Option<String> {
    let label = match raw.rfind('>') {
        Some(i) => &raw[i + 1..],
        None => raw,
    };
    let label = label.trim();
    (!label.is_empty()).then(|| label.to_lowercase())
}

/// Lowercases a priority name; "unprioritized" counts as no priority.
#[must_use]
pub fn normalize_priority(name: &str) -> String {
    let priority = name.trim().to_lowercase();
    if priority == "unprioritized" {
        String::new()
    } else {
        priority
    }
}
