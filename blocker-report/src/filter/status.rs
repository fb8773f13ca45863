//! Status allow/deny filter.

use crate::bugs::normalize_status;

/// Admits bugs by normalised status.
///
/// A non-empty allow-list decides on its own; the deny-list is only consulted
/// when the allow-list is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusFilter {
    allow: Vec<String>,
    deny: Vec<String>,
}

impl StatusFilter {
    /// Creates a filter, normalising the requested statuses like bug statuses.
    pub fn new<S: AsRef<str>>(allow: &[S], deny: &[S]) -> Self {
        let normalize = |values: &[S]| -> Vec<String> {
            values
                .iter()
                .map(|value| normalize_status(value.as_ref()))
                .collect()
        };
        Self {
            allow: normalize(allow),
            deny: normalize(deny),
        }
    }

    /// Returns true if a bug with the normalised `status` passes the filter.
    #[must_use]
    pub fn admits(&self, status: &str) -> bool {
        if !self.allow.is_empty() {
            return self.allow.iter().any(|s| s == status);
        }
        !self.deny.iter().any(|s| s == status)
    }
}
