//! Per-status bug counts.

use crate::bugs::Bug;
use std::collections::BTreeMap;
use std::fmt;

/// Number of bugs per normalised status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusCounts {
    by_status: BTreeMap<String, usize>,
    total: usize,
}

impl StatusCounts {
    /// Counts `bugs` by status.
    #[must_use]
    pub fn from_bugs(bugs: &[Bug]) -> Self {
        let mut by_status = BTreeMap::new();
        for bug in bugs {
            *by_status.entry(bug.status.clone()).or_insert(0) += 1;
        }
        Self {
            by_status,
            total: bugs.len(),
        }
    }

    /// Returns the count for `status`.
    #[must_use]
    pub fn get(&self, status: &str) -> usize {
        self.by_status.get(status).copied().unwrap_or(0)
    }

    /// Returns the total number of counted bugs.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Iterates over statuses in sorted order with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.by_status.iter().map(|(status, count)| (status.as_str(), *count))
    }
}

impl fmt::Display for StatusCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (status, count) in self.iter() {
            writeln!(f, " > {status} = {count}")?;
        }
        write!(f, "-> Total: {}", self.total)
    }
}
