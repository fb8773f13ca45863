//! Blocker flag values.

use std::fmt;

/// Release-blocking review outcome recorded on a bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockerFlag {
    /// Approved as a release blocker (`blocker+`).
    Approved,

    /// Rejected as a release blocker (`blocker-`).
    Rejected,

    /// Proposed as a release blocker, pending review (`blocker?`).
    Proposed,
}

impl BlockerFlag {
    /// All flags in display order.
    pub const ALL: [BlockerFlag; 3] = [Self::Approved, Self::Rejected, Self::Proposed];

    /// Returns the flag as it appears in Jira.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "blocker+",
            Self::Rejected => "blocker-",
            Self::Proposed => "blocker?",
        }
    }

    /// Parses the exact Jira spelling of a flag.
    #[must_use]
    pub fn from_jira(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.as_str() == value)
    }

    /// Returns the first recognised flag among `values`.
    pub fn first_in<'a>(values: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        values.into_iter().find_map(Self::from_jira)
    }
}

impl fmt::Display for BlockerFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
