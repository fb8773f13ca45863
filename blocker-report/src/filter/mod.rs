//! Bug filtering and blocker grouping.
//!
//! Filters never modify their input; each step returns a new collection.

mod blocker;
mod error;
mod status;
mod version;

pub use blocker::BlockerFilter;
pub use error::FilterError;
pub use status::StatusFilter;
pub use version::VersionFilter;

use crate::bugs::{BlockerFlag, Bug};
use tracing::debug;

/// Display buckets in report order; `None` holds bugs without a blocker flag.
pub const BUCKETS: [Option<BlockerFlag>; 4] = [
    Some(BlockerFlag::Approved),
    Some(BlockerFlag::Rejected),
    Some(BlockerFlag::Proposed),
    None,
];

/// Report options, built once from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilters {
    /// Affected/target version filter.
    pub versions: VersionFilter,

    /// Blocker flag filter.
    pub blockers: BlockerFilter,

    /// Status allow/deny filter.
    pub statuses: StatusFilter,

    /// Whether the "no blocker flag" bucket is shown.
    pub include_unflagged: bool,

    /// Whether the per-status count summary is shown.
    pub show_counts: bool,
}

impl ReportFilters {
    /// Returns true if `bug` passes the status and version filters.
    #[must_use]
    pub fn in_scope(&self, bug: &Bug) -> bool {
        self.statuses.admits(&bug.status) && self.versions.admits(bug)
    }

    /// Returns true if the bucket for `flag` should be shown.
    #[must_use]
    pub fn shows_bucket(&self, flag: Option<BlockerFlag>) -> bool {
        self.blockers.admits(flag) && (flag.is_some() || self.include_unflagged)
    }
}

/// Bugs sharing one blocker flag value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Blocker flag of every bug in the section; `None` for unflagged bugs.
    pub blocker: Option<BlockerFlag>,

    /// Bugs in input order.
    pub bugs: Vec<Bug>,
}

/// Returns the bugs carrying exactly the given blocker flag.
#[must_use]
pub fn bugs_with_blocker(flag: Option<BlockerFlag>, bugs: &[Bug]) -> Vec<Bug> {
    bugs.iter().filter(|bug| bug.blocker == flag).cloned().collect()
}

/// Returns the bugs passing the status and version filters.
#[must_use]
pub fn bugs_in_scope(filters: &ReportFilters, bugs: &[Bug]) -> Vec<Bug> {
    bugs.iter()
        .filter(|bug| filters.in_scope(bug))
        .cloned()
        .collect()
}

/// Partitions bugs into the visible blocker buckets.
///
/// Buckets are produced in [`BUCKETS`] order. Each holds the in-scope bugs
/// with its flag; empty buckets are left out.
#[must_use]
pub fn group_bugs(filters: &ReportFilters, bugs: &[Bug]) -> Vec<Section> {
    BUCKETS
        .into_iter()
        .filter(|flag| filters.shows_bucket(*flag))
        .filter_map(|flag| {
            let bugs = bugs_in_scope(filters, &bugs_with_blocker(flag, bugs));
            debug!(
                bucket = flag.map_or("none", BlockerFlag::as_str),
                count = bugs.len(),
                "Grouped bugs"
            );
            (!bugs.is_empty()).then_some(Section { blocker: flag, bugs })
        })
        .collect()
}
