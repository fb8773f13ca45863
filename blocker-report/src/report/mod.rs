//! Terminal report: grouped bullet list and per-status counts.

mod badge;
mod counts;
mod line;
mod list;
mod style;

pub use badge::{severity_badge, status_badge, Badge};
pub use counts::StatusCounts;
pub use line::{bug_item, heading_item, truncate_summary};
pub use list::{render_list, ListItem, Segment};
pub use style::Style;

use crate::bugs::Bug;
use crate::filter::{bugs_in_scope, group_bugs, ReportFilters, Section};

/// A rendered-ready report built from fetched bugs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Non-empty blocker buckets, in display order.
    pub sections: Vec<Section>,

    /// Per-status counts over every in-scope bug, when requested.
    pub counts: Option<StatusCounts>,
}

impl Report {
    /// Groups and filters `bugs` according to `filters`.
    #[must_use]
    pub fn build(bugs: &[Bug], filters: &ReportFilters) -> Self {
        let counts = filters
            .show_counts
            .then(|| StatusCounts::from_bugs(&bugs_in_scope(filters, bugs)));
        Self {
            sections: group_bugs(filters, bugs),
            counts,
        }
    }

    /// Returns the list items: a heading per section followed by its bugs.
    #[must_use]
    pub fn items(&self) -> Vec<ListItem> {
        self.sections
            .iter()
            .flat_map(|section| {
                std::iter::once(heading_item(section.blocker))
                    .chain(section.bugs.iter().map(|bug| bug_item(bug, 1)))
            })
            .collect()
    }

    /// Returns the number of bugs listed across all sections.
    #[must_use]
    pub fn bug_count(&self) -> usize {
        self.sections.iter().map(|s| s.bugs.len()).sum()
    }

    /// Renders the styled list followed by the counts, if any.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = render_list(&self.items());
        if let Some(counts) = &self.counts {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&counts.to_string());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bugs::BlockerFlag;

    fn bug(key: &str, blocker: Option<BlockerFlag>, status: &str) -> Bug {
        Bug {
            key: key.to_string(),
            summary: format!("{key} summary"),
            component: "etcd".to_string(),
            versions: vec![],
            target_versions: vec!["4.12".to_string()],
            blocker,
            severity: "-".to_string(),
            priority: String::new(),
            status: status.to_string(),
            link: format!("https://example.com/{key}"),
        }
    }

    #[test]
    fn items_interleave_headings_and_bugs() {
        let bugs = vec![
            bug("A", Some(BlockerFlag::Rejected), "new"),
            bug("B", Some(BlockerFlag::Approved), "new"),
        ];
        let report = Report::build(&bugs, &ReportFilters::default());

        let lines: Vec<String> = report.items().iter().map(ListItem::render_plain).collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "• blocker+ bugs");
        assert!(lines[1].starts_with("  • "));
        assert!(lines[1].contains("B summary"));
        assert_eq!(lines[2], "• blocker- bugs");
        assert!(lines[3].contains("https://example.com/A"));
        assert_eq!(report.bug_count(), 2);
    }

    #[test]
    fn counts_only_when_requested() {
        let bugs = vec![bug("A", None, "new"), bug("B", Some(BlockerFlag::Approved), "post")];

        assert!(Report::build(&bugs, &ReportFilters::default()).counts.is_none());

        let filters = ReportFilters {
            show_counts: true,
            ..ReportFilters::default()
        };
        let report = Report::build(&bugs, &filters);
        let counts = report.counts.as_ref().unwrap();

        // Counts cover unflagged bugs even though their bucket is hidden.
        assert_eq!(counts.total(), 2);
        assert!(report.render().ends_with("-> Total: 2"));
    }

    #[test]
    fn empty_report_renders_nothing() {
        let report = Report::build(&[], &ReportFilters::default());

        assert!(report.sections.is_empty());
        assert_eq!(report.render(), "");
    }
}
