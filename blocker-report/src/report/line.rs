//! Formatting of bug lines and bucket headings.

use super::badge::{severity_badge, severity_text, status_badge, status_text};
use super::list::{ListItem, Segment};
use super::style::Style;
use crate::bugs::{BlockerFlag, Bug};
use colored::Color;

/// Summaries longer than this are truncated.
const MAX_SUMMARY_CHARS: usize = 80;

/// Characters kept from a truncated summary, before the ellipsis.
const TRUNCATED_SUMMARY_CHARS: usize = 79;

/// Shortens a summary to 79 characters plus `...` when it exceeds 80 characters.
#[must_use]
pub fn truncate_summary(summary: &str) -> String {
    if summary.chars().count() <= MAX_SUMMARY_CHARS {
        return summary.to_string();
    }
    let kept: String = summary.chars().take(TRUNCATED_SUMMARY_CHARS).collect();
    format!("{kept}...")
}

/// Style of the summary text for a priority.
fn priority_style(priority: &str) -> Style {
    match priority {
        "urgent" => Style::fg(Color::BrightRed).bold(),
        "high" => Style::fg(Color::Red),
        _ => Style::PLAIN,
    }
}

/// Returns the heading text and style for a bucket.
#[must_use]
pub fn heading(blocker: Option<BlockerFlag>) -> (String, Style) {
    match blocker {
        Some(flag @ BlockerFlag::Approved) => (format!("{flag} bugs"), Style::fg(Color::Red)),
        Some(flag @ BlockerFlag::Rejected) => (format!("{flag} bugs"), Style::fg(Color::Green)),
        Some(flag @ BlockerFlag::Proposed) => {
            (format!("{flag} bugs"), Style::fg(Color::BrightBlack))
        }
        None => ("no blocker bugs".to_string(), Style::fg(Color::BrightBlack)),
    }
}

/// Builds the top-level heading item for a bucket.
#[must_use]
pub fn heading_item(blocker: Option<BlockerFlag>) -> ListItem {
    let (text, style) = heading(blocker);
    ListItem::new(0, vec![Segment::new(text, style)])
}

/// Builds the list item for one bug.
///
/// Layout: `severity status link | summary [target versions] [component]`.
#[must_use]
pub fn bug_item(bug: &Bug, level: usize) -> ListItem {
    let severity = severity_badge(&bug.severity);
    let status = status_badge(&bug.status);

    ListItem::new(
        level,
        vec![
            Segment::new(severity_text(&severity), severity.style),
            Segment::plain(" "),
            Segment::new(status_text(&status), status.style),
            Segment::plain(format!(" {} | ", bug.link)),
            Segment::new(truncate_summary(&bug.summary), priority_style(&bug.priority)),
            Segment::new(
                format!(" [{}] [{}]", bug.target_version(), bug.component),
                Style::fg(Color::BrightBlack),
            ),
        ],
    )
}
