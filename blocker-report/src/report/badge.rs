//! Fixed-width severity and status badges.
//!
//! Each classification value maps to a label and style; values missing from
//! a table use that table's fallback badge.

use super::style::Style;
use colored::Color;

/// Width of the padded severity label.
const SEVERITY_WIDTH: usize = 8;

/// Width of the padded status label.
const STATUS_WIDTH: usize = 10;

/// A labelled, styled tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    /// Label text before padding.
    pub label: &'static str,

    /// Style of the padded label.
    pub style: Style,
}

impl Badge {
    const fn new(label: &'static str, style: Style) -> Self {
        Self { label, style }
    }
}

const SEVERITY_BADGES: &[(&str, Badge)] = &[
    (
        "urgent",
        Badge::new("URGENT", Style::fg(Color::White).on(Color::Red).bold()),
    ),
    (
        "high",
        Badge::new("HIGH", Style::fg(Color::White).on(Color::BrightRed)),
    ),
    (
        "medium",
        Badge::new("MEDIUM", Style::fg(Color::Black).on(Color::Yellow)),
    ),
    (
        "low",
        Badge::new("LOW", Style::fg(Color::Black).on(Color::Cyan)),
    ),
];

const DEFAULT_SEVERITY: Badge = Badge::new("-", Style::fg(Color::White).on(Color::BrightBlack));

const STATUS_BADGES: &[(&str, Badge)] = &[
    ("new", Badge::new("NEW", Style::fg(Color::Black).on(Color::BrightWhite))),
    ("todo", Badge::new("TO DO", Style::fg(Color::Black).on(Color::BrightWhite))),
    ("assigned", Badge::new("ASSIGNED", Style::fg(Color::White).on(Color::Blue))),
    ("inprogress", Badge::new("IN PROG", Style::fg(Color::White).on(Color::Blue))),
    ("codereview", Badge::new("REVIEW", Style::fg(Color::Black).on(Color::Cyan))),
    ("post", Badge::new("POST", Style::fg(Color::Black).on(Color::Cyan))),
    ("modified", Badge::new("MODIFIED", Style::fg(Color::Black).on(Color::Magenta))),
    ("on_qa", Badge::new("ON_QA", Style::fg(Color::Black).on(Color::Yellow))),
    ("verified", Badge::new("VERIFIED", Style::fg(Color::Black).on(Color::Green))),
    ("releasepending", Badge::new("RELEASE", Style::fg(Color::Black).on(Color::Green))),
    ("done", Badge::new("DONE", Style::fg(Color::White).on(Color::BrightBlack))),
    ("closed", Badge::new("CLOSED", Style::fg(Color::White).on(Color::BrightBlack))),
];

const DEFAULT_STATUS: Badge = Badge::new("UNKNOWN", Style::fg(Color::White).on(Color::BrightBlack));

fn lookup(table: &[(&str, Badge)], value: &str, fallback: Badge) -> Badge {
    table
        .iter()
        .find(|(key, _)| *key == value)
        .map_or(fallback, |(_, badge)| *badge)
}

/// Returns the badge for a lowercase severity label.
#[must_use]
pub fn severity_badge(severity: &str) -> Badge {
    lookup(SEVERITY_BADGES, severity, DEFAULT_SEVERITY)
}

/// Returns the badge for a normalised status.
#[must_use]
pub fn status_badge(status: &str) -> Badge {
    lookup(STATUS_BADGES, status, DEFAULT_STATUS)
}

/// Pads a severity label to its fixed width.
#[must_use]
pub fn severity_text(badge: &Badge) -> String {
    format!("{:^SEVERITY_WIDTH$}", badge.label)
}

/// Pads a status label to its fixed width.
#[must_use]
pub fn status_text(badge: &Badge) -> String {
    format!("{:^STATUS_WIDTH$}", badge.label)
}
