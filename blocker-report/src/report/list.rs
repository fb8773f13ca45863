//! Bullet list rendering.

use super::style::Style;

/// Bullet printed before each item.
const BULLET: &str = "•";

/// Spaces of indentation per nesting level.
const INDENT: usize = 2;

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: Style,
}

impl Segment {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::PLAIN)
    }
}

/// One line of a bullet list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Nesting level, 0 for top-level items.
    pub level: usize,

    /// Styled pieces of the line, in order.
    pub segments: Vec<Segment>,
}

impl ListItem {
    /// Creates an item from styled segments.
    #[must_use]
    pub fn new(level: usize, segments: Vec<Segment>) -> Self {
        Self { level, segments }
    }

    /// Returns the item text without styling.
    #[must_use]
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    fn prefix(&self) -> String {
        format!("{}{BULLET} ", " ".repeat(self.level * INDENT))
    }

    /// Renders the item with bullet and indentation, without styling.
    #[must_use]
    pub fn render_plain(&self) -> String {
        format!("{}{}", self.prefix(), self.text())
    }

    /// Renders the item with bullet, indentation and terminal styling.
    #[must_use]
    pub fn render(&self) -> String {
        let body: String = self
            .segments
            .iter()
            .map(|s| s.style.paint(&s.text).to_string())
            .collect();
        format!("{}{body}", self.prefix())
    }
}

/// Renders all items, one per line.
#[must_use]
pub fn render_list(items: &[ListItem]) -> String {
    items
        .iter()
        .map(ListItem::render)
        .collect::<Vec<_>>()
        .join("\n")
}
