//! Terminal text styles.

use colored::{Color, ColoredString, Colorize};

/// Foreground/background colors and weight applied to a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    fg: Option<Color>,
    bg: Option<Color>,
    bold: bool,
}

impl Style {
    /// Unstyled text.
    pub const PLAIN: Style = Style {
        fg: None,
        bg: None,
        bold: false,
    };

    /// Text in the given foreground color.
    #[must_use]
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            bold: false,
        }
    }

    /// Adds a background color.
    #[must_use]
    pub const fn on(self, color: Color) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    /// Makes the text bold.
    #[must_use]
    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    /// Applies the style to `text`.
    #[must_use]
    pub fn paint(&self, text: &str) -> ColoredString {
        let mut painted = text.normal();
        if let Some(fg) = self.fg {
            painted = painted.color(fg);
        }
        if let Some(bg) = self.bg {
            painted = painted.on_color(bg);
        }
        if self.bold {
            painted = painted.bold();
        }
        painted
    }
}
