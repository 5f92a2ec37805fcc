//! A single colored block of the prompt.

use crate::shell::Shell;

/// One block of prompt text with its own trailing separator.
///
/// Segments know nothing about their neighbours; the renderer passes in the
/// next segment so the separator can blend into its background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    content: String,
    fg: u8,
    bg: u8,
    separator: char,
    separator_fg: u8,
}

impl Segment {
    /// Create a segment whose separator is drawn in its own background color.
    pub fn new(content: impl Into<String>, fg: u8, bg: u8, separator: char) -> Self {
        Self {
            content: content.into(),
            fg,
            bg,
            separator,
            separator_fg: bg,
        }
    }

    /// Draw the separator in a different color (used for thin separators,
    /// where both sides share a background).
    pub fn with_separator_fg(mut self, color: u8) -> Self {
        self.separator_fg = color;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn fg(&self) -> u8 {
        self.fg
    }

    pub fn bg(&self) -> u8 {
        self.bg
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn separator_fg(&self) -> u8 {
        self.separator_fg
    }

    /// Render this segment followed by its separator.
    ///
    /// The separator sits on the next segment's background, or on the
    /// terminal default after the last segment.
    pub fn draw(&self, next: Option<&Segment>, shell: Shell) -> String {
        let separator_bg = match next {
            Some(next) => shell.bg(next.bg),
            None => shell.reset(),
        };

        format!(
            "{}{}{}{}{}{}",
            shell.fg(self.fg),
            shell.bg(self.bg),
            self.content,
            separator_bg,
            shell.fg(self.separator_fg),
            self.separator
        )
    }
}
