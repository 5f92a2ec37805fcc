//! Colors and glyphs.
//!
//! Prompt segments use 256-color codes that are written raw through the
//! shell's escape template (see [`crate::shell::Shell`]). Messages for the
//! user on stderr go through anstream/anstyle instead, which respect
//! NO_COLOR and terminal detection.

use anstyle::{AnsiColor, Color, Style};

use crate::error::PromptError;

// ============================================================================
// Re-exports from anstream (auto-detecting output)
// ============================================================================

/// Auto-detecting eprintln that respects NO_COLOR, CLICOLOR_FORCE, and terminal capabilities
pub use anstream::eprintln;

// ============================================================================
// Prompt palette (256-color codes)
// ============================================================================

/// Dark grey
pub const PATH_BG: u8 = 237;
/// Light grey
pub const PATH_FG: u8 = 250;
/// Nearly-white grey
pub const CWD_FG: u8 = 254;
pub const SEPARATOR_FG: u8 = 244;

/// Light green
pub const REPO_CLEAN_BG: u8 = 148;
/// Black
pub const REPO_CLEAN_FG: u8 = 0;
/// Pink/red
pub const REPO_DIRTY_BG: u8 = 161;
/// White
pub const REPO_DIRTY_FG: u8 = 15;

pub const CMD_PASSED_BG: u8 = 236;
pub const CMD_PASSED_FG: u8 = 15;
pub const CMD_FAILED_BG: u8 = 161;
pub const CMD_FAILED_FG: u8 = 15;

pub const SVN_CHANGES_BG: u8 = 148;
/// Dark green
pub const SVN_CHANGES_FG: u8 = 22;

/// Mid-tone green
pub const VIRTUAL_ENV_BG: u8 = 35;
pub const VIRTUAL_ENV_FG: u8 = 22;

// ============================================================================
// Glyphs
// ============================================================================

pub const AHEAD_GLYPH: char = '\u{21E1}';
pub const BEHIND_GLYPH: char = '\u{21E3}';
pub const ELLIPSIS: &str = "\u{2026}";

/// Separator glyph set.
///
/// `Patched` needs a font patched with the old powerline code points;
/// `Compatible` uses plain unicode triangles that every font has.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GlyphMode {
    Compatible,
    #[default]
    Patched,
}

impl GlyphMode {
    pub fn parse(name: &str) -> Result<Self, PromptError> {
        name.parse()
            .map_err(|_| PromptError::UnsupportedMode(name.to_string()))
    }

    /// Thick separator drawn between segments of different backgrounds.
    pub fn separator(self) -> char {
        match self {
            GlyphMode::Compatible => '\u{25B6}',
            GlyphMode::Patched => '\u{2B80}',
        }
    }

    /// Thin separator drawn between path components on the same background.
    pub fn separator_thin(self) -> char {
        match self {
            GlyphMode::Compatible => '\u{276F}',
            GlyphMode::Patched => '\u{2B81}',
        }
    }
}

// ============================================================================
// Message styles (stderr)
// ============================================================================

/// Error style (red) - use as `{ERROR}text{ERROR:#}`
pub const ERROR: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));

/// Warning style (yellow) - use as `{WARNING}text{WARNING:#}`
pub const WARNING: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));

/// Error emoji - use with ERROR style: `eprintln!("{ERROR_EMOJI} {ERROR}message{ERROR:#}");`
pub const ERROR_EMOJI: &str = "\u{274C}";

/// Warning emoji - use with WARNING style: `eprintln!("{WARNING_EMOJI} {WARNING}message{WARNING:#}");`
pub const WARNING_EMOJI: &str = "\u{1F7E1}";
