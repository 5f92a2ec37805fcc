//! Error types.
//!
//! Only configuration problems are errors. Repository probes that fail are
//! reported as "not this VCS" and never reach the user.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// Shell dialect name that has no escape template
    UnsupportedShell(String),
    /// Separator glyph set that does not exist
    UnsupportedMode(String),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::UnsupportedShell(name) => write!(f, "shell {name} not supported"),
            PromptError::UnsupportedMode(name) => write!(f, "mode {name} not supported"),
        }
    }
}

impl std::error::Error for PromptError {}
