use askama::Template;
use std::fmt;

use crate::config::{DEFAULT_DEPTH, Options, Visibility};
use crate::error::PromptError;
use crate::styling::GlyphMode;

/// Supported shells
///
/// Each dialect has its own way of marking escape sequences as zero-width so
/// the line editor can still compute the prompt length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIter)]
pub enum Shell {
    Bash,
    #[default]
    Zsh,
}

impl Shell {
    /// Parse shell name from string
    pub fn parse(s: &str) -> Result<Self, PromptError> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            _ => Err(PromptError::UnsupportedShell(s.to_string())),
        }
    }

    /// Wrap the body of a CSI sequence (everything after ESC, e.g. `[0m`).
    pub fn wrap(self, body: &str) -> String {
        match self {
            // bash expands `\e` itself when it draws PS1
            Shell::Bash => format!("\\[\\e{body}\\]"),
            Shell::Zsh => format!("%{{\x1b{body}%}}"),
        }
    }

    pub fn fg(self, color: u8) -> String {
        self.color("38", color)
    }

    pub fn bg(self, color: u8) -> String {
        self.color("48", color)
    }

    pub fn reset(self) -> String {
        self.wrap("[0m")
    }

    /// Prompt escape that shows `#` for root and the usual marker otherwise.
    pub fn prompt_marker(self) -> &'static str {
        match self {
            Shell::Bash => "\\$",
            Shell::Zsh => "%#",
        }
    }

    fn color(self, prefix: &str, code: u8) -> String {
        self.wrap(&format!("[{prefix};5;{code}m"))
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shell::Bash => write!(f, "bash"),
            Shell::Zsh => write!(f, "zsh"),
        }
    }
}

/// Shell integration snippet
pub struct ShellInit {
    pub shell: Shell,
    pub cmd: String,
    pub args: String,
}

impl ShellInit {
    /// Build the snippet that re-renders the prompt with `options` before each prompt.
    ///
    /// Only settings that differ from the defaults are spelled out, so the
    /// user config file and `POWERPROMPT_*` variables keep working.
    pub fn new(cmd: impl Into<String>, options: &Options) -> Self {
        let mut args = vec![format!("--shell {}", options.shell)];
        if options.mode != GlyphMode::default() {
            args.push(format!("--mode {}", options.mode));
        }
        if options.depth != DEFAULT_DEPTH {
            args.push(format!("--depth {}", options.depth));
        }
        // Replay the visibility flags in an order that lands on the same state.
        let mut flags = Vec::new();
        let mut show_repo = true;
        if options.cwd_only {
            flags.push(Visibility::CwdOnly);
            show_repo = false;
        }
        if !options.show_path {
            flags.push(Visibility::RepoOnly);
            show_repo = true;
        }
        if show_repo && !options.show_repo {
            flags.push(Visibility::NoRepo);
        }
        args.extend(flags.into_iter().map(|flag| format!("--{flag}")));

        Self {
            shell: options.shell,
            cmd: cmd.into(),
            args: args.join(" "),
        }
    }

    /// Generate shell integration code
    pub fn generate(&self) -> Result<String, askama::Error> {
        match self.shell {
            Shell::Bash => BashTemplate {
                cmd: &self.cmd,
                args: &self.args,
            }
            .render(),
            Shell::Zsh => ZshTemplate {
                cmd: &self.cmd,
                args: &self.args,
            }
            .render(),
        }
    }
}

/// Bash shell template
#[derive(Template)]
#[template(path = "bash.sh", escape = "none")]
struct BashTemplate<'a> {
    cmd: &'a str,
    args: &'a str,
}

/// Zsh shell template
#[derive(Template)]
#[template(path = "zsh.zsh", escape = "none")]
struct ZshTemplate<'a> {
    cmd: &'a str,
    args: &'a str,
}
