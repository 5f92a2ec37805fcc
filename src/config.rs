//! Prompt options and where they come from.
//!
//! Settings are layered, lowest priority first:
//!
//! 1. Built-in defaults ([`Options::default`])
//! 2. The user config file, `~/.config/powerprompt/config.toml` or
//!    `$POWERPROMPT_CONFIG_PATH`
//! 3. `POWERPROMPT_*` environment variables
//! 4. Command-line flags
//!
//! Each layer is a [`PartialOptions`]; [`Options::resolve`] validates the
//! merged result once.
//!
//! ```toml
//! shell = "bash"
//! mode = "compatible"
//! depth = 4
//! show-repo = true
//! ```

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};
use serde::Deserialize;

use crate::error::PromptError;
use crate::shell::Shell;
use crate::styling::GlyphMode;

/// Path depth used when none is configured (or when it is configured as 0)
pub const DEFAULT_DEPTH: usize = 5;

const ENV_PREFIX: &str = "POWERPROMPT";
const CONFIG_PATH_VAR: &str = "POWERPROMPT_CONFIG_PATH";

/// Fully resolved prompt options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub shell: Shell,
    pub mode: GlyphMode,
    /// The previous command exited non-zero
    pub error: bool,
    /// Maximum number of path segments; 1 or less disables truncation
    pub depth: usize,
    pub show_repo: bool,
    pub show_path: bool,
    /// Show only the innermost directory
    pub cwd_only: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            shell: Shell::default(),
            mode: GlyphMode::default(),
            error: false,
            depth: DEFAULT_DEPTH,
            show_repo: true,
            show_path: true,
            cwd_only: false,
        }
    }
}

/// Command-line switches that toggle which parts of the prompt are shown.
///
/// They overlap (`--cwd-only` also hides the repo, `--repo-only` brings it
/// back), so they are applied one at a time in the order they were given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Visibility {
    CwdOnly,
    RepoOnly,
    NoRepo,
}

impl Options {
    /// Merge `partial` over the defaults and validate it.
    pub fn resolve(partial: PartialOptions) -> Result<Self, PromptError> {
        let defaults = Self::default();

        let shell = match partial.shell.as_deref() {
            Some(name) => Shell::parse(name)?,
            None => defaults.shell,
        };
        let mode = match partial.mode.as_deref() {
            Some(name) => GlyphMode::parse(name)?,
            None => defaults.mode,
        };
        let depth = match partial.depth {
            Some(0) | None => defaults.depth,
            Some(depth) => depth,
        };

        Ok(Self {
            shell,
            mode,
            error: partial.error.unwrap_or(defaults.error),
            depth,
            show_repo: partial.show_repo.unwrap_or(defaults.show_repo),
            show_path: partial.show_path.unwrap_or(defaults.show_path),
            cwd_only: partial.cwd_only.unwrap_or(defaults.cwd_only),
        })
    }

    /// Apply one visibility switch on top of the current state.
    pub fn apply(&mut self, flag: Visibility) {
        match flag {
            Visibility::CwdOnly => {
                self.show_repo = false;
                self.show_path = true;
                self.cwd_only = true;
            }
            Visibility::RepoOnly => {
                self.show_repo = true;
                self.show_path = false;
            }
            Visibility::NoRepo => self.show_repo = false,
        }
    }
}

/// One configuration layer. `None` means "not set here".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PartialOptions {
    pub shell: Option<String>,
    pub mode: Option<String>,
    pub depth: Option<usize>,
    #[serde(alias = "show-repo")]
    pub show_repo: Option<bool>,
    #[serde(alias = "show-path")]
    pub show_path: Option<bool>,
    #[serde(alias = "cwd-only")]
    pub cwd_only: Option<bool>,
    /// Only ever set from the command line
    #[serde(skip)]
    pub error: Option<bool>,
}

impl PartialOptions {
    /// Values set in `other` win.
    pub fn overlay(self, other: PartialOptions) -> PartialOptions {
        PartialOptions {
            shell: other.shell.or(self.shell),
            mode: other.mode.or(self.mode),
            depth: other.depth.or(self.depth),
            show_repo: other.show_repo.or(self.show_repo),
            show_path: other.show_path.or(self.show_path),
            cwd_only: other.cwd_only.or(self.cwd_only),
            error: other.error.or(self.error),
        }
    }
}

/// Location of the user config file.
///
/// `$POWERPROMPT_CONFIG_PATH` wins; otherwise the platform config directory
/// (`~/.config` on Linux and macOS).
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_VAR) {
        return Some(PathBuf::from(path));
    }

    let strategy = choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("powerprompt").join("config.toml"))
}

/// Load the user config file and `POWERPROMPT_*` environment variables.
pub fn load_user() -> Result<PartialOptions, ConfigError> {
    let path = config_path();
    log::debug!("user config: {:?}", path);
    load_from(path.as_deref(), Environment::with_prefix(ENV_PREFIX))
}

/// Load a config file (if it exists) with `env` layered on top.
///
/// The two are deserialized separately and then overlaid: the file spells
/// keys `show-repo` while the environment yields `show_repo`, and a single
/// merged source would hand serde both.
pub fn load_from(path: Option<&Path>, env: Environment) -> Result<PartialOptions, ConfigError> {
    let file = match path {
        Some(path) => Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .build()?
            .try_deserialize()?,
        None => PartialOptions::default(),
    };

    let env: PartialOptions = Config::builder()
        .add_source(env.try_parsing(true))
        .build()?
        .try_deserialize()?;

    Ok(file.overlay(env))
}
