//! Command-line interface.
//!
//! Flags are read left to right and later ones win. That matters for the
//! visibility switches, which overlap, so their positions are taken from the
//! raw matches rather than the derived struct.

use std::ffi::OsString;

use clap::parser::ValueSource;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};

use crate::config::{Options, PartialOptions, Visibility};
use crate::error::PromptError;

#[derive(Parser, Debug)]
#[command(
    name = "powerprompt",
    version,
    about = "Powerline-style shell prompt",
    long_about = None,
    args_override_self = true
)]
pub struct Cli {
    /// Show only the current directory name; hides repository status.
    #[arg(long)]
    pub cwd_only: bool,

    /// Shell dialect for escape sequences [bash, zsh]
    #[arg(long, value_name = "SHELL")]
    pub shell: Option<String>,

    /// Separator glyphs [patched, compatible]
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Maximum number of path segments (0 or a non-number for the default)
    #[arg(
        long,
        value_name = "N",
        num_args = 0..=1,
        default_missing_value = "",
        allow_negative_numbers = true
    )]
    pub depth: Option<String>,

    /// Show repository status and hide the path.
    #[arg(long)]
    pub repo_only: bool,

    /// Hide repository status.
    #[arg(long)]
    pub no_repo: bool,

    /// Print shell integration code and exit.
    #[arg(long)]
    pub init: bool,

    /// Log probes and subprocesses to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Exit status of the previous command; anything but `0` marks a failure.
    #[arg(value_name = "STATUS")]
    pub status: Vec<String>,
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Settings given on the command line
    pub overrides: PartialOptions,
    /// Visibility switches in the order they appeared
    pub visibility: Vec<Visibility>,
    pub init: bool,
    pub verbose: bool,
}

impl Invocation {
    /// Resolve options with the command line layered over `base`.
    pub fn options(&self, base: PartialOptions) -> Result<Options, PromptError> {
        let mut options = Options::resolve(base.overlay(self.overrides.clone()))?;
        for &flag in &self.visibility {
            options.apply(flag);
        }
        Ok(options)
    }
}

/// Parse `args` (including the program name).
pub fn parse<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = Cli::command().try_get_matches_from(args)?;
    let cli = Cli::from_arg_matches(&matches)?;

    let mut visibility: Vec<(usize, Visibility)> = [
        ("cwd_only", Visibility::CwdOnly),
        ("repo_only", Visibility::RepoOnly),
        ("no_repo", Visibility::NoRepo),
    ]
    .into_iter()
    .filter_map(|(id, flag)| given_at(&matches, id).map(|index| (index, flag)))
    .collect();
    visibility.sort_by_key(|&(index, _)| index);

    Ok(Invocation {
        overrides: PartialOptions {
            shell: cli.shell,
            mode: cli.mode,
            // A bad depth falls back to the lower layers instead of costing
            // the user their prompt.
            depth: cli.depth.and_then(|depth| depth.trim().parse().ok()),
            error: cli.status.last().map(|status| status != "0"),
            ..PartialOptions::default()
        },
        visibility: visibility.into_iter().map(|(_, flag)| flag).collect(),
        init: cli.init,
        verbose: cli.verbose,
    })
}

/// Position of the last occurrence of a flag given on the command line.
fn given_at(matches: &ArgMatches, id: &str) -> Option<usize> {
    if matches.value_source(id) != Some(ValueSource::CommandLine) {
        return None;
    }
    matches.indices_of(id).and_then(|indices| indices.last())
}
