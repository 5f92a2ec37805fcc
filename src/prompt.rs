//! Assembling the prompt.
//!
//! Segments always come in the same order: virtualenv, working directory,
//! repository status, then the exit-status marker. Everything read from the
//! process environment lives in [`PromptEnv`] so tests can supply their own.

use std::path::{Path, PathBuf};

use crate::config::Options;
use crate::path::{abbreviate_home, components, truncate};
use crate::render::render;
use crate::segment::Segment;
use crate::styling::{
    CMD_FAILED_BG, CMD_FAILED_FG, CMD_PASSED_BG, CMD_PASSED_FG, CWD_FG, PATH_BG, PATH_FG,
    SEPARATOR_FG, VIRTUAL_ENV_BG, VIRTUAL_ENV_FG,
};
use crate::vcs::{self, Probe};

/// Environment the prompt describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptEnv {
    pub cwd: PathBuf,
    pub home: Option<PathBuf>,
    /// Root of the active Python virtualenv
    pub virtual_env: Option<PathBuf>,
}

impl PromptEnv {
    /// Read `PWD`, `HOME` and `VIRTUAL_ENV`.
    ///
    /// `PWD` is preferred over the process working directory so symlinked
    /// paths show the way the shell sees them.
    pub fn from_process() -> std::io::Result<Self> {
        let cwd = match non_empty_var("PWD") {
            Some(pwd) => PathBuf::from(pwd),
            None => std::env::current_dir()?,
        };

        Ok(Self {
            cwd,
            home: non_empty_var("HOME")
                .map(PathBuf::from)
                .or_else(home::home_dir),
            virtual_env: non_empty_var("VIRTUAL_ENV").map(PathBuf::from),
        })
    }
}

fn non_empty_var(name: &str) -> Option<std::ffi::OsString> {
    std::env::var_os(name).filter(|value| !value.is_empty())
}

/// Builds the segment sequence for one prompt.
pub struct PromptBuilder {
    options: Options,
    env: PromptEnv,
    probes: Vec<Box<dyn Probe>>,
}

impl PromptBuilder {
    pub fn new(options: Options, env: PromptEnv) -> Self {
        Self {
            options,
            env,
            probes: vcs::default_probes(),
        }
    }

    /// Replace the repository probes (git, svn, hg by default).
    pub fn with_probes(mut self, probes: Vec<Box<dyn Probe>>) -> Self {
        self.probes = probes;
        self
    }

    pub fn build(&self) -> Vec<Segment> {
        let mut segments = Vec::new();

        segments.extend(self.virtual_env_segment());
        if self.options.show_path {
            segments.extend(self.path_segments());
        }
        if self.options.show_repo {
            segments.extend(self.repo_segment());
        }
        segments.push(self.exit_segment());

        segments
    }

    /// Build and render in one go.
    pub fn render(&self) -> String {
        render(&self.build(), self.options.shell)
    }

    fn separator(&self) -> char {
        self.options.mode.separator()
    }

    fn virtual_env_segment(&self) -> Option<Segment> {
        let name = self.env.virtual_env.as_deref()?.file_name()?;
        Some(Segment::new(
            format!(" {} ", name.to_string_lossy()),
            VIRTUAL_ENV_FG,
            VIRTUAL_ENV_BG,
            self.separator(),
        ))
    }

    fn path_segments(&self) -> Vec<Segment> {
        let cwd = self.env.cwd.to_string_lossy();
        let home = self.env.home.as_deref().map(Path::to_string_lossy);
        let mut names = components(&abbreviate_home(&cwd, home.as_deref()));

        let options = &self.options;
        let show_parents = !options.cwd_only && options.depth > 1;
        if show_parents {
            truncate(&mut names, options.depth);
        }

        let mut segments = Vec::with_capacity(names.len());
        let innermost = names.pop().unwrap_or_default();

        if show_parents {
            let thin = options.mode.separator_thin();
            segments.extend(names.iter().map(|name| {
                Segment::new(format!(" {name} "), PATH_FG, PATH_BG, thin)
                    .with_separator_fg(SEPARATOR_FG)
            }));
        }

        segments.push(Segment::new(
            format!(" {innermost} "),
            CWD_FG,
            PATH_BG,
            self.separator(),
        ));
        segments
    }

    fn repo_segment(&self) -> Option<Segment> {
        vcs::detect(&self.probes, &self.env.cwd)?.segment(self.separator())
    }

    fn exit_segment(&self) -> Segment {
        let (fg, bg) = if self.options.error {
            (CMD_FAILED_FG, CMD_FAILED_BG)
        } else {
            (CMD_PASSED_FG, CMD_PASSED_BG)
        };
        Segment::new(
            format!(" {} ", self.options.shell.prompt_marker()),
            fg,
            bg,
            self.separator(),
        )
    }
}
