//! Git status from `git status -sb --ignore-submodules`.
//!
//! The short format starts with a branch header followed by one line per
//! changed path:
//!
//! ```text
//! ## main...origin/main [ahead 2, behind 1]
//!  M src/lib.rs
//! ?? notes.txt
//! ```

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::{Probe, RepoStatus};
use crate::segment::Segment;
use crate::shell_exec::Cmd;
use crate::styling::{
    AHEAD_GLYPH, BEHIND_GLYPH, REPO_CLEAN_BG, REPO_CLEAN_FG, REPO_DIRTY_BG, REPO_DIRTY_FG,
};

static BRANCH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^## ([^.\s]*)").unwrap());
static AHEAD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"ahead\s+(\d+)").unwrap());
static BEHIND_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"behind\s+(\d+)").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GitStatus {
    /// Branch name from the header; `None` if the header didn't parse
    pub branch: Option<String>,
    /// Local commits not yet pushed
    pub ahead: Option<u32>,
    /// Upstream commits not yet pulled
    pub behind: Option<u32>,
    /// A tracked file is modified in the index or the worktree
    pub pending: bool,
    /// At least one untracked file
    pub untracked: bool,
}

impl GitStatus {
    /// Parse short-format status output. Empty output means "not a repository".
    ///
    /// Anything in the header that doesn't match is left out rather than
    /// treated as an error.
    pub fn parse(output: &str) -> Option<Self> {
        let output = output.trim();
        if output.is_empty() {
            return None;
        }

        let mut lines = output.lines();
        let header = lines.next().unwrap_or_default().trim();

        let mut status = GitStatus {
            branch: capture(&BRANCH_RE, header).map(str::to_string),
            ahead: capture(&AHEAD_RE, header).and_then(|n| n.parse().ok()),
            behind: capture(&BEHIND_RE, header).and_then(|n| n.parse().ok()),
            ..GitStatus::default()
        };

        for line in lines {
            let bytes = line.as_bytes();
            if bytes.first() == Some(&b'M') || bytes.get(1) == Some(&b'M') {
                status.pending = true;
            } else if bytes.first() == Some(&b'?') {
                status.untracked = true;
            }

            if status.pending && status.untracked {
                break;
            }
        }

        Some(status)
    }

    /// Branch label: ` <branch>[ ⇡N][ ⇣N][ +]`.
    pub fn label(&self) -> String {
        let mut label = format!(" {}", self.branch.as_deref().unwrap_or_default());
        if let Some(ahead) = self.ahead {
            label.push_str(&format!(" {AHEAD_GLYPH}{ahead}"));
        }
        if let Some(behind) = self.behind {
            label.push_str(&format!(" {BEHIND_GLYPH}{behind}"));
        }
        if self.untracked {
            label.push_str(" +");
        }
        label
    }

    /// Dirty (pending changes) is red on white, clean is green on black.
    pub fn segment(&self, separator: char) -> Segment {
        let (fg, bg) = if self.pending {
            (REPO_DIRTY_FG, REPO_DIRTY_BG)
        } else {
            (REPO_CLEAN_FG, REPO_CLEAN_BG)
        };
        Segment::new(self.label(), fg, bg, separator)
    }
}

fn capture<'a>(re: &Regex, header: &'a str) -> Option<&'a str> {
    re.captures(header)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub struct GitProbe;

impl Probe for GitProbe {
    fn name(&self) -> &'static str {
        "git"
    }

    fn probe(&self, cwd: &Path) -> Option<RepoStatus> {
        let output = Cmd::new("git")
            .args(["status", "-sb", "--ignore-submodules"])
            .current_dir(cwd)
            .context(self.name())
            .run()
            .ok()?;

        if !output.status.success() {
            return None;
        }

        GitStatus::parse(&String::from_utf8_lossy(&output.stdout)).map(RepoStatus::Git)
    }
}
