//! Subversion: count of changed paths in the working copy.

use std::path::Path;

use super::{Probe, RepoStatus};
use crate::segment::Segment;
use crate::shell_exec::Cmd;
use crate::styling::{SVN_CHANGES_BG, SVN_CHANGES_FG};

/// Counts status lines that start with a change code.
const COUNT_CHANGES: &str = r#"svn status | grep -c "^[ACDIMRX\!\~]""#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvnStatus {
    pub changes: u32,
}

impl SvnStatus {
    /// Parse the output of the counting pipeline.
    ///
    /// Empty or non-numeric output counts as zero changes.
    pub fn parse(output: &str) -> Self {
        Self {
            changes: output.trim().parse().unwrap_or(0),
        }
    }

    /// Only a working copy with changes gets a segment.
    pub fn segment(&self, separator: char) -> Option<Segment> {
        (self.changes > 0).then(|| {
            Segment::new(
                format!(" {} ", self.changes),
                SVN_CHANGES_FG,
                SVN_CHANGES_BG,
                separator,
            )
        })
    }
}

pub struct SvnProbe;

impl Probe for SvnProbe {
    fn name(&self) -> &'static str {
        "svn"
    }

    fn probe(&self, cwd: &Path) -> Option<RepoStatus> {
        if !cwd.join(".svn").exists() {
            return None;
        }

        // grep exits 1 when it counts zero lines, so the exit status says
        // nothing about whether svn worked. Only stdout matters.
        let stdout = match Cmd::shell(COUNT_CHANGES)
            .current_dir(cwd)
            .context(self.name())
            .run()
        {
            Ok(output) => String::from_utf8_lossy(&output.stdout).into_owned(),
            Err(e) => {
                log::debug!("svn status failed: {e}");
                String::new()
            }
        };

        Some(RepoStatus::Svn(SvnStatus::parse(&stdout)))
    }
}
