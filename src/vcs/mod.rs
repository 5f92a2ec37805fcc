//! Version control status probes.
//!
//! Each probe looks at the working directory and either claims it
//! (returning a [`RepoStatus`]) or passes. Probes run in order and the first
//! one that claims the directory wins, even if its status turns into no
//! segment at all.

use std::path::Path;

use crate::segment::Segment;

pub mod git;
pub mod hg;
pub mod svn;

pub use git::{GitProbe, GitStatus};
pub use hg::HgProbe;
pub use svn::{SvnProbe, SvnStatus};

/// A check for one version control system.
pub trait Probe {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// `None` means "not this VCS" and lets the next probe run.
    fn probe(&self, cwd: &Path) -> Option<RepoStatus>;
}

/// Status reported by the probe that claimed the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoStatus {
    Git(GitStatus),
    Svn(SvnStatus),
}

impl RepoStatus {
    /// The segment to show for this status, if any.
    pub fn segment(&self, separator: char) -> Option<Segment> {
        match self {
            RepoStatus::Git(status) => Some(status.segment(separator)),
            RepoStatus::Svn(status) => status.segment(separator),
        }
    }
}

/// Git, then SVN, then Mercurial.
pub fn default_probes() -> Vec<Box<dyn Probe>> {
    vec![Box::new(GitProbe), Box::new(SvnProbe), Box::new(HgProbe)]
}

/// Run `probes` in order and stop at the first one that claims `cwd`.
pub fn detect(probes: &[Box<dyn Probe>], cwd: &Path) -> Option<RepoStatus> {
    probes.iter().find_map(|probe| {
        let status = probe.probe(cwd);
        match &status {
            Some(status) => log::debug!("{} probe: {:?}", probe.name(), status),
            None => log::debug!("{} probe: not a repository", probe.name()),
        }
        status
    })
}
