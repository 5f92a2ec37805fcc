use std::path::Path;

use super::{Probe, RepoStatus};

/// Mercurial is not supported yet; this probe never claims a directory.
pub struct HgProbe;

impl Probe for HgProbe {
    fn name(&self) -> &'static str {
        "hg"
    }

    fn probe(&self, _cwd: &Path) -> Option<RepoStatus> {
        None
    }
}
