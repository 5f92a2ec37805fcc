// Mock executables placed ahead of the real ones on PATH.
//
// Mocks are `#!/bin/sh` scripts, so these helpers are Unix-only.

use std::ffi::OsString;
use std::path::Path;

/// Write an executable script called `name` into `bin_dir`.
#[cfg(unix)]
pub fn write_mock_script(bin_dir: &Path, name: &str, script: &str) {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    fs::create_dir_all(bin_dir).unwrap();
    let script_path = bin_dir.join(name);
    fs::write(&script_path, script).unwrap();
    fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755)).unwrap();
}

/// `PATH` with `bin_dir` searched first.
pub fn path_with(bin_dir: &Path) -> OsString {
    let mut paths = vec![bin_dir.to_path_buf()];
    if let Some(existing) = std::env::var_os("PATH") {
        paths.extend(std::env::split_paths(&existing));
    }
    std::env::join_paths(paths).expect("PATH entry contains a separator")
}
