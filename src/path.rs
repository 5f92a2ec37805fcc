//! Directory path handling for the prompt.
//!
//! The working directory is shown as one segment per component, with the
//! home directory collapsed to `~` and long paths cut down to `depth`
//! segments by replacing a run in the middle with an ellipsis.

use crate::styling::ELLIPSIS;

/// Replace a leading home directory with `~`.
///
/// Only whole components match, so `/home/al` is not abbreviated inside
/// `/home/alice`.
pub fn abbreviate_home(cwd: &str, home: Option<&str>) -> String {
    let Some(home) = home.map(|h| h.trim_end_matches('/')).filter(|h| !h.is_empty()) else {
        return cwd.to_string();
    };

    match cwd.strip_prefix(home) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => format!("~{rest}"),
        _ => cwd.to_string(),
    }
}

/// Split an (already abbreviated) path into component names.
///
/// A single leading `/` is dropped. Everything else is kept verbatim,
/// including empty names from `//` or a bare `/`.
pub fn components(path: &str) -> Vec<String> {
    let path = path.strip_prefix('/').unwrap_or(path);
    path.split('/').map(str::to_string).collect()
}

/// Shorten `names` to at most `depth` entries by replacing a middle run
/// with a single [`ELLIPSIS`].
///
/// Two leading names are kept when `depth > 4`, one otherwise, and the
/// innermost name always survives. With `depth <= 1` nothing is changed;
/// callers only show the last name in that case.
pub fn truncate(names: &mut Vec<String>, depth: usize) {
    if depth <= 1 || names.len() <= depth {
        return;
    }

    let head = if depth > 4 { 2 } else { 1 };
    // Leave at least the innermost name after the ellipsis.
    let head = head.min(depth - 2);
    let removed = names.len() - depth + 1;
    names.splice(head..head + removed, [ELLIPSIS.to_string()]);
}
