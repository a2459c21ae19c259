//! Checklist discovery: files matching a glob directly inside one directory.

use crate::error::Result;
use glob::{glob_with, MatchOptions, Pattern};
use std::path::{Path, PathBuf};

/// List files in `dir` whose name matches `pattern` (non-recursive).
///
/// Paths come back sorted; a missing directory yields no files. Wildcards
/// never match a leading dot, so hidden files such as `.draft.md` are skipped.
pub fn discover(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    // Only the file-name pattern is a glob; the directory is taken literally.
    let abs_glob = PathBuf::from(Pattern::escape(&dir.to_string_lossy())).join(pattern);
    let pattern = abs_glob.to_string_lossy().to_string();
    let opts = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    // Unreadable entries are skipped, as shell-style glob does.
    let mut targets: Vec<PathBuf> = glob_with(&pattern, opts)?
        .filter_map(|entry| entry.ok())
        .filter(|p| p.is_file())
        .collect();
    targets.sort();
    Ok(targets)
}
