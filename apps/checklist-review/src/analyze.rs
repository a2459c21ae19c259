//! Per-file checkbox tally.

use crate::error::{Result, ReviewError};
use crate::matcher::classify_line;
use crate::models::{percent, FileSummary, LineKind, Priority};
use std::fs;
use std::path::Path;

/// Read `path` and tally its checklist items.
///
/// A file that cannot be read (missing, unreadable, not UTF-8) fails the
/// whole run.
pub fn analyze_file(path: &Path) -> Result<FileSummary> {
    let text = fs::read_to_string(path).map_err(|source| ReviewError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string());
    Ok(analyze_text(&name, &text))
}

/// Tally checklist items in `text`, reporting them under `name`.
pub fn analyze_text(name: &str, text: &str) -> FileSummary {
    let mut s = FileSummary {
        file: name.to_string(),
        total: 0,
        done: 0,
        pct: 0.0,
        p0: 0,
        p1: 0,
        p2: 0,
        un: 0,
    };
    // Any of \n, \r\n or a lone \r ends a line; the empty pieces between
    // \r and \n are not items.
    for line in text.split(|c| c == '\n' || c == '\r') {
        match classify_line(line) {
            LineKind::NotItem => continue,
            LineKind::Checked => s.done += 1,
            LineKind::Unchecked(Some(Priority::P0)) => s.p0 += 1,
            LineKind::Unchecked(Some(Priority::P1)) => s.p1 += 1,
            LineKind::Unchecked(Some(Priority::P2)) => s.p2 += 1,
            LineKind::Unchecked(None) => s.un += 1,
        }
        s.total += 1;
    }
    s.pct = percent(s.done, s.total);
    s
}
