//! Data models shared by analysis, aggregation, rendering and printers.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Priority tag found on an unchecked checklist item.
pub enum Priority {
    P0,
    P1,
    P2,
}

impl Priority {
    /// Tags in precedence order; the first one present in a line wins.
    pub const PRECEDENCE: [Priority; 3] = [Priority::P0, Priority::P1, Priority::P2];

    pub fn tag(self) -> &'static str {
        match self {
            Priority::P0 => "P0",
            Priority::P1 => "P1",
            Priority::P2 => "P2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Classification of a single line of a checklist file.
pub enum LineKind {
    /// Not a checkbox line; ignored by the tally.
    NotItem,
    Checked,
    /// Unchecked item with its priority tag, if any.
    Unchecked(Option<Priority>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Per-file tally of checkbox items.
pub struct FileSummary {
    pub file: String,
    pub total: usize,
    pub done: usize,
    pub pct: f64,
    pub p0: usize,
    pub p1: usize,
    pub p2: usize,
    pub un: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// Totals across every analyzed file.
pub struct GlobalSummary {
    pub files: usize,
    pub total: usize,
    pub done: usize,
    pub pct_all: f64,
    pub p0: usize,
    pub p1: usize,
    pub p2: usize,
    pub un: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Sorted per-file summaries plus their global totals.
pub struct Report {
    pub files: Vec<FileSummary>,
    pub summary: GlobalSummary,
}

/// Completion percentage, defined as 0 when there are no items.
pub fn percent(done: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        done as f64 / total as f64 * 100.0
    }
}
