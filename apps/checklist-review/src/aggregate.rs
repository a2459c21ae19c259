//! Ordering and totals over per-file summaries.

use crate::models::{percent, FileSummary, GlobalSummary, Report};
use std::cmp::Ordering;

/// Sort by completion percentage descending, then file name ascending.
pub fn sort_summaries(summaries: &mut [FileSummary]) {
    summaries.sort_by(|a, b| {
        b.pct
            .partial_cmp(&a.pct)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.file.cmp(&b.file))
    });
}

/// Sum every counter across `summaries`.
pub fn aggregate(summaries: &[FileSummary]) -> GlobalSummary {
    let mut g = summaries
        .iter()
        .fold(GlobalSummary::default(), |mut g, s| {
            g.files += 1;
            g.total += s.total;
            g.done += s.done;
            g.p0 += s.p0;
            g.p1 += s.p1;
            g.p2 += s.p2;
            g.un += s.un;
            g
        });
    g.pct_all = percent(g.done, g.total);
    g
}

/// Sort `summaries` and attach their totals.
pub fn build_report(mut summaries: Vec<FileSummary>) -> Report {
    sort_summaries(&mut summaries);
    let summary = aggregate(&summaries);
    Report {
        files: summaries,
        summary,
    }
}
