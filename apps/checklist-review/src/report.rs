//! Report pipeline: discover, analyze, aggregate.

use crate::aggregate::build_report;
use crate::analyze::analyze_file;
use crate::error::{Result, ReviewError};
use crate::models::Report;
use crate::output::WriteStatus;
use crate::scan::discover;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Build the report for every checklist in `dir` matching `pattern`.
///
/// Fails on the first unreadable file; no partial report is produced.
pub fn run_report(dir: &Path, pattern: &str) -> Result<Report> {
    let summaries = discover(dir, pattern)?
        .iter()
        .map(|p| analyze_file(p))
        .collect::<Result<Vec<_>>>()?;
    Ok(build_report(summaries))
}

/// Compare the report on disk at `out` with the freshly rendered `md`.
///
/// A missing report is stale; any other read failure is an error.
pub fn check_status(out: &Path, md: &str) -> Result<WriteStatus> {
    match fs::read_to_string(out) {
        Ok(existing) if existing == md => Ok(WriteStatus::UpToDate),
        Ok(_) => Ok(WriteStatus::Stale),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(WriteStatus::Stale),
        Err(source) => Err(ReviewError::Read {
            path: out.to_path_buf(),
            source,
        }),
    }
}
