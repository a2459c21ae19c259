//! checklist-review core library.
//!
//! Scans a directory of markdown checklists, tallies checkbox completion and
//! pending priority tags, and renders one aggregated markdown report.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `scan`: Checklist file discovery.
//! - `matcher`: Checkbox line classification.
//! - `analyze`: Per-file tally.
//! - `aggregate`: Sorting and global totals.
//! - `render`: Markdown report rendering and writing.
//! - `report`: The discover/analyze/aggregate pipeline.
//! - `models`: Data models shared across stages.
//! - `output`: Human/JSON console printers.
//! - `utils`: Supporting helpers.
pub mod aggregate;
pub mod analyze;
pub mod cli;
pub mod config;
pub mod error;
pub mod matcher;
pub mod models;
pub mod output;
pub mod render;
pub mod report;
pub mod scan;
pub mod utils;
