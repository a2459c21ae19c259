//! Error type shared by the report pipeline.
//!
//! Every failure is terminal for a run; the binary prints the message and
//! exits non-zero.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid checklist pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, ReviewError>;
