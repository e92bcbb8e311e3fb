// error.rs
use std::{io, path::PathBuf};
use thiserror::Error;

/// Error types for find operations
///
/// Only problems at the API boundary surface as errors. Anomalies met while
/// walking the tree (unreadable directories, vanished entries) are logged and
/// skipped instead.
#[derive(Error, Debug)]
pub enum GlobError {
    /// I/O error, e.g. the current directory could not be determined
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Regex compilation error
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Base directory is not valid UTF-8
    #[error("Path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
}
