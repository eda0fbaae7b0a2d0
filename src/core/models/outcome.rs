//! Per-file outcome model
//!
//! Each target yields a `Result<FileStatus, ProcessError>`. A missing file is
//! a status, not an error; read, decode and write failures are errors that
//! stay inside the report for that one file.

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// What happened to a target that was processed without error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// Content changed (and was written, unless this was a dry run)
    Updated {
        /// Total replacements performed across all rules
        replacements: usize,
    },
    /// Content identical after all rules; nothing written
    Unchanged,
    /// Resolved path does not exist; nothing read or written
    NotFound,
}

/// Failure while processing one target
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The file exists but could not be read
    #[error("failed to read file: {0}")]
    Read(#[source] io::Error),

    /// The file is not valid UTF-8
    #[error("file is not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),

    /// The new content could not be written back
    #[error("failed to write file: {0}")]
    Write(#[source] io::Error),
}

/// Report for one target
#[derive(Debug)]
pub struct FileReport {
    /// Target as written in the configuration
    pub target: String,

    /// Resolved path
    pub path: PathBuf,

    /// Status, or the error that stopped processing of this file
    pub result: Result<FileStatus, ProcessError>,
}

impl FileReport {
    /// Whether the file's content changed
    #[must_use]
    pub const fn is_updated(&self) -> bool {
        matches!(self.result, Ok(FileStatus::Updated { .. }))
    }

    /// Whether processing this file failed
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.result.is_err()
    }
}
