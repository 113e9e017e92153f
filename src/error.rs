//! Crate-wide error type.
//!
//! Components return `std::io::Result` the way the process-plumbing layer
//! they're built on does; `ShellError` is only constructed at the REPL
//! boundary, where an error becomes a user-facing diagnostic line rather
//! than a propagated `Result`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while planning or running one input line.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Empty pipeline stage")]
    EmptyPipelineStage,

    #[error("{0}: command not found")]
    CommandNotFound(String),

    #[error("cd: {path}: No such file or directory")]
    CdNotFound { path: String },

    #[error("history: {path}: {reason}")]
    HistoryIo { path: PathBuf, reason: String },

    #[error("Error executing {name}: {reason}")]
    Spawn { name: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
