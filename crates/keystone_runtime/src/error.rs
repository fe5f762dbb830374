//! Errors raised by the shell itself.
//!
//! Store failures are values and are printed, not raised. These variants
//! cover the terminal and the filesystem.

use std::path::PathBuf;

use thiserror::Error;

/// A failure of the shell's own I/O.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The line editor could not read from the terminal.
    #[error("line editor error: {0}")]
    Editor(String),

    /// A command file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    ReadFile {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// Writing output failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Result alias for shell operations.
pub type Result<T> = std::result::Result<T, RuntimeError>;
