//! CLI error types.

use carteira_engine::PortfolioError;
use std::path::PathBuf;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Snapshot file could not be read.
    #[error("Cannot read {path}: {source}")]
    Read {
        /// Path of the file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Snapshot file is not a valid snapshot.
    #[error("Invalid snapshot {path}: {source}")]
    Snapshot {
        /// Path of the file.
        path: PathBuf,
        /// Decoding error.
        source: PortfolioError,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// `check --strict` found issues.
    #[error("{0} issue(s) found in snapshot")]
    IssuesFound(usize),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
