use std::{io, path::PathBuf, result::Result as StdResult};

use thiserror::Error;

/// Failures surfaced by the schedule, export and configuration layers.
#[derive(Debug, Error)]
pub enum SavingsError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("No savings ledger available. Generate a schedule first.")]
    NoLedgerAvailable,
    #[error("Failed to write calendar file `{}`: {source}", .path.display())]
    ExportWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = StdResult<T, SavingsError>;

impl From<serde_json::Error> for SavingsError {
    fn from(err: serde_json::Error) -> Self {
        SavingsError::Config(err.to_string())
    }
}

impl SavingsError {
    pub(crate) fn export_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SavingsError::ExportWriteFailure {
            path: path.into(),
            source,
        }
    }
}
