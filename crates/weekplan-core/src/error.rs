use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeekplanError {
    #[error("Task store unavailable: {path}")]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed task store {path}: {message}")]
    DecodeFailure { path: PathBuf, message: String },

    #[error("Failed to encode tasks for {path}: {message}")]
    EncodeFailure { path: PathBuf, message: String },

    #[error("Failed to archive {path}")]
    ArchiveFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl WeekplanError {
    /// Errors a degrading loader may swallow and replace with an empty board.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            WeekplanError::StoreUnavailable { .. } | WeekplanError::DecodeFailure { .. }
        )
    }
}
