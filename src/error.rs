// File: src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the operations that touch the filesystem.
/// Translation itself never fails.
#[derive(Debug, Error)]
pub enum TranslitError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not read or write learned names: {0}")]
    Encode(#[from] bincode::Error),

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not persist {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

pub type Result<T> = std::result::Result<T, TranslitError>;
