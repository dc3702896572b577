#![deny(unsafe_code)]

use std::path::PathBuf;

use roster_model::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read employee data: {0}")]
    Read(#[source] std::io::Error),

    #[error("invalid employee data: {0}")]
    Validation(#[from] ValidationError),
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
