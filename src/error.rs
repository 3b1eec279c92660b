use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenerateError>;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Failed to write {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("At least one locale provider is required")]
    NoProviders,

    #[error("Failed to serialize person record: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl GenerateError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
