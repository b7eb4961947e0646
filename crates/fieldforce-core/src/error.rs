use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid author tag: {0}")]
    InvalidAuthor(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config value for {field}: {value}")]
    InvalidConfig { field: String, value: String },

    #[error("tracing setup failed: {0}")]
    Tracing(String),
}
