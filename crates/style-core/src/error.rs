use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the style-core crate and dependents.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("unable to open input {}: {source}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to create output {}: {source}", .path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, StyleError>;
