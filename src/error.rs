// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DesignLintError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        source: serde_json::Error,
        path: PathBuf,
    },

    #[error("Invalid designlint.toml: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unknown configuration '{0}' (expected \"default\" or \"docv\")")]
    UnknownProfile(String),

    #[error("No bulk error at index {index} ({len} available)")]
    BulkIndex { index: usize, len: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DesignLintError>;

// Allow `?` on std::io::Error by converting to DesignLintError::Io with unknown path.
impl From<std::io::Error> for DesignLintError {
    fn from(source: std::io::Error) -> Self {
        DesignLintError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for DesignLintError {
    fn from(e: walkdir::Error) -> Self {
        DesignLintError::Other(e.to_string())
    }
}

impl From<serde_json::Error> for DesignLintError {
    fn from(source: serde_json::Error) -> Self {
        DesignLintError::Json {
            source,
            path: PathBuf::from("<inline>"),
        }
    }
}
