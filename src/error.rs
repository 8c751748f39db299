//! Error types for the tago description resolver.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating description files for a target.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Target not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("{} is not a regular file nor directory", .0.display())]
    InvalidTarget(PathBuf),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResolveError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ResolveError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised while parsing a single description file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{} is not valid UTF-8 (valid up to byte {valid_up_to})", file.display())]
    Encoding { file: PathBuf, valid_up_to: usize },
}

/// Top-level errors surfaced to the binary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Could not find any description files for {}: {reason}", target.display())]
    NothingFound { target: PathBuf, reason: String },
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
