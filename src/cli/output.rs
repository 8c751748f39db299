//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, ResolveError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Resolve(ResolveError::NotFound(path)) => {
            format!("{}: no such file or directory", path.display())
        }
        ApiError::ConfigError(msg) => format!("configuration error: {}", msg),
        other => other.to_string(),
    }
}
