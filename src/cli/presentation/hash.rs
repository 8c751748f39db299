//! Hash presentation.

use crate::error::ApiError;
use crate::hash::FileHashes;

pub fn format_hashes_text(hashes: &FileHashes) -> String {
    format!(
        "hashes:\n    sha256: {}\n    blake3: {}",
        hashes.sha256, hashes.blake3
    )
}

pub fn format_hashes_json(hashes: &FileHashes) -> Result<String, ApiError> {
    serde_json::to_string_pretty(hashes)
        .map_err(|e| ApiError::ConfigError(format!("Failed to serialize output: {}", e)))
}
