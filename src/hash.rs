//! File hashing for `tago --check-hash`
//!
//! Streams the file once, feeding SHA-256 and BLAKE3 side by side.

use crate::error::ApiError;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Hex digests of one file's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileHashes {
    pub path: PathBuf,
    pub size: u64,
    pub sha256: String,
    pub blake3: String,
}

/// Hash the content of the file at `path`.
pub fn hash_file(path: &Path) -> Result<FileHashes, ApiError> {
    let io_err = |source| ApiError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(io_err)?;
    let mut sha = Sha256::new();
    let mut blake = blake3::Hasher::new();
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];
    let mut size = 0u64;

    loop {
        let read = file.read(&mut buffer).map_err(io_err)?;
        if read == 0 {
            break;
        }
        sha.update(&buffer[..read]);
        blake.update(&buffer[..read]);
        size += read as u64;
    }

    Ok(FileHashes {
        path: path.to_path_buf(),
        size,
        sha256: hex::encode(sha.finalize()),
        blake3: blake.finalize().to_hex().to_string(),
    })
}

/// Hash an in-memory buffer.
pub fn hash_bytes(content: &[u8]) -> (String, String) {
    let sha = hex::encode(Sha256::digest(content));
    let blake = blake3::hash(content).to_hex().to_string();
    (sha, blake)
}
