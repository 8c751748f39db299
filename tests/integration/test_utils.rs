//! Shared test utilities for integration tests
//!
//! Builds throwaway directory trees and filters resolver output down to the
//! part of the filesystem a test owns.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree. Paths are canonical so they compare equal to
/// resolver output even when the system temp dir sits behind a symlink.
pub struct Tree {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl Tree {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = dunce::canonicalize(temp_dir.path()).unwrap();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Resolver output restricted to this tree. Scope roots above the temp
    /// dir belong to the machine, not the test.
    pub fn owned(&self, paths: &[PathBuf]) -> Vec<PathBuf> {
        paths
            .iter()
            .filter(|p| p.starts_with(&self.root))
            .cloned()
            .collect()
    }
}
