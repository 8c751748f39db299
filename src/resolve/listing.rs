//! Directory listing for scope lookups

use crate::error::ResolveError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists the regular files directly inside a directory.
///
/// The resolver only ever asks for one directory level at a time, so this is
/// the single filesystem seam besides the initial stat.
pub trait DirectoryLister {
    /// Return the regular files immediately inside `dir`, sorted by file name.
    ///
    /// Symlinks are reported by their own type and therefore never count as
    /// regular files.
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, ResolveError>;
}

/// Filesystem-backed lister.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, ResolveError> {
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                let source = e.into_io_error().unwrap_or_else(|| {
                    std::io::Error::new(
                        std::io::ErrorKind::Other,
                        format!("Failed to list directory {}", dir.display()),
                    )
                });
                ResolveError::io(path, source)
            })?;

            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}
