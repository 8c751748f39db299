//! Path absolutization and name utilities

use crate::error::ResolveError;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// Make `path` absolute and fold `.` and `..` components lexically.
///
/// Symlinks are not resolved, so a target reached through a symlinked
/// directory keeps that directory as its scope. Trailing separators vanish.
pub fn absolutize(path: &Path) -> Result<PathBuf, ResolveError> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|e| ResolveError::io(path, e))?;
        cwd.join(path)
    };
    Ok(normalize_lexically(&joined))
}

/// Canonicalize a path, resolving symlinks.
///
/// Uses dunce so Windows paths do not come back in `\\?\` form.
pub fn canonicalize_path(path: &Path) -> Result<PathBuf, ResolveError> {
    dunce::canonicalize(path).map_err(|e| ResolveError::io(path, e))
}

/// Fold `.` and `..` without touching the filesystem.
///
/// `..` at the root stays at the root. A relative path that climbs above its
/// start keeps the leading `..` components.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.last(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !matches!(
                    out.last(),
                    Some(Component::RootDir) | Some(Component::Prefix(_))
                ) {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}

/// File name without its last extension (`photo.jpg` -> `photo`).
pub fn stem(path: &Path) -> Option<&OsStr> {
    path.file_stem()
}

/// True when the path's extension equals `extension`, ignoring case.
///
/// A bare `.<extension>` file name counts too, although `Path::extension`
/// reports none for it.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    let ext = match path.extension() {
        Some(ext) => Some(ext),
        None => path
            .file_name()
            .and_then(OsStr::to_str)
            .and_then(|name| name.strip_prefix('.'))
            .map(OsStr::new),
    };

    ext.and_then(OsStr::to_str)
        .map(|ext| ext.to_lowercase() == extension.to_lowercase())
        .unwrap_or(false)
}
