//! Description file resolution
//!
//! Given a target, find every description file that applies to it, nearest
//! scope first:
//!
//! 1. the named match next to a file target (`photo.tago` for `photo.jpg`),
//!    or the target itself when it is a description file;
//! 2. the scope root in the anchor directory (`tago.tago` by default);
//! 3. the scope root of every ancestor directory, up to the filesystem root.
//!
//! Ancestors without a scope root are skipped; they never end the walk.

use crate::error::ResolveError;
use crate::resolve::listing::{DirectoryLister, FsLister};
use crate::resolve::path;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSION: &str = "tago";
pub const DEFAULT_ROOT_MARKER: &str = "tago";

/// Description file naming convention and path handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Description file extension, without the dot. Matched case-insensitively.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// File stem of scope-root description files.
    #[serde(default = "default_root_marker")]
    pub root_marker: String,

    /// Resolve symlinks in the target path instead of normalizing lexically.
    #[serde(default)]
    pub canonicalize: bool,
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_root_marker() -> String {
    DEFAULT_ROOT_MARKER.to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            root_marker: default_root_marker(),
            canonicalize: false,
        }
    }
}

impl ResolverConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.extension.is_empty() {
            return Err("Description extension cannot be empty".to_string());
        }
        if self.extension.contains('.') {
            return Err(format!(
                "Description extension '{}' must not contain a dot",
                self.extension
            ));
        }
        if self.root_marker.is_empty() {
            return Err("Root marker cannot be empty".to_string());
        }
        if self.root_marker.contains('/') || self.root_marker.contains('\\') {
            return Err(format!(
                "Root marker '{}' must not contain path separators",
                self.root_marker
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    File,
    Directory,
}

/// Outcome of resolving one target.
#[derive(Debug)]
pub struct Resolution {
    /// Absolute, normalized target path.
    pub target: PathBuf,
    pub kind: TargetKind,
    /// Applicable description files, nearest scope first.
    pub paths: Vec<PathBuf>,
    /// Set when a directory listing failed; `paths` holds what was found before.
    pub interrupted: Option<ResolveError>,
}

impl Resolution {
    pub fn is_complete(&self) -> bool {
        self.interrupted.is_none()
    }
}

/// Walks the filesystem around a target to find its description files.
pub struct PathResolver<L = FsLister> {
    config: ResolverConfig,
    lister: L,
}

impl PathResolver<FsLister> {
    pub fn new(config: ResolverConfig) -> Self {
        Self::with_lister(config, FsLister)
    }
}

impl<L: DirectoryLister> PathResolver<L> {
    pub fn with_lister(config: ResolverConfig, lister: L) -> Self {
        Self { config, lister }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve the description files applying to `target`.
    ///
    /// Fails only when the target cannot be classified. Listing failures end
    /// the walk early and are reported through [`Resolution::interrupted`].
    pub fn resolve(&self, target: &Path) -> Result<Resolution, ResolveError> {
        let metadata = std::fs::metadata(target).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResolveError::NotFound(target.to_path_buf())
            } else {
                ResolveError::io(target, e)
            }
        })?;

        let kind = if metadata.is_file() {
            TargetKind::File
        } else if metadata.is_dir() {
            TargetKind::Directory
        } else {
            return Err(ResolveError::InvalidTarget(target.to_path_buf()));
        };

        let target = if self.config.canonicalize {
            path::canonicalize_path(target)?
        } else {
            path::absolutize(target)?
        };

        let (anchor, anchor_name) = match kind {
            TargetKind::File => {
                let parent = target
                    .parent()
                    .ok_or_else(|| ResolveError::InvalidTarget(target.clone()))?;
                (parent.to_path_buf(), path::stem(&target))
            }
            TargetKind::Directory => (target.clone(), None),
        };

        let self_reference = kind == TargetKind::File && self.is_description_file(&target);

        let mut paths = Vec::new();
        let mut interrupted = None;

        match self.lister.list_files(&anchor) {
            Ok(files) => {
                let (named, root) = self.local_matches(&files, &target, anchor_name);
                let named = if self_reference {
                    Some(target.clone())
                } else {
                    named
                };
                paths.extend(named.clone());
                if root.is_some() && root != named {
                    paths.extend(root);
                }
            }
            Err(e) => {
                if self_reference {
                    paths.push(target.clone());
                }
                interrupted = Some(e);
            }
        }

        if interrupted.is_none() {
            interrupted = self.walk_ancestors(&anchor, &mut paths).err();
        }

        Ok(Resolution {
            target,
            kind,
            paths,
            interrupted,
        })
    }

    /// Named match and scope-root match among the anchor directory's files.
    fn local_matches(
        &self,
        files: &[PathBuf],
        target: &Path,
        anchor_name: Option<&OsStr>,
    ) -> (Option<PathBuf>, Option<PathBuf>) {
        let mut named = None;
        let mut root = None;

        for file in files {
            if file == target || !self.is_description_file(file) {
                continue;
            }
            let stem = path::stem(file);
            if named.is_none() && anchor_name.is_some() && stem == anchor_name {
                named = Some(file.clone());
            }
            if root.is_none() && self.is_root_marker(stem) {
                root = Some(file.clone());
            }
        }

        (named, root)
    }

    /// Append the scope root of every ancestor of `anchor`, nearest first.
    fn walk_ancestors(&self, anchor: &Path, paths: &mut Vec<PathBuf>) -> Result<(), ResolveError> {
        let mut current = anchor;

        while let Some(parent) = current.parent() {
            if parent == current || parent.as_os_str().is_empty() {
                break;
            }

            let files = self.lister.list_files(parent)?;
            if let Some(root) = self.find_scope_root(&files) {
                paths.push(root);
            }

            current = parent;
        }

        Ok(())
    }

    fn find_scope_root(&self, files: &[PathBuf]) -> Option<PathBuf> {
        files
            .iter()
            .find(|file| self.is_description_file(file) && self.is_root_marker(path::stem(file)))
            .cloned()
    }

    fn is_description_file(&self, file: &Path) -> bool {
        path::has_extension(file, &self.config.extension)
    }

    fn is_root_marker(&self, stem: Option<&OsStr>) -> bool {
        stem == Some(OsStr::new(&self.config.root_marker))
    }
}

/// Resolve `target` with the default naming convention.
pub fn resolve(target: &Path) -> Result<Resolution, ResolveError> {
    PathResolver::new(ResolverConfig::default()).resolve(target)
}
