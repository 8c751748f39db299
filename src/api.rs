//! Describe API
//!
//! The single entry point that turns a target path into its merged metadata:
//! resolve the applicable description files, read and parse each one, then
//! merge them nearest-first. Per-file failures are recorded as diagnostics
//! and the file is skipped.

use crate::description::{parse_with_diagnostics, Mapping};
use crate::diagnostics::Diagnostics;
use crate::error::{ApiError, ResolveError};
use crate::merge::merge;
use crate::resolve::{DirectoryLister, FsLister, PathResolver, ResolverConfig, TargetKind};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Merged metadata for one target.
#[derive(Debug)]
pub struct Description {
    /// Absolute, normalized target path.
    pub target: PathBuf,
    pub kind: TargetKind,
    /// Description files found, nearest scope first, including skipped ones.
    pub paths: Vec<PathBuf>,
    /// Final mapping after nearest-scope-wins merging.
    pub mapping: Mapping,
    pub diagnostics: Diagnostics,
    /// Listing error that cut the resolver's walk short, if any.
    pub interrupted: Option<ResolveError>,
}

impl Description {
    pub fn found_any(&self) -> bool {
        !self.paths.is_empty()
    }

    /// Fail when the walk was interrupted before finding anything.
    ///
    /// An interrupted walk that found some files is still usable; a complete
    /// walk that found nothing is not an error either.
    pub fn require_usable(self) -> Result<Self, ApiError> {
        match (&self.interrupted, self.found_any()) {
            (Some(e), false) => Err(ApiError::NothingFound {
                target: self.target.clone(),
                reason: e.to_string(),
            }),
            _ => Ok(self),
        }
    }
}

/// Describe service
pub struct TagoApi<L = FsLister> {
    resolver: PathResolver<L>,
}

impl TagoApi<FsLister> {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            resolver: PathResolver::new(config),
        }
    }
}

impl<L: DirectoryLister> TagoApi<L> {
    pub fn with_resolver(resolver: PathResolver<L>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &PathResolver<L> {
        &self.resolver
    }

    /// Resolve, read, parse and merge the description files for `target`.
    pub fn describe(&self, target: &Path) -> Result<Description, ApiError> {
        let resolution = self.resolver.resolve(target)?;
        debug!(
            target = %resolution.target.display(),
            found = resolution.paths.len(),
            complete = resolution.is_complete(),
            "Resolved description files"
        );

        let mut diagnostics = Diagnostics::new();
        if let Some(e) = &resolution.interrupted {
            warn!("Error while finding description files: {}", e);
            diagnostics.warn(None, format!("error while finding description files: {}", e));
        }

        if resolution.paths.is_empty() && resolution.is_complete() {
            diagnostics.note(None, "no description files apply to this target");
        }

        let mappings: Vec<Mapping> = resolution
            .paths
            .iter()
            .filter_map(|path| read_description(path, &mut diagnostics))
            .collect();

        Ok(Description {
            target: resolution.target,
            kind: resolution.kind,
            paths: resolution.paths,
            mapping: merge(mappings),
            diagnostics,
            interrupted: resolution.interrupted,
        })
    }
}

/// Read and parse one description file, recording failures as warnings.
fn read_description(path: &Path, diagnostics: &mut Diagnostics) -> Option<Mapping> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path = %path.display(), "Could not open description file: {}", e);
            diagnostics.warn(Some(path), format!("could not open: {}", e));
            return None;
        }
    };

    match parse_with_diagnostics(&bytes, path, diagnostics) {
        Ok(mapping) => {
            debug!(path = %path.display(), entries = mapping.len(), "Parsed description file");
            Some(mapping)
        }
        Err(e) => {
            warn!(path = %path.display(), "Could not parse description file: {}", e);
            diagnostics.warn(Some(path), format!("could not parse: {}", e));
            None
        }
    }
}
