//! Scope resolution
//!
//! Finds the description files that apply to a file or directory by looking
//! next to it and then in every ancestor directory.

pub mod listing;
pub mod path;
pub mod resolver;

pub use listing::{DirectoryLister, FsLister};
pub use resolver::{resolve, PathResolver, Resolution, ResolverConfig, TargetKind};
