//! Tago: metadata for files and directories, kept in sidecar description files
//!
//! Description files (`*.tago`) sit next to what they describe. A file's own
//! sidecar applies only to it; a scope-root file (`tago.tago`) applies to its
//! whole directory subtree. Resolution collects every applicable file,
//! nearest scope first, and merging lets nearer scopes override farther ones.

pub mod api;
pub mod cli;
pub mod config;
pub mod description;
pub mod diagnostics;
pub mod error;
pub mod hash;
pub mod logging;
pub mod merge;
pub mod resolve;

#[cfg(test)]
mod test_env;

pub use api::{Description, TagoApi};
pub use description::{parse, Entry, Mapping};
pub use error::{ApiError, ParseError, ResolveError};
pub use merge::merge;
pub use resolve::{resolve, PathResolver, Resolution, ResolverConfig};
