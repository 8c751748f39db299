//! Merge rules: defaults, override order, conflict handling.

use crate::resolve::resolver::{DEFAULT_EXTENSION, DEFAULT_ROOT_MARKER};
use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Later sources override earlier ones key by key; a table in a later source
/// only replaces the keys it names.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("description.extension", DEFAULT_EXTENSION)?
        .set_default("description.root_marker", DEFAULT_ROOT_MARKER)?
        .set_default("description.canonicalize", false)?
        .set_default("output.format", "text")
}
