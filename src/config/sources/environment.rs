//! Environment source: TAGO_<SECTION>__<KEY> variables.
//!
//! `TAGO_DESCRIPTION__ROOT_MARKER=root` sets `description.root_marker`.
//! Logging's own `TAGO_LOG*` variables are read by the logging module.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub const ENV_PREFIX: &str = "TAGO";

/// Add the environment source to builder. Values such as `true` are parsed.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}
