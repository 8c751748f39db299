//! Config loading facade: the one place layers are assembled.

use crate::config::merge::merge_policy;
use crate::config::sources::{environment, global_file};
use crate::config::TagoConfig;
use crate::error::ApiError;
use config::{File, FileFormat};
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, the global config file when present, then the environment.
    pub fn load() -> Result<TagoConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = environment::add_to_builder(builder);
        Self::finish(builder)
    }

    /// Load defaults, the given file (which must exist), then the environment.
    pub fn load_from_file(path: &Path) -> Result<TagoConfig, ApiError> {
        if !path.is_file() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let builder = merge_policy::builder_with_defaults()?
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(true),
            );
        let builder = environment::add_to_builder(builder);
        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<TagoConfig, ApiError> {
        let config: TagoConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
