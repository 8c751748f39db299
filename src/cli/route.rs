//! CLI route: run context and the single dispatch point. Calls domain services and presentation.

use crate::api::TagoApi;
use crate::cli::parse::Command;
use crate::cli::presentation::{
    format_description_json, format_description_text, format_hashes_json, format_hashes_text,
};
use crate::config::{OutputFormat, TagoConfig};
use crate::diagnostics::Diagnostics;
use crate::error::ApiError;
use crate::hash::hash_file;
use std::path::Path;
use tracing::{debug, info};

/// Runtime context for CLI execution: effective configuration and presentation choices.
pub struct RunContext {
    config: TagoConfig,
    color: bool,
}

impl RunContext {
    /// `color` is whether text output may use ANSI styling at all.
    pub fn new(config: TagoConfig, color: bool) -> Self {
        Self { config, color }
    }

    pub fn config(&self) -> &TagoConfig {
        &self.config
    }

    /// Execute a command and return what should be printed to stdout.
    pub fn execute(&self, command: &Command) -> Result<String, ApiError> {
        match command {
            Command::Describe(target) => self.describe(target),
            Command::CheckHash(target) => self.check_hash(target),
            Command::ShowConfig => self.config.to_toml(),
        }
    }

    fn describe(&self, target: &Path) -> Result<String, ApiError> {
        let api = TagoApi::new(self.config.description.clone());
        let description = api.describe(target)?;

        self.report(&description.diagnostics);
        let description = description.require_usable()?;
        info!(
            target = %description.target.display(),
            sources = description.paths.len(),
            keys = description.mapping.len(),
            "Described target"
        );

        match self.config.output.format {
            OutputFormat::Text => Ok(format_description_text(&description, self.color)),
            OutputFormat::Json => format_description_json(&description),
        }
    }

    fn check_hash(&self, target: &Path) -> Result<String, ApiError> {
        let hashes = hash_file(target)?;
        debug!(path = %target.display(), size = hashes.size, "Hashed file");

        match self.config.output.format {
            OutputFormat::Text => Ok(format_hashes_text(&hashes)),
            OutputFormat::Json => format_hashes_json(&hashes),
        }
    }

    /// Surface warnings. With logging enabled the pipeline already emitted
    /// them through tracing; otherwise they go to stderr directly.
    fn report(&self, diagnostics: &Diagnostics) {
        for diagnostic in diagnostics.iter() {
            debug!(severity = ?diagnostic.severity, "{}", diagnostic);
        }
        if self.config.logging.enabled {
            return;
        }
        for warning in diagnostics.warnings() {
            eprintln!("WARN: {}", warning);
        }
    }
}
