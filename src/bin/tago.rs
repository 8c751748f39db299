//! Tago CLI Binary
//!
//! Command-line interface for resolving and printing description files.

use clap::Parser;
use std::io::IsTerminal;
use std::process;
use tago::cli::{Cli, RunContext};
use tago::config::{ConfigLoader, TagoConfig};
use tago::error::ApiError;
use tago::logging::init_logging;
use tracing::{error, info};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and are not failures.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {}", tago::cli::map_error(&e));
            process::exit(1);
        }
    };

    // Initialize logging early
    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Tago CLI starting");

    let color = !cli.no_color && std::io::stdout().is_terminal();
    let context = RunContext::new(config, color);

    match context.execute(&cli.command()) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("ERROR: {}", tago::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Load configuration, then fold CLI flags on top.
fn build_config(cli: &Cli) -> Result<TagoConfig, ApiError> {
    let mut config = match cli.config {
        Some(ref config_path) => ConfigLoader::load_from_file(config_path)?,
        None => ConfigLoader::load()?,
    };

    apply_cli_overrides(cli, &mut config);
    config.validate()?;
    Ok(config)
}

/// Precedence: CLI flags override environment override config file override defaults.
fn apply_cli_overrides(cli: &Cli, config: &mut TagoConfig) {
    if let Some(ref extension) = cli.extension {
        config.description.extension = extension.clone();
    }
    if let Some(ref marker) = cli.root_marker {
        config.description.root_marker = marker.clone();
    }
    if cli.canonicalize {
        config.description.canonicalize = true;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    let logging = &mut config.logging;
    if cli.verbose {
        logging.enabled = true;
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.enabled = true;
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
        if cli.log_output.is_none() {
            logging.output = "file".to_string();
        }
    }
    if cli.no_color {
        logging.color = false;
    }
}
