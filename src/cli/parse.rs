//! CLI parse: clap types for tago. No behavior; definitions only.

use crate::config::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Tago - show the metadata description files attach to a file or directory
#[derive(Debug, Parser)]
#[command(name = "tago", version)]
#[command(about = "Show the metadata that description files attach to a file or directory")]
pub struct Cli {
    /// File or directory to describe
    #[arg(required_unless_present = "show_config")]
    pub target: Option<PathBuf>,

    /// Check file hash instead
    #[arg(short = 'c', long)]
    pub check_hash: bool,

    /// Output format (text or json)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Description file extension (default: tago)
    #[arg(long)]
    pub extension: Option<String>,

    /// File stem of scope-root description files (default: tago)
    #[arg(long)]
    pub root_marker: Option<String>,

    /// Resolve symlinks in the target path before looking for description files
    #[arg(long)]
    pub canonicalize: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub show_config: bool,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// What a parsed command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Describe(PathBuf),
    CheckHash(PathBuf),
    ShowConfig,
}

impl Cli {
    pub fn command(&self) -> Command {
        match (&self.target, self.show_config, self.check_hash) {
            (_, true, _) | (None, _, _) => Command::ShowConfig,
            (Some(target), false, true) => Command::CheckHash(target.clone()),
            (Some(target), false, false) => Command::Describe(target.clone()),
        }
    }
}
