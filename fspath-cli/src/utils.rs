//! Utility functions for CLI operations.
//!
//! Configuration loading, path assembly from positional segments, and
//! display helpers shared across commands.

use std::path::{Path, PathBuf};

use fspath::config::Config;
use fspath::{ConfigBuilder, FsPath, OutputFormat};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Output format requested on the command line.
    pub format: Option<OutputFormat>,

    /// Override the user configuration directory.
    pub config_dir: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref dir) = global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    builder
        .with_config(Config {
            output_format: global.format,
            listing: None,
        })
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Join positional segments into a path; no segments means `.`.
pub fn build_path(segments: &[String]) -> FsPath {
    FsPath::new(segments)
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}
