//! Output formatting for path reports and directory listings.
//!
//! This module renders [`PathReport`]s and directory entries as human-readable
//! text, JSON, or YAML.

mod formatters;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::path::{DirEntry, PathReport};
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter, YamlFormatter};

/// Trait for rendering path information into a specific output format.
pub trait OutputFormatter {
    /// Render a single path report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_report(&self, report: &PathReport) -> Result<String>;

    /// Render a directory listing.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_entries(&self, entries: &[DirEntry]) -> Result<String>;
}

/// Available output formats.
///
/// # Examples
///
/// ```
/// use fspath::output::OutputFormat;
///
/// let format: OutputFormat = "json".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Human,
    /// JSON.
    Json,
    /// YAML.
    Yaml,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(format!(
                "invalid output format '{s}': expected human, json or yaml"
            )),
        }
    }
}
