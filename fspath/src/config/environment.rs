//! Environment variable handling for configuration overrides.
//!
//! `FSPATH_*` variables override values read from configuration files.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::output::OutputFormat;

/// Overrides the output format.
pub const OUTPUT_FORMAT_ENV: &str = "FSPATH_OUTPUT_FORMAT";

/// Overrides `listing.sort_entries`.
pub const SORT_ENTRIES_ENV: &str = "FSPATH_SORT_ENTRIES";

/// Overrides `listing.show_hidden`.
pub const SHOW_HIDDEN_ENV: &str = "FSPATH_SHOW_HIDDEN";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use fspath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable holds an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(OUTPUT_FORMAT_ENV) {
            let format = val.parse::<OutputFormat>().map_err(|message| Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message,
            })?;
            config.output_format = Some(format);
        }

        if let Ok(val) = env::var(SORT_ENTRIES_ENV) {
            let sort = Self::parse_bool(SORT_ENTRIES_ENV, &val)?;
            config.listing.get_or_insert_with(Default::default).sort_entries = Some(sort);
        }

        if let Ok(val) = env::var(SHOW_HIDDEN_ENV) {
            let show = Self::parse_bool(SHOW_HIDDEN_ENV, &val)?;
            config.listing.get_or_insert_with(Default::default).show_hidden = Some(show);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
