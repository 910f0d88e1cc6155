//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Complete configuration structure.
///
/// Every field is optional so that partial configurations from several
/// sources can be layered; see [`ConfigBuilder`](super::ConfigBuilder).
///
/// # Examples
///
/// ```
/// use fspath::config::{Config, ListingConfig};
/// use fspath::output::OutputFormat;
///
/// let config: Config = serde_yaml::from_str(
///     "output_format: json\nlisting:\n  sort_entries: true\n",
/// ).unwrap();
/// assert_eq!(config.output_format, Some(OutputFormat::Json));
/// assert_eq!(config.listing.unwrap().sort_entries, Some(true));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Output format for reports and listings.
    pub output_format: Option<OutputFormat>,

    /// Directory listing settings.
    pub listing: Option<ListingConfig>,
}

/// Directory listing settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ListingConfig {
    /// Sort entries by name instead of keeping native order.
    pub sort_entries: Option<bool>,

    /// Include entries whose names start with a dot.
    pub show_hidden: Option<bool>,
}

impl Config {
    /// Overlay `other` onto `self`; fields set in `other` win.
    pub fn merge(&mut self, other: Config) {
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if let Some(listing) = other.listing {
            let target = self.listing.get_or_insert_with(Default::default);
            if listing.sort_entries.is_some() {
                target.sort_entries = listing.sort_entries;
            }
            if listing.show_hidden.is_some() {
                target.show_hidden = listing.show_hidden;
            }
        }
    }

    /// The effective output format.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Whether listings are sorted. Defaults to `false`.
    #[must_use]
    pub fn sort_entries(&self) -> bool {
        self.listing
            .as_ref()
            .and_then(|l| l.sort_entries)
            .unwrap_or(false)
    }

    /// Whether listings include hidden entries. Defaults to `true`.
    #[must_use]
    pub fn show_hidden(&self) -> bool {
        self.listing
            .as_ref()
            .and_then(|l| l.show_hidden)
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output_format(), OutputFormat::Human);
        assert!(!config.sort_entries());
        assert!(config.show_hidden());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("colour: true\n");
        assert!(result.is_err());

        let result: Result<Config, _> = serde_yaml::from_str("listing:\n  recursive: true\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_overrides_set_fields_only() {
        let mut base = Config {
            output_format: Some(OutputFormat::Yaml),
            listing: Some(ListingConfig {
                sort_entries: Some(true),
                show_hidden: Some(false),
            }),
        };
        base.merge(Config {
            output_format: None,
            listing: Some(ListingConfig {
                sort_entries: None,
                show_hidden: Some(true),
            }),
        });

        assert_eq!(base.output_format(), OutputFormat::Yaml);
        assert!(base.sort_entries());
        assert!(base.show_hidden());
    }

    #[test]
    fn test_merge_into_empty() {
        let mut base = Config::default();
        base.merge(Config {
            output_format: Some(OutputFormat::Json),
            listing: None,
        });
        assert_eq!(base.output_format, Some(OutputFormat::Json));
        assert!(base.listing.is_none());
    }
}
