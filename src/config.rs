//! Configuration for Chroma runs.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::num::NonZeroUsize;
use std::path::Path;

use chroma_core::{Error, Result};
use chroma_engine::{DEFAULT_PER_PAGE, Paginator};
use serde::{Deserialize, Serialize};

/// Settings file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "chroma.toml";

/// How views are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Run settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Renderings per page.
    #[serde(default = "default_per_page")]
    pub per_page: usize,

    /// Output format.
    #[serde(default)]
    pub output: OutputFormat,

    /// `tracing-subscriber` filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            output: OutputFormat::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TomlParseFailed`] for malformed TOML and
    /// [`Error::InvalidConfig`] for values that fail validation.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Self =
            toml::from_str(text).map_err(|e| Error::toml_parse_failed(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileReadFailed`] if the file cannot be read, otherwise
    /// as [`Settings::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::file_read_failed(path, e.to_string()))?;
        Self::from_toml_str(&text)
    }

    /// Load `explicit` if given, else [`DEFAULT_CONFIG_FILE`] from `dir` if it
    /// exists, else defaults.
    ///
    /// # Errors
    ///
    /// As [`Settings::load`].
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let candidate = dir.join(DEFAULT_CONFIG_FILE);
                if candidate.is_file() {
                    Self::load(&candidate)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if configuration is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.per_page == 0 {
            return Err(Error::invalid_config("per_page must be greater than 0"));
        }

        if self.log_filter.trim().is_empty() {
            return Err(Error::invalid_config("log_filter must not be empty"));
        }

        Ok(())
    }

    /// Paginator sized by `per_page`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `per_page` is zero.
    pub fn paginator(&self) -> Result<Paginator> {
        NonZeroUsize::new(self.per_page)
            .map(Paginator::new)
            .ok_or_else(|| Error::invalid_config("per_page must be greater than 0"))
    }
}

fn default_per_page() -> usize {
    DEFAULT_PER_PAGE.get()
}

fn default_log_filter() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.per_page, 5);
        assert_eq!(s.output, OutputFormat::Text);
        assert_eq!(s.log_filter, "info");
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let s = Settings::from_toml_str("output = \"json\"").unwrap();
        assert_eq!(s.output, OutputFormat::Json);
        assert_eq!(s.per_page, 5);
    }

    #[test]
    fn test_zero_per_page_rejected() {
        let err = Settings::from_toml_str("per_page = 0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn test_blank_log_filter_rejected() {
        assert!(Settings::from_toml_str("log_filter = \"  \"").is_err());
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = Settings::from_toml_str("per_page = [").unwrap_err();
        assert!(matches!(err, Error::TomlParseFailed { .. }));
    }

    #[test]
    fn test_unknown_output_rejected() {
        assert!(Settings::from_toml_str("output = \"png\"").is_err());
    }

    #[test]
    fn test_paginator_uses_per_page() {
        let s = Settings {
            per_page: 3,
            ..Settings::default()
        };
        assert_eq!(s.paginator().unwrap().per_page().get(), 3);
    }
}
