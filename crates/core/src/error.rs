//! Core error types for Chroma operations using Railway-Oriented Programming.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for Chroma operations.
#[derive(Debug, Error)]
pub enum Error {
    // Computation errors
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error(
        "palette exhausted: {class_count} color classes exceed the {palette_size}-color palette"
    )]
    PaletteOverflow {
        class_count: usize,
        palette_size: usize,
    },

    #[error("color mapping failed: {reason}")]
    Mapping { reason: String },

    // I/O errors
    #[error("failed to read file '{path}': {reason}")]
    FileReadFailed { path: PathBuf, reason: String },

    // Parsing errors
    #[error("JSON parse error: {reason}")]
    JsonParseFailed { reason: String },

    #[error("JSON encode error: {reason}")]
    JsonEncodeFailed { reason: String },

    #[error("TOML parse error: {reason}")]
    TomlParseFailed { reason: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // Generic I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid input error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create a palette overflow error.
    #[must_use]
    pub const fn palette_overflow(class_count: usize, palette_size: usize) -> Self {
        Self::PaletteOverflow {
            class_count,
            palette_size,
        }
    }

    /// Create a color mapping error.
    pub fn mapping(reason: impl Into<String>) -> Self {
        Self::Mapping {
            reason: reason.into(),
        }
    }

    /// Create a file read error.
    pub fn file_read_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FileReadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a JSON parse error.
    pub fn json_parse_failed(reason: impl Into<String>) -> Self {
        Self::JsonParseFailed {
            reason: reason.into(),
        }
    }

    /// Create a JSON encode error.
    pub fn json_encode_failed(reason: impl Into<String>) -> Self {
        Self::JsonEncodeFailed {
            reason: reason.into(),
        }
    }

    /// Create a TOML parse error.
    pub fn toml_parse_failed(reason: impl Into<String>) -> Self {
        Self::TomlParseFailed {
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Whether the error was caused by caller-supplied data rather than the environment.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::PaletteOverflow { .. } | Self::Mapping { .. }
        )
    }
}
