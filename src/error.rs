//! Error types for environment adapters and parsing.
//!
//! Resolving and toggling a theme never fail. Errors only surface from the
//! adapters that touch the outside world (files, browser APIs) and from the
//! strict string parse used by command-line input.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a string is not exactly `"light"` or `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid theme '{value}', expected 'light' or 'dark'")]
pub struct ParsePreferenceError {
    pub value: String,
}

/// Failure reported by a [`ThemeEnvironment`](crate::ThemeEnvironment) or while
/// loading configuration.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// Reading or writing the preference file failed.
    #[error("failed to access preference file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The preference map could not be encoded.
    #[error("failed to encode preferences: {0}")]
    Serialize(#[from] serde_json::Error),
    /// A runtime capability (window, storage, document) is missing.
    #[error("{0} is not available")]
    Unavailable(String),
    /// The configuration file exists but is not valid.
    #[error("invalid configuration in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
