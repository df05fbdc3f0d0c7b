//! Error types for appearance configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//!
//! Does NOT handle:
//! - Errors from the alert component itself (its API is infallible).
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths, etc.).
//! - Dotenv errors NEVER include raw .env line contents.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),

    #[error("Failed to read config file at {path}")]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}")]
    ConfigFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// Only the byte index of the failure is kept, never the offending line.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    pub(crate) fn invalid(var: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            var: var.into(),
            message: message.into(),
        }
    }
}
