//! Error handling for the repoforge core library.
//!
//! This module defines the core error type `Error` used by configuration loading and
//! project layout resolution, along with a convenient `Result` type alias. It uses
//! `thiserror` and implements conversions from the common error types.
//!
//! # Examples
//!
//! ```
//! use repoforge::core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::config("app_dir must not be empty"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for core operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_config_creation() {
        let error = Error::config("Invalid configuration");
        assert!(matches!(error, Error::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
        assert!(error.to_string().contains("I/O error"));
        assert!(error.to_string().contains("File not found"));
    }

    #[test]
    fn test_error_from_toml_error() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("app_dir = ");
        let error = Error::ConfigParse {
            path: PathBuf::from("repoforge.toml"),
            source: parsed.unwrap_err(),
        };
        assert!(error.to_string().contains("repoforge.toml"));
    }
}
