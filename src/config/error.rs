//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The check service cannot be turned into a request URL.
    #[error("Invalid check service '{service}': {reason}")]
    InvalidService {
        /// The service as given
        service: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid duration value.
    #[error("Invalid duration for {field}: {reason}")]
    InvalidDuration {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Unknown notification sink name.
    #[error("Invalid notifier '{value}': expected desktop or log")]
    InvalidNotifier {
        /// The invalid value provided
        value: String,
    },
}

impl ConfigError {
    /// Creates an `InvalidService` error.
    #[must_use]
    pub fn invalid_service(service: &str, reason: impl Into<String>) -> Self {
        Self::InvalidService {
            service: service.to_string(),
            reason: reason.into(),
        }
    }
}
