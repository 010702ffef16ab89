//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Check configuration section
    #[serde(default)]
    pub check: CheckSection,

    /// Notification configuration section
    #[serde(default)]
    pub notify: NotifySection,
}

/// Check configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckSection {
    /// Host (or URL) of the IP check service
    pub service: Option<String>,

    /// Check interval in seconds
    pub interval: Option<u64>,
}

/// Notification configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotifySection {
    /// Notification sink: "desktop" or "log"
    pub sink: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# External IP Checker Configuration File

[check]
# Service used to check the IP address (default: icanhazip.com)
# A bare host is queried over plain HTTP; an explicit http:// or https:// URL is used as-is.
service = "icanhazip.com"

# Interval in seconds on which the check is performed (default: 60)
interval = 60

[notify]
# Where notifications are delivered: "desktop" or "log" (default: desktop)
# sink = "desktop"
"#
    .to_string()
}
