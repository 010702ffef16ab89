//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::notify::NotifierKind;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    /// Check service as configured
    pub service: String,

    /// Request URL derived from `service`
    pub service_url: Url,

    /// Time between checks
    pub interval: Duration,

    /// Notification sink
    pub notifier: NotifierKind,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ service_url: {}, interval: {}s, notifier: {} }}",
            self.service_url,
            self.interval.as_secs(),
            self.notifier,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values, which take
    /// precedence over built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The check service cannot form a valid URL
    /// - The interval is zero
    /// - The notifier name in the config file is unknown
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let service = cli
            .service
            .as_deref()
            .or_else(|| toml.and_then(|t| t.check.service.as_deref()))
            .unwrap_or(defaults::SERVICE)
            .trim()
            .to_string();

        let service_url = service_url(&service)?;
        let interval = Self::resolve_interval(cli, toml)?;
        let notifier = Self::resolve_notifier(cli, toml)?;

        Ok(Self {
            service,
            service_url,
            interval,
            notifier,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_interval(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .interval
            .or_else(|| toml.and_then(|t| t.check.interval))
            .unwrap_or(defaults::INTERVAL_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "interval",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }

    fn resolve_notifier(cli: &Cli, toml: Option<&TomlConfig>) -> Result<NotifierKind, ConfigError> {
        if let Some(arg) = cli.notifier {
            return Ok(arg.into());
        }

        let Some(value) = toml.and_then(|t| t.notify.sink.as_deref()) else {
            return Ok(NotifierKind::default());
        };

        value.parse().map_err(|_| ConfigError::InvalidNotifier {
            value: value.to_string(),
        })
    }
}

/// Builds the request URL for a check service.
///
/// A bare host (optionally with a path) is queried over plain HTTP. An
/// explicit `http://` or `https://` URL is used as given.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidService`] if the result is not a valid
/// HTTP(S) URL with a host.
pub fn service_url(service: &str) -> Result<Url, ConfigError> {
    if service.is_empty() {
        return Err(ConfigError::invalid_service(service, "must not be empty"));
    }

    let candidate = if service.contains("://") {
        service.to_string()
    } else {
        format!("http://{service}")
    };

    let url =
        Url::parse(&candidate).map_err(|e| ConfigError::invalid_service(service, e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::invalid_service(
            service,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(ConfigError::invalid_service(service, "missing host"));
    }

    Ok(url)
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
