//! Configuration layer for the external IP checker.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - `icanhazip.com`, 60 seconds, desktop notifications
//!
//! The request URL is derived from the check service once, during
//! validation, so a malformed service is rejected before any lookup.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod toml_tests;

pub use self::toml::{TomlConfig, default_config_template};
pub use cli::{Cli, Command, NotifierArg};
pub use error::ConfigError;
pub use validated::{ValidatedConfig, service_url, write_default_config};
