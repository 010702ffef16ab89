//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

/// Default check service host.
pub const SERVICE: &str = "icanhazip.com";

/// Default check interval in seconds.
pub const INTERVAL_SECS: u64 = 60;

/// Default output path for `init`.
pub const CONFIG_FILE: &str = "externalipchecker.toml";
