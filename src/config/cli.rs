//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use super::defaults;
use crate::notify::NotifierKind;

/// External IP Checker
///
/// Periodically checks the external IP address of this computer
/// and notifies you whenever it changes.
#[derive(Debug, Parser)]
#[command(name = "externalipchecker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Interval in seconds on which the external IP check is performed [default: 60]
    #[arg(long, short = 'i', value_name = "SECS")]
    pub interval: Option<u64>,

    /// Service used to check the IP address [default: icanhazip.com]
    #[arg(long, short = 's', value_name = "HOST")]
    pub service: Option<String>,

    /// Where notifications are delivered [default: desktop]
    #[arg(long, value_enum)]
    pub notifier: Option<NotifierArg>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for externalipchecker
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

/// Notification sink argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NotifierArg {
    /// Platform desktop notifications
    Desktop,
    /// Log lines only
    Log,
}

impl From<NotifierArg> for NotifierKind {
    fn from(arg: NotifierArg) -> Self {
        match arg {
            NotifierArg::Desktop => Self::Desktop,
            NotifierArg::Log => Self::Log,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
