//! Notification layer for surfacing messages to the user.
//!
//! This module provides:
//! - The [`Notifier`] trait implemented by every sink
//! - Desktop notifications ([`DesktopNotifier`])
//! - Log-only notifications ([`LogNotifier`])
//! - Runtime sink selection ([`NotifierKind`], [`AnyNotifier`])

mod desktop;
mod error;
mod log;

use std::fmt;
use std::str::FromStr;

pub use self::log::LogNotifier;
pub use desktop::DesktopNotifier;
pub use error::NotifyError;

/// Title shown on every notification.
pub const APP_TITLE: &str = "External IP Checker";

/// A sink for human-readable messages.
///
/// Delivery is fire-and-forget: there is no acknowledgment channel.
pub trait Notifier: Send + Sync {
    /// Delivers a message under [`APP_TITLE`].
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] if the underlying mechanism rejects the message.
    fn notify(&self, message: &str) -> Result<(), NotifyError>;
}

/// Which notification sink to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifierKind {
    /// Platform desktop notifications.
    #[default]
    Desktop,
    /// Log lines only (useful for headless machines).
    Log,
}

impl fmt::Display for NotifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Desktop => write!(f, "desktop"),
            Self::Log => write!(f, "log"),
        }
    }
}

impl FromStr for NotifierKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "log" | "stdout" => Ok(Self::Log),
            other => Err(format!("unknown notifier '{other}'")),
        }
    }
}

/// A notifier chosen at runtime from a [`NotifierKind`].
#[derive(Debug, Clone)]
pub enum AnyNotifier {
    /// Desktop sink
    Desktop(DesktopNotifier),
    /// Log sink
    Log(LogNotifier),
}

impl AnyNotifier {
    /// Builds the sink for `kind`.
    #[must_use]
    pub fn from_kind(kind: NotifierKind) -> Self {
        match kind {
            NotifierKind::Desktop => Self::Desktop(DesktopNotifier),
            NotifierKind::Log => Self::Log(LogNotifier),
        }
    }
}

impl Notifier for AnyNotifier {
    fn notify(&self, message: &str) -> Result<(), NotifyError> {
        match self {
            Self::Desktop(n) => n.notify(message),
            Self::Log(n) => n.notify(message),
        }
    }
}
