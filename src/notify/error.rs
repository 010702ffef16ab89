//! Error types for notification delivery.

use thiserror::Error;

/// Error type for notification sinks.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The desktop notification service rejected the message.
    #[error("Desktop notification failed: {0}")]
    Desktop(#[source] notify_rust::error::Error),
}
