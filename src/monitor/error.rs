//! Error types for the monitor layer.

use crate::checker::FetchError;
use thiserror::Error;

/// Error type for monitor operations.
///
/// Only the baseline lookup can fail fatally; failures after that are
/// reported to the user and otherwise absorbed by the loop.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// The startup lookup failed, so there is nothing to compare against.
    #[error("Failed to get a baseline address: {0}")]
    Baseline(#[source] FetchError),
}
