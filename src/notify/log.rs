//! Log-only notification sink.

use super::{APP_TITLE, Notifier, NotifyError};

/// Emits each message as an `info` log line.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) -> Result<(), NotifyError> {
        tracing::info!(title = APP_TITLE, "{message}");
        Ok(())
    }
}
