//! Desktop notification sink backed by notify-rust.

use notify_rust::Notification;

use super::{APP_TITLE, Notifier, NotifyError};

/// Shows each message as a platform desktop notification.
///
/// Uses [`APP_TITLE`] as both application name and summary, with the
/// message as the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    fn build(message: &str) -> Notification {
        let mut notification = Notification::new();
        notification
            .appname(APP_TITLE)
            .summary(APP_TITLE)
            .body(message);
        notification
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, message: &str) -> Result<(), NotifyError> {
        Self::build(message)
            .show()
            .map(drop)
            .map_err(NotifyError::Desktop)
    }
}
