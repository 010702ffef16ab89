//! Periodic external address monitor.
//!
//! [`AddressMonitor`] establishes the baseline and turns into a
//! [`RunningMonitor`], which compares each new lookup against it.

use std::future::Future;
use std::time::Duration;

use super::MonitorError;
use super::message;
use super::state::MonitorState;
use crate::checker::{AddressSource, FetchError};
use crate::notify::Notifier;

/// Result of a single fetch-and-compare cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The lookup returned the stored address.
    Unchanged,
    /// The lookup returned a different address, which is now stored.
    Changed {
        /// Address before the change
        old: String,
        /// Address after the change
        new: String,
    },
    /// The lookup failed; the stored address is untouched.
    Failed,
}

/// Monitor that has not yet established a baseline address.
///
/// # Type Parameters
///
/// * `S` - The [`AddressSource`] used for lookups
/// * `N` - The [`Notifier`] that receives user-facing messages
///
/// # Example
///
/// ```ignore
/// let monitor = AddressMonitor::new(source, notifier, Duration::from_secs(60));
/// let running = monitor.start().await?;
/// running.run(shutdown_signal()).await;
/// ```
#[derive(Debug)]
pub struct AddressMonitor<S, N> {
    source: S,
    notifier: N,
    interval: Duration,
}

impl<S, N> AddressMonitor<S, N>
where
    S: AddressSource,
    N: Notifier,
{
    /// Creates a monitor that checks every `interval`.
    #[must_use]
    pub const fn new(source: S, notifier: N, interval: Duration) -> Self {
        Self {
            source,
            notifier,
            interval,
        }
    }

    /// Performs the baseline lookup and announces the result.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Baseline`] if the lookup fails. The failure
    /// is reported through the notifier before returning.
    pub async fn start(self) -> Result<RunningMonitor<S, N>, MonitorError> {
        match self.source.fetch().await {
            Ok(address) => {
                tracing::info!("Baseline external address: {address}");
                deliver(&self.notifier, &message::baseline(&address));
                Ok(RunningMonitor {
                    source: self.source,
                    notifier: self.notifier,
                    interval: self.interval,
                    state: MonitorState::new(address),
                })
            }
            Err(e) => {
                report_failure(&self.notifier, &e);
                Err(MonitorError::Baseline(e))
            }
        }
    }
}

/// Monitor with an established baseline.
#[derive(Debug)]
pub struct RunningMonitor<S, N> {
    source: S,
    notifier: N,
    interval: Duration,
    state: MonitorState,
}

impl<S, N> RunningMonitor<S, N>
where
    S: AddressSource,
    N: Notifier,
{
    /// Returns the currently stored address.
    #[must_use]
    pub fn current_address(&self) -> &str {
        self.state.current()
    }

    /// Performs one lookup and compares it with the stored address.
    ///
    /// A change is announced with both addresses before the new one is
    /// stored. Failures are reported and leave the state untouched.
    pub async fn tick(&mut self) -> TickOutcome {
        let address = match self.source.fetch().await {
            Ok(address) => address,
            Err(e) => {
                report_failure(&self.notifier, &e);
                return TickOutcome::Failed;
            }
        };

        match self.state.observe(address) {
            None => {
                tracing::debug!("External address unchanged: {}", self.state.current());
                TickOutcome::Unchanged
            }
            Some(old) => {
                let new = self.state.current().to_string();
                tracing::info!("External address changed: {old} -> {new}");
                deliver(&self.notifier, &message::changed(&old, &new));
                TickOutcome::Changed { old, new }
            }
        }
    }

    /// Runs the check loop until `shutdown` resolves.
    ///
    /// The timer is re-armed after each tick completes, so ticks never
    /// overlap. A tick in progress is not interrupted by `shutdown`.
    pub async fn run<F>(mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                biased;

                () = &mut shutdown => {
                    tracing::info!("Shutdown signal received, stopping...");
                    return;
                }

                () = tokio::time::sleep(self.interval) => {
                    self.tick().await;
                }
            }
        }
    }
}

fn deliver<N: Notifier>(notifier: &N, message: &str) {
    if let Err(e) = notifier.notify(message) {
        tracing::error!("Failed to deliver notification: {e}");
    }
}

fn report_failure<N: Notifier>(notifier: &N, error: &FetchError) {
    tracing::warn!("External address lookup failed: {error}");
    if error.is_reportable() {
        deliver(notifier, &message::failure(error));
    }
}
