//! Application execution logic.
//!
//! This module wires the configured address source and notifier into the
//! monitor and runs it until a shutdown signal arrives.

use thiserror::Error;
use tokio::signal;

use externalipchecker::checker::{HttpAddressSource, ReqwestClient};
use externalipchecker::config::ValidatedConfig;
use externalipchecker::monitor::{AddressMonitor, MonitorError};
use externalipchecker::notify::AnyNotifier;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The monitor could not start.
    #[error(transparent)]
    Monitor(#[from] MonitorError),
}

/// Executes the main application loop.
///
/// This function:
/// 1. Creates the address source and notifier from configuration
/// 2. Establishes the baseline address (fatal on failure)
/// 3. Checks the address every interval until shutdown (Ctrl+C / SIGTERM)
///
/// # Errors
///
/// Returns an error if the baseline address cannot be fetched.
///
/// # Coverage Note
///
/// This function is excluded from coverage because it requires network
/// access and real signal handling.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let source = create_source(&config);
    let notifier = create_notifier(&config);

    tracing::info!(
        "Checking {} every {}s",
        config.service_url,
        config.interval.as_secs()
    );

    let running = AddressMonitor::new(source, notifier, config.interval)
        .start()
        .await?;

    running.run(shutdown_signal()).await;
    Ok(())
}

/// Creates the HTTP address source from configuration.
fn create_source(config: &ValidatedConfig) -> HttpAddressSource<ReqwestClient> {
    HttpAddressSource::new(ReqwestClient::new(), config.service_url.clone())
}

/// Creates the notification sink from configuration.
fn create_notifier(config: &ValidatedConfig) -> AnyNotifier {
    AnyNotifier::from_kind(config.notifier)
}

/// Returns a future that completes when a shutdown signal is received.
///
/// If a handler cannot be installed, that signal is ignored and the
/// process can still be stopped through the other one.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
