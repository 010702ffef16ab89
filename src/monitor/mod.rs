//! Monitor layer for detecting external address changes.
//!
//! This module provides:
//! - The baseline/steady-state monitor ([`AddressMonitor`], [`RunningMonitor`])
//! - Per-tick results ([`TickOutcome`])
//! - The stored address ([`MonitorState`])
//! - User-facing texts ([`message`])
//! - Error handling ([`MonitorError`])

mod address;
mod error;
pub mod message;
mod state;


pub use address::{AddressMonitor, RunningMonitor, TickOutcome};
pub use error::MonitorError;
pub use state::MonitorState;
