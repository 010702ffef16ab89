//! External IP Checker
//!
//! A library for watching the external (public-facing) IP address of
//! this computer and notifying the user when it changes.

pub mod checker;
pub mod config;
pub mod monitor;
pub mod notify;
