//! Checker layer for looking up the external address.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`]) and handling responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Looking up the external address ([`AddressSource`], [`HttpAddressSource`])

mod client;
mod error;
mod request;
mod source;

#[cfg(test)]
mod request_tests;

pub use client::ReqwestClient;
pub use error::{FetchError, HttpError};
pub use request::{HttpClient, HttpRequest, HttpResponse};
pub use source::{AddressSource, HttpAddressSource, USER_AGENT_VALUE, normalize};
