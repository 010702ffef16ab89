//! External address lookup over HTTP.

use http::HeaderValue;
use http::header::USER_AGENT;
use url::Url;

use super::{FetchError, HttpClient, HttpRequest};

/// `User-Agent` sent with every lookup.
pub const USER_AGENT_VALUE: &str =
    "External IP Checker / 1.0 (github.com/dlsniper/externalipchecker)";

/// Trait for looking up the caller's external address.
///
/// # Example
///
/// ```ignore
/// use externalipchecker::checker::{AddressSource, FetchError};
///
/// struct Fixed;
///
/// impl AddressSource for Fixed {
///     async fn fetch(&self) -> Result<String, FetchError> {
///         Ok("203.0.113.5".to_string())
///     }
/// }
/// ```
pub trait AddressSource: Send + Sync {
    /// Performs one lookup and returns the normalized, non-empty address.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the request fails, the service answers
    /// with a non-success status, or the body is not a usable address.
    fn fetch(&self) -> impl std::future::Future<Output = Result<String, FetchError>> + Send;
}

/// Address source that queries a plain-text "what is my IP" service.
///
/// The request is built once at construction and cloned for every lookup.
#[derive(Debug, Clone)]
pub struct HttpAddressSource<H> {
    client: H,
    request: HttpRequest,
}

impl<H> HttpAddressSource<H> {
    /// Creates a source that sends GET requests to `url`.
    #[must_use]
    pub fn new(client: H, url: Url) -> Self {
        let request = HttpRequest::get(url)
            .with_header(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        Self { client, request }
    }

    /// Returns the request template used for every lookup.
    #[must_use]
    pub const fn request(&self) -> &HttpRequest {
        &self.request
    }
}

impl<H: HttpClient> AddressSource for HttpAddressSource<H> {
    async fn fetch(&self) -> Result<String, FetchError> {
        tracing::debug!(url = %self.request.url, "Fetching external address");

        let response = self.client.request(self.request.clone()).await?;
        if !response.is_success() {
            return Err(FetchError::Status(response.status));
        }

        let text = response.body_text().ok_or(FetchError::NotUtf8)?;
        let address = normalize(text);
        if address.is_empty() {
            return Err(FetchError::EmptyBody);
        }

        Ok(address.to_string())
    }
}

/// Strips newline characters from both ends of a response body.
#[must_use]
pub fn normalize(body: &str) -> &str {
    body.trim_matches(['\n', '\r'])
}
