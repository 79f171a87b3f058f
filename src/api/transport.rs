//! The transport seam between the request pipeline and the network.
//!
//! [`SubscanClient`](crate::api::SubscanClient) never talks to the network
//! directly. It hands a fully built [`ApiRequest`] to a [`Transport`] and
//! normalizes whatever comes back. The default transport is
//! [`ReqwestTransport`]; any closure with the right signature also works,
//! which is how callers add retries, timeouts or test stubs.
//!
//! ```rust,ignore
//! use subscan::api::{ApiRequest, ReqwestTransport, SubscanClient, Transport};
//!
//! let inner = ReqwestTransport::new()?;
//! let client = SubscanClient::builder("polkadot")
//!     .transport(move |request: &ApiRequest| {
//!         let mut result = inner.send(request);
//!         for _ in 0..2 {
//!             if result.is_ok() {
//!                 break;
//!             }
//!             result = inner.send(request);
//!         }
//!         result
//!     })
//!     .build()?;
//! ```

use http::header::AsHeaderName;
pub use http::{HeaderMap, HeaderValue, Method, StatusCode};
use thiserror::Error;

/// A request ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute URL, including the query string for GET requests.
    pub url: String,
    pub headers: HeaderMap,
    /// JSON body for POST requests.
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// Value of the header `name` if it is visible ASCII.
    pub fn header<K: AsHeaderName>(&self, name: K) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Body decoded as JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|bytes| serde_json::from_slice(bytes).ok())
    }
}

/// Status and body of an HTTP response, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    /// Response with the given status and body text.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// The request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// DNS resolution failed or the connection was refused
    #[error("Connection failed: {0}")]
    Connect(String),

    /// The request or response timed out
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Any other failure while sending or reading the response
    #[error("Request failed: {0}")]
    Request(String),
}

/// Sends an [`ApiRequest`] and returns the raw response.
///
/// Implementations must be blocking. The client may be shared between threads,
/// so transports must be `Send + Sync`.
pub trait Transport: Send + Sync {
    fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError>;
}

impl<F> Transport for F
where
    F: Fn(&ApiRequest) -> Result<RawResponse, TransportError> + Send + Sync,
{
    fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        self(request)
    }
}

#[cfg(feature = "native")]
pub use self::reqwest_transport::ReqwestTransport;

#[cfg(feature = "native")]
mod reqwest_transport {
    use std::time::Duration;

    use super::{ApiRequest, RawResponse, Transport, TransportError};
    use crate::api::error::ApiResult;

    /// Blocking transport backed by [`reqwest::blocking::Client`].
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        http_client: reqwest::blocking::Client,
    }

    impl ReqwestTransport {
        /// Client with connection pooling and no request timeout.
        pub fn new() -> ApiResult<Self> {
            let http_client = reqwest::blocking::Client::builder()
                .timeout(None::<Duration>)
                .pool_max_idle_per_host(10)
                .build()?;
            Ok(Self { http_client })
        }

        /// Use a caller-configured client, e.g. one with a timeout.
        pub fn from_client(http_client: reqwest::blocking::Client) -> Self {
            Self { http_client }
        }
    }

    impl From<reqwest::Error> for TransportError {
        fn from(e: reqwest::Error) -> Self {
            if e.is_timeout() {
                TransportError::Timeout(e.to_string())
            } else if e.is_connect() {
                TransportError::Connect(e.to_string())
            } else {
                TransportError::Request(e.to_string())
            }
        }
    }

    impl Transport for ReqwestTransport {
        fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
            let mut builder = self
                .http_client
                .request(request.method.clone(), &request.url)
                .headers(request.headers.clone());

            if let Some(body) = &request.body {
                builder = builder.body(body.clone());
            }

            let response = builder.send()?;
            let status = response.status();
            // An error status is still reported when its body cannot be read.
            let body = match response.text() {
                Ok(body) => body,
                Err(e) if !status.is_success() => {
                    tracing::warn!("Failed to read error response body: {}", e);
                    String::new()
                }
                Err(e) => return Err(e.into()),
            };

            Ok(RawResponse { status, body })
        }
    }
}
