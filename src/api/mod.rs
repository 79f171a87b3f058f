//! REST API client module for Subscan.
//!
//! This module provides a blocking HTTP client for the Subscan explorer API:
//! blocks, extrinsics, events, transfers, accounts, prices and staking.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use subscan::api::{AccountsParams, SubscanClient};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client with default settings
//!     let client = SubscanClient::new("polkadot", Some("my-api-key"))?;
//!
//!     // Chain metadata
//!     let metadata = client.metadata();
//!     println!("Metadata: {:?}", metadata.data());
//!
//!     // First page of accounts
//!     let accounts = client.accounts(AccountsParams::default());
//!     println!("Accounts: {}", accounts.into_value());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder pattern for custom configuration:
//!
//! ```rust,ignore
//! use subscan::api::SubscanClient;
//!
//! let client = SubscanClient::builder("kusama")
//!     .api_key("my-api-key")
//!     .header("X-Custom-Header", "value")
//!     .build()?;
//! ```
//!
//! # Error Handling
//!
//! Remote failures never surface as `Err`. Every call returns an
//! [`ApiResponse`], which is either the decoded body or an error envelope
//! serializing as `{"error": "..."}`:
//!
//! ```rust,ignore
//! use subscan::api::ApiResponse;
//!
//! match client.timestamp() {
//!     ApiResponse::Success(body) => println!("Now: {}", body["data"]),
//!     ApiResponse::Error(e) => println!("Request failed: {}", e),
//! }
//! ```
//!
//! Methods that validate their arguments before sending (`block`,
//! `check_hash`) return [`ApiResult<ApiResponse>`]; an [`ApiError`] there
//! means the request was never sent:
//!
//! ```rust,ignore
//! use subscan::api::{ApiError, BlockParams};
//!
//! match client.block(BlockParams::by_hash("0x1234")) {
//!     Ok(response) => println!("{}", response.into_value()),
//!     Err(ApiError::InvalidHash { field, reason }) => println!("{}: {}", field, reason),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

pub mod client;
pub mod error;
pub mod response;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{SubscanClient, SubscanClientBuilder};
pub use error::{ApiError, ApiResult};
pub use response::{ApiResponse, ErrorEnvelope};
#[cfg(feature = "native")]
pub use transport::ReqwestTransport;
pub use transport::{
    ApiRequest, HeaderMap, HeaderValue, Method, RawResponse, StatusCode, Transport,
    TransportError,
};
pub use types::*;
