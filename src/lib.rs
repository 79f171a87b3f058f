//! # Subscan Rust SDK
//!
//! A blocking client for the [Subscan](https://subscan.io) blockchain explorer API.
//!
//! ## Modules
//!
//! - [`api`]: REST API client, request pipeline and parameter types
//! - [`network`]: Base URL template, network names and environment variables
//! - [`shared`]: Shared serde helpers and utilities
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use subscan::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SubscanClient::new(POLKADOT, None)?;
//!
//!     // Latest blocks
//!     let blocks = client.blocks(Pagination::new(10, 1));
//!     println!("{}", blocks.into_value());
//!
//!     // Staking rewards of an account
//!     let rewards = client.staking_reward_slash(AddressPageParams::new("15oF4u..."));
//!     if let Some(message) = rewards.error_message() {
//!         eprintln!("Request failed: {}", message);
//!     }
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// REST API client module.
pub mod api;

/// Network URL constants.
pub mod network;

/// Shared utilities.
pub mod shared;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use subscan::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        SubscanClient, SubscanClientBuilder, ApiError, ApiResult, ApiResponse, ErrorEnvelope,
        // Transport seam
        ApiRequest, HeaderMap, Method, RawResponse, StatusCode, Transport, TransportError,
        // Parameter types
        Pagination, Order, AddressPageParams, AddressRequest, AccountParams, AccountsParams,
        BlockParams,
        ExtrinsicsParams, ExtrinsicId, EventsParams, TransfersParams, DailyParams, DailyFormat,
        DailyCategory, PriceConverterParams, BondListParams, BondStatus, ValidatorsParams,
        VotedParams, NominatorsParams, StashPageParams,
    };

    #[cfg(feature = "native")]
    pub use crate::api::ReqwestTransport;

    // Network constants
    pub use crate::network::{base_url, DARWINIA, KUSAMA, POLKADOT, WESTEND};
}
