//! Request parameter types for the Subscan API.
//!
//! One struct per payload shape. Optional fields are skipped when `None`, so
//! the API only sees the filters the caller actually set.

pub mod account;
pub mod block;
pub mod common;
pub mod event;
pub mod extrinsic;
pub mod price;
pub mod staking;
pub mod stats;
pub mod transfer;

// Re-export all types for convenience
pub use account::*;
pub use block::*;
pub use common::*;
pub use event::*;
pub use extrinsic::*;
pub use price::*;
pub use staking::*;
pub use stats::*;
pub use transfer::*;
