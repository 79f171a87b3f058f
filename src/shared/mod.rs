//! Shared utilities used across the API modules.

pub mod serde_util;

/// Current Unix time in whole seconds.
pub fn now_epoch_secs() -> i64 {
    chrono::Utc::now().timestamp()
}
