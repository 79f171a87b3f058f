//! Price lookup types.

use serde::{Deserialize, Serialize};

/// Payload for `open/price`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRequest {
    /// Epoch seconds or block number
    pub time: i64,
}

/// Parameters for a price conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceConverterParams {
    /// Amount to convert
    pub value: f64,
    /// Source currency symbol
    #[serde(rename = "from")]
    pub base: String,
    /// Target currency symbol
    pub quote: String,
    /// Epoch seconds or block number; the current time when `None`
    #[serde(rename = "time", skip_serializing_if = "Option::is_none")]
    pub at: Option<i64>,
}

impl PriceConverterParams {
    pub fn new(value: f64, base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            value,
            base: base.into(),
            quote: quote.into(),
            at: None,
        }
    }

    pub fn at(mut self, at: i64) -> Self {
        self.at = Some(at);
        self
    }
}
