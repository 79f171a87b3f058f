//! Event query types.

use serde::{Deserialize, Serialize};

use super::common::Pagination;

/// Parameters for `scan/events`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl EventsParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn with_call(mut self, call: impl Into<String>) -> Self {
        self.call = Some(call.into());
        self
    }

    pub fn with_block(mut self, block_number: u64) -> Self {
        self.block_number = Some(block_number);
        self
    }

    pub fn with_page(mut self, row: u32, page: u32) -> Self {
        self.pagination = Pagination::new(row, page);
        self
    }
}

/// Payload for `scan/event`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRequest {
    /// Index in `<block>-<position>` form
    pub event_index: String,
}

/// Payload for `scan/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Block number, hash, extrinsic index or account address
    pub key: String,
}
