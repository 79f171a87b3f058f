//! Transfer query types.

use serde::{Deserialize, Serialize};

use super::common::Pagination;

/// Parameters for `scan/transfers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransfersParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_block: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_block: Option<u64>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl TransfersParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Restrict to an inclusive block range.
    pub fn with_block_range(mut self, from_block: u64, to_block: u64) -> Self {
        self.from_block = Some(from_block);
        self.to_block = Some(to_block);
        self
    }

    pub fn with_page(mut self, row: u32, page: u32) -> Self {
        self.pagination = Pagination::new(row, page);
        self
    }
}
