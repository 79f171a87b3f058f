//! Extrinsic query types.

use serde::{Deserialize, Serialize};

use super::common::Pagination;

/// Parameters for `scan/extrinsics`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtrinsicsParams {
    /// Signed filter (e.g. `"signed"` or `"all"`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed: Option<String>,
    /// Signer address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Pallet name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// Call name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call: Option<String>,
    /// Block height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_num: Option<u64>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl ExtrinsicsParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_signed(mut self, signed: impl Into<String>) -> Self {
        self.signed = Some(signed.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Filter by pallet and call.
    pub fn with_call(mut self, module: impl Into<String>, call: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self.call = Some(call.into());
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn with_block(mut self, block_num: u64) -> Self {
        self.block_num = Some(block_num);
        self
    }

    pub fn with_page(mut self, row: u32, page: u32) -> Self {
        self.pagination = Pagination::new(row, page);
        self
    }
}

/// Identifies a single extrinsic for `scan/extrinsic`.
///
/// Serializes as `{"extrinsic_index": ...}` or `{"hash": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtrinsicId {
    /// Index in `<block>-<position>` form, e.g. `"195906-2"`
    #[serde(rename = "extrinsic_index")]
    Index(String),
    /// Extrinsic hash
    #[serde(rename = "hash")]
    Hash(String),
}

impl ExtrinsicId {
    pub fn index(index: impl Into<String>) -> Self {
        Self::Index(index.into())
    }

    pub fn hash(hash: impl Into<String>) -> Self {
        Self::Hash(hash.into())
    }
}
