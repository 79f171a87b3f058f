//! Block lookup types.

use serde::{Deserialize, Serialize};

/// Parameters for `scan/block`.
///
/// When both fields are set, `block_hash` wins and `block_num` is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockParams {
    /// Block height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_num: Option<u64>,
    /// Block hash (`0x` + 64 hex digits)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,
}

impl BlockParams {
    pub fn by_number(block_num: u64) -> Self {
        Self {
            block_num: Some(block_num),
            block_hash: None,
        }
    }

    pub fn by_hash(block_hash: impl Into<String>) -> Self {
        Self {
            block_num: None,
            block_hash: Some(block_hash.into()),
        }
    }

    pub fn with_number(mut self, block_num: u64) -> Self {
        self.block_num = Some(block_num);
        self
    }

    pub fn with_hash(mut self, block_hash: impl Into<String>) -> Self {
        self.block_hash = Some(block_hash.into());
        self
    }

    /// Apply hash precedence: a hash, when present, replaces the number.
    pub(crate) fn resolved(self) -> Self {
        match self.block_hash {
            Some(hash) => Self::by_hash(hash),
            None => self,
        }
    }
}

/// Payload for `scan/check_hash`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashRequest {
    pub hash: String,
}
