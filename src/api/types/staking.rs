//! Staking query types.

use serde::{Deserialize, Serialize};

use super::common::{Order, Pagination};

/// Bond state filter for `wallet/bond_list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BondStatus {
    Unbonding,
    Bonded,
}

/// Parameters for `wallet/bond_list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BondStatus>,
    pub address: String,
    /// Sent as `0` / `1`
    #[serde(
        default,
        with = "crate::shared::serde_util::option_bool_as_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub locked: Option<bool>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl BondListParams {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            status: None,
            address: address.into(),
            locked: None,
            pagination: Pagination::default(),
        }
    }

    pub fn with_status(mut self, status: BondStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = Some(locked);
        self
    }

    pub fn with_page(mut self, row: u32, page: u32) -> Self {
        self.pagination = Pagination::new(row, page);
        self
    }
}

/// Parameters for `scan/staking/validators` and `scan/staking/waiting`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorsParams {
    /// Search key (address or display name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_field: Option<String>,
}

impl ValidatorsParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_order(mut self, order: Order, order_field: impl Into<String>) -> Self {
        self.order = Some(order);
        self.order_field = Some(order_field.into());
        self
    }
}

/// Parameters for `scan/staking/voted`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotedParams {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_field: Option<String>,
}

impl VotedParams {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            order: None,
            order_field: None,
        }
    }

    pub fn with_order(mut self, order: Order, order_field: impl Into<String>) -> Self {
        self.order = Some(order);
        self.order_field = Some(order_field.into());
        self
    }
}

/// Parameters for `scan/staking/nominators`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NominatorsParams {
    /// Validator stash address
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_field: Option<String>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl NominatorsParams {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            order: None,
            order_field: None,
            pagination: Pagination::default(),
        }
    }

    pub fn with_order(mut self, order: Order, order_field: impl Into<String>) -> Self {
        self.order = Some(order);
        self.order_field = Some(order_field.into());
        self
    }

    pub fn with_page(mut self, row: u32, page: u32) -> Self {
        self.pagination = Pagination::new(row, page);
        self
    }
}

/// Payload for `scan/staking/validator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StashRequest {
    pub stash: String,
}

/// Parameters for `scan/staking/validator/bond_stat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StashPageParams {
    pub stash: String,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl StashPageParams {
    pub fn new(stash: impl Into<String>) -> Self {
        Self {
            stash: stash.into(),
            pagination: Pagination::default(),
        }
    }

    pub fn with_page(mut self, row: u32, page: u32) -> Self {
        self.pagination = Pagination::new(row, page);
        self
    }
}
