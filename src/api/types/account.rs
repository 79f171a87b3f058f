//! Account query types.

use serde::{Deserialize, Serialize};

use super::common::{Order, Pagination};

/// Parameters for `scan/accounts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    /// Field to sort by (e.g. `"balance"`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_field: Option<String>,
    /// Account role filter (e.g. `"validator"`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl AccountsParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(mut self, order: Order, order_field: impl Into<String>) -> Self {
        self.order = Some(order);
        self.order_field = Some(order_field.into());
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn with_page(mut self, row: u32, page: u32) -> Self {
        self.pagination = Pagination::new(row, page);
        self
    }
}

/// Parameters for `open/account`.
///
/// `row` defaults to 0 and `page` is only sent when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountParams {
    pub address: String,
    pub row: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl AccountParams {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            row: 0,
            page: None,
        }
    }

    pub fn with_row(mut self, row: u32) -> Self {
        self.row = row;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}
