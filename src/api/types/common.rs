//! Types shared by several Subscan endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
pub const DEFAULT_ROW: u32 = 20;

/// Default page number.
pub const DEFAULT_PAGE: u32 = 1;

/// Pagination controls sent with every list endpoint.
///
/// Flattened into the request payload as `row` and `page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Page size
    pub row: u32,
    /// Page number
    pub page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            row: DEFAULT_ROW,
            page: DEFAULT_PAGE,
        }
    }
}

impl Pagination {
    pub fn new(row: u32, page: u32) -> Self {
        Self { row, page }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Asc,
    #[default]
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload with no fields, sent as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmptyRequest {}

/// Payload carrying a single account address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRequest {
    pub address: String,
}

impl AddressRequest {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

/// Payload carrying an account address and pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressPageParams {
    pub address: String,
    #[serde(flatten)]
    pub pagination: Pagination,
}

impl AddressPageParams {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            pagination: Pagination::default(),
        }
    }

    /// Set page size and page number.
    pub fn with_page(mut self, row: u32, page: u32) -> Self {
        self.pagination = Pagination::new(row, page);
        self
    }
}
