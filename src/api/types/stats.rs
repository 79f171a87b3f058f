//! Daily statistics types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregation granularity for `scan/daily`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DailyFormat {
    #[default]
    #[serde(rename = "day")]
    Day,
    #[serde(rename = "hour")]
    Hour,
    #[serde(rename = "6hour")]
    SixHours,
}

impl DailyFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Hour => "hour",
            Self::SixHours => "6hour",
        }
    }
}

impl std::fmt::Display for DailyFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statistic to aggregate.
///
/// Wire names are mixed case, exactly as Subscan spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DailyCategory {
    #[serde(rename = "transfer")]
    Transfer,
    #[serde(rename = "extrinsic")]
    Extrinsic,
    NewAccount,
    ActiveAccount,
    Treasury,
    TreasurySpend,
    Unbond,
    UnbondKton,
    Fee,
    Bonded,
    BondedKton,
}

impl DailyCategory {
    pub const ALL: [DailyCategory; 11] = [
        Self::Transfer,
        Self::Extrinsic,
        Self::NewAccount,
        Self::ActiveAccount,
        Self::Treasury,
        Self::TreasurySpend,
        Self::Unbond,
        Self::UnbondKton,
        Self::Fee,
        Self::Bonded,
        Self::BondedKton,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transfer => "transfer",
            Self::Extrinsic => "extrinsic",
            Self::NewAccount => "NewAccount",
            Self::ActiveAccount => "ActiveAccount",
            Self::Treasury => "Treasury",
            Self::TreasurySpend => "TreasurySpend",
            Self::Unbond => "Unbond",
            Self::UnbondKton => "UnbondKton",
            Self::Fee => "Fee",
            Self::Bonded => "Bonded",
            Self::BondedKton => "BondedKton",
        }
    }
}

impl std::fmt::Display for DailyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for `scan/daily`.
///
/// Dates serialize as `yyyy-mm-dd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyParams {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub format: DailyFormat,
    pub category: DailyCategory,
}

impl DailyParams {
    /// Daily buckets of `category` between `start` and `end`.
    pub fn new(start: NaiveDate, end: NaiveDate, category: DailyCategory) -> Self {
        Self {
            start,
            end,
            format: DailyFormat::default(),
            category,
        }
    }

    pub fn with_format(mut self, format: DailyFormat) -> Self {
        self.format = format;
        self
    }
}
