//! Top-level asset categories and their canonical section layouts.

use crate::error::PortfolioError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Top-level asset class (one dashboard tab).
///
/// Every category has its own total, its own grand-total row, and a fixed
/// section ordering returned by [`Category::canonical_sections`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Listed equities
    Stock,
    /// Listed real estate investment funds (FIIs)
    #[serde(alias = "fii")]
    RealEstateFund,
    /// Exchange-traded funds
    Etf,
    /// Fixed income (CDB, treasury, debentures, ...)
    FixedIncome,
    /// Open-ended investment funds
    InvestmentFund,
    /// Crypto assets
    Crypto,
    /// Listed options
    Option,
    /// Directly held real assets (property, land)
    RealAsset,
    /// Private pension plans
    Pension,
    /// Assets held abroad
    International,
    /// Cash reserves
    Cash,
}

impl Category {
    /// Returns all categories in canonical report order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::Stock,
            Self::RealEstateFund,
            Self::Etf,
            Self::FixedIncome,
            Self::InvestmentFund,
            Self::Crypto,
            Self::Option,
            Self::RealAsset,
            Self::Pension,
            Self::International,
            Self::Cash,
        ]
    }

    /// Returns a human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stock => "Stocks",
            Self::RealEstateFund => "Real Estate Funds",
            Self::Etf => "ETFs",
            Self::FixedIncome => "Fixed Income",
            Self::InvestmentFund => "Investment Funds",
            Self::Crypto => "Crypto",
            Self::Option => "Options",
            Self::RealAsset => "Real Assets",
            Self::Pension => "Pension",
            Self::International => "International",
            Self::Cash => "Cash",
        }
    }

    /// Returns the short code used in snapshots and on the command line.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::RealEstateFund => "real_estate_fund",
            Self::Etf => "etf",
            Self::FixedIncome => "fixed_income",
            Self::InvestmentFund => "investment_fund",
            Self::Crypto => "crypto",
            Self::Option => "option",
            Self::RealAsset => "real_asset",
            Self::Pension => "pension",
            Self::International => "international",
            Self::Cash => "cash",
        }
    }

    /// Returns the hardcoded section order for this category.
    ///
    /// Sections are rendered in this order whether or not they hold anything.
    #[must_use]
    pub fn canonical_sections(&self) -> &'static [&'static str] {
        match self {
            Self::Stock => &["value", "growth", "risk"],
            Self::RealEstateFund => &["brick", "paper", "hybrid"],
            Self::Etf => &["brazil", "usa"],
            Self::FixedIncome => &["post_fixed", "pre_fixed", "hybrid"],
            Self::InvestmentFund => &["equity", "multimarket", "fixed_income"],
            Self::Crypto => &["bitcoin", "altcoin", "stablecoin"],
            Self::Option => &["call", "put"],
            Self::RealAsset => &["property", "land", "other"],
            Self::Pension => &["pgbl", "vgbl"],
            Self::International => &["stocks", "reits", "bonds"],
            Self::Cash => &["emergency", "opportunity"],
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "fii" | "fiis" => return Ok(Self::RealEstateFund),
            "stocks" => return Ok(Self::Stock),
            "etfs" => return Ok(Self::Etf),
            _ => {}
        }
        Self::all()
            .iter()
            .copied()
            .find(|c| c.code() == normalized)
            .ok_or_else(|| PortfolioError::UnknownCategory(s.to_string()))
    }
}
