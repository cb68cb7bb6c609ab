//! The closed catalog of valid mortgage terms: posted rates, payment
//! frequencies and amortization lengths. Lookup is by exact canonical
//! name only; there is no partial matching and no lookup by numeric
//! value.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Posted mortgage rates: two families (fixed, variable), each with
/// 1-, 3- and 5-year terms. Bound values are nominal annual rates as
/// decimals (0.0519 = 5.19%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MortgageRate {
    #[serde(rename = "FIXED_5")]
    Fixed5,
    #[serde(rename = "FIXED_3")]
    Fixed3,
    #[serde(rename = "FIXED_1")]
    Fixed1,
    #[serde(rename = "VARIABLE_5")]
    Variable5,
    #[serde(rename = "VARIABLE_3")]
    Variable3,
    #[serde(rename = "VARIABLE_1")]
    Variable1,
}

impl MortgageRate {
    pub const ALL: [MortgageRate; 6] = [
        MortgageRate::Fixed5,
        MortgageRate::Fixed3,
        MortgageRate::Fixed1,
        MortgageRate::Variable5,
        MortgageRate::Variable3,
        MortgageRate::Variable1,
    ];

    /// Nominal annual rate bound to this variant.
    pub fn annual_rate(&self) -> Decimal {
        match self {
            MortgageRate::Fixed5 => dec!(0.0519),
            MortgageRate::Fixed3 => dec!(0.0589),
            MortgageRate::Fixed1 => dec!(0.0599),
            MortgageRate::Variable5 => dec!(0.0649),
            MortgageRate::Variable3 => dec!(0.0669),
            MortgageRate::Variable1 => dec!(0.0679),
        }
    }

    /// Canonical catalog name.
    pub fn name(&self) -> &'static str {
        match self {
            MortgageRate::Fixed5 => "FIXED_5",
            MortgageRate::Fixed3 => "FIXED_3",
            MortgageRate::Fixed1 => "FIXED_1",
            MortgageRate::Variable5 => "VARIABLE_5",
            MortgageRate::Variable3 => "VARIABLE_3",
            MortgageRate::Variable1 => "VARIABLE_1",
        }
    }

    /// Exact-name lookup. The name must match a canonical catalog name
    /// byte for byte; callers wanting case folding normalize first.
    pub fn from_name(name: &str) -> Option<MortgageRate> {
        MortgageRate::ALL.into_iter().find(|r| r.name() == name)
    }
}

/// Qualified catalog-member name, e.g. `MortgageRate.FIXED_5`.
impl fmt::Display for MortgageRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MortgageRate.{}", self.name())
    }
}

/// Payment frequencies. Bound values are payments per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentFrequency {
    Monthly,
    BiWeekly,
    Weekly,
}

impl PaymentFrequency {
    pub const ALL: [PaymentFrequency; 3] = [
        PaymentFrequency::Monthly,
        PaymentFrequency::BiWeekly,
        PaymentFrequency::Weekly,
    ];

    /// Number of payments per year bound to this variant.
    pub fn payments_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::BiWeekly => 26,
            PaymentFrequency::Weekly => 52,
        }
    }

    /// Canonical catalog name.
    pub fn name(&self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "MONTHLY",
            PaymentFrequency::BiWeekly => "BI_WEEKLY",
            PaymentFrequency::Weekly => "WEEKLY",
        }
    }

    /// Exact-name lookup, same contract as [`MortgageRate::from_name`].
    pub fn from_name(name: &str) -> Option<PaymentFrequency> {
        PaymentFrequency::ALL.into_iter().find(|f| f.name() == name)
    }
}

/// Qualified catalog-member name, e.g. `PaymentFrequency.MONTHLY`.
impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PaymentFrequency.{}", self.name())
    }
}

/// Allowed repayment durations in years.
pub const VALID_AMORTIZATION: [u32; 6] = [5, 10, 15, 20, 25, 30];

/// True iff `years` is an allowed amortization length.
pub fn is_valid_amortization(years: u32) -> bool {
    VALID_AMORTIZATION.contains(&years)
}
