use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The portion of taxable income that fell into one bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketAllocation {
    pub label: String,
    pub rate: Decimal,
    pub taxable_amount: Decimal,
    pub tax_amount: Decimal,
}

/// Annual and monthly figures for one estimate.
///
/// Values are unrounded; rounding is left to whoever renders them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Annual net salary (ANS).
    pub annual_net_salary: Decimal,
    /// Annual taxable income (ATI).
    pub annual_taxable_income: Decimal,
    /// One entry per configured bracket, in bracket order.
    pub breakdown: Vec<BracketAllocation>,
    pub total_tax: Decimal,

    /// Annual net salary after tax (ANST).
    pub annual_net_after_tax: Decimal,
    /// Monthly net salary after tax (MNST).
    pub monthly_net_after_tax: Decimal,
    /// Monthly net salary (MNS).
    pub monthly_net_salary: Decimal,
    pub monthly_tax: Decimal,
}
