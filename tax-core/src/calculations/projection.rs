//! Annual and monthly figures derived from net salary and total tax.

use rust_decimal::Decimal;

use crate::{BracketAllocation, TaxResult};

pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Builds the final [`TaxResult`]. No rounding is applied.
pub fn project(
    annual_net_salary: Decimal,
    annual_taxable_income: Decimal,
    breakdown: Vec<BracketAllocation>,
    total_tax: Decimal,
) -> TaxResult {
    let annual_net_after_tax = annual_net_salary.saturating_sub(total_tax);

    TaxResult {
        annual_net_salary,
        annual_taxable_income,
        breakdown,
        total_tax,
        annual_net_after_tax,
        monthly_net_after_tax: annual_net_after_tax / MONTHS_PER_YEAR,
        monthly_net_salary: annual_net_salary / MONTHS_PER_YEAR,
        monthly_tax: total_tax / MONTHS_PER_YEAR,
    }
}
