use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Statutory rates and floors applied before the bracket schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxRules {
    /// Share of pensionable pay deducted when automatic pension is enabled.
    pub pension_rate: Decimal,
    /// Minimum consolidated relief, in currency units.
    pub consolidated_relief_floor: Decimal,
    /// Consolidated relief as a share of annual net salary, when above the floor.
    pub consolidated_relief_rate: Decimal,
    pub additional_relief_rate: Decimal,
}

impl Default for TaxRules {
    fn default() -> Self {
        Self {
            pension_rate: Decimal::new(8, 2),
            consolidated_relief_floor: Decimal::from(200_000),
            consolidated_relief_rate: Decimal::new(1, 2),
            additional_relief_rate: Decimal::new(20, 2),
        }
    }
}
