//! Statutory reliefs reducing annual net salary to annual taxable income.
//!
//! - Consolidated relief: the greater of a fixed floor and a share of ANS.
//! - Additional relief: a flat share of ANS.
//!
//! Taxable income is ANS less both reliefs, never below zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::TaxRules;
use crate::calculations::common::{max, non_negative};

/// Relief amounts and the resulting taxable income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reliefs {
    pub consolidated_relief: Decimal,
    pub additional_relief: Decimal,
    pub annual_taxable_income: Decimal,
}

#[derive(Debug, Clone)]
pub struct ReliefCalculator<'a> {
    rules: &'a TaxRules,
}

impl<'a> ReliefCalculator<'a> {
    pub fn new(rules: &'a TaxRules) -> Self {
        Self { rules }
    }

    pub fn calculate(
        &self,
        annual_net_salary: Decimal,
    ) -> Reliefs {
        let consolidated_relief = self.consolidated_relief(annual_net_salary);
        let additional_relief = self.additional_relief(annual_net_salary);
        let annual_taxable_income = non_negative(
            annual_net_salary
                .saturating_sub(consolidated_relief)
                .saturating_sub(additional_relief),
        );

        debug!(
            %consolidated_relief,
            %additional_relief,
            %annual_taxable_income,
            "applied reliefs"
        );

        Reliefs {
            consolidated_relief,
            additional_relief,
            annual_taxable_income,
        }
    }

    fn consolidated_relief(
        &self,
        annual_net_salary: Decimal,
    ) -> Decimal {
        max(
            self.rules.consolidated_relief_floor,
            annual_net_salary.saturating_mul(self.rules.consolidated_relief_rate),
        )
    }

    fn additional_relief(
        &self,
        annual_net_salary: Decimal,
    ) -> Decimal {
        annual_net_salary.saturating_mul(self.rules.additional_relief_rate)
    }
}

/// Computes annual taxable income from ANS using the statutory [`TaxRules`].
pub fn compute_taxable_income(annual_net_salary: Decimal) -> Decimal {
    let rules = TaxRules::default();
    ReliefCalculator::new(&rules)
        .calculate(annual_net_salary)
        .annual_taxable_income
}
