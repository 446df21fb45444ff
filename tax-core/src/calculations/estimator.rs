//! End-to-end estimate: inputs → net salary → reliefs → brackets → result.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::TaxEstimator;
//! use tax_core::{BracketSchedule, IncomeInputs, TaxRules};
//!
//! let schedule = BracketSchedule::default();
//! let rules = TaxRules::default();
//! let inputs = IncomeInputs {
//!     basic_salary: dec!(2000000),
//!     housing_allowance: dec!(400000),
//!     ..IncomeInputs::default()
//! };
//!
//! let estimate = TaxEstimator::new(&schedule, &rules).estimate(&inputs);
//!
//! // 2,400,000 - 200,000 - 480,000
//! assert_eq!(estimate.result.annual_taxable_income, dec!(1720000));
//! assert_eq!(estimate.result.total_tax, dec!(249200));
//! assert!(estimate.warnings.is_empty());
//! ```

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::allocation::BracketAllocator;
use crate::calculations::net_salary::{NetSalary, NetSalaryCalculator};
use crate::calculations::projection::project;
use crate::calculations::relief::{ReliefCalculator, Reliefs};
use crate::{BracketSchedule, IncomeInputs, TaxResult, TaxRules};

/// Non-fatal conditions worth showing next to an estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstimateWarning {
    /// Deductions exceed gross pay; the net salary is carried through as a
    /// negative figure and no tax is due.
    NegativeNetSalary(Decimal),
}

impl fmt::Display for EstimateWarning {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::NegativeNetSalary(amount) => write!(
                f,
                "deductions exceed gross pay; annual net salary is {amount}"
            ),
        }
    }
}

/// Everything produced by one run of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxEstimate {
    pub net_salary: NetSalary,
    pub reliefs: Reliefs,
    pub result: TaxResult,
    pub warnings: Vec<EstimateWarning>,
}

/// Runs the full estimate against a bracket schedule and statutory rules.
#[derive(Debug, Clone)]
pub struct TaxEstimator<'a> {
    schedule: &'a BracketSchedule,
    rules: &'a TaxRules,
}

impl<'a> TaxEstimator<'a> {
    pub fn new(
        schedule: &'a BracketSchedule,
        rules: &'a TaxRules,
    ) -> Self {
        Self { schedule, rules }
    }

    pub fn estimate(
        &self,
        inputs: &IncomeInputs,
    ) -> TaxEstimate {
        let net_salary = NetSalaryCalculator::new(self.rules).calculate(inputs);
        let ans = net_salary.annual_net_salary;

        let mut warnings = Vec::new();
        if ans < Decimal::ZERO {
            warn!(annual_net_salary = %ans, "deductions exceed gross pay");
            warnings.push(EstimateWarning::NegativeNetSalary(ans));
        }

        let reliefs = ReliefCalculator::new(self.rules).calculate(ans);
        let allocation =
            BracketAllocator::new(self.schedule.brackets()).allocate(reliefs.annual_taxable_income);

        debug!(total_tax = %allocation.total_tax, "estimate complete");

        let result = project(
            ans,
            reliefs.annual_taxable_income,
            allocation.breakdown,
            allocation.total_tax,
        );

        TaxEstimate {
            net_salary,
            reliefs,
            result,
            warnings,
        }
    }
}

/// Runs the pipeline with the default schedule and statutory rules.
pub fn estimate(inputs: &IncomeInputs) -> TaxEstimate {
    let schedule = BracketSchedule::default();
    let rules = TaxRules::default();
    TaxEstimator::new(&schedule, &rules).estimate(inputs)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::common::round_half_up;
    use crate::{TaxBracket, parse_currency};

    fn test_inputs() -> IncomeInputs {
        IncomeInputs {
            basic_salary: dec!(3000000),
            housing_allowance: dec!(900000),
            transport_allowance: dec!(300000),
            leave_allowance: dec!(250000),
            meals_allowance: dec!(120000),
            energy_allowance: dec!(60000),
            other_allowances: dec!(30000),
            life_insurance: dec!(80000),
            temp_disability_insurance: dec!(20000),
            perm_disability_insurance: dec!(20000),
            rent_paid: dec!(300000),
            pension_contribution: dec!(0),
            pension_enabled: true,
        }
    }

    #[test]
    fn estimate_full_pipeline() {
        let estimate = estimate(&test_inputs());

        // Gross 4,660,000; statutory 420,000; pension 8% of 4,200,000 = 336,000
        assert_eq!(estimate.net_salary.effective_pension_deduction, dec!(336000));
        assert_eq!(estimate.result.annual_net_salary, dec!(3904000));
        // 3,904,000 - 200,000 - 780,800
        assert_eq!(estimate.result.annual_taxable_income, dec!(2923200));
        // 21,000 + 33,000 + 75,000 + 95,000 + 1,323,200 × 0.21 (277,872)
        assert_eq!(estimate.result.total_tax, dec!(501872));
        assert_eq!(estimate.result.annual_net_after_tax, dec!(3402128));
        assert_eq!(round_half_up(estimate.result.monthly_tax, 2), dec!(41822.67));
        assert!(estimate.warnings.is_empty());
    }

    #[test]
    fn estimate_empty_inputs_is_all_zero() {
        let estimate = estimate(&IncomeInputs::default());

        assert_eq!(estimate.reliefs.consolidated_relief, dec!(200000));
        assert_eq!(estimate.result.annual_taxable_income, dec!(0));
        assert_eq!(estimate.result.total_tax, dec!(0));
        assert_eq!(estimate.result.breakdown.len(), 6);
        assert!(estimate.warnings.is_empty());
    }

    #[test]
    fn estimate_warns_on_negative_net_salary() {
        let inputs = IncomeInputs {
            basic_salary: dec!(100000),
            rent_paid: dec!(400000),
            ..IncomeInputs::default()
        };

        let estimate = estimate(&inputs);

        assert_eq!(estimate.result.annual_net_salary, dec!(-300000));
        assert_eq!(estimate.result.annual_taxable_income, dec!(0));
        assert_eq!(estimate.result.total_tax, dec!(0));
        assert_eq!(
            estimate.warnings,
            vec![EstimateWarning::NegativeNetSalary(dec!(-300000))]
        );
    }

    #[test]
    fn estimate_uses_injected_schedule() {
        let schedule = BracketSchedule::new(vec![
            TaxBracket::new("Flat", dec!(0), None, dec!(0.10)),
        ])
        .unwrap();
        let rules = TaxRules::default();

        let estimate = TaxEstimator::new(&schedule, &rules).estimate(&test_inputs());

        assert_eq!(estimate.result.breakdown.len(), 1);
        assert_eq!(estimate.result.total_tax, dec!(292320));
    }

    #[test]
    fn estimate_is_idempotent() {
        let inputs = test_inputs();

        assert_eq!(estimate(&inputs), estimate(&inputs));
    }

    #[test]
    fn warning_display_mentions_amount() {
        let warning = EstimateWarning::NegativeNetSalary(dec!(-300000));

        assert_eq!(
            warning.to_string(),
            "deductions exceed gross pay; annual net salary is -300000"
        );
    }

    #[test]
    fn estimate_with_amounts_at_decimal_limit_does_not_panic() {
        let largest = parse_currency("79,228,162,514,264,337,593,543,950,335");
        let inputs = IncomeInputs {
            basic_salary: largest,
            housing_allowance: largest,
            pension_enabled: true,
            ..IncomeInputs::default()
        };

        let estimate = estimate(&inputs);

        assert_eq!(estimate.net_salary.gross_income, Decimal::MAX);
        assert!(estimate.result.total_tax > Decimal::ZERO);
    }

    #[test]
    fn estimate_with_deductions_at_decimal_limit_does_not_panic() {
        let inputs = IncomeInputs {
            basic_salary: dec!(1000000),
            life_insurance: Decimal::MAX,
            rent_paid: Decimal::MAX,
            ..IncomeInputs::default()
        };

        let estimate = estimate(&inputs);

        assert_eq!(estimate.result.annual_taxable_income, dec!(0));
        assert_eq!(estimate.result.total_tax, dec!(0));
        assert_eq!(estimate.warnings.len(), 1);
    }

    #[test]
    fn estimate_of_normalized_oversized_inputs_is_exact() {
        let inputs = IncomeInputs {
            basic_salary: Decimal::MAX,
            ..IncomeInputs::default()
        }
        .normalized();

        let estimate = estimate(&inputs);

        assert_eq!(estimate.net_salary.annual_net_salary, IncomeInputs::MAX_AMOUNT);
        // 1e15 less 1% and 20% reliefs
        assert_eq!(
            estimate.result.annual_taxable_income,
            dec!(790000000000000)
        );
    }
}
