//! Annual net salary (ANS) calculation.
//!
//! Reduces gross compensation to a single figure by subtracting statutory
//! deductions (insurance premiums and rent) and the pension deduction.
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Gross income: basic salary plus all allowances |
//! | 2    | Statutory deductions: life, temporary and permanent disability insurance, rent |
//! | 3    | Pension: rate × (basic + housing + transport) when enabled, else the supplied figure |
//! | 4    | ANS: line 1 − line 2 − line 3 (not clamped) |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::IncomeInputs;
//! use tax_core::calculations::compute_annual_net_salary;
//!
//! let inputs = IncomeInputs {
//!     basic_salary: dec!(1000000),
//!     housing_allowance: dec!(250000),
//!     transport_allowance: dec!(250000),
//!     pension_contribution: dec!(5000),
//!     pension_enabled: true,
//!     ..IncomeInputs::default()
//! };
//!
//! let net = compute_annual_net_salary(&inputs);
//!
//! assert_eq!(net.effective_pension_deduction, dec!(120000));
//! assert_eq!(net.annual_net_salary, dec!(1380000));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{IncomeInputs, TaxRules};

/// Outcome of the net salary step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetSalary {
    pub gross_income: Decimal,
    pub statutory_deductions: Decimal,

    /// The pension figure actually deducted. When the automatic pension is
    /// enabled this replaces whatever the caller supplied and should be shown
    /// back to the user in place of their value.
    pub effective_pension_deduction: Decimal,

    /// True when `effective_pension_deduction` was computed rather than taken
    /// from the inputs.
    pub pension_computed: bool,

    /// Gross income less all deductions. Negative when deductions exceed pay.
    pub annual_net_salary: Decimal,
}

/// Calculator for the annual net salary.
#[derive(Debug, Clone)]
pub struct NetSalaryCalculator<'a> {
    rules: &'a TaxRules,
}

impl<'a> NetSalaryCalculator<'a> {
    pub fn new(rules: &'a TaxRules) -> Self {
        Self { rules }
    }

    pub fn calculate(
        &self,
        inputs: &IncomeInputs,
    ) -> NetSalary {
        let gross_income = inputs.gross_income();
        let statutory_deductions = inputs.statutory_deductions();
        let (effective_pension_deduction, pension_computed) = self.pension_deduction(inputs);

        let annual_net_salary = gross_income
            .saturating_sub(statutory_deductions)
            .saturating_sub(effective_pension_deduction);

        debug!(
            %gross_income,
            %statutory_deductions,
            %effective_pension_deduction,
            %annual_net_salary,
            "computed annual net salary"
        );

        NetSalary {
            gross_income,
            statutory_deductions,
            effective_pension_deduction,
            pension_computed,
            annual_net_salary,
        }
    }

    /// Pension deduction and whether it was computed from the pension rate.
    fn pension_deduction(
        &self,
        inputs: &IncomeInputs,
    ) -> (Decimal, bool) {
        if !inputs.pension_enabled {
            return (inputs.pension_contribution, false);
        }

        let computed = inputs.pensionable_pay().saturating_mul(self.rules.pension_rate);
        if computed != inputs.pension_contribution {
            debug!(
                supplied = %inputs.pension_contribution,
                %computed,
                "automatic pension overrides supplied contribution"
            );
        }
        (computed, true)
    }
}

/// Computes the annual net salary using the statutory [`TaxRules`].
pub fn compute_annual_net_salary(inputs: &IncomeInputs) -> NetSalary {
    let rules = TaxRules::default();
    NetSalaryCalculator::new(&rules).calculate(inputs)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    use super::*;

    fn test_inputs() -> IncomeInputs {
        IncomeInputs {
            basic_salary: dec!(2400000),
            housing_allowance: dec!(600000),
            transport_allowance: dec!(300000),
            leave_allowance: dec!(200000),
            meals_allowance: dec!(60000),
            energy_allowance: dec!(40000),
            other_allowances: dec!(0),
            life_insurance: dec!(50000),
            temp_disability_insurance: dec!(10000),
            perm_disability_insurance: dec!(10000),
            rent_paid: dec!(250000),
            pension_contribution: dec!(100000),
            pension_enabled: false,
        }
    }

    // =========================================================================
    // pension_deduction tests
    // =========================================================================

    #[test]
    fn pension_deduction_uses_supplied_value_when_disabled() {
        let rules = TaxRules::default();
        let calculator = NetSalaryCalculator::new(&rules);

        let (pension, computed) = calculator.pension_deduction(&test_inputs());

        assert_eq!(pension, dec!(100000));
        assert!(!computed);
    }

    #[test]
    fn pension_deduction_computes_eight_percent_when_enabled() {
        let rules = TaxRules::default();
        let calculator = NetSalaryCalculator::new(&rules);
        let mut inputs = test_inputs();
        inputs.pension_enabled = true;

        let (pension, computed) = calculator.pension_deduction(&inputs);

        // 8% of (2,400,000 + 600,000 + 300,000)
        assert_eq!(pension, dec!(264000));
        assert!(computed);
    }

    #[test]
    fn pension_deduction_respects_configured_rate() {
        let rules = TaxRules {
            pension_rate: dec!(0.10),
            ..TaxRules::default()
        };
        let calculator = NetSalaryCalculator::new(&rules);
        let mut inputs = test_inputs();
        inputs.pension_enabled = true;

        let (pension, _) = calculator.pension_deduction(&inputs);

        assert_eq!(pension, dec!(330000));
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn calculate_without_pension_override() {
        let net = compute_annual_net_salary(&test_inputs());

        assert_eq!(net.gross_income, dec!(3600000));
        assert_eq!(net.statutory_deductions, dec!(320000));
        assert_eq!(net.effective_pension_deduction, dec!(100000));
        // 3,600,000 - 320,000 - 100,000
        assert_eq!(net.annual_net_salary, dec!(3180000));
        assert!(!net.pension_computed);
    }

    #[test]
    fn calculate_with_pension_override_ignores_supplied_value() {
        let mut inputs = test_inputs();
        inputs.pension_enabled = true;
        inputs.pension_contribution = dec!(999999);

        let net = compute_annual_net_salary(&inputs);

        assert_eq!(net.effective_pension_deduction, dec!(264000));
        // 3,600,000 - 320,000 - 264,000
        assert_eq!(net.annual_net_salary, dec!(3016000));
        assert!(net.pension_computed);
    }

    #[test]
    fn calculate_allows_negative_net_salary() {
        let inputs = IncomeInputs {
            basic_salary: dec!(100000),
            rent_paid: dec!(150000),
            ..IncomeInputs::default()
        };

        let net = compute_annual_net_salary(&inputs);

        assert_eq!(net.annual_net_salary, dec!(-50000));
    }

    #[test]
    fn calculate_empty_inputs_is_zero() {
        let net = compute_annual_net_salary(&IncomeInputs::default());

        assert_eq!(net.annual_net_salary, dec!(0));
        assert_eq!(net.effective_pension_deduction, dec!(0));
    }

    // =========================================================================
    // properties
    // =========================================================================

    fn amount() -> impl Strategy<Value = Decimal> {
        (0i64..1_000_000_000_00).prop_map(|cents| Decimal::new(cents, 2))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_net_salary_identity_without_pension_override(
            basic in amount(),
            housing in amount(),
            transport in amount(),
            leave in amount(),
            life in amount(),
            rent in amount(),
            pension in amount()
        ) {
            let inputs = IncomeInputs {
                basic_salary: basic,
                housing_allowance: housing,
                transport_allowance: transport,
                leave_allowance: leave,
                life_insurance: life,
                rent_paid: rent,
                pension_contribution: pension,
                pension_enabled: false,
                ..IncomeInputs::default()
            };

            let net = compute_annual_net_salary(&inputs);

            prop_assert_eq!(
                net.annual_net_salary,
                basic + housing + transport + leave - life - rent - pension
            );
        }

        #[test]
        fn prop_enabled_pension_ignores_supplied_contribution(
            basic in amount(),
            housing in amount(),
            transport in amount(),
            supplied in amount()
        ) {
            let inputs = IncomeInputs {
                basic_salary: basic,
                housing_allowance: housing,
                transport_allowance: transport,
                pension_contribution: supplied,
                pension_enabled: true,
                ..IncomeInputs::default()
            };

            let net = compute_annual_net_salary(&inputs);

            prop_assert_eq!(
                net.effective_pension_deduction,
                (basic + housing + transport) * dec!(0.08)
            );
        }
    }
}
