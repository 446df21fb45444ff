use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Annual salary, allowance and deduction figures for one calculation.
///
/// Every amount is expected to be non-negative. Callers building this from
/// raw user input should coerce blank or unparseable values to zero and then
/// call [`IncomeInputs::normalized`].
///
/// The sums below saturate at the `Decimal` range, so even inputs that were
/// never normalized cannot panic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomeInputs {
    // Compensation
    pub basic_salary: Decimal,
    pub housing_allowance: Decimal,
    pub transport_allowance: Decimal,
    pub leave_allowance: Decimal,
    pub meals_allowance: Decimal,
    pub energy_allowance: Decimal,
    pub other_allowances: Decimal,

    // Statutory deductions
    pub life_insurance: Decimal,
    pub temp_disability_insurance: Decimal,
    pub perm_disability_insurance: Decimal,
    pub rent_paid: Decimal,

    /// Caller-supplied pension figure, ignored while `pension_enabled` is set.
    pub pension_contribution: Decimal,
    pub pension_enabled: bool,
}

impl IncomeInputs {
    /// Largest amount a single field may hold after normalization: one
    /// quadrillion. Twelve fields at this limit stay far inside `Decimal`.
    pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

    /// Returns a copy with every negative amount replaced by zero and every
    /// amount above [`Self::MAX_AMOUNT`] capped at it.
    pub fn normalized(mut self) -> Self {
        for (field, amount) in self.amounts_mut() {
            if amount.is_sign_negative() && !amount.is_zero() {
                warn!(field, %amount, "negative input clamped to zero");
                *amount = Decimal::ZERO;
            } else if *amount > Self::MAX_AMOUNT {
                warn!(field, %amount, limit = %Self::MAX_AMOUNT, "input capped at maximum amount");
                *amount = Self::MAX_AMOUNT;
            }
        }
        self
    }

    /// Sum of basic salary and all six allowances.
    pub fn gross_income(&self) -> Decimal {
        saturating_sum(&[
            self.basic_salary,
            self.housing_allowance,
            self.transport_allowance,
            self.leave_allowance,
            self.meals_allowance,
            self.energy_allowance,
            self.other_allowances,
        ])
    }

    /// Insurance premiums plus rent.
    pub fn statutory_deductions(&self) -> Decimal {
        saturating_sum(&[
            self.life_insurance,
            self.temp_disability_insurance,
            self.perm_disability_insurance,
            self.rent_paid,
        ])
    }

    /// The pay components the automatic pension rate applies to.
    pub fn pensionable_pay(&self) -> Decimal {
        saturating_sum(&[
            self.basic_salary,
            self.housing_allowance,
            self.transport_allowance,
        ])
    }

    fn amounts_mut(&mut self) -> [(&'static str, &mut Decimal); 12] {
        [
            ("basic_salary", &mut self.basic_salary),
            ("housing_allowance", &mut self.housing_allowance),
            ("transport_allowance", &mut self.transport_allowance),
            ("leave_allowance", &mut self.leave_allowance),
            ("meals_allowance", &mut self.meals_allowance),
            ("energy_allowance", &mut self.energy_allowance),
            ("other_allowances", &mut self.other_allowances),
            ("life_insurance", &mut self.life_insurance),
            ("temp_disability_insurance", &mut self.temp_disability_insurance),
            ("perm_disability_insurance", &mut self.perm_disability_insurance),
            ("rent_paid", &mut self.rent_paid),
            ("pension_contribution", &mut self.pension_contribution),
        ]
    }
}

fn saturating_sum(amounts: &[Decimal]) -> Decimal {
    amounts
        .iter()
        .fold(Decimal::ZERO, |total, amount| total.saturating_add(*amount))
}
