use tax_core::calculations::NetSalary;
use tax_core::{CurrencyFormat, IncomeInputs};

/// Raw text values for each income field, as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IncomeFormModel {
    pub basic_salary: String,
    pub housing_allowance: String,
    pub transport_allowance: String,
    pub leave_allowance: String,
    pub meals_allowance: String,
    pub energy_allowance: String,
    pub other_allowances: String,
    pub life_insurance: String,
    pub temp_disability_insurance: String,
    pub perm_disability_insurance: String,
    pub rent_paid: String,
    pub pension_contribution: String,
    pub pension_enabled: bool,
}

impl IncomeFormModel {
    /// Validates the form and coerces every field into an [`IncomeInputs`].
    ///
    /// Rules:
    /// - basic salary is required
    /// - every other field is optional; blank or unreadable values count as 0
    /// - negative amounts are clamped to 0 and oversized ones capped at
    ///   [`IncomeInputs::MAX_AMOUNT`]
    pub fn validate_for_submit(
        &self,
        format: &CurrencyFormat,
    ) -> Result<IncomeInputs, Vec<String>> {
        let mut errors = Vec::new();

        if self.basic_salary.trim().is_empty() {
            errors.push("Basic salary is required.".to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(IncomeInputs {
            basic_salary: format.parse(&self.basic_salary),
            housing_allowance: format.parse(&self.housing_allowance),
            transport_allowance: format.parse(&self.transport_allowance),
            leave_allowance: format.parse(&self.leave_allowance),
            meals_allowance: format.parse(&self.meals_allowance),
            energy_allowance: format.parse(&self.energy_allowance),
            other_allowances: format.parse(&self.other_allowances),
            life_insurance: format.parse(&self.life_insurance),
            temp_disability_insurance: format.parse(&self.temp_disability_insurance),
            perm_disability_insurance: format.parse(&self.perm_disability_insurance),
            rent_paid: format.parse(&self.rent_paid),
            pension_contribution: format.parse(&self.pension_contribution),
            pension_enabled: self.pension_enabled,
        }
        .normalized())
    }

    /// The pension field is read-only while the automatic pension is on.
    pub fn pension_locked(&self) -> bool {
        self.pension_enabled
    }

    /// Writes the pension figure actually deducted back into the form.
    pub fn apply_net_salary(
        &mut self,
        net_salary: &NetSalary,
        format: &CurrencyFormat,
    ) {
        if net_salary.pension_computed {
            self.pension_contribution = format.format(net_salary.effective_pension_deduction);
        }
    }
}
