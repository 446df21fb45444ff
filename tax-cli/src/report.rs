//! Plain-text rendering of a [`TaxEstimate`].

use std::fmt;

use rust_decimal::Decimal;
use tax_core::CurrencyFormat;
use tax_core::calculations::TaxEstimate;

/// Borrows an estimate and the currency format used to print it.
pub struct EstimateReport<'a> {
    estimate: &'a TaxEstimate,
    format: &'a CurrencyFormat,
}

impl<'a> EstimateReport<'a> {
    pub fn new(
        estimate: &'a TaxEstimate,
        format: &'a CurrencyFormat,
    ) -> Self {
        Self { estimate, format }
    }

    fn line(
        &self,
        f: &mut fmt::Formatter<'_>,
        label: &str,
        amount: Decimal,
    ) -> fmt::Result {
        writeln!(f, "  {:<32} {:>20}", label, self.format.format(amount))
    }
}

fn percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

impl fmt::Display for EstimateReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let net_salary = &self.estimate.net_salary;
        let reliefs = &self.estimate.reliefs;
        let result = &self.estimate.result;

        writeln!(f, "Net salary")?;
        self.line(f, "Gross income", net_salary.gross_income)?;
        self.line(f, "Statutory deductions", net_salary.statutory_deductions)?;
        let pension_label = if net_salary.pension_computed {
            "Pension (locked)"
        } else {
            "Pension"
        };
        self.line(f, pension_label, net_salary.effective_pension_deduction)?;
        self.line(f, "Annual net salary", result.annual_net_salary)?;
        writeln!(f)?;

        writeln!(f, "Reliefs")?;
        self.line(f, "Consolidated relief", reliefs.consolidated_relief)?;
        self.line(f, "Additional relief", reliefs.additional_relief)?;
        self.line(f, "Annual taxable income", result.annual_taxable_income)?;
        writeln!(f)?;

        writeln!(f, "Tax breakdown")?;
        writeln!(
            f,
            "  {:<18} {:>5} {:>20} {:>20}",
            "Bracket", "Rate", "Taxable", "Tax"
        )?;
        for row in &result.breakdown {
            writeln!(
                f,
                "  {:<18} {:>5} {:>20} {:>20}",
                row.label,
                percent(row.rate),
                self.format.format(row.taxable_amount),
                self.format.format(row.tax_amount)
            )?;
        }
        self.line(f, "Total tax", result.total_tax)?;
        writeln!(f)?;

        writeln!(f, "Take-home")?;
        self.line(f, "Annual net after tax", result.annual_net_after_tax)?;
        self.line(f, "Monthly net salary", result.monthly_net_salary)?;
        self.line(f, "Monthly tax", result.monthly_tax)?;
        self.line(f, "Monthly net after tax", result.monthly_net_after_tax)?;

        for warning in &self.estimate.warnings {
            writeln!(f)?;
            writeln!(f, "Warning: {warning}")?;
        }

        Ok(())
    }
}
