//! CSV loader for batches of income inputs.
//!
//! ## CSV Format
//!
//! Column order does **not** matter (headers are matched by name). Header
//! names are case-sensitive. Amount cells may carry the currency symbol and
//! thousands separators when quoted (`"₦1,200,000"`).
//!
//! | Column                      | Required | Notes                                   |
//! |-----------------------------|----------|-----------------------------------------|
//! | `basic_salary`              | yes      | Must be present and non-blank           |
//! | `housing_allowance`         | no       | Blank or missing counts as 0            |
//! | `transport_allowance`       | no       |                                         |
//! | `leave_allowance`           | no       |                                         |
//! | `meals_allowance`           | no       |                                         |
//! | `energy_allowance`          | no       |                                         |
//! | `other_allowances`          | no       |                                         |
//! | `life_insurance`            | no       |                                         |
//! | `temp_disability_insurance` | no       |                                         |
//! | `perm_disability_insurance` | no       |                                         |
//! | `rent_paid`                 | no       |                                         |
//! | `pension_contribution`      | no       | Ignored when `pension_enabled` is set   |
//! | `pension_enabled`           | no       | `true`/`yes`/`1`; anything else is off  |
//!
//! ### Minimal example
//!
//! ```csv
//! basic_salary
//! 2400000
//! ```
//!
//! ### Full example
//!
//! ```csv
//! basic_salary,housing_allowance,transport_allowance,rent_paid,pension_enabled
//! "₦3,000,000","900,000","300,000","300,000",yes
//! 1500000,400000,,,no
//! ```
use serde::Deserialize;
use tax_core::{CurrencyFormat, IncomeInputs};

use crate::models::IncomeFormModel;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CsvRow {
    basic_salary: String,
    housing_allowance: String,
    transport_allowance: String,
    leave_allowance: String,
    meals_allowance: String,
    energy_allowance: String,
    other_allowances: String,
    life_insurance: String,
    temp_disability_insurance: String,
    perm_disability_insurance: String,
    rent_paid: String,
    pension_contribution: String,
    pension_enabled: String,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or converting CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The underlying CSV deserialisation failed (bad structure, wrong column
    /// count, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A row failed form validation. `row` is 1-based (header = row 0).
    #[error("row {row}: {}", errors.join(" "))]
    InvalidRow { row: usize, errors: Vec<String> },

    #[error("cannot read input file: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "1"
    )
}

/// Convert a single CSV row into [`IncomeInputs`] through the same
/// validation the interactive form uses.
fn convert_row(
    row: CsvRow,
    row_number: usize,
    format: &CurrencyFormat,
) -> Result<IncomeInputs, CsvLoadError> {
    let form = IncomeFormModel {
        basic_salary: row.basic_salary,
        housing_allowance: row.housing_allowance,
        transport_allowance: row.transport_allowance,
        leave_allowance: row.leave_allowance,
        meals_allowance: row.meals_allowance,
        energy_allowance: row.energy_allowance,
        other_allowances: row.other_allowances,
        life_insurance: row.life_insurance,
        temp_disability_insurance: row.temp_disability_insurance,
        perm_disability_insurance: row.perm_disability_insurance,
        rent_paid: row.rent_paid,
        pension_contribution: row.pension_contribution,
        pension_enabled: parse_flag(&row.pension_enabled),
    };

    form.validate_for_submit(format)
        .map_err(|errors| CsvLoadError::InvalidRow {
            row: row_number,
            errors,
        })
}

/// Parse CSV text and return one [`IncomeInputs`] per row, in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] – if the CSV is structurally invalid.
/// * [`CsvLoadError::InvalidRow`] – if any row is missing its basic salary.
pub fn load_from_str(
    input: &str,
    format: &CurrencyFormat,
) -> Result<Vec<IncomeInputs>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1, format)
        })
        .collect()
}

/// Read a file from disk and delegate to [`load_from_str`].
pub fn load_from_file(
    path: &std::path::Path,
    format: &CurrencyFormat,
) -> Result<Vec<IncomeInputs>, CsvLoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents, format)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
