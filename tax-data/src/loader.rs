use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use tax_core::{BracketSchedule, CurrencyFormat, ScheduleError, TaxBracket};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading a bracket schedule.
#[derive(Debug, Error)]
pub enum BracketScheduleLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("cannot read schedule file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid bracket schedule: {0}")]
    InvalidSchedule(#[from] ScheduleError),
}

impl From<csv::Error> for BracketScheduleLoaderError {
    fn from(err: csv::Error) -> Self {
        BracketScheduleLoaderError::CsvParse(err.to_string())
    }
}

/// A single row of a bracket schedule CSV file.
///
/// - `label`: display label (blank for a generated `Bracket N`)
/// - `lower_bound`: where the bracket starts, e.g. `300000` or `"₦300,000"`
/// - `upper_bound`: where it ends (empty for the open-ended top bracket)
/// - `rate`: the marginal rate as a fraction (e.g. `0.07` for 7%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    #[serde(default)]
    pub label: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub lower_bound: Decimal,
    #[serde(deserialize_with = "deserialize_optional_amount")]
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    CurrencyFormat::default()
        .parse_strict(&s)
        .map_err(serde::de::Error::custom)
}

fn deserialize_optional_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => CurrencyFormat::default()
            .parse_strict(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for bracket schedules stored as CSV.
///
/// Rows may appear in any order; they are sorted by `lower_bound` and then
/// validated as a whole, so a gap, overlap or missing top bracket is
/// reported instead of producing a schedule that silently drops income.
pub struct BracketScheduleLoader;

impl BracketScheduleLoader {
    /// Parse bracket records from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BracketRecord>, BracketScheduleLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: BracketRecord = result?;
            records.push(record);
        }

        debug!(count = records.len(), "parsed bracket records");
        Ok(records)
    }

    /// Turn parsed records into a validated schedule.
    pub fn build(
        mut records: Vec<BracketRecord>
    ) -> Result<BracketSchedule, BracketScheduleLoaderError> {
        records.sort_by(|a, b| a.lower_bound.cmp(&b.lower_bound));

        let brackets = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let label = if record.label.is_empty() {
                    format!("Bracket {}", index + 1)
                } else {
                    record.label
                };
                TaxBracket::new(label, record.lower_bound, record.upper_bound, record.rate)
            })
            .collect();

        Ok(BracketSchedule::new(brackets)?)
    }

    /// Parse and validate a schedule from any reader.
    pub fn load<R: Read>(reader: R) -> Result<BracketSchedule, BracketScheduleLoaderError> {
        Self::build(Self::parse(reader)?)
    }

    /// Parse and validate a schedule from a file on disk.
    pub fn load_from_path(path: &Path) -> Result<BracketSchedule, BracketScheduleLoaderError> {
        let file = File::open(path).map_err(|source| BracketScheduleLoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load(file)
    }
}
