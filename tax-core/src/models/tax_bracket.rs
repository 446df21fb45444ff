use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A contiguous income range taxed at a single marginal rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub label: String,
    pub lower_bound: Decimal,
    /// `None` marks the open-ended top bracket.
    pub upper_bound: Option<Decimal>,
    /// Marginal rate as a fraction, e.g. `0.07` for 7%.
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn new(
        label: impl Into<String>,
        lower_bound: Decimal,
        upper_bound: Option<Decimal>,
        rate: Decimal,
    ) -> Self {
        Self {
            label: label.into(),
            lower_bound,
            upper_bound,
            rate,
        }
    }

    /// Width of the bracket, or `None` for the open-ended top bracket.
    pub fn capacity(&self) -> Option<Decimal> {
        self.upper_bound.map(|upper| upper - self.lower_bound)
    }
}

/// Reasons a list of brackets cannot be used as a schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("bracket schedule is empty")]
    Empty,

    #[error("first bracket must start at 0, found {0}")]
    FirstBracketNotAtZero(Decimal),

    #[error("bracket '{label}' has rate {rate}, expected a fraction in [0, 1)")]
    InvalidRate { label: String, rate: Decimal },

    #[error("bracket '{label}' has an empty or inverted range")]
    EmptyRange { label: String },

    #[error("bracket '{label}' starts at {found}, expected {expected}")]
    NotContiguous {
        label: String,
        expected: Decimal,
        found: Decimal,
    },

    #[error("open-ended bracket '{label}' must be the last bracket")]
    UnboundedNotLast { label: String },

    #[error("last bracket must be open-ended")]
    MissingUnboundedBracket,
}

/// An ordered, validated set of brackets partitioning `[0, ∞)`.
///
/// Construction through [`BracketSchedule::new`] guarantees that the brackets
/// are contiguous, strictly increasing, start at zero and end with exactly one
/// open-ended bracket. Changing tax law means building a different schedule;
/// the allocator itself never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketSchedule {
    brackets: Vec<TaxBracket>,
}

impl BracketSchedule {
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, ScheduleError> {
        let first = brackets.first().ok_or(ScheduleError::Empty)?;
        if first.lower_bound != Decimal::ZERO {
            return Err(ScheduleError::FirstBracketNotAtZero(first.lower_bound));
        }

        let last_index = brackets.len() - 1;
        let mut expected_lower = Decimal::ZERO;

        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate >= Decimal::ONE {
                return Err(ScheduleError::InvalidRate {
                    label: bracket.label.clone(),
                    rate: bracket.rate,
                });
            }

            if bracket.lower_bound != expected_lower {
                return Err(ScheduleError::NotContiguous {
                    label: bracket.label.clone(),
                    expected: expected_lower,
                    found: bracket.lower_bound,
                });
            }

            match bracket.upper_bound {
                Some(upper) if upper <= bracket.lower_bound => {
                    return Err(ScheduleError::EmptyRange {
                        label: bracket.label.clone(),
                    });
                }
                Some(upper) => expected_lower = upper,
                None if index != last_index => {
                    return Err(ScheduleError::UnboundedNotLast {
                        label: bracket.label.clone(),
                    });
                }
                None => {}
            }
        }

        if brackets[last_index].upper_bound.is_some() {
            return Err(ScheduleError::MissingUnboundedBracket);
        }

        Ok(Self { brackets })
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    pub fn len(&self) -> usize {
        self.brackets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brackets.is_empty()
    }

    /// Sum of the widths of every bounded bracket.
    pub fn finite_capacity(&self) -> Decimal {
        self.brackets
            .iter()
            .filter_map(TaxBracket::capacity)
            .sum()
    }
}

/// The statutory six-tier personal income tax table.
impl Default for BracketSchedule {
    fn default() -> Self {
        let tiers: [(&str, i64, Option<i64>, i64); 6] = [
            ("First 300,000", 0, Some(300_000), 7),
            ("Next 300,000", 300_000, Some(600_000), 11),
            ("Next 500,000", 600_000, Some(1_100_000), 15),
            ("Next 500,000", 1_100_000, Some(1_600_000), 19),
            ("Next 1,600,000", 1_600_000, Some(3_200_000), 21),
            ("Above 3,200,000", 3_200_000, None, 24),
        ];

        let brackets = tiers
            .into_iter()
            .map(|(label, lower, upper, percent)| {
                TaxBracket::new(
                    label,
                    Decimal::from(lower),
                    upper.map(Decimal::from),
                    Decimal::new(percent, 2),
                )
            })
            .collect();

        Self { brackets }
    }
}
