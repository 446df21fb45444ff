//! Marginal allocation of taxable income across an ordered bracket schedule.
//!
//! Income fills the brackets from the bottom up. Each bracket takes at most
//! its own width and taxes only that slice at its rate, so no part of the
//! income is taxed twice and no part is skipped.
//!
//! The breakdown always carries exactly one row per bracket, in schedule
//! order. Brackets reached with nothing left to allocate report zero.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::BracketSchedule;
//! use tax_core::calculations::allocate;
//!
//! let schedule = BracketSchedule::default();
//! let allocation = allocate(dec!(1000000), schedule.brackets());
//!
//! assert_eq!(allocation.breakdown[0].tax_amount, dec!(21000));
//! assert_eq!(allocation.breakdown[1].tax_amount, dec!(33000));
//! assert_eq!(allocation.breakdown[2].taxable_amount, dec!(400000));
//! assert_eq!(allocation.total_tax, dec!(114000));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::calculations::common::non_negative;
use crate::{BracketAllocation, TaxBracket};

/// Per-bracket breakdown and the total tax it sums to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub breakdown: Vec<BracketAllocation>,
    pub total_tax: Decimal,
}

/// Allocates taxable income over a fixed set of brackets.
///
/// Brackets are expected in ascending order; a validated
/// [`BracketSchedule`](crate::BracketSchedule) guarantees this.
#[derive(Debug, Clone)]
pub struct BracketAllocator<'a> {
    brackets: &'a [TaxBracket],
}

impl<'a> BracketAllocator<'a> {
    pub fn new(brackets: &'a [TaxBracket]) -> Self {
        Self { brackets }
    }

    pub fn allocate(
        &self,
        taxable_income: Decimal,
    ) -> Allocation {
        let mut remaining = taxable_income;
        let mut total_tax = Decimal::ZERO;
        let mut breakdown = Vec::with_capacity(self.brackets.len());

        for bracket in self.brackets {
            let taxable_amount = self.taxable_in_bracket(bracket, remaining);
            let tax_amount = taxable_amount * bracket.rate;

            trace!(
                bracket = %bracket.label,
                %remaining,
                %taxable_amount,
                %tax_amount,
                "allocated bracket"
            );

            remaining -= taxable_amount;
            total_tax += tax_amount;

            breakdown.push(BracketAllocation {
                label: bracket.label.clone(),
                rate: bracket.rate,
                taxable_amount,
                tax_amount,
            });
        }

        Allocation {
            breakdown,
            total_tax,
        }
    }

    /// The slice of `remaining` income this bracket absorbs.
    fn taxable_in_bracket(
        &self,
        bracket: &TaxBracket,
        remaining: Decimal,
    ) -> Decimal {
        if remaining <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        match bracket.capacity() {
            Some(capacity) => non_negative(remaining.min(capacity)),
            None => remaining,
        }
    }
}

/// Allocates `taxable_income` across `brackets`.
pub fn allocate(
    taxable_income: Decimal,
    brackets: &[TaxBracket],
) -> Allocation {
    BracketAllocator::new(brackets).allocate(taxable_income)
}
