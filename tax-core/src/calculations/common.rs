//! Common utility functions for tax calculations.
//!
//! Shared arithmetic used by the pipeline stages and by currency formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to `decimal_places` using half-up rounding.
///
/// Values exactly at the midpoint are rounded away from zero, so `0.005`
/// becomes `0.01` at two places.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.455), 2), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455), 2), dec!(-123.46));
/// assert_eq!(round_half_up(dec!(2.5), 0), dec!(3));
/// ```
pub fn round_half_up(
    value: Decimal,
    decimal_places: u32,
) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns `value`, or zero when it is negative.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::non_negative;
///
/// assert_eq!(non_negative(dec!(-250.00)), dec!(0));
/// assert_eq!(non_negative(dec!(250.00)), dec!(250.00));
/// ```
pub fn non_negative(value: Decimal) -> Decimal {
    if value > Decimal::ZERO {
        value
    } else {
        Decimal::ZERO
    }
}

/// Returns the larger of two values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}
