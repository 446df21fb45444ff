//! Currency formatting and parsing for display fields.
//!
//! Formatting never fails: absent or non-finite values render as the zero
//! amount. The lenient parser never fails either; anything it cannot read
//! becomes zero. [`CurrencyFormat::parse_strict`] is for configuration data
//! where a typo should be reported rather than silently zeroed.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::round_half_up;

/// Everything that is not part of a plain signed decimal number.
static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.\-]").expect("pattern is a valid regex"));

/// Error returned when a string cannot be parsed as a currency amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseCurrencyError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Symbol and precision used to render amounts, e.g. `₦1,234,567.89`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimal_places: u32,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "₦".to_string(),
            decimal_places: 2,
        }
    }
}

impl CurrencyFormat {
    /// Formats `amount` rounded half-up, with comma thousands separators.
    pub fn format(
        &self,
        amount: Decimal,
    ) -> String {
        let rounded = round_half_up(amount, self.decimal_places);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        let digits = format!("{:.*}", self.decimal_places as usize, rounded.abs());
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut out = format!("{sign}{}{}", self.symbol, group_thousands(whole));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }

    /// Formats an optional amount; `None` renders as zero.
    pub fn format_optional(
        &self,
        amount: Option<Decimal>,
    ) -> String {
        self.format(amount.unwrap_or(Decimal::ZERO))
    }

    /// Formats a float; NaN, infinities and out-of-range values render as zero.
    pub fn format_f64(
        &self,
        amount: f64,
    ) -> String {
        self.format_optional(Decimal::from_f64(amount))
    }

    /// The rendering of zero, e.g. `₦0.00`.
    pub fn zero(&self) -> String {
        self.format(Decimal::ZERO)
    }

    /// Reads an amount, ignoring the currency symbol, separators and spaces.
    ///
    /// Empty input yields zero. Input with letters left over once the symbol
    /// is removed (`12k`, `1e6`) and anything that still fails to parse are
    /// garbled and also yield zero.
    pub fn parse(
        &self,
        input: &str,
    ) -> Decimal {
        let symbol = self.symbol.trim();
        let without_symbol = if symbol.is_empty() {
            input.to_string()
        } else {
            input.replace(symbol, "")
        };
        if without_symbol.chars().any(char::is_alphabetic) {
            warn!(input, "amount contains letters; treated as zero");
            return Decimal::ZERO;
        }

        let cleaned = NON_NUMERIC.replace_all(&without_symbol, "");
        if cleaned.is_empty() {
            return Decimal::ZERO;
        }
        cleaned.parse().unwrap_or_else(|e| {
            warn!(input, "unreadable amount treated as zero: {}", e);
            Decimal::ZERO
        })
    }

    /// Reads an amount, allowing only the currency symbol, commas and
    /// surrounding whitespace around the number.
    ///
    /// Empty or whitespace-only input is treated as 0.
    pub fn parse_strict(
        &self,
        input: &str,
    ) -> Result<Decimal, ParseCurrencyError> {
        let trimmed = input.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, trimmed),
        };
        let unsigned = unsigned
            .strip_prefix(self.symbol.as_str())
            .unwrap_or(unsigned)
            .trim_start()
            .replace(',', "");

        if unsigned.is_empty() {
            return Ok(Decimal::ZERO);
        }

        let amount: Decimal = unsigned.parse().map_err(|e| ParseCurrencyError {
            input: input.to_string(),
            source: e,
        })?;
        Ok(if negative { -amount } else { amount })
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Formats `amount` with the default currency format.
pub fn format_currency(amount: Decimal) -> String {
    CurrencyFormat::default().format(amount)
}

/// Parses `input` leniently with the default currency format.
pub fn parse_currency(input: &str) -> Decimal {
    CurrencyFormat::default().parse(input)
}

/// Parses `input` strictly with the default currency format.
pub fn parse_currency_strict(input: &str) -> Result<Decimal, ParseCurrencyError> {
    CurrencyFormat::default().parse_strict(input)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // format tests
    // =========================================================================

    #[test]
    fn format_groups_thousands_and_pads_cents() {
        assert_eq!(format_currency(dec!(1234567)), "₦1,234,567.00");
        assert_eq!(format_currency(dec!(999)), "₦999.00");
        assert_eq!(format_currency(dec!(1000)), "₦1,000.00");
        assert_eq!(format_currency(dec!(100000)), "₦100,000.00");
    }

    #[test]
    fn format_rounds_half_up() {
        assert_eq!(format_currency(dec!(83333.335)), "₦83,333.34");
        assert_eq!(format_currency(dec!(83333.334)), "₦83,333.33");
    }

    #[test]
    fn format_negative_amounts() {
        assert_eq!(format_currency(dec!(-1500)), "-₦1,500.00");
    }

    #[test]
    fn format_tiny_negative_rounds_to_plain_zero() {
        assert_eq!(format_currency(dec!(-0.001)), "₦0.00");
    }

    #[test]
    fn format_without_decimal_places() {
        let format = CurrencyFormat {
            symbol: "NGN ".to_string(),
            decimal_places: 0,
        };

        assert_eq!(format.format(dec!(1234567.5)), "NGN 1,234,568");
    }

    #[test]
    fn format_non_finite_is_zero() {
        let format = CurrencyFormat::default();

        assert_eq!(format.format_f64(f64::NAN), "₦0.00");
        assert_eq!(format.format_f64(f64::INFINITY), "₦0.00");
        assert_eq!(format.format_f64(f64::NEG_INFINITY), "₦0.00");
    }

    #[test]
    fn format_absent_is_zero() {
        let format = CurrencyFormat::default();

        assert_eq!(format.format_optional(None), format.zero());
        assert_eq!(format.zero(), "₦0.00");
    }

    #[test]
    fn format_f64_regular_value() {
        assert_eq!(CurrencyFormat::default().format_f64(21000.5), "₦21,000.50");
    }

    // =========================================================================
    // parse tests
    // =========================================================================

    #[test]
    fn parse_strips_symbol_and_separators() {
        assert_eq!(parse_currency("₦1,200,000.50"), dec!(1200000.50));
        assert_eq!(parse_currency("  300,000 "), dec!(300000));
    }

    #[test]
    fn parse_empty_is_zero() {
        assert_eq!(parse_currency(""), dec!(0));
        assert_eq!(parse_currency("   "), dec!(0));
    }

    #[test]
    fn parse_garbled_is_zero() {
        assert_eq!(parse_currency("abc"), dec!(0));
        assert_eq!(parse_currency("1.2.3"), dec!(0));
        assert_eq!(parse_currency("-"), dec!(0));
    }

    #[test]
    fn parse_rejects_letters_outside_the_symbol() {
        assert_eq!(parse_currency("12k"), dec!(0));
        assert_eq!(parse_currency("1e6"), dec!(0));
        assert_eq!(parse_currency("NGN 500"), dec!(0));
    }

    #[test]
    fn parse_allows_alphabetic_symbol() {
        let format = CurrencyFormat {
            symbol: "NGN ".to_string(),
            ..CurrencyFormat::default()
        };

        assert_eq!(format.parse("NGN 1,500"), dec!(1500));
        assert_eq!(format.parse("NGN 1,500 only"), dec!(0));
    }

    #[test]
    fn parse_keeps_sign() {
        assert_eq!(parse_currency("-₦2,500"), dec!(-2500));
    }

    #[test]
    fn parse_reads_formatted_output() {
        let formatted = format_currency(dec!(41822.666));

        assert_eq!(parse_currency(&formatted), dec!(41822.67));
    }

    // =========================================================================
    // parse_strict tests
    // =========================================================================

    #[test]
    fn parse_strict_accepts_symbol_and_commas() {
        let format = CurrencyFormat::default();

        assert_eq!(format.parse_strict("₦ 1,600,000").unwrap(), dec!(1600000));
        assert_eq!(format.parse_strict("-₦10").unwrap(), dec!(-10));
        assert_eq!(format.parse_strict("0.21").unwrap(), dec!(0.21));
    }

    #[test]
    fn parse_strict_empty_is_zero() {
        assert_eq!(CurrencyFormat::default().parse_strict("  ").unwrap(), dec!(0));
    }

    #[test]
    fn parse_strict_rejects_stray_text() {
        let format = CurrencyFormat::default();

        assert!(format.parse_strict("12k").is_err());
        assert!(format.parse_strict("abc").is_err());
    }

    #[test]
    fn parse_currency_strict_reports_input() {
        let error = parse_currency_strict("₦1,2x0").unwrap_err();

        assert_eq!(error.input, "₦1,2x0");
        assert_eq!(parse_currency_strict("₦2,500").unwrap(), dec!(2500));
    }
}
