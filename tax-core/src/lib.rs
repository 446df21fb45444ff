pub mod calculations;
pub mod currency;
pub mod models;

pub use currency::{
    CurrencyFormat, ParseCurrencyError, format_currency, parse_currency,
    parse_currency_strict,
};
pub use models::*;
