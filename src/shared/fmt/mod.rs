//! Display formatting: currency amounts, rounded decimals, date labels.

pub mod currency;
pub mod date;
pub mod decimal;
pub mod num;

pub use currency::{format_price, CurrencyConfig, CurrencyFormat, NarrowSymbolFormatter};
