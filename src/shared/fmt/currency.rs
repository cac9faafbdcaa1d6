//! Currency formatting behind a swappable capability.
//!
//! The board only needs "format this amount as money with N fraction digits".
//! [`NarrowSymbolFormatter`] covers that with en-US style grouping and a
//! narrow symbol prefix; apps with a real locale library can plug in their
//! own [`CurrencyFormat`].

use super::{decimal, num};
use crate::shared::Unit;
use serde::{Deserialize, Serialize};

/// Format an amount as currency with exactly `fraction_digits` digits after
/// the decimal separator.
pub trait CurrencyFormat: std::fmt::Debug + Send + Sync {
    fn format(&self, amount: f64, fraction_digits: u32) -> String;
}

/// Symbols and separators for [`NarrowSymbolFormatter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// ISO 4217 code, e.g. `BDT`.
    pub code: String,
    /// Narrow symbol placed before the amount, e.g. `৳`.
    pub symbol: String,
    pub group_separator: String,
    pub decimal_separator: String,
}

impl CurrencyConfig {
    /// Taka with en-US separators.
    pub fn bdt() -> Self {
        Self::narrow("BDT", "৳")
    }

    /// A currency with en-US separators and the given narrow symbol.
    pub fn narrow(code: &str, symbol: &str) -> Self {
        Self {
            code: code.to_string(),
            symbol: symbol.to_string(),
            group_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
        }
    }
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self::bdt()
    }
}

/// Minimal locale-free currency formatter: `-৳1,234.5`.
///
/// Rounds the shortest decimal form of the `f64`, not its exact binary value,
/// so `0.15` at one digit gives `৳0.2`. Amounts that round to zero drop the
/// sign (`-0.4` gives `৳0`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NarrowSymbolFormatter {
    config: CurrencyConfig,
}

impl NarrowSymbolFormatter {
    pub fn new(config: CurrencyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CurrencyConfig {
        &self.config
    }
}

impl CurrencyFormat for NarrowSymbolFormatter {
    fn format(&self, amount: f64, fraction_digits: u32) -> String {
        let fixed = decimal::to_fixed(amount, fraction_digits);
        let (sign, digits) = match fixed.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", fixed.as_str()),
        };
        format!(
            "{}{}{}",
            sign,
            self.config.symbol,
            num::group_digits(
                digits,
                &self.config.group_separator,
                &self.config.decimal_separator
            )
        )
    }
}

/// Format a stored price-per-gram for display in `unit`.
///
/// `show_fraction` selects one fraction digit (bhori view, tooltips) versus
/// none (axis ticks, gram view).
pub fn format_price(
    formatter: &dyn CurrencyFormat,
    price_per_gram: f64,
    unit: Unit,
    show_fraction: bool,
) -> String {
    let digits = if show_fraction { 1 } else { 0 };
    formatter.format(unit.convert(price_per_gram), digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bdt() -> NarrowSymbolFormatter {
        NarrowSymbolFormatter::default()
    }

    #[test]
    fn test_format_price_bhori_with_fraction() {
        assert_eq!(format_price(&bdt(), 1000.0, Unit::Bhori, true), "৳11,664.0");
    }

    #[test]
    fn test_format_price_gram_without_fraction() {
        assert_eq!(format_price(&bdt(), 9876.4, Unit::Gram, false), "৳9,876");
        assert_eq!(format_price(&bdt(), 9876.5, Unit::Gram, false), "৳9,877");
    }

    #[test]
    fn test_format_negative_puts_sign_before_symbol() {
        assert_eq!(bdt().format(-1234.0, 0), "-৳1,234");
    }

    #[test]
    fn test_format_small_and_zero() {
        assert_eq!(bdt().format(0.0, 1), "৳0.0");
        assert_eq!(bdt().format(12.34, 1), "৳12.3");
    }

    #[test]
    fn test_rounds_shortest_decimal_and_drops_negative_zero() {
        assert_eq!(bdt().format(0.15, 1), "৳0.2");
        assert_eq!(bdt().format(-0.4, 0), "৳0");
    }

    #[test]
    fn test_custom_config() {
        let eur = NarrowSymbolFormatter::new(CurrencyConfig {
            code: "EUR".to_string(),
            symbol: "€".to_string(),
            group_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
        });
        assert_eq!(eur.format(1234567.25, 1), "€1.234.567,3");
        assert_eq!(eur.config().code, "EUR");
    }

    #[test]
    fn test_bhori_gram_round_trip() {
        let f = bdt();
        for price in [1.0, 87.5, 1234.5, 9876.54, 120_000.0] {
            let bhori = num::parse_grouped(&format_price(&f, price, Unit::Bhori, true), '.').unwrap();
            let gram = num::parse_grouped(&format_price(&f, price, Unit::Gram, true), '.').unwrap();
            assert!((bhori / 11.664 - gram).abs() <= 0.1, "price {price}");
        }
    }
}
