//! Decimal rounding for display.
//!
//! Floating-point prices are lifted into `rust_decimal::Decimal` before
//! rounding so that midpoints round away from zero on the decimal value the
//! user sees, not on its binary approximation.

use rust_decimal::prelude::*;

/// Round an `f64` to `dp` fraction digits, half away from zero.
///
/// Returns `None` for NaN, infinities and magnitudes `Decimal` cannot hold.
pub fn round_half_away(value: f64, dp: u32) -> Option<Decimal> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
}

/// Fixed-point string with exactly `dp` fraction digits (e.g. `"10.00"`).
///
/// Falls back to `f64` formatting when the value is not representable.
pub fn to_fixed(value: f64, dp: u32) -> String {
    match round_half_away(value, dp) {
        Some(d) => {
            let d = if d.is_zero() { Decimal::ZERO } else { d };
            format!("{:.1$}", d, dp as usize)
        }
        None => format!("{:.1$}", value, dp as usize),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away() {
        assert_eq!(round_half_away(1.25, 1), Decimal::from_str("1.3").ok());
        assert_eq!(round_half_away(-1.25, 1), Decimal::from_str("-1.3").ok());
        assert_eq!(round_half_away(0.125, 2), Decimal::from_str("0.13").ok());
    }

    #[test]
    fn test_round_non_finite() {
        assert_eq!(round_half_away(f64::NAN, 2), None);
        assert_eq!(round_half_away(f64::INFINITY, 2), None);
    }

    #[test]
    fn test_to_fixed_pads() {
        assert_eq!(to_fixed(10.0, 2), "10.00");
        assert_eq!(to_fixed(11664.000000000002, 1), "11664.0");
        assert_eq!(to_fixed(-4.5, 0), "-5");
    }

    #[test]
    fn test_to_fixed_negative_zero() {
        assert_eq!(to_fixed(-0.001, 2), "0.00");
    }
}
