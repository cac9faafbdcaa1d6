//! Trend domain: 7-day trailing change in the 22K price.
//!
//! Always measured on the full series of the active metal; the display window
//! and unit have no influence.

use crate::domain::price_history::window::cutoff;
use crate::domain::price_history::PriceSeries;
use crate::shared::fmt::decimal;
use crate::shared::Window;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Change between the latest 22K price and the one from a week earlier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendStat {
    /// Price-per-gram difference, unconverted.
    pub diff: f64,
    /// Percent change, rounded to 2 decimal places.
    pub percentage: f64,
    /// `diff >= 0`; a flat week counts as up.
    pub is_up: bool,
}

impl TrendStat {
    /// Percentage with exactly two decimals, e.g. `"10.00"`.
    pub fn percentage_display(&self) -> String {
        decimal::to_fixed(self.percentage, 2)
    }

    pub fn arrow(&self) -> char {
        if self.is_up {
            '▲'
        } else {
            '▼'
        }
    }
}

/// Why no trend can be shown. All variants mean "no stat", never a failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendUnavailable {
    #[error("Need at least 2 records, have {records}")]
    InsufficientHistory { records: usize },

    #[error("No record at least 7 days before the latest")]
    NoBaseline,

    #[error("Baseline 22K price is zero")]
    ZeroBaseline,
}

/// Compute the 7-day trend of the 22K price.
///
/// The baseline is the latest record dated on or before `last − 7 days`
/// (calendar days), so a gap in the data falls back to an older day, never a
/// newer one.
pub fn seven_day_trend(series: &PriceSeries) -> Result<TrendStat, TrendUnavailable> {
    let records = series.records();
    let last = match records {
        [.., last] if records.len() >= 2 => last,
        _ => {
            return Err(TrendUnavailable::InsufficientHistory {
                records: records.len(),
            })
        }
    };

    let target = cutoff(last.date, Window::Days7).ok_or(TrendUnavailable::NoBaseline)?;
    let before = records.partition_point(|r| r.date <= target);
    let baseline = before
        .checked_sub(1)
        .map(|i| &records[i])
        .ok_or(TrendUnavailable::NoBaseline)?;

    if baseline.k22 == 0.0 {
        return Err(TrendUnavailable::ZeroBaseline);
    }

    let diff = last.k22 - baseline.k22;
    let raw_pct = diff / baseline.k22 * 100.0;
    let percentage = decimal::round_half_away(raw_pct, 2)
        .and_then(|d| d.to_f64())
        .unwrap_or(raw_pct);

    Ok(TrendStat {
        diff,
        percentage,
        is_up: diff >= 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::price_history::PriceRecord;

    const DAY_MS: i64 = 86_400_000;
    // 2024-03-01T00:00:00Z
    const D0: i64 = 1_709_251_200_000;

    fn rec(day: i64, k22: f64) -> PriceRecord {
        PriceRecord::flat(D0 + day * DAY_MS, k22)
    }

    fn series(records: Vec<PriceRecord>) -> PriceSeries {
        PriceSeries::from_records(records)
    }

    #[test]
    fn test_exactly_seven_days_apart() {
        let t = seven_day_trend(&series(vec![rec(0, 100.0), rec(7, 110.0)])).unwrap();
        assert_eq!(t.diff, 10.0);
        assert_eq!(t.percentage, 10.0);
        assert_eq!(t.percentage_display(), "10.00");
        assert!(t.is_up);
        assert_eq!(t.arrow(), '▲');
    }

    #[test]
    fn test_single_record_unavailable() {
        assert_eq!(
            seven_day_trend(&series(vec![rec(0, 100.0)])),
            Err(TrendUnavailable::InsufficientHistory { records: 1 })
        );
        assert!(seven_day_trend(&PriceSeries::default()).is_err());
    }

    #[test]
    fn test_history_shorter_than_a_week() {
        let s = series(vec![rec(0, 100.0), rec(3, 105.0), rec(6, 110.0)]);
        assert_eq!(seven_day_trend(&s), Err(TrendUnavailable::NoBaseline));
    }

    #[test]
    fn test_picks_closest_predecessor_never_successor() {
        // Day 10 is latest; target is day 3, which is missing.
        // Day 2 (predecessor) must win over day 4 (successor).
        let s = series(vec![
            rec(0, 90.0),
            rec(2, 100.0),
            rec(4, 200.0),
            rec(10, 120.0),
        ]);
        let t = seven_day_trend(&s).unwrap();
        assert_eq!(t.diff, 20.0);
        assert_eq!(t.percentage, 20.0);
    }

    #[test]
    fn test_down_trend() {
        let t = seven_day_trend(&series(vec![rec(0, 120.0), rec(7, 90.0)])).unwrap();
        assert_eq!(t.diff, -30.0);
        assert_eq!(t.percentage, -25.0);
        assert!(!t.is_up);
        assert_eq!(t.arrow(), '▼');
    }

    #[test]
    fn test_flat_counts_as_up() {
        let t = seven_day_trend(&series(vec![rec(0, 100.0), rec(7, 100.0)])).unwrap();
        assert_eq!(t.diff, 0.0);
        assert!(t.is_up);
        assert_eq!(t.percentage_display(), "0.00");
    }

    #[test]
    fn test_zero_baseline_unavailable() {
        let s = series(vec![rec(0, 0.0), rec(7, 100.0)]);
        assert_eq!(seven_day_trend(&s), Err(TrendUnavailable::ZeroBaseline));
    }

    #[test]
    fn test_percentage_rounded_to_two_places() {
        let t = seven_day_trend(&series(vec![rec(0, 300.0), rec(8, 301.0)])).unwrap();
        assert_eq!(t.percentage, 0.33);
        assert_eq!(t.percentage_display(), "0.33");
    }
}
