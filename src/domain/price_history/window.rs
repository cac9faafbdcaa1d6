//! Trailing window filter, anchored at the last record of the series.

use super::PriceRecord;
use crate::shared::Window;
use chrono::{DateTime, Days, Months, Utc};

/// Exclusive lower bound (epoch ms) for `window` anchored at `anchor_ms`.
///
/// Subtraction is calendar-aware: `1 year` goes back twelve months (Feb 29
/// clamps to Feb 28), day windows go back whole calendar days. `None` means
/// unbounded, either `all time` or a date outside chrono's range.
pub fn cutoff(anchor_ms: i64, window: Window) -> Option<i64> {
    let anchor = DateTime::<Utc>::from_timestamp_millis(anchor_ms)?;
    let start = match window {
        Window::Days7 => anchor.checked_sub_days(Days::new(7))?,
        Window::Days30 => anchor.checked_sub_days(Days::new(30))?,
        Window::Year1 => anchor.checked_sub_months(Months::new(12))?,
        Window::AllTime => return None,
    };
    Some(start.timestamp_millis())
}

/// Records strictly newer than the window cutoff, sorted ascending.
///
/// The anchor is the last element of `records`, so callers pass a series that
/// is already sorted. A record exactly on the cutoff is excluded.
pub fn filter(records: &[PriceRecord], window: Window) -> Vec<PriceRecord> {
    let Some(anchor) = records.last().map(|r| r.date) else {
        return Vec::new();
    };

    let mut kept: Vec<PriceRecord> = match cutoff(anchor, window) {
        Some(bound) => records.iter().filter(|r| r.date > bound).copied().collect(),
        None => records.to_vec(),
    };
    kept.sort_by_key(|r| r.date);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_MS: i64 = 86_400_000;
    // 2024-03-01T00:00:00Z
    const MAR_1_2024: i64 = 1_709_251_200_000;

    fn daily(start: i64, days: i64) -> Vec<PriceRecord> {
        (0..days)
            .map(|i| PriceRecord::flat(start + i * DAY_MS, 1000.0 + i as f64))
            .collect()
    }

    #[test]
    fn test_all_time_keeps_everything() {
        let records = daily(MAR_1_2024, 10);
        assert_eq!(filter(&records, Window::AllTime), records);
    }

    #[test]
    fn test_seven_days_excludes_cutoff_record() {
        let records = daily(MAR_1_2024, 10);
        let out = filter(&records, Window::Days7);
        // last = day 9, cutoff = day 2 (excluded) → days 3..=9
        assert_eq!(out.len(), 7);
        assert_eq!(out[0].date, MAR_1_2024 + 3 * DAY_MS);
        assert_eq!(out.last().unwrap().date, MAR_1_2024 + 9 * DAY_MS);
    }

    #[test]
    fn test_thirty_days() {
        let records = daily(MAR_1_2024, 45);
        let out = filter(&records, Window::Days30);
        assert_eq!(out.len(), 30);
    }

    #[test]
    fn test_one_year_is_calendar_aware() {
        // 2024-02-29 back twelve months clamps to 2023-02-28
        let leap_day = MAR_1_2024 - DAY_MS;
        let bound = cutoff(leap_day, Window::Year1).unwrap();
        let feb_28_2023 = 1_677_542_400_000;
        assert_eq!(bound, feb_28_2023);

        // 2024-03-01 back one year spans the leap day: 366 days
        let bound = cutoff(MAR_1_2024, Window::Year1).unwrap();
        assert_eq!(MAR_1_2024 - bound, 366 * DAY_MS);
    }

    #[test]
    fn test_all_time_has_no_cutoff() {
        assert_eq!(cutoff(MAR_1_2024, Window::AllTime), None);
    }

    #[test]
    fn test_empty_input() {
        assert!(filter(&[], Window::Days7).is_empty());
    }

    #[test]
    fn test_output_sorted_ascending() {
        let records = daily(MAR_1_2024, 40);
        for w in Window::ALL {
            let out = filter(&records, w);
            assert!(out.windows(2).all(|p| p[0].date < p[1].date), "{w}");
        }
    }
}
