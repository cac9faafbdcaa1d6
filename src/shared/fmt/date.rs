//! Date labels for axis ticks, tooltips and the "last updated" line.
//!
//! Timestamps are epoch milliseconds rendered in UTC, matching how dates are
//! parsed on ingestion.

use crate::shared::Window;
use chrono::{DateTime, Utc};

fn to_utc(ms: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(ms)
}

fn render(ms: i64, pattern: &str) -> String {
    to_utc(ms)
        .map(|d| d.format(pattern).to_string())
        .unwrap_or_default()
}

/// Axis tick label: `Jan 05` for short windows, `Jan 2024` otherwise.
pub fn axis_label(ms: i64, window: Window) -> String {
    if window.is_short() {
        render(ms, "%b %d")
    } else {
        render(ms, "%b %Y")
    }
}

/// Tooltip heading, e.g. `Jan 05, 2024`.
pub fn short_date(ms: i64) -> String {
    render(ms, "%b %d, %Y")
}

/// Long form for the "last updated" line, e.g. `January 05, 2024`.
pub fn long_date(ms: i64) -> String {
    render(ms, "%B %d, %Y")
}
