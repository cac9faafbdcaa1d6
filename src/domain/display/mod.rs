//! Display models: ready-to-render strings for the price table, tooltip and
//! trend banner.

use crate::domain::price_history::{Karat, PriceRecord};
use crate::domain::trend::TrendStat;
use crate::shared::fmt::{date, format_price, CurrencyFormat};
use crate::shared::Unit;
use serde::{Deserialize, Serialize};

/// One cell of the latest-price table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceCell {
    pub karat: Karat,
    pub label: String,
    pub value: String,
}

/// Latest prices for every karat, plus the "last updated" date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestPrices {
    pub cells: Vec<PriceCell>,
    pub last_updated: String,
}

impl LatestPrices {
    /// Whole-currency values in `unit`, purest karat first.
    pub fn new(record: &PriceRecord, unit: Unit, formatter: &dyn CurrencyFormat) -> Self {
        let cells = Karat::ALL
            .iter()
            .map(|karat| PriceCell {
                karat: *karat,
                label: karat.label().to_string(),
                value: format_price(formatter, record.price(*karat), unit, false),
            })
            .collect();
        Self {
            cells,
            last_updated: date::long_date(record.date),
        }
    }
}

/// Hover tooltip for a single data point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tooltip {
    pub heading: String,
    /// `"22K: ৳…"` lines, purest karat first.
    pub lines: Vec<String>,
}

impl Tooltip {
    /// Bhori prices show one fraction digit; gram prices show none.
    pub fn new(record: &PriceRecord, unit: Unit, formatter: &dyn CurrencyFormat) -> Self {
        let show_fraction = unit == Unit::Bhori;
        let lines = Karat::ALL
            .iter()
            .map(|karat| {
                format!(
                    "{}: {}",
                    karat.label(),
                    format_price(formatter, record.price(*karat), unit, show_fraction)
                )
            })
            .collect();
        Self {
            heading: date::short_date(record.date),
            lines,
        }
    }
}

/// The "last 7 days" banner: arrow, absolute change and percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendBanner {
    pub is_up: bool,
    pub arrow: char,
    /// Absolute change in the display unit, whole currency.
    pub amount: String,
    /// Two-decimal percentage, signed.
    pub percentage: String,
}

impl TrendBanner {
    pub fn new(stat: &TrendStat, unit: Unit, formatter: &dyn CurrencyFormat) -> Self {
        Self {
            is_up: stat.is_up,
            arrow: stat.arrow(),
            amount: format_price(formatter, stat.diff.abs(), unit, false),
            percentage: stat.percentage_display(),
        }
    }
}

impl std::fmt::Display for TrendBanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({}%)", self.arrow, self.amount, self.percentage)
    }
}
