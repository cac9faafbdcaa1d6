//! Price history domain: parsed daily records, the sorted full series,
//! trailing windows and exact-date lookup.

mod convert;
pub mod index;
pub mod state;
pub mod window;
pub mod wire;

pub use convert::parse_date;
pub use index::SeriesIndex;
pub use state::PriceHistoryState;
pub use wire::RawRow;

use crate::error::ParseError;
use crate::shared::Window;
use serde::{Deserialize, Serialize};

/// One day's prices for one metal, per gram in local currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Unix timestamp in milliseconds.
    pub date: i64,
    pub traditional: f64,
    pub k18: f64,
    pub k21: f64,
    pub k22: f64,
}

impl PriceRecord {
    pub fn price(&self, karat: Karat) -> f64 {
        match karat {
            Karat::K22 => self.k22,
            Karat::K21 => self.k21,
            Karat::K18 => self.k18,
            Karat::Traditional => self.traditional,
        }
    }

    #[cfg(test)]
    pub(crate) fn flat(date: i64, price: f64) -> Self {
        Self {
            date,
            traditional: price,
            k18: price,
            k21: price,
            k22: price,
        }
    }
}

/// Purity grade; each has its own price column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Karat {
    K22,
    K21,
    K18,
    Traditional,
}

impl Karat {
    /// Display order, purest first.
    pub const ALL: [Karat; 4] = [Karat::K22, Karat::K21, Karat::K18, Karat::Traditional];

    pub fn label(&self) -> &'static str {
        match self {
            Self::K22 => "22K",
            Self::K21 => "21K",
            Self::K18 => "18K",
            Self::Traditional => "সনাতন",
        }
    }
}

impl std::fmt::Display for Karat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ─── PriceSeries ─────────────────────────────────────────────────────────────

/// The full, unfiltered series for one metal, sorted ascending by date.
///
/// Sorting happens once on construction, so every anchor-dependent step
/// (windows, trend) sees the same "last record".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<PriceRecord>", into = "Vec<PriceRecord>")]
pub struct PriceSeries {
    records: Vec<PriceRecord>,
}

impl PriceSeries {
    pub fn from_records(mut records: Vec<PriceRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        Self { records }
    }

    /// Parse every row, dropping the ones that fail.
    pub fn parse(rows: &[RawRow]) -> (Self, ParseReport) {
        let mut records = Vec::with_capacity(rows.len());
        let mut dropped = Vec::new();

        for (row_index, row) in rows.iter().enumerate() {
            match PriceRecord::try_from(row) {
                Ok(record) => records.push(record),
                Err(error) => dropped.push(DroppedRow { row_index, error }),
            }
        }

        let report = ParseReport {
            total: rows.len(),
            dropped,
        };
        (Self::from_records(records), report)
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn first(&self) -> Option<&PriceRecord> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&PriceRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records inside `window`, anchored at this series' last record.
    pub fn window(&self, window: Window) -> Vec<PriceRecord> {
        window::filter(&self.records, window)
    }
}

impl From<Vec<PriceRecord>> for PriceSeries {
    fn from(records: Vec<PriceRecord>) -> Self {
        Self::from_records(records)
    }
}

impl From<PriceSeries> for Vec<PriceRecord> {
    fn from(series: PriceSeries) -> Self {
        series.records
    }
}

/// Outcome of a batch parse: how many rows came in and which were dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    pub total: usize,
    pub dropped: Vec<DroppedRow>,
}

impl ParseReport {
    pub fn accepted(&self) -> usize {
        self.total - self.dropped.len()
    }

    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DroppedRow {
    /// Zero-based position in the input rows.
    pub row_index: usize,
    pub error: ParseError,
}

// ─── SeriesView ──────────────────────────────────────────────────────────────

/// A windowed slice of a series plus its lookup index, as a chart consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesView {
    pub window: Window,
    records: Vec<PriceRecord>,
    index: SeriesIndex,
}

impl SeriesView {
    pub fn new(series: &PriceSeries, window: Window) -> Self {
        let records = series.window(window);
        let index = SeriesIndex::build(&records);
        Self {
            window,
            records,
            index,
        }
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn index(&self) -> &SeriesIndex {
        &self.index
    }

    pub fn lookup(&self, date_ms: i64) -> Option<&PriceRecord> {
        self.index.get(date_ms)
    }

    pub fn last(&self) -> Option<&PriceRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
