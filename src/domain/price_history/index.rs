//! Exact-timestamp lookup over a filtered series.

use super::PriceRecord;
use std::collections::HashMap;

/// Map from epoch-ms date to its record, for hover/tooltip lookups.
///
/// Built whole from a series and never patched. A miss is a normal outcome
/// (cursor between points or outside the range), not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesIndex {
    by_date: HashMap<i64, PriceRecord>,
}

impl SeriesIndex {
    pub fn build(records: &[PriceRecord]) -> Self {
        Self {
            by_date: records.iter().map(|r| (r.date, *r)).collect(),
        }
    }

    pub fn get(&self, date_ms: i64) -> Option<&PriceRecord> {
        self.by_date.get(&date_ms)
    }

    pub fn contains(&self, date_ms: i64) -> bool {
        self.by_date.contains_key(&date_ms)
    }

    /// Indexed timestamps, in no particular order.
    pub fn dates(&self) -> impl Iterator<Item = i64> + '_ {
        self.by_date.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
