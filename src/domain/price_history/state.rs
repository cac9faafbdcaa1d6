//! Price history state: memoized derived views keyed by selection.

use super::{PriceSeries, SeriesView};
use crate::domain::trend::{self, TrendStat, TrendUnavailable};
use crate::shared::{Metal, Window};
use std::collections::HashMap;
use std::sync::Arc;

/// Cache of derived values for the (metal, window) pairs seen so far.
///
/// Every entry is a pure function of the metal's full series, so a miss just
/// recomputes. Entries are replaced, never patched; call [`invalidate`] when
/// a metal's series is swapped out.
///
/// The `series` argument of [`view`] and [`trend`] is only read on a miss; a
/// hit returns the cached value even if a different series is passed.
///
/// [`invalidate`]: PriceHistoryState::invalidate
/// [`view`]: PriceHistoryState::view
/// [`trend`]: PriceHistoryState::trend
#[derive(Debug, Clone, Default)]
pub struct PriceHistoryState {
    views: HashMap<(Metal, Window), Arc<SeriesView>>,
    trends: HashMap<Metal, Result<TrendStat, TrendUnavailable>>,
}

impl PriceHistoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The windowed view for `(metal, window)`, computing it on first use.
    pub fn view(&mut self, metal: Metal, window: Window, series: &PriceSeries) -> Arc<SeriesView> {
        self.views
            .entry((metal, window))
            .or_insert_with(|| {
                tracing::debug!("Computing {} view for {}", window, metal);
                Arc::new(SeriesView::new(series, window))
            })
            .clone()
    }

    /// The 7-day trend for `metal`, computing it on first use.
    pub fn trend(
        &mut self,
        metal: Metal,
        series: &PriceSeries,
    ) -> Result<TrendStat, TrendUnavailable> {
        self.trends
            .entry(metal)
            .or_insert_with(|| {
                let result = trend::seven_day_trend(series);
                if let Err(reason) = &result {
                    tracing::debug!("Trend unavailable for {}: {}", metal, reason);
                }
                result
            })
            .clone()
    }

    /// Drop everything derived from `metal`'s series.
    pub fn invalidate(&mut self, metal: Metal) {
        self.views.retain(|(m, _), _| *m != metal);
        self.trends.remove(&metal);
    }

    pub fn cached_views(&self) -> usize {
        self.views.len()
    }

    pub fn clear(&mut self) {
        self.views.clear();
        self.trends.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::price_history::PriceRecord;

    const DAY_MS: i64 = 86_400_000;

    fn series(days: i64) -> PriceSeries {
        PriceSeries::from_records(
            (0..days)
                .map(|i| PriceRecord::flat(i * DAY_MS, 100.0 + i as f64))
                .collect(),
        )
    }

    #[test]
    fn test_view_is_memoized() {
        let mut state = PriceHistoryState::new();
        let s = series(20);
        let a = state.view(Metal::Gold, Window::Days7, &s);
        let b = state.view(Metal::Gold, Window::Days7, &s);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.len(), 7);
        assert_eq!(state.cached_views(), 1);
    }

    #[test]
    fn test_views_keyed_by_metal_and_window() {
        let mut state = PriceHistoryState::new();
        let s = series(20);
        state.view(Metal::Gold, Window::Days7, &s);
        state.view(Metal::Gold, Window::AllTime, &s);
        state.view(Metal::Silver, Window::Days7, &s);
        assert_eq!(state.cached_views(), 3);
    }

    #[test]
    fn test_invalidate_recomputes() {
        let mut state = PriceHistoryState::new();
        let a = state.view(Metal::Gold, Window::AllTime, &series(5));
        state.view(Metal::Silver, Window::AllTime, &series(5));
        state.invalidate(Metal::Gold);
        assert_eq!(state.cached_views(), 1);
        let b = state.view(Metal::Gold, Window::AllTime, &series(9));
        assert_eq!(a.len(), 5);
        assert_eq!(b.len(), 9);
    }

    #[test]
    fn test_hit_ignores_series_argument() {
        let mut state = PriceHistoryState::new();
        let a = state.view(Metal::Gold, Window::AllTime, &series(5));
        let b = state.view(Metal::Gold, Window::AllTime, &series(9));
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(b.len(), 5);
    }

    #[test]
    fn test_trend_cached_and_cleared() {
        let mut state = PriceHistoryState::new();
        let t = state.trend(Metal::Gold, &series(10)).unwrap();
        assert_eq!(t.diff, 7.0);
        // Cached: a different series is ignored until invalidated
        assert_eq!(state.trend(Metal::Gold, &series(1)).unwrap().diff, 7.0);
        state.clear();
        assert!(state.trend(Metal::Gold, &series(1)).is_err());
    }
}
