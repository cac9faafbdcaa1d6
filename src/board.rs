//! High-level entry point: `PriceBoard` owns both metals' series, the current
//! selection and the derived-value cache.
//!
//! Selection changes are cheap: they only move the cache key. Derived values
//! are computed on first access and shared as `Arc`s afterwards.

use crate::dataset;
use crate::domain::display::{LatestPrices, Tooltip, TrendBanner};
use crate::domain::price_history::{
    ParseReport, PriceHistoryState, PriceRecord, PriceSeries, RawRow, SeriesView,
};
use crate::domain::trend::{TrendStat, TrendUnavailable};
use crate::error::PriceError;
use crate::shared::fmt::{self, CurrencyConfig, CurrencyFormat, NarrowSymbolFormatter};
use crate::shared::{Metal, Selection, Unit, Window};

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// The price board: pick a metal, window and unit; read back chart data,
/// lookups, the weekly trend and formatted prices.
pub struct PriceBoard {
    series: HashMap<Metal, Arc<PriceSeries>>,
    selection: Selection,
    formatter: Arc<dyn CurrencyFormat>,
    state: PriceHistoryState,
}

impl PriceBoard {
    pub fn builder() -> PriceBoardBuilder {
        PriceBoardBuilder::default()
    }

    // ── Selection ────────────────────────────────────────────────────────

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn select_metal(&mut self, metal: Metal) {
        self.selection.metal = metal;
    }

    pub fn select_window(&mut self, window: Window) {
        self.selection.window = window;
    }

    pub fn select_unit(&mut self, unit: Unit) {
        self.selection.unit = unit;
    }

    /// Swap in a new full series for `metal`, discarding everything derived
    /// from the old one.
    pub fn replace_series(&mut self, metal: Metal, series: PriceSeries) {
        self.series.insert(metal, Arc::new(series));
        self.state.invalidate(metal);
    }

    // ── Derived values ───────────────────────────────────────────────────

    /// Full sorted series for the active metal. Empty if none was loaded.
    pub fn full_series(&self) -> Arc<PriceSeries> {
        self.series_for(self.selection.metal)
    }

    /// Windowed records + index for the active (metal, window).
    pub fn view(&mut self) -> Arc<SeriesView> {
        let Selection { metal, window, .. } = self.selection;
        let series = self.series_for(metal);
        self.state.view(metal, window, &series)
    }

    /// Record at exactly `date_ms` in the active view, if any.
    pub fn lookup(&mut self, date_ms: i64) -> Option<PriceRecord> {
        self.view().lookup(date_ms).copied()
    }

    /// Latest record of the active metal.
    pub fn latest(&self) -> Option<PriceRecord> {
        self.full_series().last().copied()
    }

    /// 7-day trend for the active metal, with the reason when unavailable.
    pub fn trend_result(&mut self) -> Result<TrendStat, TrendUnavailable> {
        let metal = self.selection.metal;
        let series = self.series_for(metal);
        self.state.trend(metal, &series)
    }

    pub fn trend(&mut self) -> Option<TrendStat> {
        self.trend_result().ok()
    }

    // ── Display ──────────────────────────────────────────────────────────

    /// Format a price-per-gram in the active unit.
    pub fn format_price(&self, price_per_gram: f64, show_fraction: bool) -> String {
        fmt::format_price(
            self.formatter.as_ref(),
            price_per_gram,
            self.selection.unit,
            show_fraction,
        )
    }

    /// Y-axis tick label: whole currency in the active unit.
    pub fn price_tick(&self, price_per_gram: f64) -> String {
        self.format_price(price_per_gram, false)
    }

    /// X-axis tick label for the active window.
    pub fn date_tick(&self, date_ms: i64) -> String {
        fmt::date::axis_label(date_ms, self.selection.window)
    }

    pub fn latest_prices(&self) -> Option<LatestPrices> {
        self.latest()
            .map(|r| LatestPrices::new(&r, self.selection.unit, self.formatter.as_ref()))
    }

    /// Tooltip for the point at exactly `date_ms`; `None` between points.
    pub fn tooltip(&mut self, date_ms: i64) -> Option<Tooltip> {
        self.lookup(date_ms)
            .map(|r| Tooltip::new(&r, self.selection.unit, self.formatter.as_ref()))
    }

    pub fn trend_banner(&mut self) -> Option<TrendBanner> {
        self.trend()
            .map(|t| TrendBanner::new(&t, self.selection.unit, self.formatter.as_ref()))
    }

    /// Page heading for the active metal.
    pub fn title(&self) -> String {
        format!("{} Price History in Bangladesh", self.selection.metal.title())
    }

    fn series_for(&self, metal: Metal) -> Arc<PriceSeries> {
        self.series.get(&metal).cloned().unwrap_or_default()
    }
}

impl std::fmt::Debug for PriceBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceBoard")
            .field("selection", &self.selection)
            .field("formatter", &self.formatter)
            .field("cached_views", &self.state.cached_views())
            .finish()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

enum Source {
    Rows(Vec<RawRow>),
    Path(PathBuf),
    Series(PriceSeries),
}

pub struct PriceBoardBuilder {
    sources: HashMap<Metal, Source>,
    selection: Selection,
    formatter: Option<Arc<dyn CurrencyFormat>>,
    currency: CurrencyConfig,
}

impl Default for PriceBoardBuilder {
    fn default() -> Self {
        Self {
            sources: HashMap::new(),
            selection: Selection::default(),
            formatter: None,
            currency: CurrencyConfig::bdt(),
        }
    }
}

impl PriceBoardBuilder {
    /// Raw rows for `metal`; parsed (and bad rows dropped) on `build`.
    pub fn rows(mut self, metal: Metal, rows: Vec<RawRow>) -> Self {
        self.sources.insert(metal, Source::Rows(rows));
        self
    }

    /// A CSV or JSON dataset file for `metal`; read on `build`.
    pub fn file(mut self, metal: Metal, path: impl Into<PathBuf>) -> Self {
        self.sources.insert(metal, Source::Path(path.into()));
        self
    }

    /// An already-parsed series for `metal`.
    pub fn series(mut self, metal: Metal, series: PriceSeries) -> Self {
        self.sources.insert(metal, Source::Series(series));
        self
    }

    pub fn metal(mut self, metal: Metal) -> Self {
        self.selection.metal = metal;
        self
    }

    pub fn window(mut self, window: Window) -> Self {
        self.selection.window = window;
        self
    }

    pub fn unit(mut self, unit: Unit) -> Self {
        self.selection.unit = unit;
        self
    }

    /// Symbol and separators for the built-in formatter.
    pub fn currency(mut self, config: CurrencyConfig) -> Self {
        self.currency = config;
        self
    }

    /// Replace the built-in formatter entirely.
    pub fn formatter(mut self, formatter: Arc<dyn CurrencyFormat>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn build(self) -> Result<PriceBoard, PriceError> {
        let mut series = HashMap::new();
        for (metal, source) in self.sources {
            let parsed = match source {
                Source::Series(s) => s,
                Source::Rows(rows) => parse_logged(metal, &rows),
                Source::Path(path) => parse_logged(metal, &dataset::load_path(&path)?),
            };
            series.insert(metal, Arc::new(parsed));
        }

        for metal in Metal::ALL {
            if !series.contains_key(&metal) {
                tracing::warn!("No dataset for {}; its chart will be empty", metal);
            }
        }

        let formatter = self
            .formatter
            .unwrap_or_else(|| Arc::new(NarrowSymbolFormatter::new(self.currency)));

        Ok(PriceBoard {
            series,
            selection: self.selection,
            formatter,
            state: PriceHistoryState::new(),
        })
    }
}

fn parse_logged(metal: Metal, rows: &[RawRow]) -> PriceSeries {
    let (series, report) = PriceSeries::parse(rows);
    log_report(metal, &report);
    series
}

fn log_report(metal: Metal, report: &ParseReport) {
    for dropped in &report.dropped {
        tracing::warn!(
            "Dropping {} row {}: {}",
            metal,
            dropped.row_index,
            dropped.error
        );
    }
    tracing::info!(
        "Loaded {} {} records ({} dropped)",
        report.accepted(),
        metal,
        report.dropped.len()
    );
}
