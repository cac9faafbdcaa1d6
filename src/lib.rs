//! # metal-prices
//!
//! Core of a gold/silver price history viewer: turns daily price rows into a
//! sorted, windowed, indexable series, computes the weekly 22K trend, and
//! formats prices per gram or per bhori.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Selection enums, formatting, domain models (pure, WASM-safe)
//! 2. **Dataset**: CSV / JSON loading into raw rows (the ingestion boundary)
//! 3. **Board**: `PriceBoard` holding both metals, the current selection and
//!    a cache of derived values
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use metal_prices::prelude::*;
//!
//! let mut board = PriceBoard::builder()
//!     .file(Metal::Gold, "prices.csv")
//!     .file(Metal::Silver, "silver-prices.csv")
//!     .build()?;
//!
//! board.select_window(Window::Days30);
//! let chart = board.view();
//! if let Some(banner) = board.trend_banner() {
//!     println!("{banner}");
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Selection enums, unit constants and display formatting.
pub mod shared;

/// Domain modules (vertical slices): records, windows, trend, display models.
pub mod domain;

/// Unified error types.
pub mod error;

// ── Layer 2: Dataset ─────────────────────────────────────────────────────────

/// CSV / JSON dataset loading.
pub mod dataset;

// ── Layer 3: Board ───────────────────────────────────────────────────────────

/// `PriceBoard`: the primary entry point.
pub mod board;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared selection types
    pub use crate::shared::{Metal, Selection, Unit, Window, GRAMS_PER_BHORI};

    // Formatting
    pub use crate::shared::fmt::{format_price, CurrencyConfig, CurrencyFormat, NarrowSymbolFormatter};

    // Domain types: price history
    pub use crate::domain::price_history::{
        Karat, ParseReport, PriceRecord, PriceSeries, RawRow, SeriesIndex, SeriesView,
    };

    // Domain types: trend, display
    pub use crate::domain::display::{LatestPrices, PriceCell, Tooltip, TrendBanner};
    pub use crate::domain::trend::{seven_day_trend, TrendStat, TrendUnavailable};

    // Errors
    pub use crate::error::{LoadError, ParseError, PriceError};

    // Board
    pub use crate::board::{PriceBoard, PriceBoardBuilder};
}
