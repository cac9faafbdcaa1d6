//! Shared selection enums and utilities used across all domain modules.
//!
//! These types serialize with the same labels the UI shows, so a selection can
//! round-trip through a query string or saved view unchanged.

pub mod fmt;
pub mod serde_util;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Grams in one bhori. Domain-fixed; do not alter.
pub const GRAMS_PER_BHORI: f64 = 11.664;

/// A selection label that did not match any known variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} '{value}'")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownLabel {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

// ─── Metal ───────────────────────────────────────────────────────────────────

/// Which independent dataset is the source of truth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metal {
    #[default]
    Gold,
    Silver,
}

impl Metal {
    pub const ALL: [Metal; 2] = [Metal::Gold, Metal::Silver];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Silver => "silver",
        }
    }

    /// Capitalized name for headings.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Silver => "Silver",
        }
    }
}

impl std::fmt::Display for Metal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Metal {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gold" => Ok(Self::Gold),
            "silver" => Ok(Self::Silver),
            _ => Err(UnknownLabel::new("metal", s)),
        }
    }
}

// ─── Window ──────────────────────────────────────────────────────────────────

/// Trailing time range, anchored at the latest record of the loaded series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Window {
    #[serde(rename = "7 days")]
    Days7,
    #[serde(rename = "30 days")]
    Days30,
    #[serde(rename = "1 year")]
    Year1,
    #[default]
    #[serde(rename = "all time")]
    AllTime,
}

impl Window {
    pub const ALL: [Window; 4] = [Window::Days7, Window::Days30, Window::Year1, Window::AllTime];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Days7 => "7 days",
            Self::Days30 => "30 days",
            Self::Year1 => "1 year",
            Self::AllTime => "all time",
        }
    }

    /// Whether axis ticks should show day precision rather than month/year.
    pub fn is_short(&self) -> bool {
        matches!(self, Self::Days7 | Self::Days30)
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Window {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Window::ALL
            .into_iter()
            .find(|w| w.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLabel::new("window", s))
    }
}

// ─── Unit ────────────────────────────────────────────────────────────────────

/// Display unit. A pure multiplicative view over price-per-gram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Gram,
    #[default]
    Bhori,
}

impl Unit {
    pub const ALL: [Unit; 2] = [Unit::Gram, Unit::Bhori];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gram => "gram",
            Self::Bhori => "bhori",
        }
    }

    /// Grams per one display unit.
    pub fn factor(&self) -> f64 {
        match self {
            Self::Gram => 1.0,
            Self::Bhori => GRAMS_PER_BHORI,
        }
    }

    /// Convert a stored price-per-gram into this unit.
    pub fn convert(&self, price_per_gram: f64) -> f64 {
        price_per_gram * self.factor()
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Unit {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gram" => Ok(Self::Gram),
            "bhori" => Ok(Self::Bhori),
            _ => Err(UnknownLabel::new("unit", s)),
        }
    }
}

// ─── Selection ───────────────────────────────────────────────────────────────

/// The user's current (metal, window, unit) choice.
///
/// Defaults match the landing view: gold, all time, bhori.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub metal: Metal,
    pub window: Window,
    pub unit: Unit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_serde_uses_ui_labels() {
        let w: Window = serde_json::from_str("\"30 days\"").unwrap();
        assert_eq!(w, Window::Days30);
        assert_eq!(serde_json::to_string(&Window::AllTime).unwrap(), "\"all time\"");
    }

    #[test]
    fn test_window_from_str() {
        assert_eq!("1 year".parse::<Window>().unwrap(), Window::Year1);
        assert_eq!(" 7 Days ".parse::<Window>().unwrap(), Window::Days7);
        let err = "2 weeks".parse::<Window>().unwrap_err();
        assert_eq!(err.kind, "window");
    }

    #[test]
    fn test_metal_and_unit_serde() {
        let m: Metal = serde_json::from_str("\"silver\"").unwrap();
        assert_eq!(m, Metal::Silver);
        let u: Unit = serde_json::from_str("\"bhori\"").unwrap();
        assert_eq!(u, Unit::Bhori);
        assert!("ounce".parse::<Unit>().is_err());
    }

    #[test]
    fn test_unit_convert() {
        assert_eq!(Unit::Gram.convert(1000.0), 1000.0);
        assert!((Unit::Bhori.convert(1000.0) - 11664.0).abs() < 1e-9);
    }

    #[test]
    fn test_selection_default() {
        let s = Selection::default();
        assert_eq!(s.metal, Metal::Gold);
        assert_eq!(s.window, Window::AllTime);
        assert_eq!(s.unit, Unit::Bhori);
    }
}
