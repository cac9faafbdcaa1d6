//! Unified error types.

use thiserror::Error;

/// Top-level error for dataset loading and board construction.
///
/// The pure pipeline (parse → window → index, parse → trend) never returns
/// this type: row failures drop the row and stat failures yield "unavailable".
#[derive(Error, Debug)]
pub enum PriceError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Row-level parse failures. The offending row is excluded from the series.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed date '{input}'")]
    MalformedDate { input: String },

    #[error("Malformed {field} price '{input}'")]
    MalformedPrice { field: &'static str, input: String },
}

/// Whole-dataset loader failures.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "csv")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column '{0}'")]
    MissingColumn(&'static str),

    #[error("Unsupported dataset format: {0}")]
    UnsupportedFormat(String),
}
