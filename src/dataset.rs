//! Dataset loading: reads the per-metal CSV / JSON files into raw rows.
//!
//! This is the ingestion boundary: whole-file failures (unreadable file,
//! missing column, invalid JSON) are errors here, while bad individual rows
//! are left for the parser to drop.

use crate::domain::price_history::RawRow;
use crate::error::{LoadError, PriceError};
use std::io::Read;
use std::path::Path;

/// Column names every dataset must carry.
pub const COLUMNS: [&str; 5] = ["date", "traditional", "k18", "k21", "k22"];

/// On-disk dataset encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    #[cfg(feature = "csv")]
    Csv,
    Json,
}

impl Format {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            #[cfg(feature = "csv")]
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(LoadError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Read CSV rows. Columns are matched by header name, in any order.
///
/// Rows with the wrong number of fields are skipped with a warning.
#[cfg(feature = "csv")]
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<RawRow>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut rows = Vec::new();
    for (i, result) in rdr.deserialize::<RawRow>().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            Err(e) => tracing::warn!("Skipping CSV record {}: {}", i + 1, e),
        }
    }
    Ok(rows)
}

/// Read a JSON array of row objects. Prices may be numbers or strings.
///
/// Elements that are not valid rows are skipped with a warning.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<RawRow>, PriceError> {
    let values: Vec<serde_json::Value> = serde_json::from_reader(reader)?;
    let mut rows = Vec::with_capacity(values.len());
    for (i, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<RawRow>(value) {
            Ok(row) => rows.push(row),
            Err(e) => tracing::warn!("Skipping JSON element {}: {}", i, e),
        }
    }
    Ok(rows)
}

/// Load a dataset file, picking the format from its extension.
pub fn load_path(path: impl AsRef<Path>) -> Result<Vec<RawRow>, PriceError> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let file = std::fs::File::open(path).map_err(LoadError::from)?;
    let reader = std::io::BufReader::new(file);

    let rows = match format {
        #[cfg(feature = "csv")]
        Format::Csv => read_csv(reader)?,
        Format::Json => read_json(reader)?,
    };
    tracing::info!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}
