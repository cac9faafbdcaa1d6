//! Wire types for dataset rows (CSV + JSON).

use crate::shared::serde_util::string_or_number;
use serde::{Deserialize, Serialize};

/// One row of a metal dataset, exactly as the loader read it.
///
/// CSV files carry every column as text; JSON files carry prices as numbers.
/// Both land here as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub date: String,
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub traditional: String,
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub k18: String,
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub k21: String,
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub k22: String,
}

impl RawRow {
    pub fn new(date: &str, traditional: &str, k18: &str, k21: &str, k22: &str) -> Self {
        Self {
            date: date.to_string(),
            traditional: traditional.to_string(),
            k18: k18.to_string(),
            k21: k21.to_string(),
            k22: k22.to_string(),
        }
    }
}
