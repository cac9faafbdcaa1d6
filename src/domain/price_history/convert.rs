//! Conversion: RawRow → PriceRecord (TryFrom + validation).

use super::wire::RawRow;
use super::PriceRecord;
use crate::error::ParseError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

impl TryFrom<&RawRow> for PriceRecord {
    type Error = ParseError;

    fn try_from(row: &RawRow) -> Result<Self, Self::Error> {
        Ok(PriceRecord {
            date: parse_date(&row.date)?,
            traditional: parse_price("traditional", &row.traditional)?,
            k18: parse_price("k18", &row.k18)?,
            k21: parse_price("k21", &row.k21)?,
            k22: parse_price("k22", &row.k22)?,
        })
    }
}

impl TryFrom<RawRow> for PriceRecord {
    type Error = ParseError;

    fn try_from(row: RawRow) -> Result<Self, Self::Error> {
        PriceRecord::try_from(&row)
    }
}

/// Parse an ISO-8601 date or date-time into epoch milliseconds.
///
/// Bare dates and offset-less date-times are taken as UTC.
pub fn parse_date(input: &str) -> Result<i64, ParseError> {
    let s = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc().timestamp_millis());
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.timestamp_millis());
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, pattern) {
            return Ok(dt.and_utc().timestamp_millis());
        }
    }

    Err(ParseError::MalformedDate {
        input: input.to_string(),
    })
}

fn parse_price(field: &'static str, input: &str) -> Result<f64, ParseError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::MalformedPrice {
            field,
            input: input.to_string(),
        })
}
