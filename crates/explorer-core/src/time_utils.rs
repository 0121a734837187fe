use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};
use tracing::warn;

use crate::error::{ExplorerError, Result};
use crate::table::Value;

// ── Formats ───────────────────────────────────────────────────────────────────

/// Date-time patterns seen in Fitbit CSV and JSON exports, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %I:%M:%S %p",
    "%d/%m/%Y %H:%M:%S",
];

/// Date-only patterns; these parse to midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y"];

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse a timestamp string into a naive (wall-clock) [`NaiveDateTime`].
///
/// Handles RFC 3339 (offsets are dropped, keeping the local wall time),
/// the common Fitbit ISO variants with and without fractional seconds, and
/// date-only strings which resolve to midnight.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive);
        }
    }

    parse_date(s).and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse a calendar date string such as `2017-04-01`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Convert a cell to a [`Value::DateTime`].
///
/// `Null` stays `Null`; dates become midnight; text is parsed with
/// [`parse_datetime`]. Anything else is a [`ExplorerError::TimestampParse`].
pub fn to_datetime(value: &Value) -> Result<Value> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::DateTime(dt) => Ok(Value::DateTime(*dt)),
        Value::Date(d) => d
            .and_hms_opt(0, 0, 0)
            .map(Value::DateTime)
            .ok_or_else(|| ExplorerError::TimestampParse(d.to_string())),
        Value::Text(s) => match parse_datetime(s) {
            Some(dt) => Ok(Value::DateTime(dt)),
            None => {
                warn!("could not parse timestamp \"{}\"", s);
                Err(ExplorerError::TimestampParse(s.clone()))
            }
        },
        other => Err(ExplorerError::TimestampParse(other.to_string())),
    }
}

/// Move a date or date-time cell back by `days` calendar days.
///
/// `Null` passes through untouched.
pub fn shift_days_back(value: &Value, days: u64) -> Result<Value> {
    let days = Days::new(days);
    let shifted = match value {
        Value::Null => return Ok(Value::Null),
        Value::DateTime(dt) => dt.checked_sub_days(days).map(Value::DateTime),
        Value::Date(d) => d.checked_sub_days(days).map(Value::Date),
        other => return Err(ExplorerError::TimestampParse(other.to_string())),
    };
    shifted.ok_or_else(|| ExplorerError::TimestampParse(value.to_string()))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
