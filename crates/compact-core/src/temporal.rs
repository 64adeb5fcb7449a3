//! # Temporal Helpers — Server Dates In, Display Strings Out
//!
//! The server emits calendar dates as ISO `YYYY-MM-DD` strings and instants
//! as RFC 3339 datetimes. Parsing is lenient: a malformed value is warned
//! through `tracing` and degrades to `None` instead of failing the document.
//!
//! "Now" is never read inside this module — every time-relative function
//! takes the reference date as an explicit parameter so domain queries stay
//! deterministic under test.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::CompactError;

/// Accepted calendar-date format, for error messages.
pub const SERVER_DATE_FORMAT: &str = "YYYY-MM-DD";

/// Parse a calendar date (`YYYY-MM-DD`), strictly.
///
/// For callers that need a hard failure — operator input, configuration —
/// rather than the payload boundary's degrade-to-absent behavior.
///
/// # Errors
///
/// Returns [`CompactError::InvalidDate`] when the string does not parse.
pub fn parse_date_strict(raw: &str) -> Result<NaiveDate, CompactError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| CompactError::InvalidDate {
        value: raw.to_string(),
        expected: SERVER_DATE_FORMAT,
    })
}

/// Parse a server calendar date (`YYYY-MM-DD`), leniently.
///
/// Returns `None` for absent input and for any string that does not parse,
/// warning in the latter case.
pub fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?;
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            tracing::warn!(value = %raw, "malformed server date — treating as absent");
            None
        }
    }
}

/// Parse a server instant, leniently.
///
/// Accepts RFC 3339 datetimes, falling back to a bare calendar date read as
/// midnight UTC (older payload versions emit `dateOfUpdate` as a date).
pub fn parse_datetime(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    tracing::warn!(value = %raw, "malformed server datetime — treating as absent");
    None
}

/// Presentation form of a calendar date: `M/D/YYYY` (no zero padding).
pub fn display_date(date: NaiveDate) -> String {
    use chrono::Datelike;
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Relative presentation of a past date: `today`, `1 day ago`, `N days ago`.
///
/// A `then` on or after `now` renders as `today`.
pub fn relative_display(then: NaiveDate, now: NaiveDate) -> String {
    let days = (now - then).num_days();
    match days {
        d if d <= 0 => "today".to_string(),
        1 => "1 day ago".to_string(),
        d => format!("{d} days ago"),
    }
}
