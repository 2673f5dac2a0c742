//! Date parsing for the heterogeneous timestamp formats found in activity exports.
//!
//! Every format yields a calendar date; any time-of-day component is dropped.
//! Offset-bearing values keep the date as written in the string, so the result
//! never depends on the timezone of the machine running the conversion.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{ReportError, Result};

/// A `strftime` pattern together with how much of a timestamp it describes.
#[derive(Debug, Clone, Copy)]
enum Pattern {
    Date(&'static str),
    DateTime(&'static str),
    Zoned(&'static str),
}

impl Pattern {
    fn parse(self, value: &str) -> Option<NaiveDate> {
        match self {
            Pattern::Date(fmt) => NaiveDate::parse_from_str(value, fmt).ok(),
            Pattern::DateTime(fmt) => NaiveDateTime::parse_from_str(value, fmt)
                .ok()
                .map(|dt| dt.date()),
            Pattern::Zoned(fmt) => DateTime::parse_from_str(value, fmt)
                .ok()
                .map(|dt| dt.date_naive()),
        }
    }
}

/// Formats tried in order; the first match wins.
static PATTERNS: &[Pattern] = &[
    Pattern::Date("%Y-%m-%d"),
    Pattern::DateTime("%Y-%m-%d %H:%M:%S"),
    Pattern::Zoned("%Y-%m-%d %H:%M:%S %z"),
    Pattern::Date("%m/%d/%Y"),
    Pattern::DateTime("%m/%d/%Y, %I:%M:%S %p"),
    Pattern::DateTime("%b %d, %Y, %I:%M:%S %p"),
];

/// ISO 8601 shapes accepted by the fallback besides RFC 3339.
static ISO_PATTERNS: &[Pattern] = &[
    Pattern::Zoned("%Y-%m-%dT%H:%M:%S%.f%z"),
    Pattern::Zoned("%Y-%m-%d %H:%M:%S%.f%z"),
    Pattern::DateTime("%Y-%m-%dT%H:%M:%S%.f"),
    Pattern::DateTime("%Y-%m-%dT%H:%M"),
    Pattern::DateTime("%Y-%m-%d %H:%M:%S%.f"),
    Pattern::DateTime("%Y-%m-%d %H:%M"),
];

/// Parses a date string from an export row or a CLI flag.
///
/// # Errors
///
/// Returns [`ReportError::DateParse`] carrying the raw input when no known
/// format matches.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let cleaned = value.trim();

    if let Some(date) = PATTERNS.iter().find_map(|p| p.parse(cleaned)) {
        return Ok(date);
    }

    parse_iso(&cleaned.replace('Z', "+00:00"))
        .ok_or_else(|| ReportError::DateParse(value.to_string()))
}

fn parse_iso(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    ISO_PATTERNS.iter().find_map(|p| p.parse(value))
}
