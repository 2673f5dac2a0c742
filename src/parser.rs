//! CSV ingestion and row classification for activity exports.
//!
//! Exports from different tools name the same field differently, so each field
//! is looked up through an ordered list of candidate column names.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ReportError, Result};

/// Candidate columns for the activity date, highest priority first.
pub static DATE_COLUMNS: &[&str] = &[
    "Activity Date",
    "Activity Date Local",
    "Date",
    "Start Date",
    "Start Date Local",
];

/// Candidate columns for the activity type.
pub static TYPE_COLUMNS: &[&str] = &["Activity Type", "Type", "Sport Type"];

/// Candidate columns for the activity distance.
pub static DISTANCE_COLUMNS: &[&str] = &["Distance", "Distance.1"];

const BOM: char = '\u{feff}';

/// One CSV row keyed by header name.
#[derive(Debug, Default, Clone)]
pub struct RawRecord {
    fields: HashMap<String, String>,
}

impl RawRecord {
    /// Returns the first non-blank value among `columns`, untrimmed.
    pub fn first_value(&self, columns: &[&str]) -> Option<&str> {
        columns
            .iter()
            .filter_map(|c| self.fields.get(*c))
            .map(String::as_str)
            .find(|v| !v.trim().is_empty())
    }

    /// True when the resolved activity type mentions "run".
    ///
    /// This is a substring test, so "Trail Run" and "Virtual_Run" match, and
    /// so does anything else containing those three letters.
    pub fn is_run(&self) -> bool {
        self.first_value(TYPE_COLUMNS)
            .map(|v| v.trim().to_lowercase().replace('_', " ").contains("run"))
            .unwrap_or(false)
    }

    pub fn date(&self) -> Option<&str> {
        self.first_value(DATE_COLUMNS)
    }

    pub fn distance(&self) -> Option<&str> {
        self.first_value(DISTANCE_COLUMNS)
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Parses CSV text with a header row into [`RawRecord`]s.
///
/// A leading byte-order mark is ignored. Rows shorter than the header simply
/// lack the trailing columns. When a header name repeats, the right-most
/// column wins.
pub fn parse_records(content: &str) -> Result<Vec<RawRecord>> {
    let content = content.strip_prefix(BOM).unwrap_or(content);

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = rdr.headers()?.clone();
    let mut records: Vec<RawRecord> = Vec::new();

    for result in rdr.records() {
        let row = result?;
        records.push(headers.iter().zip(row.iter()).collect());
    }

    debug!(rows = records.len(), columns = headers.len(), "Parsed CSV rows");
    Ok(records)
}

/// Reads an export from disk and parses it with [`parse_records`].
///
/// # Errors
///
/// Returns [`ReportError::InputNotFound`] if `path` does not exist, and I/O,
/// UTF-8 or CSV errors otherwise.
pub fn read_records(path: &Path) -> Result<Vec<RawRecord>> {
    if !path.exists() {
        return Err(ReportError::InputNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    parse_records(&content)
}
