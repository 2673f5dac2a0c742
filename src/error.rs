//! Error type shared by every stage of the report pipeline.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("input CSV not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("unable to parse date value: {0}")]
    DateParse(String),
    #[error("invalid distance value: {0}")]
    InvalidDistance(String),
    #[error("end date {end} must be on or after start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error("unsupported distance unit: {0}")]
    UnsupportedUnit(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = ReportError> = std::result::Result<T, E>;
