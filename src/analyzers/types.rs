//! Data types used by the aggregation pipeline.

use chrono::NaiveDate;
use serde::Serialize;

/// A single run that passed classification and the date-range filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Run {
    pub date: NaiveDate,
    /// Distance in miles, rounded to two decimals.
    pub miles: f64,
}

/// Summary of one week bucket, serialized as an element of `weeks`.
///
/// Field order is the order written to disk.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSummary {
    pub start_date: NaiveDate,
    pub total: f64,
    pub average: f64,
    pub running_total: f64,
    pub days: Vec<f64>,
}

/// Top-level report consumed by the fitness page charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub weeks: Vec<WeekSummary>,
}
