//! Weekly aggregation of run mileage.
//!
//! Runs extracted from an export are bucketed into weeks, summed, averaged,
//! and accumulated into a running total for the report.

pub mod aggregate;
pub mod analyzer;
pub mod types;
pub mod utility;
pub mod weeks;
