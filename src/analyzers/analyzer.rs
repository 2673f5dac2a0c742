use crate::analyzers::aggregate::aggregate_weeks;
use crate::analyzers::types::{Report, Run};
use crate::config::ReportConfig;
use crate::dates::parse_date;
use crate::error::Result;
use crate::output::write_report;
use crate::parser::{RawRecord, read_records};
use crate::units::{parse_distance, to_rounded_miles};
use std::path::PathBuf;
use tracing::{debug, info};

/// Result of a successful [`generate`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub path: PathBuf,
    pub report: Report,
}

/// Turns parsed rows into miles-denominated runs inside the configured range.
///
/// Rows that are not runs, lack a date or distance, fall outside the range, or
/// have a non-positive distance are dropped without comment. A date or
/// distance that cannot be parsed aborts the whole load. With
/// [`DistanceUnit::Auto`](crate::units::DistanceUnit::Auto) the unit is
/// inferred once from the largest surviving distance. The result is sorted by
/// date, keeping row order for runs on the same day.
#[tracing::instrument(skip_all, fields(rows = records.len(), unit = %config.distance_unit))]
pub fn collect_runs(records: &[RawRecord], config: &ReportConfig) -> Result<Vec<Run>> {
    let mut raw = Vec::new();

    for record in records {
        if !record.is_run() {
            continue;
        }

        let (Some(date_text), Some(distance_text)) = (record.date(), record.distance()) else {
            continue;
        };

        let date = parse_date(date_text)?;
        if !config.contains(date) {
            continue;
        }

        let distance = parse_distance(distance_text)?;
        if distance <= 0.0 {
            continue;
        }

        raw.push((date, distance));
    }

    if raw.is_empty() {
        debug!("No qualifying runs");
        return Ok(Vec::new());
    }

    let max_distance = raw.iter().map(|(_, d)| *d).fold(f64::MIN, f64::max);
    let unit = config.distance_unit.resolve(max_distance);
    debug!(max_distance, resolved_unit = %unit, runs = raw.len(), "Resolved distance unit");

    let mut runs = raw
        .into_iter()
        .map(|(date, distance)| {
            Ok(Run {
                date,
                miles: to_rounded_miles(distance, unit)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    runs.sort_by_key(|run| run.date);

    Ok(runs)
}

/// Reads the configured export and builds the weekly report in memory.
///
/// The date range is checked before the input file is touched.
#[tracing::instrument(skip_all, fields(input = %config.input.display()))]
pub fn build_report(config: &ReportConfig) -> Result<Report> {
    config.validate()?;

    let records = read_records(&config.input)?;
    let runs = collect_runs(&records, config)?;
    let report = aggregate_weeks(&runs, config.start_date);

    info!(
        rows = records.len(),
        runs = runs.len(),
        weeks = report.weeks.len(),
        "Report built"
    );
    Ok(report)
}

/// Builds the report and writes it to the resolved output path.
///
/// Nothing is written unless the whole report was built successfully.
pub fn generate(config: &ReportConfig) -> Result<Generated> {
    let report = build_report(config)?;

    let path = config.resolved_output();
    debug!(
        path = %path.display(),
        final_running_total = report.weeks.last().map_or(0.0, |w| w.running_total),
        "Writing report"
    );
    write_report(&path, &report)?;

    Ok(Generated { path, report })
}
