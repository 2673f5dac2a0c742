//! CLI entry point for the weekly mileage report generator.
//!
//! Reads an activity CSV export, keeps the runs inside the configured range,
//! and writes the weekly JSON report consumed by the fitness page.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum, ValueHint};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use weekly_miles::config::{DEFAULT_END_DATE, DEFAULT_OUTPUT, DEFAULT_START_DATE};
use weekly_miles::dates::parse_date;
use weekly_miles::output::render_json;
use weekly_miles::{DistanceUnit, ReportConfig, build_report, generate};

#[derive(Parser)]
#[command(name = "weekly_miles")]
#[command(
    about = "Generate weekly running aggregates from an activity CSV export",
    long_about = None
)]
struct Cli {
    /// Path to the activities CSV (for example, activities.csv)
    #[arg(value_name = "INPUT_CSV", value_hint = ValueHint::FilePath)]
    input_csv: PathBuf,

    /// Output JSON path, resolved against the project root when relative
    #[arg(short, long, default_value = DEFAULT_OUTPUT, value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// First day (inclusive) of the report, YYYY-MM-DD
    #[arg(long, default_value = DEFAULT_START_DATE, value_parser = parse_date)]
    start_date: chrono::NaiveDate,

    /// Last day (inclusive) of the report, YYYY-MM-DD
    #[arg(long, default_value = DEFAULT_END_DATE, value_parser = parse_date)]
    end_date: chrono::NaiveDate,

    /// Unit of the distance column in the CSV
    #[arg(long, value_enum, default_value_t = UnitOpt::Auto)]
    distance_unit: UnitOpt,

    /// Project root for relative output paths (defaults to the current directory)
    #[arg(long, value_hint = ValueHint::DirPath)]
    project_root: Option<PathBuf>,

    /// Optional: also write JSON-formatted logs to this file
    #[arg(long, value_hint = ValueHint::FilePath)]
    log_file: Option<PathBuf>,

    /// Print the report to stdout instead of writing it
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum UnitOpt {
    Auto,
    Miles,
    Km,
    Meters,
}

impl From<UnitOpt> for DistanceUnit {
    fn from(value: UnitOpt) -> Self {
        match value {
            UnitOpt::Auto => DistanceUnit::Auto,
            UnitOpt::Miles => DistanceUnit::Miles,
            UnitOpt::Km => DistanceUnit::Km,
            UnitOpt::Meters => DistanceUnit::Meters,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let project_root = match cli.project_root {
        Some(root) => root,
        None => std::env::current_dir().context("failed to determine current directory")?,
    };

    let config = ReportConfig::new(cli.input_csv, project_root, cli.start_date, cli.end_date)
        .with_output(cli.output)
        .with_distance_unit(cli.distance_unit.into());

    // Reject a reversed range before any file, log files included, is touched
    config.validate()?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.log_file.as_deref())?;

    if cli.dry_run {
        let report = build_report(&config).context("failed to build weekly report")?;
        print!("{}", render_json(&report)?);
        info!(
            weeks = report.weeks.len(),
            path = %config.resolved_output().display(),
            "Dry run, report not written"
        );
        return Ok(());
    }

    let generated = generate(&config).context("failed to generate weekly report")?;
    let shown = std::fs::canonicalize(&generated.path).unwrap_or(generated.path);
    println!(
        "Wrote {} week(s) to {}",
        generated.report.weeks.len(),
        shown.display()
    );

    Ok(())
}

/// Logging setup: colored stderr, plus a JSON log file when requested.
fn init_logging(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let (json_layer, guard) = match log_file {
        Some(path) => {
            let log_dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let log_file_name = path
                .file_name()
                .unwrap_or(OsStr::new("weekly_miles.log"));
            std::fs::create_dir_all(log_dir)
                .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

            let file_appender = tracing_appender::rolling::never(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_span_events(FmtSpan::CLOSE)
                .with_writer(non_blocking_file)
                .with_filter(
                    EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?),
                );
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(guard)
}
