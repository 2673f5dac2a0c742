//! Run configuration for one report generation.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{ReportError, Result};
use crate::units::DistanceUnit;

/// Output location used when none is given, relative to the project root.
pub const DEFAULT_OUTPUT: &str = "src/pages/running-2025.json";
pub const DEFAULT_START_DATE: &str = "2025-01-01";
pub const DEFAULT_END_DATE: &str = "2025-12-31";

/// Everything needed to turn one export into one report.
///
/// The project root is carried explicitly so nothing depends on the process
/// working directory.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub project_root: PathBuf,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub distance_unit: DistanceUnit,
}

impl ReportConfig {
    pub fn new(
        input: impl Into<PathBuf>,
        project_root: impl Into<PathBuf>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            project_root: project_root.into(),
            start_date,
            end_date,
            distance_unit: DistanceUnit::Auto,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_distance_unit(mut self, unit: DistanceUnit) -> Self {
        self.distance_unit = unit;
        self
    }

    /// Rejects a range whose end precedes its start.
    pub fn validate(&self) -> Result<()> {
        if self.end_date < self.start_date {
            return Err(ReportError::InvalidDateRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    /// True if `date` lies inside the inclusive report range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Output path, joined onto the project root when relative.
    pub fn resolved_output(&self) -> PathBuf {
        resolve_against(&self.project_root, &self.output)
    }
}

fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
