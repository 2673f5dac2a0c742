pub mod analyzers;
pub mod config;
pub mod dates;
pub mod error;
pub mod output;
pub mod parser;
pub mod units;

pub use analyzers::analyzer::{Generated, build_report, collect_runs, generate};
pub use analyzers::types::{Report, Run, WeekSummary};
pub use config::ReportConfig;
pub use error::ReportError;
pub use units::DistanceUnit;
