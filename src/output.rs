//! Output formatting and persistence for weekly reports.
//!
//! The on-disk format is pretty-printed JSON with a trailing newline, so
//! regenerating an unchanged report produces an identical file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::analyzers::types::Report;
use crate::error::Result;

/// Renders a report as the JSON document written to disk.
pub fn render_json(report: &Report) -> Result<String> {
    let mut body = serde_json::to_string_pretty(report)?;
    body.push('\n');
    Ok(body)
}

/// Writes a report to `path`, replacing any existing file.
///
/// Missing parent directories are created. The document is rendered before
/// the file is opened.
#[tracing::instrument(skip(report), fields(path = %path.display(), weeks = report.weeks.len()))]
pub fn write_report(path: &Path, report: &Report) -> Result<()> {
    let body = render_json(report)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let bytes = body.len();
    fs::write(path, body)?;
    info!(bytes, "Report written");
    Ok(())
}
