//! Report command - write grade report files for a whole class

use std::path::Path;

use chrono::{Local, NaiveDate};

use sbgrader::output::{OutputMode, ReportResult};
use sbgrader::report::write_reports;
use sbgrader::storage;

/// Write a dated grade report file per student
pub fn report(
    file: &Path,
    out_dir: &Path,
    date: Option<NaiveDate>,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let period = storage::load_class_period(file)?;
    let date = date.unwrap_or_else(|| Local::now().date_naive());

    let written = write_reports(&period, out_dir, date)?;
    let result = ReportResult {
        written: written.len(),
        paths: written.iter().map(|p| p.display().to_string()).collect(),
    };
    result.render(output_mode);
    Ok(())
}
