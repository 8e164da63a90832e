//! Score command - record a new score on a learning target

use std::path::Path;

use anyhow::bail;

use sbgrader::models::Score;
use sbgrader::output::{OperationResult, OutputMode};
use sbgrader::storage;

/// Record a new score for a student and save the class period
pub fn score(
    file: &Path,
    sid: u32,
    label: &str,
    raw_score: &str,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let score: Score = raw_score.parse()?;

    let mut period = storage::load_class_period(file)?;
    if !period.has_target(label) {
        bail!(
            "no learning target {label:?} in {:?}; add it first with 'sbgrader target add'",
            period.description
        );
    }
    let Some(student) = period.find_student_mut(sid) else {
        bail!("no student with sid {sid} in {:?}", period.description);
    };

    student.record_score(label, score);
    let name = student.name();
    storage::save_class_period(file, &period)?;

    let result = OperationResult {
        success: true,
        message: format!("Recorded {score} for {name} on {label}"),
    };
    result.render(output_mode);
    Ok(())
}
