//! Grade command - one student's overall grade and study advisory

use std::path::Path;

use anyhow::bail;

use sbgrader::output::{GradeSummary, OutputMode};
use sbgrader::{advice, grading, storage};

/// Show one student's grade and study advisory
pub fn grade(file: &Path, sid: u32, output_mode: OutputMode) -> anyhow::Result<()> {
    let period = storage::load_class_period(file)?;
    let Some(student) = period.find_student(sid) else {
        bail!("no student with sid {sid} in {:?}", period.description);
    };

    let recent = student.most_recent_scores();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = (grading::piecewise_grade(&recent) * 100.0).floor() as u32;

    let summary = GradeSummary {
        sid: student.sid,
        name: student.name(),
        letter: grading::letter_grade(&recent),
        percent,
        advice: advice::best_advice(student, &period.targets)?,
    };
    summary.render(output_mode);
    Ok(())
}
