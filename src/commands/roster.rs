//! Roster command - show a class period at a glance

use std::path::Path;

use sbgrader::grading;
use sbgrader::models::rows_of_briefs;
use sbgrader::output::{OutputMode, RosterLine, RosterResult};
use sbgrader::storage;

/// Show the class roster with overall grades
pub fn roster(file: &Path, output_mode: OutputMode) -> anyhow::Result<()> {
    let period = storage::load_class_period(file)?;

    let targets: Vec<String> = rows_of_briefs(&period.targets)
        .lines()
        .map(String::from)
        .collect();

    let percents = period.overall_grades();
    let students = period
        .students
        .iter()
        .zip(percents)
        .map(|(student, percent)| RosterLine {
            sid: student.sid,
            name: student.name(),
            letter: grading::letter_grade(&student.most_recent_scores()),
            percent,
        })
        .collect();

    let result = RosterResult {
        description: period.description,
        targets,
        students,
    };
    result.render(output_mode);
    Ok(())
}
