//! Grade report assembly
//!
//! Composes the report header, per-target score lines (with prior
//! attempts), and the study advisory into one printable document, and
//! writes one report file per student in a class period.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::debug;

use crate::advice;
use crate::error::GradebookError;
use crate::grading;
use crate::models::{ClassPeriod, LearningTarget, Student};

/// Render a grade report for one student: header, overall grade,
/// dot-padded score lines, advisory, and signature lines.
pub fn grade_report(
    student: &Student,
    catalog: &[LearningTarget],
    date: NaiveDate,
) -> Result<String, GradebookError> {
    let recent = student.most_recent_scores();
    let letter = grading::letter_grade(&recent);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = (grading::piecewise_grade(&recent) * 100.0).floor() as u32;

    let mut lines = vec![
        format!("Grade Report for {}\t{date}", student.name()),
        format!("\nOverall grade: {letter} ({percent}%)\n"),
        "Learning Target Scores:".to_string(),
    ];
    for target in student.assessed_targets(catalog)? {
        let history = &student.scores()[&target.label];
        lines.push(format!(
            "{:.<70}  {}",
            target.brief_string(),
            history.most_recent()
        ));
        if !history.earlier().is_empty() {
            let earlier: Vec<String> =
                history.earlier().iter().map(ToString::to_string).collect();
            lines.push(format!("\tPrevious scores: [{}]", earlier.join(", ")));
        }
    }
    lines.push("\n".to_string());
    lines.push("Advice for study plan:\n".to_string());
    lines.push(advice::best_advice(student, catalog)?);
    lines.push("\n\nStudent Signature: ___________________________".to_string());
    lines.push("\n\nParent Signature: ___________________________".to_string());
    Ok(lines.join("\n"))
}

/// File name for one student's report:
/// `<date>_<description>_sid<sid>_<last>_<first>_grade_report.txt`
#[must_use]
pub fn report_filename(description: &str, student: &Student, date: NaiveDate) -> String {
    format!(
        "{date}_{description}_sid{}_{}_{}_grade_report.txt",
        student.sid, student.lastname, student.firstname
    )
}

/// Write a dated grade report file for every student in the class period.
/// Returns the paths written.
pub fn write_reports(
    period: &ClassPeriod,
    dir: &Path,
    date: NaiveDate,
) -> anyhow::Result<Vec<PathBuf>> {
    period.validate_references()?;
    fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(period.students.len());
    for student in &period.students {
        let path = dir.join(report_filename(&period.description, student, date));
        let report = grade_report(student, &period.targets, date)?;
        fs::write(&path, report)?;
        debug!("wrote grade report {}", path.display());
        written.push(path);
    }
    Ok(written)
}
