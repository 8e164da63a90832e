//! Gradebook matrix import
//!
//! Builds a [`ClassPeriod`] from an external gradebook export: a list of
//! learning targets tagged with their column positions, plus one row of
//! cells per student. Blank cells become exempt; a cell value outside the
//! score set is an error.
//! Score history can be recovered from free-text cell comments such as
//! `"Previous scores: 1 (5/28), 2.5, 3"`.

use log::debug;

use crate::error::GradebookError;
use crate::models::{ClassPeriod, LearningTarget, Score, Student, find_by_column};

/// One student's row in a gradebook export. `cells` is indexed by
/// gradebook column; `None` marks a blank cell.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixRow {
    /// Student id
    pub sid: u32,
    /// Family name
    pub lastname: String,
    /// Given name
    pub firstname: String,
    /// Raw cell values, indexed by gradebook column
    pub cells: Vec<Option<f64>>,
}

/// Build a class period from a gradebook matrix. Only columns claimed by
/// a target are read; blank cells are recorded as exempt and cleaned up
/// by construction, while a cell value outside the score set fails the
/// whole import with [`GradebookError::InvalidScore`].
pub fn class_period_from_matrix(
    description: &str,
    targets: Vec<LearningTarget>,
    rows: &[MatrixRow],
) -> Result<ClassPeriod, GradebookError> {
    let mut students = Vec::with_capacity(rows.len());
    for row in rows {
        let mut student =
            Student::new(row.sid, row.lastname.as_str(), row.firstname.as_str(), "they")?;
        for (column, cell) in row.cells.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let Some(target) = find_by_column(column as i32, &targets) else {
                continue;
            };
            let score = match cell {
                Some(raw) => Score::try_from(*raw)?,
                None => Score::Exempt,
            };
            student.record_score(&target.label, score);
        }
        students.push(student);
    }
    debug!(
        "imported {} students across {} targets into {description:?}",
        students.len(),
        targets.len()
    );
    Ok(ClassPeriod::with_members(description, students, targets))
}

/// Remove parenthesized stretches from a string, parens included. An
/// unmatched `(` removes the rest of the string; an unmatched `)` is
/// dropped on its own. The result is trimmed.
#[must_use]
pub fn strip_parenthesized(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut depth: u32 = 0;
    for ch in input.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(ch),
            _ => {},
        }
    }
    out.trim().to_string()
}

/// Phrases that introduce a score history inside a gradebook comment
const HISTORY_PHRASES: [&str; 7] = [
    "PREVIOUS SCORE:",
    "PREVIOUS SCORES:",
    "PREVIOUS:",
    "PAST SCORE:",
    "PAST SCORES:",
    "OLD SCORE:",
    "OLD SCORES:",
];

/// Recover prior scores from a gradebook comment. Looks for a phrase
/// like `"Previous scores:"` (case-insensitive), drops parenthesized
/// asides, then reads comma- or space-separated scores until the first
/// token that is not one. No phrase means no history.
#[must_use]
pub fn history_from_comment(comment: &str) -> Vec<Score> {
    let upper = comment.to_uppercase();
    let Some(rest) = HISTORY_PHRASES
        .iter()
        .find_map(|phrase| upper.find(phrase).map(|at| &upper[at + phrase.len()..]))
    else {
        return Vec::new();
    };

    strip_parenthesized(rest)
        .split([',', ' '])
        .filter(|token| !token.is_empty())
        .map_while(|token| token.parse::<Score>().ok())
        .collect()
}
