//! Data model for the gradebook
//!
//! Leaf-first: `Score` (enumerated value set), `ScoreHistory` (append-only,
//! most recent last), `LearningTarget`, `Student`, and the `ClassPeriod`
//! aggregate that owns the catalog and roster for one section.

mod class_period;
mod learning_target;
mod score;
mod student;

pub use class_period::ClassPeriod;
pub use learning_target::{
    LearningTarget, NO_DESCRIPTION, find_by_column, find_by_label, rows_of_briefs,
};
pub use score::{Score, ScoreHistory};
pub use student::Student;

use crate::error::GradebookError;

/// Field tokens reserved by the student record format. Free-text fields may
/// not contain any of these, or a written record would not round-trip.
pub const RESERVED_TOKENS: [&str; 5] =
    ["sid: ", "lastname: ", "firstname: ", "pronoun: ", "scores: "];

/// Field delimiter reserved by the learning-target catalog format.
pub const CATALOG_DELIMITER: &str = ":::";

/// Reject a free-text field value that contains a reserved header token.
pub fn check_no_reserved(field: &'static str, value: &str) -> Result<(), GradebookError> {
    for token in RESERVED_TOKENS {
        if value.contains(token) {
            return Err(GradebookError::ReservedSubstring { field, token });
        }
    }
    Ok(())
}

/// Reject a catalog field value that contains the `:::` delimiter or a
/// reserved header token.
pub fn check_catalog_safe(field: &'static str, value: &str) -> Result<(), GradebookError> {
    if value.contains(CATALOG_DELIMITER) {
        return Err(GradebookError::ReservedSubstring {
            field,
            token: CATALOG_DELIMITER,
        });
    }
    check_no_reserved(field, value)
}
