//! Class period aggregate
//!
//! One section of a course: the full learning-target catalog plus every
//! enrolled student. Every label referenced by a student's score map must
//! exist in the catalog; a violation is a hard error, not silently ignored.

use serde::{Deserialize, Serialize};

use super::learning_target::LearningTarget;
use super::student::Student;
use crate::error::GradebookError;
use crate::grading;

/// A group of students and the learning targets they are assessed on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassPeriod {
    /// Section name, e.g. "Period_1"; used in file names, so it should
    /// contain only filename-safe characters
    pub description: String,

    /// Enrolled students
    pub students: Vec<Student>,

    /// The full learning-target catalog for this section
    pub targets: Vec<LearningTarget>,
}

impl ClassPeriod {
    /// Create an empty class period
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            students: Vec::new(),
            targets: Vec::new(),
        }
    }

    /// Create a populated class period. Exempt most-recent scores are
    /// cleaned up immediately, so data loaded from any source starts
    /// normalized.
    #[must_use]
    pub fn with_members(
        description: impl Into<String>,
        students: Vec<Student>,
        targets: Vec<LearningTarget>,
    ) -> Self {
        let mut period = Self {
            description: description.into(),
            students,
            targets,
        };
        period.remove_exempts();
        period
    }

    /// Find a student by id
    #[must_use]
    pub fn find_student(&self, sid: u32) -> Option<&Student> {
        self.students.iter().find(|s| s.sid == sid)
    }

    /// Find a student by id, mutably
    pub fn find_student_mut(&mut self, sid: u32) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.sid == sid)
    }

    /// Whether the catalog has a target with the given label
    #[must_use]
    pub fn has_target(&self, label: &str) -> bool {
        self.targets.iter().any(|lt| lt.label == label)
    }

    /// Drop every score history whose most recent entry is exempt, for
    /// every student in the period.
    pub fn remove_exempts(&mut self) {
        for student in &mut self.students {
            student.drop_exempt();
        }
    }

    /// Check that every label referenced by any student exists in the
    /// catalog. Called before grading or report generation; an unknown
    /// reference is a data-integrity violation.
    pub fn validate_references(&self) -> Result<(), GradebookError> {
        for student in &self.students {
            for label in student.scores().keys() {
                if !self.has_target(label) {
                    return Err(GradebookError::UnknownTarget(label.clone()));
                }
            }
        }
        Ok(())
    }

    /// Piecewise overall grades for every student, as whole percentages
    /// (0-100), in roster order.
    #[must_use]
    pub fn overall_grades(&self) -> Vec<u32> {
        self.students
            .iter()
            .map(|s| {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                {
                    (grading::piecewise_grade(&s.most_recent_scores()) * 100.0).round() as u32
                }
            })
            .collect()
    }
}
