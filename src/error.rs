//! Domain error types for the grading engine
//!
//! Data-integrity violations (unknown learning target references, invalid
//! scores, reserved substrings in free text) are surfaced as errors rather
//! than silently coerced.

use thiserror::Error;

/// Errors produced by the grading engine and its data model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradebookError {
    /// A score outside the enumerated valid set
    #[error("invalid score: {0} (valid: -1, 0, 0.5, 1, 1.5, 2, 2.5, 3, 3.5, 4)")]
    InvalidScore(f64),

    /// A score that could not be read as a number at all
    #[error("unreadable score: {0:?}")]
    UnreadableScore(String),

    /// A student's score map references a label absent from the catalog
    #[error("unknown learning target: {0}")]
    UnknownTarget(String),

    /// A free-text field contains a delimiter or header token reserved by
    /// the persisted formats
    #[error("field {field} contains reserved substring {token:?}")]
    ReservedSubstring {
        /// Which field was rejected
        field: &'static str,
        /// The offending reserved token
        token: &'static str,
    },

    /// A mandatory identity field is missing from a persisted record
    #[error("student record is missing mandatory field {0:?}")]
    MissingField(&'static str),

    /// A persisted record could not be interpreted
    #[error("malformed record: {0}")]
    Malformed(String),

    /// A score history must hold at least one score
    #[error("score history for {0} is empty")]
    EmptyHistory(String),

    /// The learning target already has a score history for this student
    #[error("learning target {0} already has a score history")]
    DuplicateTarget(String),

    /// The student has no score history for this learning target
    #[error("student has no scores for learning target {0}")]
    TargetNotAssessed(String),
}
