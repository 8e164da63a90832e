//! Learning target model
//!
//! A learning target (LT) is one assessable skill: a short unique label, a
//! brief description used in reports and advisories, a longer description,
//! and an optional column position in an external gradebook.

use log::warn;
use serde::{Deserialize, Serialize};

use super::check_catalog_safe;
use crate::error::GradebookError;

/// Placeholder used when a catalog record omits a description field
pub const NO_DESCRIPTION: &str = "(no description)";

/// Sentinel column for targets with no known gradebook position
pub const NO_COLUMN: i32 = -1;

/// One assessable skill in a course
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct LearningTarget {
    /// Unique identifier, e.g. "LT2A"
    pub label: String,

    /// Short description shown in reports and advisories
    pub brief: String,

    /// Long description of the skill
    pub description: String,

    /// Column position in an external gradebook (-1 = unknown)
    #[serde(default = "default_column")]
    pub column: i32,
}

const fn default_column() -> i32 {
    NO_COLUMN
}

impl LearningTarget {
    /// Create a learning target with only a label; descriptions default to
    /// a placeholder.
    pub fn new(label: impl Into<String>) -> Result<Self, GradebookError> {
        Self::with_descriptions(label, NO_DESCRIPTION, NO_DESCRIPTION)
    }

    /// Create a fully described learning target. All three strings are
    /// checked against the reserved delimiter and header tokens.
    pub fn with_descriptions(
        label: impl Into<String>,
        brief: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, GradebookError> {
        let label = label.into();
        let brief = brief.into();
        let description = description.into();
        check_catalog_safe("label", &label)?;
        check_catalog_safe("brief", &brief)?;
        check_catalog_safe("description", &description)?;
        Ok(Self {
            label,
            brief,
            description,
            column: NO_COLUMN,
        })
    }

    /// Label and trimmed brief separated by a colon, e.g.
    /// `"LT01: Integer operations"`. This is the visible text used in
    /// advisory lists and reports.
    #[must_use]
    pub fn brief_string(&self) -> String {
        format!("{}: {}", self.label, self.brief.trim())
    }

    /// Update the brief description (the only post-creation mutation)
    pub fn set_brief(&mut self, brief: impl Into<String>) -> Result<(), GradebookError> {
        let brief = brief.into();
        check_catalog_safe("brief", &brief)?;
        self.brief = brief.trim().to_string();
        Ok(())
    }
}

impl PartialEq for LearningTarget {
    /// Domain equality: same visible text and same trimmed description.
    /// Gradebook column is presentation metadata and is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.brief_string() == other.brief_string()
            && self.description.trim() == other.description.trim()
    }
}

impl std::fmt::Display for LearningTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.brief_string())
    }
}

/// Find a target by label
#[must_use]
pub fn find_by_label<'a>(label: &str, targets: &'a [LearningTarget]) -> Option<&'a LearningTarget> {
    targets.iter().find(|lt| lt.label == label)
}

/// Find the target occupying a gradebook column. Returns `None` when no
/// target has that column, or when more than one does (an ambiguous
/// catalog, reported via the log).
#[must_use]
pub fn find_by_column(column: i32, targets: &[LearningTarget]) -> Option<&LearningTarget> {
    let mut matches = targets.iter().filter(|lt| lt.column == column);
    let first = matches.next()?;
    if matches.next().is_some() {
        warn!("multiple learning targets found with column == {column}");
        return None;
    }
    Some(first)
}

/// Render one `"<label>: <brief>"` line per target, lexicographically
/// sorted on the rendered text, joined by newlines.
#[must_use]
pub fn rows_of_briefs(targets: &[LearningTarget]) -> String {
    let mut rows: Vec<String> = targets.iter().map(LearningTarget::brief_string).collect();
    rows.sort();
    rows.join("\n")
}
