//! Learning-target catalog storage
//!
//! One target per line: `label:::brief:::description`. Trailing fields are
//! optional (defaults apply), fields beyond the third are discarded, and
//! blank lines are skipped.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::GradebookError;
use crate::models::{CATALOG_DELIMITER, LearningTarget};

/// Parse a catalog from file contents
pub fn parse_catalog(data: &str) -> Result<Vec<LearningTarget>, GradebookError> {
    let mut targets = Vec::new();
    for line in data.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let mut parts = line.split(CATALOG_DELIMITER);
        let label = parts.next().unwrap_or_default();
        let mut target = LearningTarget::new(label)?;
        if let Some(brief) = parts.next() {
            target.set_brief(brief)?;
        }
        if let Some(description) = parts.next() {
            target.description = description.to_string();
        }
        // Anything past the third field is discarded
        targets.push(target);
    }
    Ok(targets)
}

/// Render a catalog to its file representation. Target fields were
/// checked against reserved substrings at construction, so the written
/// file always parses back to an equal catalog.
#[must_use]
pub fn render_catalog(targets: &[LearningTarget]) -> String {
    let mut out = String::new();
    for target in targets {
        out.push_str(&target.label);
        out.push_str(CATALOG_DELIMITER);
        out.push_str(&target.brief);
        out.push_str(CATALOG_DELIMITER);
        out.push_str(&target.description);
        out.push('\n');
    }
    out
}

/// Load a catalog from a file
pub fn load_catalog(path: &Path) -> anyhow::Result<Vec<LearningTarget>> {
    let data = fs::read_to_string(path)?;
    let targets = parse_catalog(&data)?;
    debug!("loaded {} learning targets from {}", targets.len(), path.display());
    Ok(targets)
}

/// Save a catalog to a file
pub fn save_catalog(path: &Path, targets: &[LearningTarget]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render_catalog(targets))?;
    Ok(())
}
