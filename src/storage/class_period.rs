//! Class-period index storage
//!
//! The index file is line-oriented: the first line is the class
//! description, the second names the catalog file, and every remaining
//! non-blank line names one student file. Member paths are resolved
//! relative to the index file's own directory, so a class period moves
//! as a unit.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use log::debug;

use super::catalog::{load_catalog, save_catalog};
use super::student::{load_student, save_student};
use crate::models::ClassPeriod;

/// Load a class period by following its index file
pub fn load_class_period(path: &Path) -> anyhow::Result<ClassPeriod> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading class period index {}", path.display()))?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));

    let mut lines = data.lines();
    let Some(description) = lines.next() else {
        bail!("class period index {} is empty", path.display());
    };
    let Some(catalog_file) = lines.next() else {
        bail!("class period index {} names no catalog file", path.display());
    };

    let targets = load_catalog(&base.join(catalog_file.trim()))?;
    let mut students = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        students.push(load_student(&base.join(line.trim()))?);
    }

    let period = ClassPeriod::with_members(description.trim(), students, targets);
    period.validate_references()?;
    debug!(
        "loaded class period {:?} with {} students and {} targets",
        period.description,
        period.students.len(),
        period.targets.len()
    );
    Ok(period)
}

/// Save a class period: one catalog file, one file per student, and the
/// index file at `path` tying them together. Member files land next to
/// the index. Returns the paths written.
pub fn save_class_period(path: &Path, period: &ClassPeriod) -> anyhow::Result<Vec<PathBuf>> {
    period.validate_references()?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(base)?;

    let catalog_file = format!("{}_lts.ltdat", period.description);
    save_catalog(&base.join(&catalog_file), &period.targets)?;

    let mut index = format!("{}\n{catalog_file}\n", period.description);
    let mut written = vec![base.join(&catalog_file)];
    for student in &period.students {
        let student_file = format!("{}_{}.studat", period.description, student.sid);
        save_student(&base.join(&student_file), student)?;
        index.push_str(&student_file);
        index.push('\n');
        written.push(base.join(&student_file));
    }
    fs::write(path, index)?;
    written.push(path.to_path_buf());
    debug!("saved class period {:?} to {}", period.description, path.display());
    Ok(written)
}
