//! Per-user preference store
//!
//! Preferences live in a flat text file, one user per line:
//!
//! ```text
//! USER=SMITHJ,FUNCTION=PIECEWISE,D_IS_VALID=TRUE,TRAIN_MODE=FALSE
//! ```
//!
//! Keys and values are case-insensitive on read and written uppercase.
//! Lines not starting with `USER=` (comments, blanks) are ignored on read
//! and preserved on update.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::GradebookError;

/// Default preference file name
pub const DEFAULT_PREFS_FILE: &str = "user_prefs.txt";

/// Which overall-grade function a user prefers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradeFunction {
    /// Straight percent-met midpoints
    Simple,
    /// Curved percentage clamped to tier bands
    #[default]
    Piecewise,
    /// Grades never drop once earned
    Sticky,
}

impl fmt::Display for GradeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Simple => "SIMPLE",
            Self::Piecewise => "PIECEWISE",
            Self::Sticky => "STICKY",
        };
        write!(f, "{name}")
    }
}

impl FromStr for GradeFunction {
    type Err = GradebookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SIMPLE" => Ok(Self::Simple),
            "PIECEWISE" => Ok(Self::Piecewise),
            "STICKY" => Ok(Self::Sticky),
            other => Err(GradebookError::Malformed(format!(
                "invalid grade function: {other:?}"
            ))),
        }
    }
}

/// One user's saved preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPrefs {
    /// District username, normalized to uppercase
    pub user: String,
    /// Preferred overall-grade function
    pub function: GradeFunction,
    /// Whether D is a valid grade
    pub d_is_valid: bool,
    /// Whether to work against the training environment
    pub train_mode: bool,
}

impl UserPrefs {
    /// Preferences with every non-user field at its default
    #[must_use]
    pub fn new(user: &str) -> Self {
        Self {
            user: user.trim().to_uppercase(),
            function: GradeFunction::default(),
            d_is_valid: true,
            train_mode: true,
        }
    }

    /// Parse one preference line. Missing keys fall back to defaults; a
    /// present key with a bad value is an error.
    pub fn parse_line(line: &str) -> Result<Self, GradebookError> {
        let user = pref_val(line, "USER").ok_or(GradebookError::MissingField("user"))?;
        let function = match pref_val(line, "FUNCTION") {
            Some(value) => value.parse()?,
            None => GradeFunction::default(),
        };
        Ok(Self {
            user,
            function,
            d_is_valid: bool_pref(line, "D_IS_VALID")?.unwrap_or(true),
            train_mode: bool_pref(line, "TRAIN_MODE")?.unwrap_or(true),
        })
    }

    /// Render the canonical uppercase preference line
    #[must_use]
    pub fn to_line(&self) -> String {
        format!(
            "USER={},FUNCTION={},D_IS_VALID={},TRAIN_MODE={}",
            self.user,
            self.function,
            render_bool(self.d_is_valid),
            render_bool(self.train_mode)
        )
    }
}

fn render_bool(value: bool) -> &'static str {
    if value { "TRUE" } else { "FALSE" }
}

/// Value of `key=` within a preference line, uppercased and trimmed.
/// Values run to the next comma or end of line.
fn pref_val(line: &str, key: &str) -> Option<String> {
    let upper = line.to_uppercase();
    let search = format!("{key}=");
    let start = upper.find(&search)? + search.len();
    let rest = &upper[start..];
    let end = rest.find(',').unwrap_or(rest.len());
    Some(rest[..end].trim().to_string())
}

fn bool_pref(line: &str, key: &str) -> Result<Option<bool>, GradebookError> {
    match pref_val(line, key).as_deref() {
        None => Ok(None),
        Some("TRUE") => Ok(Some(true)),
        Some("FALSE") => Ok(Some(false)),
        Some(other) => Err(GradebookError::Malformed(format!(
            "invalid value for {key}: {other:?}"
        ))),
    }
}

/// Load every user's preferences from a file. Only lines starting with
/// `USER=` (any case) count; everything else is ignored.
pub fn load_all(path: &Path) -> anyhow::Result<Vec<UserPrefs>> {
    let data = fs::read_to_string(path)?;
    let mut all = Vec::new();
    for line in data.lines() {
        let line = line.trim();
        if line.to_uppercase().starts_with("USER=") {
            all.push(UserPrefs::parse_line(line)?);
        }
    }
    debug!("loaded preferences for {} users from {}", all.len(), path.display());
    Ok(all)
}

/// Look up one user's preferences, case-insensitively
pub fn find_user(path: &Path, user: &str) -> anyhow::Result<Option<UserPrefs>> {
    let user = user.trim().to_uppercase();
    Ok(load_all(path)?.into_iter().find(|p| p.user == user))
}

/// Save one user's preferences, replacing that user's existing line if it
/// has one and appending otherwise. Every other line of the file,
/// comments included, is left untouched. A missing file is created.
pub fn update_prefs(prefs: &UserPrefs, path: &Path) -> anyhow::Result<()> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
        Err(err) => return Err(err.into()),
    };

    let search = format!("USER={}", prefs.user);
    let mut replaced = false;
    let mut lines: Vec<String> = data.lines().map(str::to_string).collect();
    for line in &mut lines {
        let Some(user_index) = line.to_uppercase().find(&search) else {
            continue;
        };
        // A mention after a '#' is commented out and stays as-is
        if line.find('#').is_some_and(|comment| comment <= user_index) {
            continue;
        }
        if pref_val(line, "USER").as_deref() == Some(prefs.user.as_str()) {
            *line = prefs.to_line();
            replaced = true;
        }
    }
    if !replaced {
        lines.push(prefs.to_line());
    }

    fs::write(path, lines.join("\n") + "\n")?;
    debug!("saved preferences for {} to {}", prefs.user, path.display());
    Ok(())
}
