//! Student record storage
//!
//! A student record is a single line of comma-separated `key: value`
//! fields (`sid`, `lastname`, `firstname`, `pronoun`) followed by a
//! `scores: {...}` field holding a label -> score-history map literal,
//! e.g.
//!
//! ```text
//! sid: 1, lastname: Frank, firstname: Aerik, pronoun: he, scores: {'LT01': [1, 2, 4], 'LT02': [2, 4]}
//! ```
//!
//! Identity fields are recognized by their header token; fragments of the
//! score map contain colons but no token, so the comma-split parse skips
//! them. The score-list parser tolerates a missing bracket on either side.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;

use crate::error::GradebookError;
use crate::models::{RESERVED_TOKENS, Score, ScoreHistory, Student};

/// Default pronoun when a record omits the field
const DEFAULT_PRONOUN: &str = "they";

/// Parse a student record. Missing `sid`/`lastname`/`firstname` fail
/// construction; a missing `pronoun` defaults to "they"; a missing or
/// empty score map yields a student with no assessments.
pub fn parse_student(data: &str) -> Result<Student, GradebookError> {
    let mut sid: Option<u32> = None;
    let mut lastname: Option<String> = None;
    let mut firstname: Option<String> = None;
    let mut pronoun: Option<String> = None;

    for entry in data.split(',') {
        if entry.contains("scores: ") || !entry.contains(':') {
            continue;
        }
        // Only fragments carrying a header token are identity fields
        if !RESERVED_TOKENS.iter().any(|token| entry.contains(token)) {
            continue;
        }
        let Some(split) = entry.find(':') else {
            continue;
        };
        let heading = entry[..split].trim().to_lowercase();
        let value = entry[split + 1..].trim().to_string();
        match heading.as_str() {
            "sid" => {
                sid = Some(value.parse().map_err(|_| {
                    GradebookError::Malformed(format!("invalid sid: {value:?}"))
                })?);
            },
            "lastname" => lastname = Some(value),
            "firstname" => firstname = Some(value),
            "pronoun" => pronoun = Some(value),
            _ => {},
        }
    }

    let sid = sid.ok_or(GradebookError::MissingField("sid"))?;
    let lastname = lastname.ok_or(GradebookError::MissingField("lastname"))?;
    let firstname = firstname.ok_or(GradebookError::MissingField("firstname"))?;
    let pronoun = pronoun.unwrap_or_else(|| DEFAULT_PRONOUN.to_string());

    let mut student = Student::new(sid, lastname, firstname, pronoun)?;
    student.set_scores(parse_score_map(data)?);
    Ok(student)
}

/// Parse the `scores: {...}` field into a score map. Absent field means
/// "not yet assessed".
fn parse_score_map(data: &str) -> Result<BTreeMap<String, ScoreHistory>, GradebookError> {
    let Some((_, rest)) = data.split_once("scores: ") else {
        return Ok(BTreeMap::new());
    };
    let dict = rest.trim();
    let dict = dict
        .strip_prefix('{')
        .ok_or_else(|| GradebookError::Malformed("score map missing '{'".to_string()))?;
    let dict = dict
        .strip_suffix('}')
        .ok_or_else(|| GradebookError::Malformed("score map missing '}'".to_string()))?;
    if RESERVED_TOKENS.iter().any(|token| dict.contains(token)) {
        return Err(GradebookError::Malformed(
            "score map contains a reserved header token".to_string(),
        ));
    }
    if dict.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    let mut map = BTreeMap::new();
    for item in dict.split("],") {
        let (label_part, scores_part) = item.trim().split_once(':').ok_or_else(|| {
            GradebookError::Malformed(format!("bad score entry: {item:?}"))
        })?;
        let label = label_part.trim().trim_matches(['\'', '"']).to_string();
        let scores = parse_score_list(scores_part)?;
        let history = ScoreHistory::from_scores(&label, scores)?;
        map.insert(label, history);
    }
    Ok(map)
}

/// Parse a score list such as `[1, 2.5, 4]`, tolerating a missing bracket
/// on either side.
fn parse_score_list(raw: &str) -> Result<Vec<Score>, GradebookError> {
    let raw = raw.trim();
    let raw = raw.strip_prefix('[').unwrap_or(raw);
    let raw = raw.strip_suffix(']').unwrap_or(raw);
    raw.split(',').map(str::parse).collect()
}

/// Render a student to its single-line record form. Field values were
/// checked against reserved tokens at construction, so the written record
/// always parses back to an equal student.
#[must_use]
pub fn render_student(student: &Student) -> String {
    let entries: Vec<String> = student
        .scores()
        .iter()
        .map(|(label, history)| {
            let scores: Vec<String> =
                history.scores().iter().map(ToString::to_string).collect();
            format!("'{label}': [{}]", scores.join(", "))
        })
        .collect();
    format!(
        "sid: {}, lastname: {}, firstname: {}, pronoun: {}, scores: {{{}}}",
        student.sid,
        student.lastname,
        student.firstname,
        student.pronoun,
        entries.join(", ")
    )
}

/// Load a student record from a file
pub fn load_student(path: &Path) -> anyhow::Result<Student> {
    let data = fs::read_to_string(path)?;
    let student = parse_student(&data)?;
    debug!("loaded student sid {} from {}", student.sid, path.display());
    Ok(student)
}

/// Save a student record to a file
pub fn save_student(path: &Path, student: &Student) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render_student(student))?;
    Ok(())
}
