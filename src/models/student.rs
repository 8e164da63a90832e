//! Student model
//!
//! A student is an identity (id, names, preferred pronoun) plus a mapping
//! from learning-target label to score history. An absent label means "not
//! yet assessed"; a most-recent exempt score removes the whole history.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::learning_target::LearningTarget;
use super::score::{Score, ScoreHistory};
use super::{check_no_reserved, find_by_label};
use crate::error::GradebookError;

/// One student and their per-target score histories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student id number
    pub sid: u32,

    /// Last name
    pub lastname: String,

    /// First name
    pub firstname: String,

    /// Preferred pronoun
    pub pronoun: String,

    /// Label -> score history; sorted for deterministic report order
    scores: BTreeMap<String, ScoreHistory>,
}

impl Student {
    /// Create a student with no scores yet. Name and pronoun fields are
    /// checked against the reserved header tokens.
    pub fn new(
        sid: u32,
        lastname: impl Into<String>,
        firstname: impl Into<String>,
        pronoun: impl Into<String>,
    ) -> Result<Self, GradebookError> {
        let lastname = lastname.into();
        let firstname = firstname.into();
        let pronoun = pronoun.into();
        check_no_reserved("lastname", &lastname)?;
        check_no_reserved("firstname", &firstname)?;
        check_no_reserved("pronoun", &pronoun)?;
        Ok(Self {
            sid,
            lastname,
            firstname,
            pronoun,
            scores: BTreeMap::new(),
        })
    }

    /// Full name in "First Last" order
    #[must_use]
    pub fn name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    /// The score map (label -> history)
    #[must_use]
    pub const fn scores(&self) -> &BTreeMap<String, ScoreHistory> {
        &self.scores
    }

    /// Replace the whole score map (used when loading persisted records)
    pub fn set_scores(&mut self, scores: BTreeMap<String, ScoreHistory>) {
        self.scores = scores;
    }

    /// The most recent score on each assessed target, exempt entries
    /// excluded. This is the only input the classifier sees.
    #[must_use]
    pub fn most_recent_scores(&self) -> Vec<Score> {
        self.scores
            .values()
            .map(ScoreHistory::most_recent)
            .filter(|s| !s.is_exempt())
            .collect()
    }

    /// Append a new most-recent score for a target, starting a history if
    /// the target has none yet.
    pub fn record_score(&mut self, label: &str, score: Score) {
        self.scores
            .entry(label.to_string())
            .and_modify(|h| h.append(score))
            .or_insert_with(|| ScoreHistory::new(score));
    }

    /// Add a brand-new target with a first score; fails if the target
    /// already has a history.
    pub fn add_target(&mut self, label: &str, score: Score) -> Result<(), GradebookError> {
        check_no_reserved("label", label)?;
        if self.scores.contains_key(label) {
            return Err(GradebookError::DuplicateTarget(label.to_string()));
        }
        self.scores.insert(label.to_string(), ScoreHistory::new(score));
        Ok(())
    }

    /// Replace the score history for a target (history repair)
    pub fn replace_history(&mut self, label: &str, scores: Vec<Score>) -> Result<(), GradebookError> {
        let history = ScoreHistory::from_scores(label, scores)?;
        self.scores.insert(label.to_string(), history);
        Ok(())
    }

    /// Remove a target from the score map; fails if absent
    pub fn remove_target(&mut self, label: &str) -> Result<(), GradebookError> {
        self.scores
            .remove(label)
            .map(|_| ())
            .ok_or_else(|| GradebookError::TargetNotAssessed(label.to_string()))
    }

    /// Drop every history whose most recent entry is exempt. An excused
    /// most-recent attempt removes the target entirely, past attempts
    /// included.
    pub fn drop_exempt(&mut self) {
        self.scores.retain(|_, history| !history.most_recent().is_exempt());
    }

    /// The catalog entries for every target this student has been assessed
    /// on. A label absent from the catalog is a data-integrity violation
    /// and fails the whole lookup.
    pub fn assessed_targets<'a>(
        &self,
        catalog: &'a [LearningTarget],
    ) -> Result<Vec<&'a LearningTarget>, GradebookError> {
        self.scores
            .keys()
            .map(|label| {
                find_by_label(label, catalog)
                    .ok_or_else(|| GradebookError::UnknownTarget(label.clone()))
            })
            .collect()
    }
}
