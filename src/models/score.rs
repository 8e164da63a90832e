//! Score model
//!
//! Assessment scores come from a closed set: -1 (exempt) and half-point
//! steps from 0 to 4. Anything else is rejected at the point of mutation,
//! never coerced.

use serde::{Deserialize, Serialize};

use crate::error::GradebookError;

/// A single assessment score on one learning target
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "f64", try_from = "f64")]
pub enum Score {
    /// -1: the assessment does not count
    Exempt,
    /// 0: no basis for assessment
    Zero,
    /// 0.5
    Half,
    /// 1: incomplete response
    One,
    /// 1.5
    OneAndHalf,
    /// 2: developing understanding
    Two,
    /// 2.5
    TwoAndHalf,
    /// 3: meeting standard
    Three,
    /// 3.5
    ThreeAndHalf,
    /// 4: exceeding standard
    Four,
}

impl Score {
    /// Numeric value of this score
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Exempt => -1.0,
            Self::Zero => 0.0,
            Self::Half => 0.5,
            Self::One => 1.0,
            Self::OneAndHalf => 1.5,
            Self::Two => 2.0,
            Self::TwoAndHalf => 2.5,
            Self::Three => 3.0,
            Self::ThreeAndHalf => 3.5,
            Self::Four => 4.0,
        }
    }

    /// Whether this score is the exempt sentinel
    #[must_use]
    pub const fn is_exempt(self) -> bool {
        matches!(self, Self::Exempt)
    }

    /// Whether this score meets or exceeds standard (3, 3.5, or 4)
    #[must_use]
    pub const fn meets_standard(self) -> bool {
        matches!(self, Self::Three | Self::ThreeAndHalf | Self::Four)
    }

    /// Whether this score disqualifies the student from the A and B tiers.
    /// Only exact 0s and 1s disqualify; 0.5 and 1.5 do not.
    #[must_use]
    pub const fn is_disqualifying(self) -> bool {
        matches!(self, Self::Zero | Self::One)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exempt => write!(f, "-1"),
            Self::Zero => write!(f, "0"),
            Self::Half => write!(f, "0.5"),
            Self::One => write!(f, "1"),
            Self::OneAndHalf => write!(f, "1.5"),
            Self::Two => write!(f, "2"),
            Self::TwoAndHalf => write!(f, "2.5"),
            Self::Three => write!(f, "3"),
            Self::ThreeAndHalf => write!(f, "3.5"),
            Self::Four => write!(f, "4"),
        }
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.value()
    }
}

impl TryFrom<f64> for Score {
    type Error = GradebookError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let tenths = (value * 10.0).round();
        if (value * 10.0 - tenths).abs() > 1e-9 {
            return Err(GradebookError::InvalidScore(value));
        }
        #[allow(clippy::cast_possible_truncation)]
        match tenths as i64 {
            -10 => Ok(Self::Exempt),
            0 => Ok(Self::Zero),
            5 => Ok(Self::Half),
            10 => Ok(Self::One),
            15 => Ok(Self::OneAndHalf),
            20 => Ok(Self::Two),
            25 => Ok(Self::TwoAndHalf),
            30 => Ok(Self::Three),
            35 => Ok(Self::ThreeAndHalf),
            40 => Ok(Self::Four),
            _ => Err(GradebookError::InvalidScore(value)),
        }
    }
}

impl std::str::FromStr for Score {
    type Err = GradebookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| GradebookError::UnreadableScore(s.to_string()))?;
        Self::try_from(value)
    }
}

/// An append-only, non-empty score history for one (student, learning
/// target) pair. The most recent score is always the last element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreHistory(Vec<Score>);

impl ScoreHistory {
    /// Start a history with a first score
    #[must_use]
    pub fn new(first: Score) -> Self {
        Self(vec![first])
    }

    /// Build a history from an existing score list; fails on an empty list
    pub fn from_scores(label: &str, scores: Vec<Score>) -> Result<Self, GradebookError> {
        if scores.is_empty() {
            return Err(GradebookError::EmptyHistory(label.to_string()));
        }
        Ok(Self(scores))
    }

    /// Append a new most-recent score. History is never overwritten in
    /// place; earlier attempts stay available for reports.
    pub fn append(&mut self, score: Score) {
        self.0.push(score);
    }

    /// The most recent score (last element)
    #[must_use]
    pub fn most_recent(&self) -> Score {
        *self.0.last().expect("history is never empty")
    }

    /// Earlier attempts, oldest first, excluding the most recent score
    #[must_use]
    pub fn earlier(&self) -> &[Score] {
        &self.0[..self.0.len() - 1]
    }

    /// All scores, oldest first
    #[must_use]
    pub fn scores(&self) -> &[Score] {
        &self.0
    }

    /// Number of recorded attempts
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API completeness
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
