//! Grade computation for a standards-based system
//!
//! All functions here are pure: they operate on the slice of a student's
//! most-recent, non-exempt scores (see `Student::most_recent_scores`) and
//! have no I/O or shared state.
//!
//! The pipeline is: percent met -> piecewise curve -> tier resolution ->
//! tier-specific clamping of the curved percentage.

use crate::models::Score;

/// Letter-grade tier. Exactly one tier holds for every score list; the
/// resolution in [`classify`] is a single ordered match, so exhaustiveness
/// and mutual exclusion hold by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    /// Excellent achievement
    A,
    /// Exceeds expectations
    B,
    /// Meets expectations
    C,
    /// Not yet satisfactory
    D,
    /// Not yet eligible for credit
    F,
}

impl Tier {
    /// The letter for this tier
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::F => 'F',
        }
    }

    /// Fixed midpoint percentage for this tier, a coarse reference value
    ///
    /// | Tier | Midpoint |
    /// |------|----------|
    /// | A    | 95       |
    /// | B    | 85       |
    /// | C    | 75       |
    /// | D    | 65       |
    /// | F    | 50       |
    #[must_use]
    pub const fn midpoint(self) -> u32 {
        match self {
            Self::A => 95,
            Self::B => 85,
            Self::C => 75,
            Self::D => 65,
            Self::F => 50,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Number of targets on which the student meets or exceeds standard
/// (a score of 3, 3.5, or 4)
#[must_use]
pub fn met_count(scores: &[Score]) -> usize {
    scores.iter().filter(|s| s.meets_standard()).count()
}

/// Fraction of assessed targets met. Returns 0.0 for an empty list: 0% met
/// on zero targets is a deliberate sentinel, not a true measurement.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percent_met(scores: &[Score]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    met_count(scores) as f64 / scores.len() as f64
}

/// Percent met re-scaled onto conventional grade-percentage bands,
/// rounded to 2 decimal places.
///
/// - at least 80% met: identity (A/B range already aligned)
/// - 50%-79% met: `(2p + 0.8) / 3`, stretching onto roughly 60%-79%
/// - below 50% met: `0.2p + 0.5`, compressing onto 50%-59%
///
/// The curve is continuous at both breakpoints, and 50% is the lowest
/// value it produces.
#[must_use]
pub fn curved_percent(scores: &[Score]) -> f64 {
    let pct = percent_met(scores);
    let curved = if pct >= 0.8 {
        pct
    } else if pct >= 0.5 {
        (2.0 * pct + 0.8) / 3.0
    } else {
        0.2 * pct + 0.5
    };
    round_to(curved, 2)
}

/// Resolve the letter-grade tier for a list of most-recent scores.
///
/// The criteria form a priority order; the first tier whose conditions
/// hold wins:
/// - A: at least 90% met, 4s on at least half of the targets, no 0s or 1s
/// - B: at least 80% met, no 0s or 1s
/// - C: at least 65% met
/// - D: at least 50% met
/// - F: everything else, including the empty list
#[must_use]
pub fn classify(scores: &[Score]) -> Tier {
    let pct = percent_met(scores);
    let clean = scores.iter().all(|s| !s.is_disqualifying());
    let fours = scores.iter().filter(|s| **s == Score::Four).count();

    // `2 * fours >= len` is the integer form of `fours >= ceil(len / 2)`
    if pct >= 0.9 && 2 * fours >= scores.len() && clean {
        Tier::A
    } else if pct >= 0.8 && clean {
        Tier::B
    } else if pct >= 0.65 {
        Tier::C
    } else if pct >= 0.5 {
        Tier::D
    } else {
        Tier::F
    }
}

/// The tier midpoint percentage (95/85/75/65/50) for a score list. A
/// coarse reference value; most callers want [`piecewise_grade`].
#[must_use]
pub fn simple_grade(scores: &[Score]) -> u32 {
    classify(scores).midpoint()
}

/// The letter grade for a score list
#[must_use]
pub fn letter_grade(scores: &[Score]) -> char {
    classify(scores).letter()
}

/// The final reportable percentage: the curved percent, clamped so that a
/// grade pinned below a letter boundary by a disqualifying condition never
/// numerically appears to exceed that boundary. Rounded to 3 decimals.
///
/// - A: curved percent unmodified
/// - B: clamped to 0.89 when curved >= 0.90 (not enough 4s for an A)
/// - C: clamped to 0.79 when curved >= 0.80 (a 0 or 1 caps the grade)
/// - D/F: curved percent unmodified; the curve keeps these below 0.70
///
/// # Panics
///
/// Panics if the D/F curve invariant (curved < 0.70) is violated, which
/// would indicate a defect in the curve, not a valid input.
#[must_use]
pub fn piecewise_grade(scores: &[Score]) -> f64 {
    let curved = curved_percent(scores);
    let grade = match classify(scores) {
        Tier::A => curved,
        Tier::B => {
            if curved >= 0.9 { 0.89 } else { curved }
        },
        Tier::C => {
            if curved >= 0.8 { 0.79 } else { curved }
        },
        Tier::D | Tier::F => {
            assert!(curved < 0.7, "curve produced {curved} in the D/F tiers");
            curved
        },
    };
    round_to(grade, 3)
}

fn round_to(value: f64, places: u32) -> f64 {
    let factor = f64::from(10_u32.pow(places));
    (value * factor).round() / factor
}
