//! Study advisory generation
//!
//! Turns a student's classification and per-score target buckets into a
//! narrative advisory. Selection is a nine-scenario decision tree keyed on
//! (tier, percent-met threshold); each scenario owns the data its template
//! needs, so rendering is template filling rather than nested conditionals.
//!
//! Generation is all-or-nothing: an unknown target reference fails the
//! whole advisory instead of producing a partial document.

use crate::error::GradebookError;
use crate::grading::{self, Tier};
use crate::models::{LearningTarget, Score, Student, find_by_label, rows_of_briefs};

/// The learning targets on which a student's most recent score is exactly
/// 0, 1, 2, 3, or 4. Half-point scores belong to no bucket; the tier math
/// counts 3.5 as met, but the advisory listings are exact-score (matching
/// the reference behavior for the "met but not exceeded" list).
#[derive(Debug, Clone, Default)]
pub struct ScoreBuckets {
    /// Targets with a most recent score of 0
    pub zeros: Vec<LearningTarget>,
    /// Targets with a most recent score of 1
    pub ones: Vec<LearningTarget>,
    /// Targets with a most recent score of 2
    pub twos: Vec<LearningTarget>,
    /// Targets with a most recent score of 3
    pub threes: Vec<LearningTarget>,
    /// Targets with a most recent score of 4
    pub fours: Vec<LearningTarget>,
}

impl ScoreBuckets {
    /// Bucket a student's assessed targets by exact most-recent score.
    /// Fails on a score-map label absent from the catalog.
    pub fn collect(
        student: &Student,
        catalog: &[LearningTarget],
    ) -> Result<Self, GradebookError> {
        let mut buckets = Self::default();
        for (label, history) in student.scores() {
            let target = find_by_label(label, catalog)
                .ok_or_else(|| GradebookError::UnknownTarget(label.clone()))?;
            match history.most_recent() {
                Score::Zero => buckets.zeros.push(target.clone()),
                Score::One => buckets.ones.push(target.clone()),
                Score::Two => buckets.twos.push(target.clone()),
                Score::Three => buckets.threes.push(target.clone()),
                Score::Four => buckets.fours.push(target.clone()),
                _ => {},
            }
        }
        Ok(buckets)
    }

    /// Targets scored 0 or 1 (the grade-capping scores)
    #[must_use]
    pub fn zeros_and_ones(&self) -> Vec<LearningTarget> {
        let mut out = self.zeros.clone();
        out.extend(self.ones.iter().cloned());
        out
    }

    /// Targets scored 0, 1, or 2 (not yet meeting standard)
    #[must_use]
    pub fn below_standard(&self) -> Vec<LearningTarget> {
        let mut out = self.zeros_and_ones();
        out.extend(self.twos.iter().cloned());
        out
    }
}

/// One of the nine advisory scenarios, carrying the data its template
/// needs. Selected by [`Scenario::for_student`], rendered by
/// [`Scenario::render`].
#[derive(Debug, Clone)]
pub enum Scenario {
    /// 1: A with every target met
    AAllMet,
    /// 2: A with some targets still below standard
    ABelowStandard {
        /// Targets scored 2 or below (exact 0/1/2 buckets)
        below_standard: Vec<LearningTarget>,
    },
    /// 3: B while meeting at least 90% of targets (too few 4s for an A)
    BNinetyMet {
        /// Targets met but not exceeded (exact 3s)
        threes: Vec<LearningTarget>,
        /// Count of targets exceeded (4s)
        fours: usize,
        /// Total assessed targets
        total: usize,
    },
    /// 4: B while meeting under 90% of targets
    BUnderNinety {
        /// First priority: targets scored 2
        twos: Vec<LearningTarget>,
        /// Second priority: targets met but not exceeded (3s)
        threes: Vec<LearningTarget>,
        /// Count of targets exceeded (4s)
        fours: usize,
        /// Total assessed targets
        total: usize,
    },
    /// 5: C despite meeting at least 80% of targets (capped by a 0 or 1)
    CCappedByLowScores {
        /// The capping targets, scored 0 or 1
        zeros_and_ones: Vec<LearningTarget>,
    },
    /// 6: C while meeting under 80% of targets
    CUnderEighty {
        /// Targets not yet met (0/1/2)
        not_met: Vec<LearningTarget>,
        /// Total assessed targets
        total: usize,
    },
    /// 7: D
    D {
        /// Targets not yet met (0/1/2)
        not_met: Vec<LearningTarget>,
        /// Total assessed targets
        total: usize,
    },
    /// 8: F with at least one assessment taken
    F {
        /// Targets not yet met (0/1/2)
        not_met: Vec<LearningTarget>,
        /// Total assessed targets
        total: usize,
    },
    /// 9: F only because no assessments exist yet
    NoAssessments,
}

impl Scenario {
    /// Select the advisory scenario for a student. The dispatch mirrors
    /// the tier resolution: tiers are mutually exclusive, and within a
    /// tier the percent-met threshold picks the variant.
    pub fn for_student(
        student: &Student,
        catalog: &[LearningTarget],
    ) -> Result<Self, GradebookError> {
        let buckets = ScoreBuckets::collect(student, catalog)?;
        let recent = student.most_recent_scores();
        let pct = grading::percent_met(&recent);
        let total = recent.len();
        let fours = buckets.fours.len();

        let scenario = match grading::classify(&recent) {
            Tier::A if pct >= 1.0 => Self::AAllMet,
            Tier::A => Self::ABelowStandard {
                below_standard: buckets.below_standard(),
            },
            Tier::B if pct >= 0.9 => Self::BNinetyMet {
                threes: buckets.threes,
                fours,
                total,
            },
            Tier::B => Self::BUnderNinety {
                twos: buckets.twos,
                threes: buckets.threes,
                fours,
                total,
            },
            Tier::C if pct >= 0.8 => Self::CCappedByLowScores {
                zeros_and_ones: buckets.zeros_and_ones(),
            },
            Tier::C => Self::CUnderEighty {
                not_met: buckets.below_standard(),
                total,
            },
            Tier::D => Self::D {
                not_met: buckets.below_standard(),
                total,
            },
            Tier::F if total > 0 => Self::F {
                not_met: buckets.below_standard(),
                total,
            },
            Tier::F => Self::NoAssessments,
        };
        Ok(scenario)
    }

    /// Fill the scenario's template with its computed thresholds and
    /// sorted target list(s).
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::AAllMet => concat!(
                "You currently have an A, which reflects excellent achievement ",
                "in this class. Keep working hard, and focus on studying the ",
                "most recent material from class."
            )
            .to_string(),

            Self::ABelowStandard { below_standard } => format!(
                concat!(
                    "You currently have an A, which reflects excellent ",
                    "achievement in this class. In order to make sure that ",
                    "you're building a strong foundation for future classes, ",
                    "you should study the learning targets where you are not ",
                    "yet meeting standard and try to deepen your understanding ",
                    "of those topics.\n\n",
                    "You are showing a developing level of understanding on ",
                    "the following learning targets:\n{}"
                ),
                rows_of_briefs(below_standard)
            ),

            Self::BNinetyMet { threes, fours, total } => format!(
                concat!(
                    "You currently have a B, which means that your work in this ",
                    "class exceeds expectations. You are meeting standard on ",
                    "more than 90% of the learning targets. Currently, out of ",
                    "the {total} learning targets in the grade book, you are ",
                    "meeting standard (earning 3s) on {threes} and exceeding ",
                    "standard (earning 4s) on an additional {fours}.\n",
                    "In order to raise your grade to an A, you need to exceed ",
                    "standard on at least half of the learning targets, i.e. ",
                    "{needed} of the LTs.\n\n",
                    "You are meeting (but not yet exceeding) standard on the ",
                    "following learning targets:\n{rows}"
                ),
                total = total,
                threes = threes.len(),
                fours = fours,
                needed = total.div_ceil(2),
                rows = rows_of_briefs(threes)
            ),

            Self::BUnderNinety { twos, threes, fours, total } => format!(
                concat!(
                    "You currently have a B, which means that your work in ",
                    "this class exceeds expectations. Currently, out of the ",
                    "{total} learning targets in the grade book, you are ",
                    "meeting standard (earning 3s) on {threes} and exceeding ",
                    "standard (4) on an additional {fours}. In order to raise ",
                    "your grade to an A, you need to meet standard on 90% (or ",
                    "{met_needed}) of the learning targets. You also need to ",
                    "make sure that at least half of the learning targets (at ",
                    "least {fours_needed} of the Learning Targets) are at the ",
                    "4 level (exceeding standard).\n\n",
                    "Your first priority should be to study the following ",
                    "learning targets on which you are not yet meeting ",
                    "standard:\n{two_rows}\n\n",
                    "Your second priority should be to study learning targets ",
                    "on which you are meeting (but not yet exceeding) ",
                    "standard:\n{three_rows}"
                ),
                total = total,
                threes = threes.len(),
                fours = fours,
                met_needed = ceil_of(*total, 0.9),
                fours_needed = total.div_ceil(2),
                two_rows = rows_of_briefs(twos),
                three_rows = rows_of_briefs(threes)
            ),

            Self::CCappedByLowScores { zeros_and_ones } => format!(
                concat!(
                    "You currently have a C in this course, which means that ",
                    "your work in this course is meeting expectations.\n",
                    "There are {count} learning target(s) on which you have ",
                    "provided an incomplete response or on which there is no ",
                    "basis for assessment. In order to raise your grade to an ",
                    "A or a B, you should focus on those learning targets. As ",
                    "long as you have any 0s or 1s in the gradebook, a C is ",
                    "the highest grade you can earn.\n\n",
                    "You should focus on studying the following learning ",
                    "targets:\n{rows}"
                ),
                count = zeros_and_ones.len(),
                rows = rows_of_briefs(zeros_and_ones)
            ),

            Self::CUnderEighty { not_met, total } => format!(
                concat!(
                    "You currently have a C in this course, which means that ",
                    "your work in this course is meeting expectations.\n",
                    "Currently, out of the {total} learning targets in the ",
                    "grade book, you are meeting or exceeding standard on ",
                    "{met}. In order to earn a B, you need to meet or exceed ",
                    "standard on at least 80% of the learning targets (i.e. ",
                    "{needed} of the learning targets).\n\n",
                    "You should focus on studying the following learning ",
                    "targets:\n{rows}"
                ),
                total = total,
                met = *total - not_met.len(),
                needed = ceil_of(*total, 0.8),
                rows = rows_of_briefs(not_met)
            ),

            Self::D { not_met, total } => format!(
                concat!(
                    "You currently have a D, which means that your work in ",
                    "this course is not yet satisfactory. In order to raise ",
                    "your grade to a C, you need to meet or exceed standard ",
                    "on at least 65% of the learning targets (i.e. {needed} ",
                    "of the learning targets).\n\n",
                    "You should focus on studying the following learning ",
                    "targets:\n{rows}"
                ),
                needed = ceil_of(*total, 0.65),
                rows = rows_of_briefs(not_met)
            ),

            Self::F { not_met, total } => format!(
                concat!(
                    "Your grade is currently an F, which means you are not ",
                    "yet eligible for credit for this course. In order to ",
                    "raise your grade to a D, you need to meet or exceed ",
                    "standard on at least 50% of the learning targets (i.e. ",
                    "{needed} of the learning targets).\n\n",
                    "You should focus on studying the following learning ",
                    "targets:\n{rows}"
                ),
                needed = ceil_of(*total, 0.5),
                rows = rows_of_briefs(not_met)
            ),

            Self::NoAssessments => concat!(
                "Your grade is currently reported as an F. This is because ",
                "there are no assessment scores for you yet. You can expect ",
                "your grade to change as soon as you complete an assessment."
            )
            .to_string(),
        }
    }
}

/// Generate the advisory text for a student in one step
pub fn best_advice(
    student: &Student,
    catalog: &[LearningTarget],
) -> Result<String, GradebookError> {
    Scenario::for_student(student, catalog).map(|s| s.render())
}

/// Smallest whole number of targets satisfying `fraction` of `total`
/// (fractional requirements round up)
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ceil_of(total: usize, fraction: f64) -> usize {
    (total as f64 * fraction).ceil() as usize
}
