//! Data-model behavior across the fixture roster

use crate::common::{sample_period, sample_students, sample_targets};
use sbgrader::error::GradebookError;
use sbgrader::models::{Score, rows_of_briefs};

#[test]
fn exempt_most_recent_scores_are_cleaned_up_at_construction() {
    let period = sample_period();
    let janet = period.find_student(10).expect("fixture student");
    assert!(!janet.scores().contains_key("LT01"));
    assert_eq!(janet.scores()["LT02"].most_recent(), Score::Four);
    assert_eq!(janet.most_recent_scores(), vec![Score::Four]);
}

#[test]
fn fixture_roster_passes_reference_validation() {
    assert!(sample_period().validate_references().is_ok());
}

#[test]
fn recording_an_unknown_label_fails_validation() {
    let mut period = sample_period();
    period
        .find_student_mut(1)
        .expect("fixture student")
        .record_score("LT99", Score::Two);
    assert!(matches!(
        period.validate_references(),
        Err(GradebookError::UnknownTarget(label)) if label == "LT99"
    ));
}

#[test]
fn assessed_targets_resolve_against_the_catalog() {
    let targets = sample_targets();
    let students = sample_students();
    let aerik = &students[0];
    let assessed = aerik.assessed_targets(&targets).unwrap();
    assert_eq!(assessed.len(), 10);
    assert_eq!(assessed[0].label, "LT01");

    let ivan = &students[8];
    assert!(ivan.assessed_targets(&targets).unwrap().is_empty());
}

#[test]
fn most_recent_scores_skip_exempt_but_keep_everything_else() {
    let students = sample_students();
    let aerik = &students[0];
    assert_eq!(aerik.most_recent_scores().len(), 10);
    assert!(aerik.most_recent_scores().iter().all(|s| !s.is_exempt()));

    // Janet before class-period cleanup still holds the exempt history,
    // but her recent-score slice never includes it
    let janet = &students[9];
    assert_eq!(janet.scores().len(), 2);
    assert_eq!(janet.most_recent_scores(), vec![Score::Four]);
}

#[test]
fn brief_rows_render_sorted_and_colon_separated() {
    let rows = rows_of_briefs(&sample_targets());
    let lines: Vec<&str> = rows.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "LT01: This is a brief description of LT01");
    let mut sorted = lines.clone();
    sorted.sort_unstable();
    assert_eq!(lines, sorted);
}

#[test]
fn score_history_tracks_most_recent_and_earlier() {
    let students = sample_students();
    let history = &students[2].scores()["LT02"]; // [2, 2, 2, 3, 4]
    assert_eq!(history.most_recent(), Score::Four);
    assert_eq!(history.earlier().len(), 4);
    assert_eq!(history.earlier()[3], Score::Three);
}
