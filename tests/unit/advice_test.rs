//! Advisory scenario selection and rendering tests

use crate::common::{sample_period, sample_targets};
use sbgrader::advice::{Scenario, ScoreBuckets, best_advice};
use sbgrader::models::{ClassPeriod, Score, Student};

fn scenario_for(sid: u32) -> Scenario {
    let period = sample_period();
    let student = period.find_student(sid).expect("fixture student");
    Scenario::for_student(student, &period.targets).expect("catalog covers fixtures")
}

#[test]
fn every_fixture_student_hits_the_expected_scenario() {
    assert!(matches!(scenario_for(1), Scenario::AAllMet));
    assert!(matches!(scenario_for(2), Scenario::BNinetyMet { .. }));
    assert!(matches!(scenario_for(3), Scenario::ABelowStandard { .. }));
    assert!(matches!(scenario_for(4), Scenario::BUnderNinety { .. }));
    assert!(matches!(scenario_for(5), Scenario::CCappedByLowScores { .. }));
    assert!(matches!(scenario_for(6), Scenario::CUnderEighty { .. }));
    assert!(matches!(scenario_for(7), Scenario::D { .. }));
    assert!(matches!(scenario_for(8), Scenario::F { .. }));
    assert!(matches!(scenario_for(9), Scenario::NoAssessments));
    // Janet's exempt target is cleaned up, leaving a single met target
    assert!(matches!(scenario_for(10), Scenario::AAllMet));
}

#[test]
fn buckets_collect_exact_scores_only() {
    let period = sample_period();
    let catherine = period.find_student(3).expect("fixture student");
    let buckets = ScoreBuckets::collect(catherine, &period.targets).unwrap();
    assert!(buckets.zeros.is_empty());
    assert!(buckets.ones.is_empty());
    assert_eq!(buckets.twos.len(), 1);
    assert_eq!(buckets.twos[0].label, "LT10");
    assert_eq!(buckets.fours.len(), 9);
    assert_eq!(buckets.below_standard().len(), 1);
}

#[test]
fn b_above_ninety_names_counts_and_the_fours_threshold() {
    let period = sample_period();
    let bob = period.find_student(2).expect("fixture student");
    let text = best_advice(bob, &period.targets).unwrap();
    assert!(text.contains("out of the 10 learning targets"));
    assert!(text.contains("meeting standard (earning 3s) on 6"));
    assert!(text.contains("exceeding standard (earning 4s) on an additional 4"));
    // Half of ten targets, rounded up
    assert!(text.contains("5 of the LTs"));
    assert!(text.contains("LT05: This is a brief description of LT05"));
    // The 4s are not listed among the "meeting but not exceeding" rows
    assert!(!text.contains("LT01: This is a brief description of LT01"));
}

#[test]
fn c_capped_by_low_scores_names_the_capping_targets() {
    let period = sample_period();
    let egbert = period.find_student(5).expect("fixture student");
    let text = best_advice(egbert, &period.targets).unwrap();
    assert!(text.contains("There are 1 learning target(s)"));
    assert!(text.contains("any 0s or 1s in the gradebook"));
    assert!(text.contains("LT10: This is a brief description of LT10"));
}

#[test]
fn d_and_f_quote_their_promotion_thresholds() {
    let period = sample_period();
    let gilgamesh = period.find_student(7).expect("fixture student");
    let text = best_advice(gilgamesh, &period.targets).unwrap();
    // 65% of ten targets, rounded up
    assert!(text.contains("at least 65% of the learning targets (i.e. 7"));

    let henry = period.find_student(8).expect("fixture student");
    let text = best_advice(henry, &period.targets).unwrap();
    assert!(text.contains("not yet eligible for credit"));
    assert!(text.contains("at least 50% of the learning targets (i.e. 5"));
}

#[test]
fn unassessed_student_is_told_why_the_f_shows() {
    let period = sample_period();
    let ivan = period.find_student(9).expect("fixture student");
    let text = best_advice(ivan, &period.targets).unwrap();
    assert!(text.contains("no assessment scores for you yet"));
    // No threshold talk for a student with nothing on file
    assert!(!text.contains("learning targets (i.e."));
}

#[test]
fn listed_targets_are_sorted_on_rendered_text() {
    let period = sample_period();
    let henry = period.find_student(8).expect("fixture student");
    let text = best_advice(henry, &period.targets).unwrap();
    let lt03 = text.find("LT03").expect("LT03 listed");
    let lt09 = text.find("LT09").expect("LT09 listed");
    let lt10 = text.find("LT10").expect("LT10 listed");
    assert!(lt03 < lt09 && lt09 < lt10);
}

#[test]
fn unknown_target_reference_fails_the_advisory() {
    let mut stray = Student::new(99, "Nowhere", "Nina", "she").unwrap();
    stray.record_score("LT99", Score::Three);
    let period = ClassPeriod::with_members("Period_9", vec![stray], sample_targets());
    let student = period.find_student(99).expect("just added");
    assert!(best_advice(student, &period.targets).is_err());
}
