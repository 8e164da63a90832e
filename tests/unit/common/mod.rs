//! Shared fixtures for unit tests
//!
//! A ten-target catalog and a ten-student roster spanning every grade
//! tier, including a student with no assessments and a student with an
//! exempt score.

use sbgrader::models::{ClassPeriod, LearningTarget, Score, Student};

/// Ten targets labeled LT01 through LT10
pub fn sample_targets() -> Vec<LearningTarget> {
    (1..=10)
        .map(|n| {
            let label = format!("LT{n:02}");
            LearningTarget::with_descriptions(
                label.as_str(),
                format!("This is a brief description of {label}"),
                format!("This is a verbose description of {label}"),
            )
            .expect("fixture target is valid")
        })
        .collect()
}

fn student(sid: u32, last: &str, first: &str, pronoun: &str, scores: &[(&str, &[f64])]) -> Student {
    let mut student = Student::new(sid, last, first, pronoun).expect("fixture student is valid");
    for (label, history) in scores {
        let history = history
            .iter()
            .map(|v| Score::try_from(*v).expect("fixture score is valid"))
            .collect();
        student
            .replace_history(label, history)
            .expect("fixture history is non-empty");
    }
    student
}

/// Ten students spanning every tier:
/// A, B, A, B, C, C, D, F, F (unassessed), A (after exempt cleanup)
pub fn sample_students() -> Vec<Student> {
    vec![
        student(1, "Frank", "Aerik", "he", &[
            ("LT01", &[1.0, 2.0, 4.0]),
            ("LT02", &[2.0, 4.0]),
            ("LT03", &[2.0, 4.0]),
            ("LT04", &[1.0, 3.0, 4.0]),
            ("LT05", &[2.0, 4.0]),
            ("LT06", &[2.0, 3.0]),
            ("LT07", &[2.0, 3.0]),
            ("LT08", &[1.0, 3.0]),
            ("LT09", &[2.0, 3.0]),
            ("LT10", &[2.0, 3.0]),
        ]),
        student(2, "Livingston", "Bob", "he", &[
            ("LT01", &[4.0]),
            ("LT02", &[4.0]),
            ("LT03", &[4.0]),
            ("LT04", &[4.0]),
            ("LT05", &[0.0, 3.0]),
            ("LT06", &[2.0, 3.0]),
            ("LT07", &[1.0, 3.0]),
            ("LT08", &[2.0, 3.0]),
            ("LT09", &[1.0, 2.0, 3.0]),
            ("LT10", &[3.0]),
        ]),
        student(3, "Hilders", "Catherine", "she", &[
            ("LT01", &[2.0, 4.0]),
            ("LT02", &[2.0, 2.0, 2.0, 3.0, 4.0]),
            ("LT03", &[3.0, 4.0]),
            ("LT04", &[4.0]),
            ("LT05", &[4.0]),
            ("LT06", &[2.0, 4.0]),
            ("LT07", &[4.0]),
            ("LT08", &[4.0]),
            ("LT09", &[4.0]),
            ("LT10", &[2.0]),
        ]),
        student(4, "Adams", "Dilbert", "he", &[
            ("LT01", &[4.0]),
            ("LT02", &[4.0]),
            ("LT03", &[3.0]),
            ("LT04", &[4.0]),
            ("LT05", &[4.0]),
            ("LT06", &[3.0]),
            ("LT07", &[4.0]),
            ("LT08", &[4.0]),
            ("LT09", &[2.0]),
            ("LT10", &[2.0, 2.0]),
        ]),
        student(5, "Wheatley", "Egbert", "he", &[
            ("LT01", &[3.0, 4.0]),
            ("LT02", &[4.0]),
            ("LT03", &[4.0]),
            ("LT04", &[4.0]),
            ("LT05", &[4.0]),
            ("LT06", &[4.0]),
            ("LT07", &[4.0]),
            ("LT08", &[4.0]),
            ("LT09", &[4.0]),
            ("LT10", &[1.0]),
        ]),
        student(6, "Spelt", "Farina", "she", &[
            ("LT01", &[4.0]),
            ("LT02", &[4.0]),
            ("LT03", &[2.0, 4.0]),
            ("LT04", &[4.0]),
            ("LT05", &[4.0]),
            ("LT06", &[4.0]),
            ("LT07", &[4.0]),
            ("LT08", &[2.0]),
            ("LT09", &[2.0]),
            ("LT10", &[2.0]),
        ]),
        student(7, "Mesopo", "Gilgamesh", "he", &[
            ("LT01", &[4.0]),
            ("LT02", &[4.0]),
            ("LT03", &[4.0]),
            ("LT04", &[4.0]),
            ("LT05", &[4.0]),
            ("LT06", &[4.0]),
            ("LT07", &[2.0, 2.0]),
            ("LT08", &[2.0]),
            ("LT09", &[2.0]),
            ("LT10", &[2.0]),
        ]),
        student(8, "Harrison", "Henry", "he", &[
            ("LT01", &[4.0]),
            ("LT02", &[4.0]),
            ("LT03", &[2.0]),
            ("LT04", &[1.0]),
            ("LT05", &[2.0, 2.0]),
            ("LT06", &[1.0, 2.0]),
            ("LT07", &[2.0]),
            ("LT08", &[2.0]),
            ("LT09", &[1.0]),
            ("LT10", &[2.0]),
        ]),
        // Ivan has not taken any assessments yet
        student(9, "Whittier", "Ivan", "he", &[]),
        // Janet is exempt on LT01
        student(10, "Foo", "Janet", "she", &[
            ("LT01", &[-1.0]),
            ("LT02", &[4.0]),
        ]),
    ]
}

/// The full fixture class period (exempt scores cleaned by construction)
pub fn sample_period() -> ClassPeriod {
    ClassPeriod::with_members("Period_1", sample_students(), sample_targets())
}
