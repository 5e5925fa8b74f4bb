//! Derivation rules: average, letter grade and pass/fail.

use serde::Serialize;
use std::fmt;

use super::record::StudentScores;

/// Minimum mark every subject needs for the all-subjects pass clause.
pub const SUBJECT_FLOOR: i32 = 40;
/// An average strictly above this passes regardless of subject marks.
pub const AVERAGE_ESCAPE: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::F => 'F',
        };
        write!(f, "{letter}")
    }
}

pub fn derive_average(scores: &StudentScores) -> f64 {
    f64::from(scores.total()) / 3.0
}

/// First matching band wins; lower bounds are inclusive.
pub fn derive_grade(average: f64) -> Grade {
    if average >= 90.0 {
        Grade::A
    } else if average >= 80.0 {
        Grade::B
    } else if average >= 70.0 {
        Grade::C
    } else if average >= 60.0 {
        Grade::D
    } else {
        Grade::F
    }
}

/// Pass if every subject is at least [`SUBJECT_FLOOR`] or the average is
/// strictly above [`AVERAGE_ESCAPE`].
pub fn derive_pass_fail(scores: &StudentScores, average: f64) -> bool {
    let all_subjects = scores.subjects().iter().all(|&m| m >= SUBJECT_FLOOR);
    all_subjects || average > AVERAGE_ESCAPE
}

/// Raw scores plus every derived field, computed once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StudentResult {
    pub scores: StudentScores,
    pub average: f64,
    pub grade: Grade,
    pub passed: bool,
}

impl StudentResult {
    pub fn status(&self) -> &'static str {
        if self.passed {
            "PASS"
        } else {
            "FAIL"
        }
    }
}

pub fn evaluate(scores: StudentScores) -> StudentResult {
    let average = derive_average(&scores);
    StudentResult {
        scores,
        average,
        grade: derive_grade(average),
        passed: derive_pass_fail(&scores, average),
    }
}
