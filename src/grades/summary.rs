use serde::Serialize;
use std::fmt;

use super::rules::StudentResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Good,
    NeedsImprovement,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Good => write!(f, "GOOD"),
            Self::NeedsImprovement => write!(f, "NEEDS IMPROVEMENT"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassStatistics {
    pub total_students: usize,
    pub pass_count: usize,
    pub fail_count: usize,
    pub total_math: i64,
    pub total_science: i64,
}

impl ClassStatistics {
    /// `Good` only when passes strictly outnumber failures.
    pub fn verdict(&self) -> Verdict {
        if self.pass_count > self.fail_count {
            Verdict::Good
        } else {
            Verdict::NeedsImprovement
        }
    }
}

pub fn class_statistics(results: &[StudentResult]) -> ClassStatistics {
    let pass_count = results.iter().filter(|r| r.passed).count();
    ClassStatistics {
        total_students: results.len(),
        pass_count,
        fail_count: results.len() - pass_count,
        total_math: results.iter().map(|r| i64::from(r.scores.math)).sum(),
        total_science: results.iter().map(|r| i64::from(r.scores.science)).sum(),
    }
}

/// Record with the strictly greatest average; the earliest one wins ties.
pub fn find_topper(results: &[StudentResult]) -> Option<&StudentResult> {
    results.iter().fold(None, |best, r| match best {
        Some(b) if r.average <= b.average => Some(b),
        _ => Some(r),
    })
}
