//! Searching and cross-sequence relations.

use serde::Serialize;
use std::fmt;

/// Index of the first element equal to `target`, scanning from the front.
///
/// Makes no assumption about ordering.
pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    for (i, v) in arr.iter().enumerate() {
        if v == target {
            return Some(i);
        }
    }
    None
}

/// Which half of a sequence an index falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Half {
    First,
    Second,
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first half"),
            Self::Second => write!(f, "second half"),
        }
    }
}

/// `First` iff `index < length / 2` (integer division).
pub fn classify_position(index: usize, length: usize) -> Half {
    if index < length / 2 {
        Half::First
    } else {
        Half::Second
    }
}

/// Counts pairs `(a, b)` with `a == b - offset`, every `(i, j)` combination
/// counted separately.
pub fn relational_overlap_count(seq_a: &[i32], seq_b: &[i32], offset: i32) -> usize {
    seq_a
        .iter()
        .map(|&a| {
            seq_b
                .iter()
                .filter(|&&b| i64::from(a) == i64::from(b) - i64::from(offset))
                .count()
        })
        .sum()
}
