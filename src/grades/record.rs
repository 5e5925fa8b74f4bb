//! Raw student scores and the deterministic roster generator.

use serde::Serialize;

pub const ROSTER_SIZE: usize = 10;
pub const FIRST_ID: u32 = 1001;

/// Raw input for one student. Derived values live in
/// [`crate::grades::StudentResult`] and are never stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StudentScores {
    pub id: u32,
    pub math: i32,
    pub science: i32,
    pub english: i32,
}

impl StudentScores {
    pub fn new(id: u32, math: i32, science: i32, english: i32) -> Self {
        Self {
            id,
            math,
            science,
            english,
        }
    }

    pub fn subjects(&self) -> [i32; 3] {
        [self.math, self.science, self.english]
    }

    pub fn total(&self) -> i32 {
        self.math + self.science + self.english
    }
}

/// Scores for roster index `i`: math `50 + 4i`, science `60 + 3i`,
/// english `70 - 2i`.
pub fn generate(i: usize) -> StudentScores {
    let step = i as i32;
    StudentScores {
        id: FIRST_ID + i as u32,
        math: 50 + 4 * step,
        science: 60 + 3 * step,
        english: 70 - 2 * step,
    }
}

/// Hardcoded edge cases layered on the generated roster: a top performer,
/// a single-subject failure and a borderline average.
pub fn apply_overrides(roster: &mut [StudentScores]) {
    if let Some(s) = roster.get_mut(0) {
        s.math = 95;
    }
    if let Some(s) = roster.get_mut(2) {
        s.science = 30;
    }
    if let Some(s) = roster.get_mut(5) {
        s.english = 35;
    }
}

/// The full 10-student roster with overrides applied.
pub fn roster() -> [StudentScores; ROSTER_SIZE] {
    let mut roster: [StudentScores; ROSTER_SIZE] = std::array::from_fn(generate);
    apply_overrides(&mut roster);
    roster
}
