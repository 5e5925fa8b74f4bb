//! Student grade analysis.
//!
//! Raw scores ([`StudentScores`]) are generated once and never mutated;
//! every derived field is produced by [`evaluate`] into a separate
//! [`StudentResult`].

pub mod pipeline;
pub mod record;
pub mod rules;
pub mod summary;

pub use pipeline::{analyze_students, format_student_row, run_grades, GradeOutcome, Topper};
pub use record::{apply_overrides, generate, roster, StudentScores, ROSTER_SIZE};
pub use rules::{
    derive_average, derive_grade, derive_pass_fail, evaluate, Grade, StudentResult,
};
pub use summary::{class_statistics, find_topper, ClassStatistics, Verdict};
