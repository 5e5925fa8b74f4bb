// Export modules for library usage
pub mod arrays;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod grades;
pub mod io;
pub mod matrix;
pub mod observability;
pub mod pipeline;
pub mod report;

// Re-export commonly used types
pub use crate::arrays::{
    bubble_sort, classify_position, compute_statistics, linear_search, relational_overlap_count,
    selection_sort, ArrayAnalyzer, ArrayOutcome, Half, Statistics,
};

pub use crate::matrix::{DiagonalSums, Dominance, Matrix, MatrixOutcome, MatrixWorkspace};

pub use crate::grades::{
    class_statistics, evaluate, find_topper, ClassStatistics, Grade, GradeOutcome, StudentResult,
    StudentScores, Verdict,
};

pub use crate::config::AlgolabConfig;
pub use crate::errors::{Error, Result};
pub use crate::io::{MemorySink, OutputFormat, ReportSink, StdoutSink};
pub use crate::pipeline::{run_program, run_programs, ProgramRun, RunOutcome};
pub use crate::report::{Program, Report};
