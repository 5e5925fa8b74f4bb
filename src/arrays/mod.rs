//! Array sorting, searching and statistics.
//!
//! The pipeline sorts a fixed 20-element sequence, reports aggregate
//! statistics, searches the sorted sequence and counts offset-related pairs
//! against a second fixed sequence.

pub mod pipeline;
pub mod search;
pub mod sorting;
pub mod stats;

pub use pipeline::{run_arrays, ArrayAnalyzer, ArrayOutcome};
pub use search::{classify_position, linear_search, relational_overlap_count, Half};
pub use sorting::{bubble_sort, is_sorted, selection_sort, SortTrace};
pub use stats::{compute_statistics, Statistics};

pub const SEQUENCE_LEN: usize = 20;

/// Primary dataset, bubble-sorted by the pipeline.
pub const PRIMARY_SEED: [i32; SEQUENCE_LEN] = [
    64, 34, 25, 12, 22, 11, 90, 33, 21, 56, 78, 9, 4, 67, 88, 10, 34, 55, 22, 99,
];

/// Secondary dataset used for the offset relation.
pub const SECONDARY_SEED: [i32; SEQUENCE_LEN] = [
    164, 134, 125, 112, 122, 111, 190, 133, 121, 156, 178, 19, 14, 167, 188, 110, 134, 155, 122,
    199,
];
