//! 5×5 integer matrix operations over a shared scratch matrix.

pub mod ops;
pub mod pipeline;

pub use ops::{
    add_into, diagonal_sums, multiply_into, scale_and_count_even, seed_a, seed_b, transpose,
    transpose_into, DiagonalSums, Dominance, Matrix, SIZE,
};
pub use pipeline::{run_matrix, MatrixOutcome, MatrixWorkspace};
