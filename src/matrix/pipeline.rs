use serde::Serialize;
use tracing::{debug, info, info_span};

use super::ops::{
    add_into, diagonal_sums, multiply_into, scale_and_count_even, seed_a, seed_b,
    transpose_into, DiagonalSums, Dominance, Matrix,
};
use crate::config::MatrixConfig;
use crate::observability::{set_program, set_stage, Stage};
use crate::report::{Program, Report};

/// Owns the two input matrices and the shared `Result` scratch matrix.
///
/// Every operation that targets the scratch overwrites it wholly, so the
/// caller must read the scratch before running the next operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixWorkspace {
    a: Matrix,
    b: Matrix,
    result: Matrix,
}

impl MatrixWorkspace {
    /// Seeded A and B, zeroed scratch.
    pub fn initialize() -> Self {
        let _stage = set_stage(Stage::MatrixInit);
        Self::with_inputs(seed_a(), seed_b())
    }

    pub fn with_inputs(a: Matrix, b: Matrix) -> Self {
        Self {
            a,
            b,
            result: Matrix::zero(),
        }
    }

    pub fn a(&self) -> &Matrix {
        &self.a
    }

    pub fn b(&self) -> &Matrix {
        &self.b
    }

    pub fn result(&self) -> &Matrix {
        &self.result
    }

    pub fn add(&mut self) -> &Matrix {
        let _stage = set_stage(Stage::Addition);
        add_into(&self.a, &self.b, &mut self.result);
        &self.result
    }

    pub fn multiply(&mut self) -> &Matrix {
        let _stage = set_stage(Stage::Multiplication);
        multiply_into(&self.a, &self.b, &mut self.result);
        &self.result
    }

    pub fn transpose_a(&mut self) -> &Matrix {
        let _stage = set_stage(Stage::Transpose);
        transpose_into(&self.a, &mut self.result);
        &self.result
    }

    /// Reads A only.
    pub fn diagonal_sums(&self) -> DiagonalSums {
        let _stage = set_stage(Stage::DiagonalAnalysis);
        diagonal_sums(&self.a)
    }

    /// Scales whatever the scratch currently holds.
    pub fn scale_result(&mut self, scalar: i32) -> usize {
        let _stage = set_stage(Stage::ScalarMultiply);
        scale_and_count_even(&mut self.result, scalar)
    }
}

/// Everything the matrix pipeline computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixOutcome {
    pub a: Matrix,
    pub b: Matrix,
    pub sum: Matrix,
    pub product: Matrix,
    pub transpose: Matrix,
    pub diagonals: DiagonalSums,
    pub dominance: Dominance,
    pub scalar: i32,
    pub scaled: Matrix,
    pub even_count: usize,
}

fn dump(report: &mut Report, label: &str, m: &Matrix) {
    report.header(format!("Matrix: {}", label));
    for row in m.format_rows() {
        report.line(row);
    }
    report.blank();
}

/// Run add, multiply, transpose, diagonal analysis and scalar
/// multiplication in that order over a fresh workspace.
pub fn run_matrix(settings: &MatrixConfig) -> (Report, MatrixOutcome) {
    let _program = set_program(Program::Matrix);
    let span = info_span!("matrix");
    let _enter = span.enter();

    let mut report = Report::new(Program::Matrix);
    report.header("--- Matrix Operations Tool ---");
    let mut ws = MatrixWorkspace::initialize();

    report.line("Performing Addition...");
    let sum = *ws.add();
    dump(&mut report, "A + B", &sum);

    report.line("Performing Multiplication...");
    let product = *ws.multiply();
    dump(&mut report, "A * B", &product);

    report.line("Performing Transpose of A...");
    let transpose = *ws.transpose_a();
    dump(&mut report, "Transpose A", &transpose);

    let diagonals = ws.diagonal_sums();
    let dominance = diagonals.dominance();
    debug!(main = diagonals.main, anti = diagonals.anti, ?dominance, "diagonals");
    report.line(format!("Main Diagonal Sum: {}", diagonals.main));
    report.line(format!("Anti-Diagonal Sum: {}", diagonals.anti));
    report.verdict(match dominance {
        Dominance::Main => "Main diagonal is dominant.",
        Dominance::AntiOrEqual => "Anti-diagonal is dominant or equal.",
    });

    let scalar = settings.scalar;
    report.line(format!(
        "Applying scalar multiplication by {} to last result...",
        scalar
    ));
    let even_count = ws.scale_result(scalar);
    report.verdict(format!(
        "Count of even numbers in scaled matrix: {}",
        even_count
    ));
    info!(even_count, "matrix analysis complete");

    let outcome = MatrixOutcome {
        a: *ws.a(),
        b: *ws.b(),
        sum,
        product,
        transpose,
        diagonals,
        dominance,
        scalar,
        scaled: *ws.result(),
        even_count,
    };
    (report, outcome)
}
