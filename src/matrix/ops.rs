//! Fixed-size square matrix arithmetic.

use serde::Serialize;
use std::fmt;

pub const SIZE: usize = 5;

/// A 5×5 grid of signed integers, addressed `(row, column)` from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Matrix([[i32; SIZE]; SIZE]);

impl Default for Matrix {
    fn default() -> Self {
        Self::zero()
    }
}

impl Matrix {
    pub const fn zero() -> Self {
        Self([[0; SIZE]; SIZE])
    }

    pub const fn from_rows(rows: [[i32; SIZE]; SIZE]) -> Self {
        Self(rows)
    }

    /// Build a matrix cell by cell from `f(row, col)`.
    pub fn from_fn(f: impl Fn(usize, usize) -> i32) -> Self {
        let mut m = Self::zero();
        for i in 0..SIZE {
            for j in 0..SIZE {
                m.0[i][j] = f(i, j);
            }
        }
        m
    }

    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.0[row][col]
    }

    pub fn row(&self, row: usize) -> [i32; SIZE] {
        self.0[row]
    }

    pub fn fill(&mut self, value: i32) {
        self.0 = [[value; SIZE]; SIZE];
    }

    /// Rows rendered as right-aligned 4-wide cells, each followed by a space.
    pub fn format_rows(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|row| row.iter().map(|v| format!("{:4} ", v)).collect())
            .collect()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.format_rows() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// `A[i][j] = i + j`
pub fn seed_a() -> Matrix {
    Matrix::from_fn(|i, j| (i + j) as i32)
}

/// `B[i][j] = i * j`, with every zero product replaced by 1.
pub fn seed_b() -> Matrix {
    Matrix::from_fn(|i, j| match (i * j) as i32 {
        0 => 1,
        product => product,
    })
}

/// Overwrites `out` with the elementwise sum.
pub fn add_into(a: &Matrix, b: &Matrix, out: &mut Matrix) {
    for i in 0..SIZE {
        for j in 0..SIZE {
            out.0[i][j] = a.0[i][j] + b.0[i][j];
        }
    }
}

/// Overwrites `out` with the matrix product; `out` is zeroed first.
pub fn multiply_into(a: &Matrix, b: &Matrix, out: &mut Matrix) {
    out.fill(0);
    for i in 0..SIZE {
        for j in 0..SIZE {
            for k in 0..SIZE {
                out.0[i][j] += a.0[i][k] * b.0[k][j];
            }
        }
    }
}

/// Overwrites `out` with the transpose of `a`.
pub fn transpose_into(a: &Matrix, out: &mut Matrix) {
    for i in 0..SIZE {
        for j in 0..SIZE {
            out.0[j][i] = a.0[i][j];
        }
    }
}

pub fn transpose(a: &Matrix) -> Matrix {
    let mut out = Matrix::zero();
    transpose_into(a, &mut out);
    out
}

/// Which diagonal carries the larger sum. Ties go to the anti-diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dominance {
    Main,
    AntiOrEqual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiagonalSums {
    pub main: i32,
    pub anti: i32,
}

impl DiagonalSums {
    pub fn dominance(&self) -> Dominance {
        if self.main > self.anti {
            Dominance::Main
        } else {
            Dominance::AntiOrEqual
        }
    }
}

pub fn diagonal_sums(a: &Matrix) -> DiagonalSums {
    (0..SIZE).fold(DiagonalSums { main: 0, anti: 0 }, |acc, i| DiagonalSums {
        main: acc.main + a.0[i][i],
        anti: acc.anti + a.0[i][SIZE - 1 - i],
    })
}

/// Multiplies every cell in place and returns how many results are even.
///
/// Wrapping multiplication keeps parity exact, so the count is correct even
/// for scalars that would overflow.
pub fn scale_and_count_even(m: &mut Matrix, scalar: i32) -> usize {
    let mut even = 0;
    for row in m.0.iter_mut() {
        for cell in row.iter_mut() {
            *cell = cell.wrapping_mul(scalar);
            if *cell % 2 == 0 {
                even += 1;
            }
        }
    }
    even
}
