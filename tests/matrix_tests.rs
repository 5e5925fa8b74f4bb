use algolab::config::MatrixConfig;
use algolab::matrix::{
    diagonal_sums, multiply_into, run_matrix, seed_a, seed_b, transpose, Matrix, SIZE,
};
use algolab::*;
use proptest::prelude::*;

fn arb_matrix() -> impl Strategy<Value = Matrix> {
    prop::array::uniform5(prop::array::uniform5(-1000i32..1000)).prop_map(Matrix::from_rows)
}

proptest! {
    #[test]
    fn prop_transpose_is_involution(m in arb_matrix()) {
        prop_assert_eq!(transpose(&transpose(&m)), m);
    }

    #[test]
    fn prop_transpose_preserves_main_diagonal(m in arb_matrix()) {
        let t = transpose(&m);
        prop_assert_eq!(diagonal_sums(&t).main, diagonal_sums(&m).main);
    }

    #[test]
    fn prop_product_matches_definition(a in arb_matrix(), b in arb_matrix()) {
        let mut out = Matrix::from_fn(|_, _| 12345);
        multiply_into(&a, &b, &mut out);
        for i in 0..SIZE {
            for j in 0..SIZE {
                let expected: i32 = (0..SIZE).map(|k| a.get(i, k) * b.get(k, j)).sum();
                prop_assert_eq!(out.get(i, j), expected);
            }
        }
    }
}

#[test]
fn test_seeded_product() {
    let mut out = Matrix::zero();
    multiply_into(&seed_a(), &seed_b(), &mut out);
    assert_eq!(
        out,
        Matrix::from_rows([
            [10, 30, 60, 90, 120],
            [15, 41, 81, 121, 161],
            [20, 52, 102, 152, 202],
            [25, 63, 123, 183, 243],
            [30, 74, 144, 214, 284],
        ])
    );
}

#[test]
fn test_zero_replacement_rule() {
    let b = seed_b();
    for i in 0..SIZE {
        for j in 0..SIZE {
            let expected = if i == 0 || j == 0 { 1 } else { (i * j) as i32 };
            assert_eq!(b.get(i, j), expected, "B[{i}][{j}]");
        }
    }
}

#[test]
fn test_canonical_pipeline_order() {
    let (_, outcome) = run_matrix(&MatrixConfig::default());

    assert_eq!(outcome.sum.row(0), [1, 2, 3, 4, 5]);
    // A is symmetric, so its transpose equals A
    assert_eq!(outcome.transpose, outcome.a);
    assert_eq!(outcome.dominance, Dominance::AntiOrEqual);
    assert_eq!(outcome.scaled.get(1, 2), 15);
    assert_eq!(outcome.even_count, 13);
}

#[test]
fn test_workspace_diagonals_read_a_not_scratch() {
    let mut ws = MatrixWorkspace::initialize();
    ws.multiply();
    assert_eq!(ws.diagonal_sums(), DiagonalSums { main: 20, anti: 20 });
}
