use dft_ctmc::dft::SolverError;
use dft_ctmc::solver::{solve, DecisionDiagram, SparseMatrix};
use std::collections::HashMap;

/// A single self-referencing row: x = A_00*x + b, A_00 < 1. The direct
/// probability mass not captured by the self-loop (`1 - A_00`) already flows
/// to an absorbing target of value 1, pre-folded into `b`.
#[test]
fn solves_a_single_row_self_loop() {
    let mut matrix: SparseMatrix<u32, f64> = SparseMatrix::new(vec![0]);
    matrix.set(0, 0, 0.5);
    let mut b = HashMap::new();
    b.insert(0u32, 0.5);

    let solution = solve(&matrix, &b).expect("a row with a nonzero self-loop solves");
    assert!((solution[&0] - 1.0).abs() < 1e-9);
}

/// Two rows that feed each other as well as themselves; every row's total
/// outgoing mass (self-loop + cross-transition + the implicit absorption
/// folded into `b`) sums to one, so the shared fixed point is `x0 = x1 = 1`.
#[test]
fn solves_a_mutually_referencing_pair() {
    let mut matrix: SparseMatrix<u32, f64> = SparseMatrix::new(vec![0, 1]);
    matrix.set(0, 0, 0.2);
    matrix.set(0, 1, 0.3);
    matrix.set(1, 1, 0.2);
    matrix.set(1, 0, 0.3);

    let mut b = HashMap::new();
    b.insert(0u32, 0.5);
    b.insert(1u32, 0.5);

    let solution = solve(&matrix, &b).expect("a stochastic two-state system solves");
    assert!((solution[&0] - 1.0).abs() < 1e-9);
    assert!((solution[&1] - 1.0).abs() < 1e-9);
}

/// A row with zero self-loop mass cannot be normalized by this elimination
/// strategy (it assumes every row has already been uniformized to carry
/// some self-loop); the solver reports it rather than dividing by zero.
#[test]
fn reports_degenerate_rows_instead_of_dividing_by_zero() {
    let mut matrix: SparseMatrix<u32, f64> = SparseMatrix::new(vec![0, 1]);
    matrix.set(0, 1, 1.0);
    assert!(!matrix.is_zero());

    let mut b = HashMap::new();
    b.insert(1u32, 1.0);

    let err = solve(&matrix, &b).unwrap_err();
    assert!(matches!(err, SolverError::DegenerateRow { .. }));
}
