use dft_ctmc::solver::{select_solver, SolverConfig, SolverKind, SolverWarning, SparseMatrix};
use std::collections::HashMap;

#[test]
fn default_config_runs_elimination_without_a_warning() {
    let mut matrix: SparseMatrix<u32, f64> = SparseMatrix::new(vec![0]);
    matrix.set(0, 0, 0.5);
    let mut b = HashMap::new();
    b.insert(0u32, 0.5);

    let (solution, warning) = select_solver(SolverConfig::default(), &matrix, &b)
        .expect("elimination solves a single self-looping row");
    assert!(warning.is_none());
    assert!((solution[&0] - 1.0).abs() < 1e-9);
}

#[test]
fn native_falls_back_to_elimination_with_a_warning_for_an_inexact_semiring() {
    let mut matrix: SparseMatrix<u32, f64> = SparseMatrix::new(vec![0]);
    matrix.set(0, 0, 0.5);
    let mut b = HashMap::new();
    b.insert(0u32, 0.5);

    let config = SolverConfig {
        kind: SolverKind::Native,
    };
    let (solution, warning) = select_solver(config, &matrix, &b).expect("falls back and solves");
    assert_eq!(
        warning,
        Some(SolverWarning::Fallback {
            requested: SolverKind::Native,
            used: SolverKind::Elimination,
        })
    );
    assert!((solution[&0] - 1.0).abs() < 1e-9);
}

#[test]
fn native_is_forced_to_elimination_for_an_exact_semiring() {
    use num_rational::BigRational;
    use num_traits::One;

    let mut matrix: SparseMatrix<u32, BigRational> = SparseMatrix::new(vec![0]);
    matrix.set(0, 0, BigRational::new(1.into(), 2.into()));
    let mut b = HashMap::new();
    b.insert(0u32, BigRational::new(1.into(), 2.into()));

    let config = SolverConfig {
        kind: SolverKind::Native,
    };
    let (solution, warning) =
        select_solver(config, &matrix, &b).expect("forced elimination solves exactly");
    assert_eq!(
        warning,
        Some(SolverWarning::Fallback {
            requested: SolverKind::Native,
            used: SolverKind::Elimination,
        })
    );
    assert_eq!(solution[&0], BigRational::one());
}
