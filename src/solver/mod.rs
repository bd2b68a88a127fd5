//! Symbolic Gauss-Jordan elimination over decision-diagram-encoded matrices.
//!
//! Building the matrix from a DFT's generated CTMC, and checking PCTL
//! properties against the solved values, are both out of scope here; this
//! module only solves `x = A*x + b` given an already-encoded `A` and `b`.

pub mod dd;
pub mod elimination;
pub mod factory;
pub mod semiring;

pub use dd::{DecisionDiagram, SparseMatrix};
pub use elimination::solve;
pub use factory::{select_solver, SolverConfig, SolverKind, SolverWarning};
pub use semiring::Semiring;
