//! Solver selection (spec §6), mirroring
//! `SymbolicEliminationLinearEquationSolverFactory::create`'s role of handing
//! back a concrete solver for a requested value domain.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::warn;

use crate::dft::errors::SolverError;
use crate::solver::dd::DecisionDiagram;
use crate::solver::elimination;
use crate::solver::semiring::Semiring;

/// The solving strategy named by the `equation-solver` configuration key
/// (spec §4.5/§6). Only `Elimination` is implemented; `Native` is recognized
/// so a host's configuration can name it without failing to parse, since
/// covering iterative solvers other than elimination is an explicit
/// non-goal — `select_solver` always substitutes `Elimination` for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverKind {
    Elimination,
    Native,
}

/// Configuration handed to [`select_solver`], mirroring the `equation-solver`
/// configuration key (spec §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub kind: SolverKind,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            kind: SolverKind::Elimination,
        }
    }
}

/// Emitted when the requested solver kind could not be honored and the
/// factory substituted a compatible one instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverWarning {
    Fallback {
        requested: SolverKind,
        used: SolverKind,
    },
}

/// Resolves a [`SolverConfig`] to a concrete solve call, returning any
/// fallback warning alongside the solved values.
///
/// `Native` is always substituted with `Elimination`. When `V` is an exact
/// semiring this substitution is forced regardless of configuration (spec
/// §4.5: no other solver can return exact results over such a domain); when
/// `V` is not exact, `Native` simply has no in-tree implementation to run
/// (an iterative numerical solver is explicitly out of scope here), so the
/// same substitution applies either way.
pub fn select_solver<D, V>(
    config: SolverConfig,
    matrix: &D,
    b: &HashMap<D::Row, V>,
) -> Result<(HashMap<D::Row, V>, Option<SolverWarning>), SolverError>
where
    D: DecisionDiagram<V>,
    D::Row: Eq + Hash + Copy + std::fmt::Debug,
    V: Semiring,
{
    let warning = match config.kind {
        SolverKind::Elimination => None,
        SolverKind::Native => {
            let forced_by_exactness = V::is_exact();
            warn!(
                forced_by_exactness,
                "requested solver unavailable, falling back to elimination"
            );
            Some(SolverWarning::Fallback {
                requested: SolverKind::Native,
                used: SolverKind::Elimination,
            })
        }
    };
    let solution = elimination::solve(matrix, b)?;
    Ok((solution, warning))
}
