//! Symbolic Gauss-Jordan elimination over a [`DecisionDiagram`]-encoded
//! matrix.
//!
//! Solves `x = A*x + b` by repeatedly normalizing out each row's self-loop,
//! folding one step of back-substitution into `solution`, then "shortcutting"
//! the remaining matrix by squaring it (doubling the path length eliminated
//! per round) until no transitions remain — the same elimination-by-squaring
//! strategy the `storm` model checker's symbolic solver uses to avoid an
//! explicit variable-by-variable Gaussian elimination order.
//!
//! A BDD-backed implementation of [`DecisionDiagram`] would keep row and
//! column meta-variables on separate layers and juggle temporary variables
//! so the package can multiply `matrix` by its own column-permuted copy
//! without the two operands' variables colliding; working row-major over
//! [`DecisionDiagram::Row`] here, the kernel only needs the same four
//! algebraic steps that renaming dance is in service of.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::{info, trace};

use crate::dft::errors::SolverError;
use crate::solver::dd::DecisionDiagram;
use crate::solver::semiring::Semiring;

/// Solves `x = A*x + b` for `x`, returning one value per row.
///
/// `matrix` is `A`; `b` gives each row's constant term. Every row must have
/// self-loop mass strictly less than one (`DegenerateRow` otherwise) or the
/// per-iteration normalization below divides by zero.
pub fn solve<D, V>(matrix: &D, b: &HashMap<D::Row, V>) -> Result<HashMap<D::Row, V>, SolverError>
where
    D: DecisionDiagram<V>,
    D::Row: Eq + Hash + Copy + std::fmt::Debug,
    V: Semiring,
{
    let rows = matrix.rows();

    // `working` starts as `I - A` (the original's `diagonalAdd - A`): the
    // diagonal carries `1 - A_ii`, off-diagonal entries carry `-A_ij`.
    let mut working: HashMap<(D::Row, D::Row), V> = HashMap::new();
    for &row in &rows {
        for &col in &rows {
            let a = matrix.get(row, col);
            let diag = if row == col { V::one() } else { V::zero() };
            let value = diag.sub(&a);
            if !value.is_zero() {
                working.insert((row, col), value);
            }
        }
    }

    let mut solution: HashMap<D::Row, V> = rows
        .iter()
        .map(|&row| (row, b.get(&row).cloned().unwrap_or_else(V::zero)))
        .collect();

    let mut iterations = 0u64;
    loop {
        if working.is_empty() {
            break;
        }

        // Normalize every row by its inverse loop probability 1 / (1 - d_i).
        let mut inverse = HashMap::with_capacity(rows.len());
        for &row in &rows {
            let diagonal = working.get(&(row, row)).cloned().unwrap_or_else(V::zero);
            let denom = V::one().sub(&diagonal);
            let inv = denom.recip().ok_or_else(|| SolverError::DegenerateRow {
                row: format!("{row:?}"),
            })?;
            inverse.insert(row, inv);
        }

        let scaled: HashMap<(D::Row, D::Row), V> = working
            .iter()
            .map(|(&(r, c), v)| ((r, c), v.mul(&inverse[&r])))
            .collect();
        working = scaled;

        for row in &rows {
            let entry = solution.get_mut(row).expect("every row has a solution entry");
            *entry = entry.mul(&inverse[row]);
        }

        // Remove self-loops now that they have been normalized away.
        for &row in &rows {
            working.remove(&(row, row));
        }

        // Fold one step of back-substitution: solution_i += sum_j M_ij * solution_j.
        let mut delta: HashMap<D::Row, V> = HashMap::new();
        for (&(row, col), value) in working.iter() {
            let contribution = value.mul(&solution[&col]);
            delta
                .entry(row)
                .and_modify(|acc| *acc = acc.add(&contribution))
                .or_insert(contribution);
        }
        for (row, contribution) in delta {
            let entry = solution.get_mut(&row).expect("every row has a solution entry");
            *entry = entry.add(&contribution);
        }

        // Shortcut: square the remaining matrix, halving the path length
        // left to eliminate (`matrix.multiplyMatrix(matrix.permuted, ...)`).
        let mut squared: HashMap<(D::Row, D::Row), V> = HashMap::new();
        for (&(row, mid), left) in working.iter() {
            for (&(mid2, col), right) in working.iter() {
                if mid != mid2 {
                    continue;
                }
                let contribution = left.mul(right);
                if contribution.is_zero() {
                    continue;
                }
                squared
                    .entry((row, col))
                    .and_modify(|acc| *acc = acc.add(&contribution))
                    .or_insert(contribution);
            }
        }
        working = squared;

        iterations += 1;
        trace!(iterations, "completed elimination iteration");
    }

    info!(iterations, "elimination completed");
    Ok(solution)
}
