//! The decision-diagram boundary the elimination kernel is built against.
//!
//! The real solver encodes a CTMC's rate matrix as an MTBDD keyed by paired
//! row/column meta-variables (`storm::dd::Add`); building and manipulating
//! that encoding is out of scope here (spec §1's "external DD-encoder"
//! collaborator). [`DecisionDiagram`] is the seam such a package would
//! implement; [`SparseMatrix`] is a plain in-memory stand-in used by tests
//! and by callers that do not need symbolic sharing.

use std::collections::HashMap;
use std::hash::Hash;

use crate::solver::semiring::Semiring;

/// A square matrix over row/column indices `R`, encoded however the
/// implementor sees fit (symbolically shared nodes, a sparse map, a dense
/// array). The elimination kernel only ever touches it through this trait.
pub trait DecisionDiagram<V: Semiring>: Sized {
    type Row: Copy + Eq + Hash;

    /// All row indices with at least one entry, in iteration order.
    fn rows(&self) -> Vec<Self::Row>;

    /// The value at `(row, col)`, or `V::zero()` if absent.
    fn get(&self, row: Self::Row, col: Self::Row) -> V;

    /// Builds a new diagram of the same shape from an explicit entry list,
    /// dropping any entry equal to `V::zero()` (spec: a decision diagram
    /// never materializes explicit zero edges).
    fn from_entries(rows: &[Self::Row], entries: Vec<(Self::Row, Self::Row, V)>) -> Self;

    /// True iff every entry is zero (used as the elimination loop's
    /// termination test).
    fn is_zero(&self) -> bool;
}

/// A `HashMap`-backed [`DecisionDiagram`], dense enough for tests and small
/// instances; not symbolically shared, so it is not meant for production
/// state spaces (that is exactly the gap an MTBDD package fills).
#[derive(Debug, Clone)]
pub struct SparseMatrix<R, V> {
    rows: Vec<R>,
    entries: HashMap<(R, R), V>,
}

impl<R: Copy + Eq + Hash, V: Semiring> SparseMatrix<R, V> {
    pub fn new(rows: Vec<R>) -> Self {
        Self {
            rows,
            entries: HashMap::new(),
        }
    }

    pub fn set(&mut self, row: R, col: R, value: V) {
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&(R, R), &V)> {
        self.entries.iter()
    }
}

impl<R: Copy + Eq + Hash, V: Semiring> DecisionDiagram<V> for SparseMatrix<R, V> {
    type Row = R;

    fn rows(&self) -> Vec<Self::Row> {
        self.rows.clone()
    }

    fn get(&self, row: Self::Row, col: Self::Row) -> V {
        self.entries
            .get(&(row, col))
            .cloned()
            .unwrap_or_else(V::zero)
    }

    fn from_entries(rows: &[Self::Row], entries: Vec<(Self::Row, Self::Row, V)>) -> Self {
        let mut matrix = Self::new(rows.to_vec());
        for (row, col, value) in entries {
            matrix.set(row, col, value);
        }
        matrix
    }

    fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }
}
