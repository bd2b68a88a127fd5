//! Dynamic fault tree semantics, CTMC state-space generation, and a
//! symbolic Gauss-Jordan equation solver over decision-diagram-encoded
//! matrices.
//!
//! Parsing DFT files, dispatching PCTL model-checking queries, and driving
//! any of this from a CLI are all out of scope for this crate; [`dft`]
//! exposes the construction and exploration boundary a parser/checker is
//! expected to build against, and [`solver`] exposes the equation-solving
//! boundary a model checker is expected to call into.

pub mod dft;
pub mod prelude;
pub mod solver;
