//! Commonly used types, re-exported in one place for a host embedding this
//! crate (or this crate's own tests).

pub use crate::dft::{
    ConstructionError, CtmcSink, Dft, DftBuilder, Element, ElementDescriptor, ElementId,
    ElementKind, ElementSpec, ExplorationSink, GateKind, GateKindSpec, Queues, SolverError,
    SpareSlot, State, StateIndex, StateKey, StateLabel, StateSpaceGenerator, Status, VotThreshold,
    independent_unit,
};
pub use crate::solver::{
    DecisionDiagram, Semiring, SolverConfig, SolverKind, SolverWarning, SparseMatrix, select_solver,
    solve,
};
