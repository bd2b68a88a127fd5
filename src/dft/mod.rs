//! Dynamic fault tree semantics and CTMC state-space generation.
//!
//! Parsing a DFT from its on-disk format and checking PCTL properties over
//! the generated CTMC are out of scope here; [`graph::DftBuilder`] is the
//! boundary a parser is expected to build against, and [`sink::ExplorationSink`]
//! is the boundary a model checker is expected to consume.

pub mod element;
pub mod errors;
pub mod generator;
pub mod graph;
pub mod independence;
pub mod queues;
pub mod semantics;
pub mod sink;
pub mod spare;
pub mod state;

pub use element::{Element, ElementId, ElementKind, GateKind, SpareSlot, Status, VotThreshold};
pub use errors::{ConstructionError, SolverError};
pub use generator::StateSpaceGenerator;
pub use graph::{Dft, DftBuilder, ElementDescriptor, ElementSpec, GateKindSpec};
pub use independence::independent_unit;
pub use queues::Queues;
pub use sink::{CtmcSink, ExplorationSink, StateIndex, StateLabel};
pub use state::{State, StateKey};
