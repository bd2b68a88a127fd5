use thiserror::Error;

/// Errors produced while validating and building a [`crate::dft::graph::Dft`].
///
/// Surfaced to the caller untouched; there is no recovery path for any of
/// these (spec §7).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// A gate referenced a child name that was never declared.
    #[error("element '{parent}' references unknown child '{child}'")]
    UnknownChild { parent: String, child: String },

    /// Two elements were declared under the same name.
    #[error("duplicate element name '{0}'")]
    DuplicateName(String),

    /// The designated top event name does not resolve to any declared element.
    #[error("top event '{0}' is not a declared element")]
    MissingTopEvent(String),

    /// The child graph contains a cycle reachable from `culprit`.
    #[error("cycle detected involving element '{culprit}'")]
    Cycle { culprit: String },

    /// FDEP, COUNTING, and POR gates have no implemented failure semantics.
    #[error("gate '{name}' uses unsupported kind {kind}")]
    UnsupportedGateKind { name: String, kind: &'static str },

    /// A gate was declared with zero children.
    #[error("gate '{0}' has no children")]
    EmptyGate(String),
}

/// Errors produced by the symbolic elimination solver (spec §7).
///
/// `UnsupportedSemiring` and `MalformedPairing` from spec.md's taxonomy are
/// not reproduced here: this crate's single `Elimination` backend is generic
/// over any `Semiring` impl by construction (so no semiring is ever rejected)
/// and `solve`/`select_solver` take a plain `HashMap`-keyed `b` rather than a
/// DD-encoded one with an explicit row/column meta-variable pairing (see
/// DESIGN.md), so there is no pairing to be malformed. See DESIGN.md's Open
/// Question decisions for the justification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// A row's self-loop mass was >= 1, which the elimination scaling step
    /// cannot normalize; the caller is expected to normalize first.
    #[error("row {row} has self-loop mass >= 1 and cannot be eliminated")]
    DegenerateRow { row: String },
}
