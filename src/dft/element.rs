//! Element identities, kinds, and statuses that make up a [`crate::dft::graph::Dft`].

use std::fmt;

/// Dense, zero-based identifier for an element in a [`crate::dft::graph::Dft`].
pub type ElementId = u32;

/// Index into a [`crate::dft::state::State::uses`] / `active` slot assigned to a SPARE gate.
pub type SpareSlot = u32;

/// Failure/failsafe/don't-care status of a single element within a [`crate::dft::state::State`].
///
/// Failed and Failsafe are absorbing; DontCare is absorbing and asserts that the
/// element's future behavior no longer matters to the top event. Status is monotone:
/// once an element leaves `Operational` it never returns to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Operational,
    Failed,
    Failsafe,
    DontCare,
}

impl Status {
    /// True for any of the three absorbing statuses.
    pub fn is_absorbing(self) -> bool {
        !matches!(self, Status::Operational)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Operational => "operational",
            Status::Failed => "failed",
            Status::Failsafe => "failsafe",
            Status::DontCare => "dontcare",
        };
        write!(f, "{s}")
    }
}

/// Threshold for a VOT(k) voting gate.
pub type VotThreshold = u32;

/// The kind of gate an element is, distinguishing the order-sensitive and
/// resource-claiming variants from the plain boolean ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateKind {
    And,
    Or,
    Vot(VotThreshold),
    /// Priority-AND: children must fail in listed order.
    Pand,
    /// Priority-OR: reserved, unsupported (see spec Open Questions).
    Por,
    /// Sequential-AND: an ordering violation invalidates the whole state.
    SeqAnd,
    /// Spare gate: child 0 is the primary, the rest are shared spares.
    Spare {
        use_index: SpareSlot,
        active_index: SpareSlot,
    },
    /// Out of scope: carried only so the tagged union matches the element kinds
    /// named in the data model; construction rejects it.
    Fdep,
    /// Out of scope: carried only so the tagged union matches the element kinds
    /// named in the data model; construction rejects it.
    Counting,
}

impl GateKind {
    pub fn name(self) -> &'static str {
        match self {
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Vot(_) => "VOT",
            GateKind::Pand => "PAND",
            GateKind::Por => "POR",
            GateKind::SeqAnd => "SEQAND",
            GateKind::Spare { .. } => "SPARE",
            GateKind::Fdep => "FDEP",
            GateKind::Counting => "COUNTING",
        }
    }

    /// Gate kinds with real failure semantics implemented in [`crate::dft::semantics`].
    pub fn is_supported(self) -> bool {
        !matches!(self, GateKind::Fdep | GateKind::Counting | GateKind::Por)
    }
}

/// The kind-specific payload of an [`Element`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementKind {
    /// A basic event: the only source of stochastic transitions.
    Be { active: f64, passive: f64 },
    /// A constant, either permanently failed or permanently operational.
    Const { failed: bool },
    /// A non-leaf element whose status is a function of its children.
    Gate(GateKind),
}

impl ElementKind {
    pub fn is_be(self) -> bool {
        matches!(self, ElementKind::Be { .. })
    }

    pub fn is_gate(self) -> bool {
        matches!(self, ElementKind::Gate(_))
    }

    pub fn as_gate(self) -> Option<GateKind> {
        match self {
            ElementKind::Gate(gate) => Some(gate),
            _ => None,
        }
    }
}

/// A basic event is "cold" when it cannot fail while held in reserve.
impl ElementKind {
    pub fn is_cold(self) -> bool {
        matches!(self, ElementKind::Be { passive, .. } if passive == 0.0)
    }
}

/// A single node in the DFT arena.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: ElementId,
    pub name: String,
    /// Topological depth, assigned once after construction (child < parent).
    pub rank: u32,
    pub parents: Vec<ElementId>,
    pub children: Vec<ElementId>,
    pub kind: ElementKind,
}

impl Element {
    pub fn is_spare(&self) -> bool {
        matches!(self.kind, ElementKind::Gate(GateKind::Spare { .. }))
    }
}
