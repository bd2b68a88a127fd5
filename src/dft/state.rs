//! The state representation explored by [`crate::dft::generator::StateSpaceGenerator`].

use crate::dft::element::{ElementId, SpareSlot, Status};
use crate::dft::graph::Dft;

/// A state: the status of every element, the currently-used child of every
/// SPARE, and a dirty flag marking an impossible (SEQAND) ordering.
///
/// Two states are identical iff their status vector and uses vector are
/// identical (spec §3) — the `invalid` flag is not part of that identity
/// since an invalid state is always discarded before it would be compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    statuses: Vec<Status>,
    /// Indexed by a SPARE's `use_index` slot: the id of its current child.
    uses: Vec<ElementId>,
    /// Indexed by a SPARE's `active_index` slot: whether that SPARE is
    /// currently active (on the failure path from a running primary) rather
    /// than held in reserve.
    active: Vec<bool>,
    invalid: bool,
}

impl State {
    /// The initial state: every element Operational, every SPARE's
    /// `use_index` pointing at its primary (child 0).
    pub fn initial(dft: &Dft) -> Self {
        let mut uses = vec![0; dft.spare_slot_count() as usize];
        let mut active = vec![false; dft.spare_slot_count() as usize];
        for element in dft.elements() {
            if let crate::dft::element::ElementKind::Gate(
                crate::dft::element::GateKind::Spare {
                    use_index,
                    active_index,
                },
            ) = element.kind
            {
                let primary = element.children[0];
                uses[use_index as usize] = primary;
                active[active_index as usize] = true;
            }
        }
        Self {
            statuses: vec![Status::Operational; dft.len()],
            uses,
            active,
            invalid: false,
        }
    }

    pub fn status(&self, id: ElementId) -> Status {
        self.statuses[id as usize]
    }

    pub fn set_status(&mut self, id: ElementId, status: Status) {
        self.statuses[id as usize] = status;
    }

    pub fn is_operational(&self, id: ElementId) -> bool {
        self.status(id) == Status::Operational
    }

    pub fn has_failed(&self, id: ElementId) -> bool {
        self.status(id) == Status::Failed
    }

    pub fn is_failsafe(&self, id: ElementId) -> bool {
        self.status(id) == Status::Failsafe
    }

    pub fn is_dont_care(&self, id: ElementId) -> bool {
        self.status(id) == Status::DontCare
    }

    pub fn uses(&self, slot: SpareSlot) -> ElementId {
        self.uses[slot as usize]
    }

    pub fn set_uses(&mut self, slot: SpareSlot, child: ElementId) {
        self.uses[slot as usize] = child;
    }

    pub fn is_active(&self, slot: SpareSlot) -> bool {
        self.active[slot as usize]
    }

    pub fn set_active(&mut self, slot: SpareSlot, active: bool) {
        self.active[slot as usize] = active;
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn mark_invalid(&mut self) {
        self.invalid = true;
    }

    /// The canonical identity of this state, used as the key in the
    /// generator's state table (spec §3: "two states are identical iff
    /// their status bits and uses slots are identical").
    pub fn key(&self) -> StateKey {
        StateKey {
            statuses: self.statuses.clone(),
            uses: self.uses.clone(),
        }
    }
}

/// The hashable, `invalid`-independent identity of a [`State`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey {
    statuses: Vec<Status>,
    uses: Vec<ElementId>,
}
