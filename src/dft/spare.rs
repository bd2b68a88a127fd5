//! The SPARE claim protocol and activation bookkeeping.

use crate::dft::element::{ElementId, GateKind, SpareSlot};
use crate::dft::graph::Dft;
use crate::dft::queues::Queues;
use crate::dft::semantics;
use crate::dft::state::State;

fn slots(dft: &Dft, spare_id: ElementId) -> (SpareSlot, SpareSlot) {
    match dft.element(spare_id).kind {
        crate::dft::element::ElementKind::Gate(GateKind::Spare {
            use_index,
            active_index,
        }) => (use_index, active_index),
        _ => unreachable!("slots() only applies to SPARE gates"),
    }
}

/// `checkFails` for a SPARE: if the currently-used child is no longer
/// operational, attempt to claim the next unclaimed, non-failed spare child
/// in order; fail the gate itself if no candidate is claimable.
pub fn check_fails(dft: &Dft, state: &mut State, queues: &mut Queues, id: ElementId) {
    if !state.is_operational(id) {
        return;
    }
    let (use_index, _) = slots(dft, id);
    let current = state.uses(use_index);
    if state.is_operational(current) {
        return;
    }

    if claim_next(dft, state, id, use_index, current) {
        propagate_activation(dft, state);
    } else {
        semantics::fail(dft, state, queues, id);
    }
}

/// `checkFailsafe` for a SPARE: failsafe iff the currently-used child is
/// failsafe, then mark every child don't-care.
pub fn check_failsafe(dft: &Dft, state: &mut State, queues: &mut Queues, id: ElementId) {
    if !state.is_operational(id) {
        return;
    }
    let (use_index, _) = slots(dft, id);
    let current = state.uses(use_index);
    if state.is_failsafe(current) {
        semantics::failsafe(dft, state, queues, id);
        semantics::children_dont_care(dft, queues, id);
    }
}

/// Attempts to claim the next eligible child after `current` in `spare_id`'s
/// child list. Atomic: either exactly one child is claimed (the `uses` slot
/// is written once) or nothing changes (spec §4.2: "the state never ends up
/// with a transient partial claim").
fn claim_next(
    dft: &Dft,
    state: &mut State,
    spare_id: ElementId,
    use_index: SpareSlot,
    current: ElementId,
) -> bool {
    let children = &dft.element(spare_id).children;
    let position = children.iter().position(|&c| c == current);
    let candidates = match position {
        Some(pos) => &children[pos + 1..],
        None => &children[..],
    };

    for &candidate in candidates {
        if state.has_failed(candidate) {
            continue;
        }
        let claimed_elsewhere = dft.spare_ids().iter().any(|&other| {
            if other == spare_id {
                return false;
            }
            let (other_use_index, _) = slots(dft, other);
            state.uses(other_use_index) == candidate
        });
        if !claimed_elsewhere {
            state.set_uses(use_index, candidate);
            return true;
        }
    }
    false
}

/// Recomputes every SPARE's active/passive flag from scratch as a pure
/// function of the current `uses` mapping (spec §9's conservative
/// interpretation: activation propagates transitively through unused nested
/// SPAREs). A SPARE with no SPARE ancestor is always active (it belongs to
/// a running part of the system); a SPARE that is itself a spare child is
/// active only while its owning SPARE is active and currently uses it.
pub fn propagate_activation(dft: &Dft, state: &mut State) {
    for &spare_id in dft.spare_ids() {
        let (_, active_index) = slots(dft, spare_id);
        let spare_parents: Vec<ElementId> = dft
            .element(spare_id)
            .parents
            .iter()
            .copied()
            .filter(|&p| dft.element(p).is_spare())
            .collect();

        let active = if spare_parents.is_empty() {
            true
        } else {
            spare_parents.iter().any(|&parent| {
                let (parent_use_index, parent_active_index) = slots(dft, parent);
                state.is_active(parent_active_index) && state.uses(parent_use_index) == spare_id
            })
        };
        state.set_active(active_index, active);
    }
}

/// The rate a basic event fails at in `state`: its active rate unless it is
/// currently held in reserve by an inactive SPARE, in which case its passive
/// rate applies. A BE not owned by any SPARE always uses its active rate.
pub fn basic_event_rate(dft: &Dft, state: &State, be_id: ElementId) -> f64 {
    let (active, passive) = match dft.element(be_id).kind {
        crate::dft::element::ElementKind::Be { active, passive } => (active, passive),
        _ => unreachable!("basic_event_rate only applies to basic events"),
    };

    let owners: Vec<ElementId> = dft
        .element(be_id)
        .parents
        .iter()
        .copied()
        .filter(|&p| dft.element(p).is_spare())
        .collect();
    if owners.is_empty() {
        return active;
    }

    let in_use_and_active = owners.iter().any(|&owner| {
        let (use_index, active_index) = slots(dft, owner);
        state.uses(use_index) == be_id && state.is_active(active_index)
    });
    if in_use_and_active {
        active
    } else {
        passive
    }
}
