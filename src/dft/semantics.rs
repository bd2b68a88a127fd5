//! The three semantic hooks every gate kind reacts through: `check_fails`,
//! `check_failsafe`, and the shared don't-care propagation. Implemented as a
//! match over [`GateKind`] rather than one type per gate kind, since the
//! per-kind logic is a handful of lines each and a shared `fail`/`failsafe`
//! helper pair covers the common part.

use crate::dft::element::{ElementId, ElementKind, GateKind, Status};
use crate::dft::graph::Dft;
use crate::dft::queues::Queues;
use crate::dft::spare;
use crate::dft::state::State;

/// Dispatches the `checkFails` hook for `id`, invoked when one of its
/// children has just transitioned to [`Status::Failed`].
pub fn check_fails(dft: &Dft, state: &mut State, queues: &mut Queues, id: ElementId) {
    let gate = match dft.element(id).kind {
        ElementKind::Gate(gate) => gate,
        _ => unreachable!("check_fails only applies to gates"),
    };
    match gate {
        GateKind::And => and_fails(dft, state, queues, id),
        GateKind::Or => or_fails(dft, state, queues, id),
        GateKind::Vot(k) => vot_fails(dft, state, queues, id, k),
        GateKind::Pand => pand_fails(dft, state, queues, id),
        GateKind::SeqAnd => seqand_fails(dft, state, queues, id),
        GateKind::Spare { .. } => spare::check_fails(dft, state, queues, id),
        GateKind::Por => unimplemented!("POR has no implemented failure semantics"),
        GateKind::Fdep | GateKind::Counting => {
            unreachable!("FDEP/COUNTING gates are rejected at construction")
        }
    }
}

/// Dispatches the `checkFailsafe` hook for `id`, invoked when one of its
/// children has just transitioned to [`Status::Failsafe`].
pub fn check_failsafe(dft: &Dft, state: &mut State, queues: &mut Queues, id: ElementId) {
    let gate = match dft.element(id).kind {
        ElementKind::Gate(gate) => gate,
        _ => unreachable!("check_failsafe only applies to gates"),
    };
    match gate {
        GateKind::And | GateKind::Pand => and_or_pand_failsafe(dft, state, queues, id),
        GateKind::Or => or_failsafe(dft, state, queues, id),
        GateKind::Vot(k) => vot_failsafe(dft, state, queues, id, k),
        GateKind::SeqAnd => seqand_failsafe(dft, state, queues, id),
        GateKind::Spare { .. } => spare::check_failsafe(dft, state, queues, id),
        GateKind::Por => unimplemented!("POR has no implemented failure semantics"),
        GateKind::Fdep | GateKind::Counting => {
            unreachable!("FDEP/COUNTING gates are rejected at construction")
        }
    }
}

/// Dispatches the don't-care hook: applies uniformly to BEs and gates, so it
/// is not itself a per-kind match (spec §4.1).
///
/// Returns whether `id` was actually marked don't-care.
pub fn check_dont_care_anymore(dft: &Dft, state: &mut State, queues: &mut Queues, id: ElementId) -> bool {
    if !state.is_operational(id) {
        return false;
    }
    let all_parents_absorbing = dft
        .element(id)
        .parents
        .iter()
        .all(|&parent| state.status(parent).is_absorbing());
    if !all_parents_absorbing {
        return false;
    }
    state.set_status(id, Status::DontCare);
    if dft.element(id).kind.is_gate() {
        children_dont_care(dft, queues, id);
    }
    true
}

pub(crate) fn fail(dft: &Dft, state: &mut State, queues: &mut Queues, id: ElementId) {
    for &parent in &dft.element(id).parents {
        if state.is_operational(parent) {
            queues.push_fail(parent);
        }
    }
    state.set_status(id, Status::Failed);
}

pub(crate) fn failsafe(dft: &Dft, state: &mut State, queues: &mut Queues, id: ElementId) {
    for &parent in &dft.element(id).parents {
        if state.is_operational(parent) {
            queues.push_failsafe(parent);
        }
    }
    state.set_status(id, Status::Failsafe);
}

pub(crate) fn children_dont_care(dft: &Dft, queues: &mut Queues, id: ElementId) {
    for &child in &dft.element(id).children {
        queues.push_dont_care(child);
    }
}

fn has_failed_child(dft: &Dft, state: &State, id: ElementId) -> bool {
    dft.element(id).children.iter().any(|&c| state.has_failed(c))
}

fn and_fails(dft: &Dft, state: &mut State, queues: &mut Queues, id: ElementId) {
    if !state.is_operational(id) {
        return;
    }
    if dft.element(id).children.iter().all(|&c| state.has_failed(c)) {
        fail(dft, state, queues, id);
    }
}

fn or_fails(dft: &Dft, state: &mut State, queues: &mut Queues, id: ElementId) {
    debug_assert!(has_failed_child(dft, state, id));
    if state.is_operational(id) {
        fail(dft, state, queues, id);
    }
}

fn vot_fails(dft: &Dft, state: &mut State, queues: &mut Queues, id: ElementId, k: u32) {
    if !state.is_operational(id) {
        return;
    }
    let failed = dft
        .element(id)
        .children
        .iter()
        .filter(|&&c| state.has_failed(c))
        .count() as u32;
    if failed >= k {
        fail(dft, state, queues, id);
    }
}

/// Shared scan used by both PAND (failsafe on violation) and SEQAND (invalid
/// on violation): walk children in order, noting when an operational child
/// has been seen, and react the moment a later child fails while an earlier
/// one has not yet failed.
fn scan_ordered_children(dft: &Dft, state: &State, id: ElementId) -> OrderScan {
    let mut seen_operational = false;
    for &child in &dft.element(id).children {
        if !state.has_failed(child) {
            seen_operational = true;
        } else if seen_operational {
            return OrderScan::Violation;
        }
    }
    if seen_operational {
        OrderScan::Incomplete
    } else {
        OrderScan::AllFailedInOrder
    }
}

enum OrderScan {
    /// A later child failed while an earlier one had not yet failed.
    Violation,
    /// All children observed so far failed in order, but at least one
    /// remains operational.
    Incomplete,
    /// Every child has failed, strictly in listed order.
    AllFailedInOrder,
}

fn pand_fails(dft: &Dft, state: &mut State, queues: &mut Queues, id: ElementId) {
    if !state.is_operational(id) {
        return;
    }
    match scan_ordered_children(dft, state, id) {
        OrderScan::Violation => {
            failsafe(dft, state, queues, id);
            children_dont_care(dft, queues, id);
        }
        OrderScan::AllFailedInOrder => fail(dft, state, queues, id),
        OrderScan::Incomplete => {}
    }
}

fn seqand_fails(dft: &Dft, state: &mut State, queues: &mut Queues, id: ElementId) {
    if !state.is_operational(id) {
        return;
    }
    match scan_ordered_children(dft, state, id) {
        OrderScan::Violation => state.mark_invalid(),
        OrderScan::AllFailedInOrder => fail(dft, state, queues, id),
        OrderScan::Incomplete => {}
    }
}

fn and_or_pand_failsafe(dft: &Dft, state: &mut State, queues: &mut Queues, id: ElementId) {
    if state.is_operational(id) {
        failsafe(dft, state, queues, id);
        children_dont_care(dft, queues, id);
    }
}

fn or_failsafe(dft: &Dft, state: &mut State, queues: &mut Queues, id: ElementId) {
    if !state.is_operational(id) {
        return;
    }
    let all_failsafe = dft.element(id).children.iter().all(|&c| state.is_failsafe(c));
    if all_failsafe {
        failsafe(dft, state, queues, id);
    }
}

fn vot_failsafe(dft: &Dft, state: &mut State, queues: &mut Queues, id: ElementId, k: u32) {
    if !state.is_operational(id) {
        return;
    }
    let n = dft.element(id).children.len() as u32;
    let failsafe_count = dft
        .element(id)
        .children
        .iter()
        .filter(|&&c| state.is_failsafe(c))
        .count() as u32;
    if failsafe_count >= n - k + 1 {
        failsafe(dft, state, queues, id);
        children_dont_care(dft, queues, id);
    }
}

fn seqand_failsafe(dft: &Dft, state: &mut State, queues: &mut Queues, id: ElementId) {
    if state.is_operational(id) {
        failsafe(dft, state, queues, id);
    }
}
