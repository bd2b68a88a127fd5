//! Worklist-driven CTMC state-space generation.
//!
//! A canonical-state table (`IndexMap<StateKey, StateIndex>`) paired with a
//! `VecDeque` worklist of states still to expand, the same shape as a
//! subset-construction determinizer except each "symbol" advancing a state
//! is a basic event failing rather than an input character.

use std::collections::VecDeque;

use indexmap::IndexMap;
use tracing::debug;

use crate::dft::element::{ElementId, Status};
use crate::dft::queues::Queues;
use crate::dft::semantics;
use crate::dft::sink::{ExplorationSink, StateIndex, StateLabel};
use crate::dft::spare;
use crate::dft::state::{State, StateKey};
use crate::dft::graph::Dft;

/// Explores the full reachable CTMC of `dft`, reporting it to `sink`.
pub struct StateSpaceGenerator<'a> {
    dft: &'a Dft,
    table: IndexMap<StateKey, StateIndex>,
    worklist: VecDeque<StateIndex>,
    states: Vec<State>,
}

impl<'a> StateSpaceGenerator<'a> {
    pub fn new(dft: &'a Dft) -> Self {
        Self {
            dft,
            table: IndexMap::new(),
            worklist: VecDeque::new(),
            states: Vec::new(),
        }
    }

    /// Runs exploration to completion, feeding every discovered state and
    /// transition to `sink` in discovery order.
    pub fn run(mut self, sink: &mut impl ExplorationSink) {
        sink.begin_exploration(self.dft.be_ids().len());

        let initial = State::initial(self.dft);
        let initial_index = self.intern(initial);
        sink.mark_initial(initial_index);

        while let Some(index) = self.worklist.pop_front() {
            self.expand(index, sink);
        }

        sink.end_exploration(self.states.len());
    }

    /// Inserts `state` into the canonical table if new, returning its index
    /// either way; newly-seen states are queued for expansion.
    fn intern(&mut self, state: State) -> StateIndex {
        let key = state.key();
        if let Some(&index) = self.table.get(&key) {
            return index;
        }
        let index = self.states.len() as StateIndex;
        self.table.insert(key, index);
        self.states.push(state);
        self.worklist.push_back(index);
        debug!(index, "discovered new state");
        index
    }

    fn expand(&mut self, index: StateIndex, sink: &mut impl ExplorationSink) {
        let top = self.dft.top();
        sink.add_state(index);
        match self.states[index as usize].status(top) {
            Status::Failed => sink.mark_label(index, StateLabel::Failed),
            Status::Failsafe => sink.mark_label(index, StateLabel::Failsafe),
            _ => {}
        }

        if self.states[index as usize].status(top).is_absorbing() {
            return;
        }

        // Target state index -> (accumulated rate, the first basic event that
        // was observed to reach it). Several basic events can lead to the
        // same successor (spec §4.3: "transitions to the same target state
        // accumulate"); the witness cause is kept only for diagnostics.
        let mut merged: IndexMap<StateIndex, (f64, ElementId)> = IndexMap::new();
        for &be_id in self.dft.be_ids() {
            let base = &self.states[index as usize];
            if !base.is_operational(be_id) {
                continue;
            }
            let rate = spare::basic_event_rate(self.dft, base, be_id);
            if rate <= 0.0 {
                continue;
            }

            let mut next = base.clone();
            let mut queues = Queues::new();
            fail_basic_event(self.dft, &mut next, &mut queues, be_id);
            settle(self.dft, &mut next, &mut queues);

            if next.is_invalid() {
                debug!(cause = be_id, "discarding invalid successor (ordering violation)");
                continue;
            }

            let to = self.intern(next);
            merged
                .entry(to)
                .and_modify(|(acc, _)| *acc += rate)
                .or_insert((rate, be_id));
        }

        for (to, (rate, cause)) in merged {
            sink.add_transition(index, to, rate, cause);
        }
    }
}

/// Settles the propagation fixed point for a single basic event failure: the
/// three FIFOs drain in strict order (fail, then failsafe, then don't-care)
/// and are re-checked from the top until every queue is empty, since
/// draining one queue can enqueue work onto an earlier one (spec §4.3).
fn settle(dft: &Dft, state: &mut State, queues: &mut Queues) {
    loop {
        let mut progressed = false;
        while let Some(id) = queues.pop_fail() {
            semantics::check_fails(dft, state, queues, id);
            progressed = true;
        }
        while let Some(id) = queues.pop_failsafe() {
            semantics::check_failsafe(dft, state, queues, id);
            progressed = true;
        }
        while let Some(id) = queues.pop_dont_care() {
            semantics::check_dont_care_anymore(dft, state, queues, id);
            progressed = true;
        }
        if !progressed {
            break;
        }
    }
}

fn fail_basic_event(dft: &Dft, state: &mut State, queues: &mut Queues, be_id: ElementId) {
    state.set_status(be_id, Status::Failed);
    for &parent in &dft.element(be_id).parents {
        if state.is_operational(parent) {
            queues.push_fail(parent);
        }
    }
}
