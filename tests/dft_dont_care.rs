use dft_ctmc::dft::{semantics, DftBuilder, ElementDescriptor, GateKindSpec, Queues, State, Status};

/// top = AND(pand_gate, c), pand_gate = PAND(a, b). Failing `b` before `a`
/// is a PAND ordering violation: `pand_gate` goes failsafe, which in turn
/// makes the AND `top` go failsafe too (an AND goes failsafe the moment any
/// child does). Once `top` is failsafe, nothing under it can change its
/// fate, so `pand_gate`, `a`, `b`, and `c` should all settle to don't-care.
#[test]
fn failsafe_propagation_marks_the_whole_subtree_dont_care() {
    let dft = DftBuilder::new()
        .element(ElementDescriptor::be("a", 1.0, 0.0))
        .element(ElementDescriptor::be("b", 1.0, 0.0))
        .element(ElementDescriptor::be("c", 1.0, 0.0))
        .element(ElementDescriptor::gate(
            "pand_gate",
            GateKindSpec::Pand,
            ["a", "b"],
        ))
        .element(ElementDescriptor::gate(
            "top",
            GateKindSpec::And,
            ["pand_gate", "c"],
        ))
        .build("top")
        .expect("well-formed AND-of-PAND tree builds");

    let a = dft.elements().iter().find(|e| e.name == "a").unwrap().id;
    let b = dft.elements().iter().find(|e| e.name == "b").unwrap().id;
    let c = dft.elements().iter().find(|e| e.name == "c").unwrap().id;
    let pand_gate = dft
        .elements()
        .iter()
        .find(|e| e.name == "pand_gate")
        .unwrap()
        .id;
    let top = dft.top();

    let mut state = State::initial(&dft);
    let mut queues = Queues::new();

    // b fails before a: an ordering violation for pand_gate.
    state.set_status(b, Status::Failed);
    queues.push_fail(pand_gate);
    drain_to_fixed_point(&dft, &mut state, &mut queues);

    // top and pand_gate reached their own absorbing status directly (an
    // element keeps whatever absorbing status it settled on); only the
    // still-operational elements left behind (a, never touched, and c, on
    // the other AND branch) get reclassified as don't-care.
    assert_eq!(state.status(top), Status::Failsafe);
    assert_eq!(state.status(pand_gate), Status::Failsafe);
    assert_eq!(state.status(a), Status::DontCare);
    assert_eq!(state.status(c), Status::DontCare);
}

fn drain_to_fixed_point(dft: &dft_ctmc::dft::Dft, state: &mut State, queues: &mut Queues) {
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
