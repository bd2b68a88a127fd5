use dft_ctmc::dft::{
    CtmcSink, DftBuilder, ElementDescriptor, ExplorationSink, GateKindSpec, StateLabel,
    StateSpaceGenerator,
};

fn build_and_of_two_bes() -> dft_ctmc::dft::Dft {
    DftBuilder::new()
        .element(ElementDescriptor::be("a", 1.0, 0.0))
        .element(ElementDescriptor::be("b", 2.0, 0.0))
        .element(ElementDescriptor::gate(
            "top",
            GateKindSpec::And,
            ["a", "b"],
        ))
        .build("top")
        .expect("well-formed AND tree builds")
}

#[test]
fn top_fails_only_once_both_children_have_failed() {
    let dft = build_and_of_two_bes();
    let mut sink = CtmcSink::default();
    StateSpaceGenerator::new(&dft).run(&mut sink);

    // Initial state, a-fails-first, b-fails-first, both-failed: four states total.
    assert_eq!(sink.labels.len(), 4);
    let failed_count = sink
        .labels
        .iter()
        .filter(|&&l| l == Some(StateLabel::Failed))
        .count();
    assert_eq!(failed_count, 1);
}

#[test]
fn initial_state_has_both_outgoing_rates() {
    let dft = build_and_of_two_bes();
    let mut sink = CtmcSink::default();
    StateSpaceGenerator::new(&dft).run(&mut sink);

    let outgoing = &sink.transitions[sink.initial as usize];
    assert_eq!(outgoing.len(), 2);
    let total_rate: f64 = outgoing.iter().map(|&(_, rate, _)| rate).sum();
    assert!((total_rate - 3.0).abs() < 1e-9);
}
