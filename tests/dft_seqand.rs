use dft_ctmc::dft::{
    CtmcSink, DftBuilder, ElementDescriptor, ExplorationSink, GateKindSpec, StateLabel,
    StateSpaceGenerator,
};

#[test]
fn out_of_order_failure_is_discarded_as_invalid() {
    let dft = DftBuilder::new()
        .element(ElementDescriptor::be("a", 1.0, 0.0))
        .element(ElementDescriptor::be("b", 1.0, 0.0))
        .element(ElementDescriptor::gate(
            "top",
            GateKindSpec::SeqAnd,
            ["a", "b"],
        ))
        .build("top")
        .expect("well-formed SEQAND tree builds");

    let mut sink = CtmcSink::default();
    StateSpaceGenerator::new(&dft).run(&mut sink);

    // b failing before a produces an invalid state that the generator
    // discards outright rather than reporting it to the sink: the only path
    // to top failing is the in-order one (a then b).
    let failed_count = sink
        .labels
        .iter()
        .filter(|&&l| l == Some(StateLabel::Failed))
        .count();
    assert_eq!(failed_count, 1);
}
