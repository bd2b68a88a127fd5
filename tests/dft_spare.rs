use dft_ctmc::dft::{
    CtmcSink, DftBuilder, ElementDescriptor, ExplorationSink, GateKindSpec, StateLabel,
    StateSpaceGenerator,
};

#[test]
fn spare_claims_backup_when_primary_fails() {
    // primary and backup share one SPARE; primary active, backup passive
    // (cold) until claimed. top = the SPARE itself.
    let dft = DftBuilder::new()
        .element(ElementDescriptor::be("primary", 1.0, 0.0))
        .element(ElementDescriptor::be("backup", 1.0, 0.0))
        .element(ElementDescriptor::gate(
            "top",
            GateKindSpec::Spare,
            ["primary", "backup"],
        ))
        .build("top")
        .expect("well-formed SPARE tree builds");

    let mut sink = CtmcSink::default();
    StateSpaceGenerator::new(&dft).run(&mut sink);

    // The SPARE only fails once both primary and backup have failed, so at
    // least one non-absorbing intermediate state (primary failed, backup
    // claimed and still running) must be reachable before the absorbing one.
    let failed_count = sink
        .labels
        .iter()
        .filter(|&&l| l == Some(StateLabel::Failed))
        .count();
    assert_eq!(failed_count, 1);
    assert!(
        sink.labels.len() >= 3,
        "expected an intermediate state between initial and failure"
    );
}
