use dft_ctmc::dft::{ConstructionError, DftBuilder, ElementDescriptor, GateKindSpec};

#[test]
fn rejects_duplicate_names() {
    let err = DftBuilder::new()
        .element(ElementDescriptor::be("a", 1.0, 0.0))
        .element(ElementDescriptor::be("a", 2.0, 0.0))
        .build("a")
        .unwrap_err();
    assert!(matches!(err, ConstructionError::DuplicateName(name) if name == "a"));
}

#[test]
fn rejects_unknown_child() {
    let err = DftBuilder::new()
        .element(ElementDescriptor::gate(
            "top",
            GateKindSpec::Or,
            ["missing"],
        ))
        .build("top")
        .unwrap_err();
    assert!(matches!(err, ConstructionError::UnknownChild { .. }));
}

#[test]
fn rejects_missing_top_event() {
    let err = DftBuilder::new()
        .element(ElementDescriptor::be("a", 1.0, 0.0))
        .build("nonexistent")
        .unwrap_err();
    assert!(matches!(err, ConstructionError::MissingTopEvent(name) if name == "nonexistent"));
}

#[test]
fn rejects_cycles() {
    let err = DftBuilder::new()
        .element(ElementDescriptor::gate("a", GateKindSpec::Or, ["b"]))
        .element(ElementDescriptor::gate("b", GateKindSpec::Or, ["a"]))
        .build("a")
        .unwrap_err();
    assert!(matches!(err, ConstructionError::Cycle { .. }));
}

#[test]
fn rejects_empty_gate() {
    let err = DftBuilder::new()
        .element(ElementDescriptor::gate(
            "top",
            GateKindSpec::And,
            Vec::<String>::new(),
        ))
        .build("top")
        .unwrap_err();
    assert!(matches!(err, ConstructionError::EmptyGate(name) if name == "top"));
}

#[test]
fn rejects_unsupported_gate_kinds() {
    for kind in [GateKindSpec::Fdep, GateKindSpec::Counting, GateKindSpec::Por] {
        let err = DftBuilder::new()
            .element(ElementDescriptor::be("a", 1.0, 0.0))
            .element(ElementDescriptor::gate("top", kind, ["a"]))
            .build("top")
            .unwrap_err();
        assert!(matches!(err, ConstructionError::UnsupportedGateKind { .. }));
    }
}
