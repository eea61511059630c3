//! # Gate Kind Tests
//!
//! Arity limits, role predicates and netlist tags for every gate kind.

use gatesim_core::circuit::Gate;
use gatesim_core::GateKind;
use rstest::rstest;

#[rstest]
#[case(GateKind::Input, 0)]
#[case(GateKind::Clock, 0)]
#[case(GateKind::Output, 1)]
#[case(GateKind::Not, 1)]
#[case(GateKind::Dff, 1)]
#[case(GateKind::Dffn, 1)]
#[case(GateKind::Tff, 1)]
#[case(GateKind::And, 2)]
#[case(GateKind::Xnor, 2)]
#[case(GateKind::DLatch, 2)]
#[case(GateKind::Jkff, 2)]
fn max_inputs_per_kind(#[case] kind: GateKind, #[case] arity: usize) {
    assert_eq!(kind.max_inputs(), arity);
}

#[test]
fn sequential_kinds() {
    let sequential: Vec<GateKind> = GateKind::ALL
        .into_iter()
        .filter(|k| k.is_sequential())
        .collect();
    assert_eq!(
        sequential,
        vec![
            GateKind::Dff,
            GateKind::Dffn,
            GateKind::DLatch,
            GateKind::Tff,
            GateKind::Jkff
        ]
    );
}

#[test]
fn latch_is_evaluated_but_not_edge_triggered() {
    assert!(GateKind::DLatch.is_evaluated());
    assert!(!GateKind::DLatch.is_edge_triggered());
    for kind in [GateKind::Dff, GateKind::Dffn, GateKind::Tff, GateKind::Jkff] {
        assert!(kind.is_edge_triggered());
        assert!(!kind.is_evaluated());
    }
    assert!(!GateKind::Input.is_evaluated());
    assert!(!GateKind::Clock.is_evaluated());
    assert!(GateKind::Output.is_evaluated());
}

#[test]
fn tags_match_serde_names() {
    for kind in GateKind::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{kind}\""));
    }
}

#[test]
fn latch_accepts_underscore_alias() {
    let kind: GateKind = serde_json::from_str("\"D_LATCH\"").unwrap();
    assert_eq!(kind, GateKind::DLatch);
}

#[test]
fn new_gate_stages_its_initial_output() {
    let gate = Gate::new("Q", GateKind::Dff, vec!["D".into()], true);
    assert!(gate.output);
    assert!(gate.pending_next_state);
    assert!(!gate.prev_clock_sample);
    assert!(gate.initial_output);
}
