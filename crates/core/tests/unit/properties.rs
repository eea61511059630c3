//! # Property Tests
//!
//! Randomized acyclic netlists are checked against a straight-line reference
//! evaluation, independent of the order the gates were registered in.

use gatesim_core::{Circuit, Convergence, GateKind};
use proptest::prelude::*;
use proptest::sample::Index;

use crate::common::CircuitBuilder;

const KINDS: [GateKind; 8] = [
    GateKind::And,
    GateKind::Or,
    GateKind::Xor,
    GateKind::Xnor,
    GateKind::Nand,
    GateKind::Nor,
    GateKind::Not,
    GateKind::Output,
];

/// A gate reading two signals chosen among those defined before it.
type Node = (GateKind, Index, Index);

fn node() -> impl Strategy<Value = Node> {
    (prop::sample::select(KINDS.to_vec()), any::<Index>(), any::<Index>())
}

fn apply(kind: GateKind, a: bool, b: bool) -> bool {
    match kind {
        GateKind::And => a && b,
        GateKind::Or => a || b,
        GateKind::Xor => a ^ b,
        GateKind::Xnor => a == b,
        GateKind::Nand => !(a && b),
        GateKind::Nor => !(a || b),
        GateKind::Not => !a,
        _ => a,
    }
}

fn signal(i: usize, inputs: usize) -> String {
    if i < inputs {
        format!("I{i}")
    } else {
        format!("G{}", i - inputs)
    }
}

/// Values of every input followed by every node, computed in declaration order.
fn reference(inputs: usize, pattern: u32, nodes: &[Node]) -> Vec<bool> {
    let mut values: Vec<bool> = (0..inputs).map(|i| (pattern >> i) & 1 == 1).collect();
    for (kind, a, b) in nodes {
        let a = values[a.index(values.len())];
        let b = values[b.index(values.len())];
        values.push(apply(*kind, a, b));
    }
    values
}

fn circuit(inputs: usize, nodes: &[Node], reversed: bool) -> Circuit {
    let mut builder = CircuitBuilder::new();
    for i in 0..inputs {
        builder = builder.input(&signal(i, inputs), false);
    }

    let mut gates: Vec<(String, GateKind, Vec<String>)> = nodes
        .iter()
        .enumerate()
        .map(|(j, (kind, a, b))| {
            let available = inputs + j;
            let mut refs = vec![signal(a.index(available), inputs)];
            if kind.max_inputs() == 2 {
                refs.push(signal(b.index(available), inputs));
            }
            (signal(inputs + j, inputs), *kind, refs)
        })
        .collect();
    if reversed {
        gates.reverse();
    }
    for (id, kind, refs) in &gates {
        let refs: Vec<&str> = refs.iter().map(String::as_str).collect();
        builder = builder.gate(id, *kind, &refs);
    }
    builder.build()
}

fn values(circuit: &Circuit, inputs: usize, nodes: usize) -> Vec<bool> {
    (0..inputs + nodes)
        .map(|i| circuit.output(&signal(i, inputs)).unwrap())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_acyclic_evaluation_matches_reference(
        inputs in 1usize..5,
        nodes in prop::collection::vec(node(), 1..24),
        pattern: u32,
        reversed: bool,
    ) {
        let pattern = pattern & ((1 << inputs) - 1);
        let mut circuit = circuit(inputs, &nodes, reversed);
        prop_assert!(!circuit.is_cyclic().unwrap());

        circuit.set_inputs(pattern).unwrap();
        let outcome = circuit.evaluate().unwrap();
        prop_assert_eq!(outcome, Convergence::Converged { passes: 1 });
        let first = values(&circuit, inputs, nodes.len());
        prop_assert_eq!(&first, &reference(inputs, pattern, &nodes));

        let again = circuit.evaluate().unwrap();
        prop_assert_eq!(again, Convergence::Converged { passes: 1 });
        prop_assert_eq!(values(&circuit, inputs, nodes.len()), first);
    }

    #[test]
    fn prop_set_inputs_reads_back_pattern(inputs in 0usize..=32, pattern: u32) {
        let mut circuit = circuit(inputs, &[], false);
        circuit.set_inputs(pattern).unwrap();
        for i in 0..inputs {
            prop_assert_eq!(
                circuit.output(&signal(i, inputs)).unwrap(),
                (pattern >> i) & 1 == 1
            );
        }
    }
}
