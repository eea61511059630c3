//! # Topology Tests
//!
//! Adjacency, in-degrees, Kahn ordering, the cyclic flag and the depth-first cycle check.

use gatesim_core::{GateKind, SimError};

use crate::common::CircuitBuilder;

fn rank(order: &[usize], pos: usize) -> usize {
    order.iter().position(|&p| p == pos).unwrap()
}

#[test]
fn acyclic_order_respects_every_edge() {
    // Declared out of dependency order on purpose.
    let circuit = CircuitBuilder::new()
        .gate("Y", GateKind::Output, &["X"])
        .gate("X", GateKind::Xor, &["G", "C"])
        .gate("G", GateKind::And, &["A", "B"])
        .input("A", false)
        .input("B", false)
        .input("C", false)
        .build();

    let topology = circuit.topology().unwrap();
    assert!(!topology.cyclic);
    assert_eq!(topology.sorted_len, circuit.len());
    assert_eq!(topology.order.len(), circuit.len());
    for (dependent, fanin) in topology.fanin.iter().enumerate() {
        for &src in fanin {
            assert!(rank(&topology.order, src) < rank(&topology.order, dependent));
        }
    }
    assert!(!circuit.is_cyclic().unwrap());
    assert!(!circuit.has_cycle().unwrap());
}

#[test]
fn adjacency_and_in_degree() {
    let circuit = CircuitBuilder::new()
        .input("A", false)
        .gate("N", GateKind::Not, &["A"])
        .gate("G", GateKind::And, &["A", "N"])
        .build();
    let topology = circuit.topology().unwrap();
    assert_eq!(topology.adjacency, vec![vec![1, 2], vec![2], vec![]]);
    assert_eq!(topology.in_degree, vec![0, 1, 2]);
    assert_eq!(topology.fanin, vec![vec![], vec![0], vec![0, 1]]);
    assert_eq!(topology.edge_count(), 3);
}

#[test]
fn repeated_input_counts_twice() {
    let circuit = CircuitBuilder::new()
        .input("A", false)
        .gate("G", GateKind::Xor, &["A", "A"])
        .build();
    let topology = circuit.topology().unwrap();
    assert_eq!(topology.in_degree[1], 2);
    assert!(!topology.cyclic);
}

#[test]
fn feedback_marks_cyclic_and_keeps_every_gate() {
    let circuit = CircuitBuilder::new()
        .input("S", true)
        .input("R", true)
        .gate("Q", GateKind::Nand, &["S", "QN"])
        .gate("QN", GateKind::Nand, &["R", "Q"])
        .gate("OUT", GateKind::Output, &["Q"])
        .build();

    let topology = circuit.topology().unwrap();
    assert!(topology.cyclic);
    assert_eq!(topology.sorted_len, 2);
    // Unordered tail follows registration order.
    assert_eq!(topology.order, vec![0, 1, 2, 3, 4]);
    assert!(circuit.is_cyclic().unwrap());
    assert!(circuit.has_cycle().unwrap());
}

#[test]
fn self_loop_is_a_cycle() {
    let circuit = CircuitBuilder::new()
        .gate("N", GateKind::Not, &["N"])
        .build();
    assert!(circuit.is_cyclic().unwrap());
    assert!(circuit.has_cycle().unwrap());
}

#[test]
fn loop_through_a_flip_flop_is_still_a_graph_cycle() {
    // Toggle flip-flop built from a DFF and an inverter.
    let circuit = CircuitBuilder::new()
        .clock("CLK")
        .gate("Q", GateKind::Dff, &["QN"])
        .gate("QN", GateKind::Not, &["Q"])
        .build();
    assert!(circuit.has_cycle().unwrap());
}

#[test]
fn dangling_reference_is_rejected() {
    let mut circuit = CircuitBuilder::new()
        .input("A", false)
        .gate("G", GateKind::And, &["A", "GHOST"])
        .raw();
    assert_eq!(
        circuit.build_topology(),
        Err(SimError::UnknownInputRef {
            gate: "G".into(),
            input: "GHOST".into()
        })
    );
    assert!(circuit.topology().is_none());
    assert_eq!(circuit.has_cycle(), Err(SimError::TopologyStale));
}

#[test]
fn empty_circuit_has_empty_order() {
    let circuit = CircuitBuilder::new().build();
    let topology = circuit.topology().unwrap();
    assert!(topology.order.is_empty());
    assert!(!topology.cyclic);
}
