//! Built-in demonstration netlists.

use crate::circuit::GateKind;
use crate::netlist::{GateSpec, Netlist};

/// Three inputs, two outputs: `OUT1 = (A & B) ^ (B | C)`, `OUT2 = OUT1 & !C`.
pub fn combinational() -> Netlist {
    Netlist {
        name: "combinational demo".into(),
        description: "AND/OR/XOR/NOT composition over three inputs".into(),
        gates: vec![
            GateSpec::new("A", GateKind::Input, &[], false),
            GateSpec::new("B", GateKind::Input, &[], false),
            GateSpec::new("C", GateKind::Input, &[], false),
            GateSpec::new("AND1", GateKind::And, &["A", "B"], false),
            GateSpec::new("OR1", GateKind::Or, &["B", "C"], false),
            GateSpec::new("XOR1", GateKind::Xor, &["AND1", "OR1"], false),
            GateSpec::new("NOT1", GateKind::Not, &["C"], false),
            GateSpec::new("AND2", GateKind::And, &["XOR1", "NOT1"], false),
            GateSpec::new("OUT1", GateKind::Output, &["XOR1"], false),
            GateSpec::new("OUT2", GateKind::Output, &["AND2"], false),
        ],
    }
}

/// One of every memory element, driven from two inputs and a clock.
///
/// Memory elements are declared before the gates that feed them.
pub fn mixed() -> Netlist {
    Netlist {
        name: "mixed demo".into(),
        description: "combinational logic feeding every memory element kind".into(),
        gates: vec![
            GateSpec::new("A", GateKind::Input, &[], true),
            GateSpec::new("B", GateKind::Input, &[], false),
            GateSpec::new("CLK", GateKind::Clock, &[], false),
            GateSpec::new("DFF1", GateKind::Dff, &["AND1"], false),
            GateSpec::new("DFFN1", GateKind::Dffn, &["OR1"], false),
            GateSpec::new("DLATCH1", GateKind::DLatch, &["XOR1", "B"], false),
            GateSpec::new("TFF1", GateKind::Tff, &["B"], false),
            GateSpec::new("JKFF1", GateKind::Jkff, &["A", "B"], false),
            GateSpec::new("AND1", GateKind::And, &["A", "B"], false),
            GateSpec::new("OR1", GateKind::Or, &["A", "B"], false),
            GateSpec::new("XOR1", GateKind::Xor, &["A", "B"], false),
            GateSpec::new("NOT1", GateKind::Not, &["AND1"], false),
            GateSpec::new("OUT_AND", GateKind::Output, &["AND1"], false),
            GateSpec::new("OUT_OR", GateKind::Output, &["OR1"], false),
            GateSpec::new("OUT_DFF1", GateKind::Output, &["DFF1"], false),
            GateSpec::new("OUT_DFFN1", GateKind::Output, &["DFFN1"], false),
            GateSpec::new("OUT_TFF1", GateKind::Output, &["TFF1"], false),
            GateSpec::new("OUT_JKFF1", GateKind::Output, &["JKFF1"], false),
        ],
    }
}
