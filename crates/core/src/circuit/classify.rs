//! Gate classification by role.

use super::gate::{Gate, GateKind};

/// Arena positions of the gates that play a special role in simulation.
///
/// All lists follow registration order, which is also the bit order used by
/// `Circuit::set_inputs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// INPUT gates.
    pub inputs: Vec<usize>,
    /// OUTPUT gates.
    pub outputs: Vec<usize>,
    /// The shared clock. With several CLOCK gates the last registered one wins.
    pub clock: Option<usize>,
    /// Memory elements, latch included.
    pub sequential: Vec<usize>,
    /// Number of CLOCK gates seen.
    pub clock_count: usize,
}

impl Classification {
    /// Groups `gates` by role.
    pub fn of(gates: &[Gate]) -> Self {
        let mut classes = Self::default();
        for (pos, gate) in gates.iter().enumerate() {
            match gate.kind {
                GateKind::Input => classes.inputs.push(pos),
                GateKind::Output => classes.outputs.push(pos),
                GateKind::Clock => {
                    classes.clock = Some(pos);
                    classes.clock_count += 1;
                }
                kind if kind.is_sequential() => classes.sequential.push(pos),
                _ => {}
            }
        }
        classes
    }

    /// True when the circuit holds no memory elements.
    pub fn is_purely_combinational(&self) -> bool {
        self.sequential.is_empty()
    }
}
