//! Combinational fixed-point evaluation.
//!
//! An acyclic netlist settles in one pass over its topological order. A netlist with
//! combinational feedback is relaxed instead: full passes over the evaluation order
//! repeat until one changes nothing, or until the configured pass budget runs out.

use tracing::warn;

use crate::circuit::{Circuit, Gate, GateKind, Topology};
use crate::common::SimError;

/// Outcome of one call to [`Circuit::evaluate`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convergence {
    /// A fixed point was reached.
    Converged {
        /// Passes made, including the final pass that changed nothing.
        passes: usize,
    },
    /// The pass budget ran out while outputs were still changing.
    ///
    /// Outputs hold the state after the last pass and should be treated as unreliable.
    Diverged {
        /// Passes made (the full budget).
        passes: usize,
    },
}

impl Convergence {
    /// True for `Converged`.
    pub const fn is_converged(self) -> bool {
        matches!(self, Self::Converged { .. })
    }

    /// Number of passes made.
    pub const fn passes(self) -> usize {
        match self {
            Self::Converged { passes } | Self::Diverged { passes } => passes,
        }
    }
}

/// Computes the new output of `gate`, or `None` if the evaluator leaves it alone.
///
/// Missing inputs read as `false`. A disabled latch holds its output.
pub(crate) fn settle(gate: &Gate, fanin: &[usize], gates: &[Gate]) -> Option<bool> {
    let read = |slot: usize| fanin.get(slot).is_some_and(|&pos| gates[pos].output);
    let (a, b) = (read(0), read(1));
    let value = match gate.kind {
        GateKind::Input
        | GateKind::Clock
        | GateKind::Dff
        | GateKind::Dffn
        | GateKind::Tff
        | GateKind::Jkff => return None,
        GateKind::DLatch => {
            if b {
                a
            } else {
                gate.output
            }
        }
        GateKind::Output => a,
        GateKind::Not => !a,
        GateKind::And => a && b,
        GateKind::Or => a || b,
        GateKind::Xor => a ^ b,
        GateKind::Xnor => a == b,
        GateKind::Nand => !(a && b),
        GateKind::Nor => !(a || b),
    };
    Some(value)
}

/// One pass over the evaluation order. Returns true if any output changed.
fn relax_pass(gates: &mut [Gate], topology: &Topology) -> bool {
    let mut changed = false;
    for &pos in &topology.order {
        let Some(next) = settle(&gates[pos], &topology.fanin[pos], gates) else {
            continue;
        };
        if next != gates[pos].output {
            gates[pos].output = next;
            changed = true;
        }
    }
    changed
}

impl Circuit {
    /// Drives every combinational output (and enabled latches) to a stable value.
    ///
    /// Never touches inputs, the clock, edge-triggered elements or any structural field.
    ///
    /// # Returns
    ///
    /// `Convergence::Converged` when a fixed point was reached, or
    /// `Convergence::Diverged` when a cyclic region kept changing for the whole
    /// relaxation budget. Either way evaluation has stopped.
    ///
    /// # Errors
    ///
    /// Returns `SimError::TopologyStale` if the topology is not built, and
    /// `SimError::ZeroRelaxationBudget` for a cyclic netlist with no pass budget.
    pub fn evaluate(&mut self) -> Result<Convergence, SimError> {
        let Self {
            gates,
            topology,
            config,
            stats,
            ..
        } = self;
        let topology = topology.as_ref().ok_or(SimError::TopologyStale)?;

        let outcome = if topology.cyclic {
            let budget = config.evaluation.max_relaxation_passes;
            if budget == 0 {
                return Err(SimError::ZeroRelaxationBudget);
            }
            (1..=budget)
                .find(|_| !relax_pass(gates, topology))
                .map_or(Convergence::Diverged { passes: budget }, |passes| {
                    Convergence::Converged { passes }
                })
        } else {
            // Inputs of every gate precede it in the order, so one pass is final.
            let _ = relax_pass(gates, topology);
            Convergence::Converged { passes: 1 }
        };

        stats.evaluations += 1;
        stats.relaxation_passes += outcome.passes() as u64;
        if let Convergence::Diverged { passes } = outcome {
            stats.non_convergent += 1;
            warn!(passes, "combinational feedback did not settle");
        }
        Ok(outcome)
    }
}
