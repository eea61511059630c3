//! Gate kinds and per-gate state.
//!
//! All kinds share one storage shape (`Gate`); they differ only in how the
//! evaluator and the sequential updater treat them, which is decided by matching on
//! `GateKind`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of gate kinds.
///
/// Serialized with the upper-case tags used by netlist files (`"AND"`, `"DFFN"`,
/// `"JKFF"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GateKind {
    /// Primary input, driven by the caller.
    Input,
    /// Shared clock source, driven by the cycle loop.
    Clock,
    /// Pass-through sink that exposes a signal to the caller.
    Output,
    /// Two-input AND.
    And,
    /// Two-input OR.
    Or,
    /// Two-input XOR.
    Xor,
    /// Two-input XNOR.
    Xnor,
    /// Two-input NAND.
    Nand,
    /// Two-input NOR.
    Nor,
    /// Inverter.
    Not,
    /// D flip-flop, positive-edge triggered.
    Dff,
    /// D flip-flop, negative-edge triggered.
    Dffn,
    /// Level-sensitive D latch; inputs are (data, enable).
    #[serde(alias = "D_LATCH")]
    DLatch,
    /// T flip-flop, positive-edge triggered.
    Tff,
    /// JK flip-flop, positive-edge triggered; inputs are (J, K).
    Jkff,
}

impl GateKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 15] = [
        Self::Input,
        Self::Clock,
        Self::Output,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Xnor,
        Self::Nand,
        Self::Nor,
        Self::Not,
        Self::Dff,
        Self::Dffn,
        Self::DLatch,
        Self::Tff,
        Self::Jkff,
    ];

    /// Maximum number of input references the kind accepts.
    ///
    /// Fewer references are allowed: a missing input reads as `false`.
    pub const fn max_inputs(self) -> usize {
        match self {
            Self::Input | Self::Clock => 0,
            Self::Output | Self::Not | Self::Dff | Self::Dffn | Self::Tff => 1,
            Self::And
            | Self::Or
            | Self::Xor
            | Self::Xnor
            | Self::Nand
            | Self::Nor
            | Self::DLatch
            | Self::Jkff => 2,
        }
    }

    /// Returns true for memory elements (flip-flops and the latch).
    pub const fn is_sequential(self) -> bool {
        matches!(
            self,
            Self::Dff | Self::Dffn | Self::DLatch | Self::Tff | Self::Jkff
        )
    }

    /// Returns true for memory elements that change only on a clock edge.
    ///
    /// These are the elements whose staged state is committed at the end of a cycle.
    pub const fn is_edge_triggered(self) -> bool {
        matches!(self, Self::Dff | Self::Dffn | Self::Tff | Self::Jkff)
    }

    /// Returns true if the combinational evaluator recomputes this gate's output.
    ///
    /// Sources (INPUT, CLOCK) and edge-triggered elements are skipped; the latch is
    /// evaluated here because it is level-sensitive.
    pub const fn is_evaluated(self) -> bool {
        !matches!(self, Self::Input | Self::Clock) && !self.is_edge_triggered()
    }

    /// Netlist tag of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "INPUT",
            Self::Clock => "CLOCK",
            Self::Output => "OUTPUT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Xnor => "XNOR",
            Self::Nand => "NAND",
            Self::Nor => "NOR",
            Self::Not => "NOT",
            Self::Dff => "DFF",
            Self::Dffn => "DFFN",
            Self::DLatch => "DLATCH",
            Self::Tff => "TFF",
            Self::Jkff => "JKFF",
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the circuit graph.
///
/// Gates reference their inputs by id, never by pointer; the owning `Circuit`
/// resolves ids to arena positions when it builds its topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gate {
    /// Unique name; the stable identity used by edges and lookups.
    pub id: String,
    /// Gate kind.
    pub kind: GateKind,
    /// Ordered input references. Order matters for DLATCH (data, enable) and JKFF (J, K).
    pub input_refs: Vec<String>,
    /// Current output, the only externally observable value.
    pub output: bool,
    /// Next state staged by the sequential updater, committed after all elements are staged.
    pub pending_next_state: bool,
    /// Clock level observed at the end of the previous cycle.
    pub prev_clock_sample: bool,
    /// Output at construction time, restored by `Circuit::reset_state`.
    pub initial_output: bool,
}

impl Gate {
    /// Creates a gate whose output and staged state both start at `initial_output`.
    pub fn new(
        id: impl Into<String>,
        kind: GateKind,
        input_refs: Vec<String>,
        initial_output: bool,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            input_refs,
            output: initial_output,
            pending_next_state: initial_output,
            prev_clock_sample: false,
            initial_output,
        }
    }

    /// Restores the construction-time state.
    pub(crate) const fn reset(&mut self) {
        self.output = self.initial_output;
        self.pending_next_state = self.initial_output;
        self.prev_clock_sample = false;
    }
}
