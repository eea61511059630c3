//! Engine error definitions.
//!
//! Every fallible engine operation returns `SimError`. Errors are local to the call
//! that raised them: gate outputs may be left mid-evaluation, but the gate set and
//! its structure are never corrupted.
//!
//! Non-convergence of a cyclic region is deliberately absent here. It is not fatal
//! and travels in [`Convergence`](crate::sim::Convergence) instead.

use thiserror::Error;

use crate::circuit::GateKind;

/// Errors raised while building or evaluating a circuit.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// A lookup named a gate id that was never registered.
    #[error("unknown gate `{id}`")]
    UnknownGate {
        /// The id that failed to resolve.
        id: String,
    },

    /// A gate's input list references an id that was never registered.
    ///
    /// Raised by `build_topology`; the netlist must be rejected.
    #[error("gate `{gate}` references unknown gate `{input}`")]
    UnknownInputRef {
        /// Gate whose input list holds the dangling reference.
        gate: String,
        /// The unresolved reference.
        input: String,
    },

    /// Truth-table enumeration was requested over more inputs than the bound allows.
    #[error("truth table over {count} inputs exceeds the limit of {limit}")]
    TooManyInputs {
        /// Number of INPUT gates in the circuit.
        count: usize,
        /// Effective enumeration bound (the configured one, capped at the pattern width).
        limit: usize,
    },

    /// A gate was declared with more input references than its kind accepts.
    #[error("gate `{id}` ({kind}) takes at most {max} inputs, {given} given")]
    ArityExceeded {
        /// Offending gate.
        id: String,
        /// Its kind.
        kind: GateKind,
        /// Number of references supplied.
        given: usize,
        /// Maximum arity for the kind.
        max: usize,
    },

    /// Evaluation was attempted before `build_topology`, or after a structural change.
    #[error("topology is stale: call build_topology() after adding gates")]
    TopologyStale,

    /// Stepping or enumeration was attempted before `classify`, or after a structural change.
    #[error("gate classes are stale: call classify() after adding gates")]
    NotClassified,

    /// Relaxation over a cyclic netlist was requested with a pass budget of zero.
    #[error("evaluation.max_relaxation_passes is 0; a cyclic netlist needs at least one pass")]
    ZeroRelaxationBudget,

    /// An input assignment named a gate that is not of kind INPUT.
    #[error("gate `{id}` is not an INPUT gate")]
    NotAnInput {
        /// The gate that was named.
        id: String,
    },

    /// A combinational simulation request did not assign every input exactly once.
    #[error("expected values for {expected} inputs, got {given}")]
    InputCountMismatch {
        /// Number of INPUT gates in the circuit.
        expected: usize,
        /// Number of assignments supplied.
        given: usize,
    },
}
