//! Shared helpers for engine tests.

use gatesim_core::config::Config;
use gatesim_core::{Circuit, CycleReport, GateKind};
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// Fluent circuit construction for tests.
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CircuitBuilder {
    /// Starts an empty circuit with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Starts an empty circuit with `config`, installing the test subscriber.
    pub fn with_config(config: Config) -> Self {
        init_tracing();
        Self {
            circuit: Circuit::with_config(config),
        }
    }

    /// Adds an INPUT gate with the given initial value.
    pub fn input(self, id: &str, value: bool) -> Self {
        self.gate_init(id, GateKind::Input, &[], value)
    }

    /// Adds a CLOCK gate.
    pub fn clock(self, id: &str) -> Self {
        self.gate_init(id, GateKind::Clock, &[], false)
    }

    /// Adds a gate whose output starts low.
    pub fn gate(self, id: &str, kind: GateKind, inputs: &[&str]) -> Self {
        self.gate_init(id, kind, inputs, false)
    }

    /// Adds a gate with an explicit initial output; panics on an arity violation.
    pub fn gate_init(mut self, id: &str, kind: GateKind, inputs: &[&str], initial: bool) -> Self {
        self.circuit
            .add_gate(id, kind, inputs, initial)
            .unwrap();
        self
    }

    /// Builds topology and classifies; panics on a dangling reference.
    pub fn build(mut self) -> Circuit {
        self.circuit.build_topology().unwrap();
        self.circuit.classify();
        self.circuit
    }

    /// Returns the circuit without building topology or classifying.
    pub fn raw(self) -> Circuit {
        self.circuit
    }
}

/// `A`, `B` inputs feeding a single two-input gate `G`, tapped by `Y`.
pub fn two_input(kind: GateKind, a: bool, b: bool) -> Circuit {
    CircuitBuilder::new()
        .input("A", a)
        .input("B", b)
        .gate("G", kind, &["A", "B"])
        .gate("Y", GateKind::Output, &["G"])
        .build()
}

/// Evaluates and asserts that a fixed point was reached.
pub fn settle(circuit: &mut Circuit) {
    let outcome = circuit.evaluate().unwrap();
    assert!(outcome.is_converged(), "did not settle: {outcome:?}");
}

/// Output of `id`, panicking on an unknown id.
pub fn out(circuit: &Circuit, id: &str) -> bool {
    circuit.output(id).unwrap()
}

/// Runs one toggling cycle.
pub fn tick(circuit: &mut Circuit) -> CycleReport {
    circuit.run_cycle().unwrap()
}

/// Runs `n` toggling cycles, returning the value of `id` after each.
pub fn trace(circuit: &mut Circuit, id: &str, n: usize) -> Vec<bool> {
    (0..n)
        .map(|_| {
            let _ = tick(circuit);
            out(circuit, id)
        })
        .collect()
}

/// Drives the clock to `level` for one cycle.
pub fn step(circuit: &mut Circuit, level: bool) {
    let _ = circuit.step(level).unwrap();
}
