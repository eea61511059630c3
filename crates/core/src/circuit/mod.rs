//! Circuit definition and gate registry.
//!
//! This module defines the central `Circuit` structure, which owns every gate and
//! the structures derived from them. It provides:
//! 1. **Registry:** A dense gate arena with a name-to-position map.
//! 2. **Derived State:** Topology and role classification, rebuilt explicitly and
//!    dropped on any structural change.
//! 3. **Input Drive:** Pattern and per-name assignment of primary inputs.
//!
//! Evaluation and clocking live in [`crate::sim`] as further `impl Circuit` blocks.

/// Gate roles (inputs, outputs, clock, memory elements).
pub mod classify;

/// Gate kinds and per-gate state.
pub mod gate;

/// Dependency graph, topological order and cycle detection.
pub mod topology;

use std::collections::HashMap;

use tracing::{debug, warn};

pub use classify::Classification;
pub use gate::{Gate, GateKind};
pub use topology::Topology;

use crate::common::{PATTERN_BITS, SimError};
use crate::config::Config;
use crate::stats::SimStats;

/// A gate-level circuit: the gate arena plus its derived evaluation structures.
#[derive(Debug, Clone)]
pub struct Circuit {
    pub(crate) gates: Vec<Gate>,
    pub(crate) index: HashMap<String, usize>,
    pub(crate) topology: Option<Topology>,
    pub(crate) classes: Option<Classification>,
    pub(crate) config: Config,
    /// Clock level driven by the most recent cycle (low before the first one).
    pub(crate) clock_level: bool,
    /// Number of cycles stepped since construction or the last reset.
    pub(crate) cycle: u64,
    /// Simulation statistics.
    pub stats: SimStats,
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}

impl Circuit {
    /// Creates an empty circuit with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty circuit with the given configuration.
    ///
    /// The configuration is taken as-is. Limits it cannot honour surface later: the
    /// truth-table bound is capped at the pattern width, and a zero relaxation budget
    /// makes `evaluate` fail on cyclic netlists.
    pub fn with_config(config: Config) -> Self {
        Self {
            gates: Vec::new(),
            index: HashMap::new(),
            topology: None,
            classes: None,
            config,
            clock_level: false,
            cycle: 0,
            stats: SimStats::default(),
        }
    }

    /// Active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Registers `gate` under its id.
    ///
    /// Re-using an id re-points the name at the new gate; the earlier gate stays in
    /// the arena but can no longer be looked up. Derived structures are dropped and
    /// must be rebuilt.
    ///
    /// # Errors
    ///
    /// Returns `SimError::ArityExceeded` if the gate lists more inputs than its kind takes.
    pub fn add(&mut self, gate: Gate) -> Result<(), SimError> {
        let max = gate.kind.max_inputs();
        if gate.input_refs.len() > max {
            return Err(SimError::ArityExceeded {
                id: gate.id,
                kind: gate.kind,
                given: gate.input_refs.len(),
                max,
            });
        }

        let pos = self.gates.len();
        if let Some(previous) = self.index.insert(gate.id.clone(), pos) {
            warn!(id = %gate.id, previous, "duplicate gate id; earlier gate is orphaned");
        }
        self.gates.push(gate);
        self.topology = None;
        self.classes = None;
        Ok(())
    }

    /// Builds and registers a gate.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique gate name.
    /// * `kind` - Gate kind.
    /// * `input_refs` - Ids of the gates feeding this one, in port order.
    /// * `initial_output` - Output value before the first evaluation.
    ///
    /// # Errors
    ///
    /// Same as [`Circuit::add`].
    pub fn add_gate(
        &mut self,
        id: impl Into<String>,
        kind: GateKind,
        input_refs: &[&str],
        initial_output: bool,
    ) -> Result<(), SimError> {
        let refs = input_refs.iter().map(|&r| r.to_owned()).collect();
        self.add(Gate::new(id, kind, refs, initial_output))
    }

    /// Number of gates in the arena, orphaned duplicates included.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// True when no gate has been added.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// All gates in registration order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Arena position of the gate named `id`.
    ///
    /// # Errors
    ///
    /// Returns `SimError::UnknownGate` if no gate has that id.
    pub fn position(&self, id: &str) -> Result<usize, SimError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| SimError::UnknownGate { id: id.to_owned() })
    }

    /// Looks up a gate by id.
    ///
    /// # Errors
    ///
    /// Returns `SimError::UnknownGate` if no gate has that id.
    pub fn get(&self, id: &str) -> Result<&Gate, SimError> {
        self.position(id).map(|pos| &self.gates[pos])
    }

    /// Current output of the gate named `id`.
    ///
    /// # Errors
    ///
    /// Returns `SimError::UnknownGate` if no gate has that id.
    pub fn output(&self, id: &str) -> Result<bool, SimError> {
        self.get(id).map(|gate| gate.output)
    }

    /// Rebuilds adjacency, in-degrees and the evaluation order.
    ///
    /// Must run after the last `add` and before any evaluation.
    ///
    /// # Errors
    ///
    /// Returns `SimError::UnknownInputRef` if any input reference does not resolve;
    /// the topology then stays unbuilt.
    pub fn build_topology(&mut self) -> Result<(), SimError> {
        let topology = Topology::build(&self.gates, &self.index)?;
        debug!(
            gates = self.gates.len(),
            edges = topology.edge_count(),
            cyclic = topology.cyclic,
            "topology built"
        );
        self.topology = Some(topology);
        Ok(())
    }

    /// Derived topology, if it is current.
    pub const fn topology(&self) -> Option<&Topology> {
        self.topology.as_ref()
    }

    /// True when Kahn's algorithm could not order every gate.
    ///
    /// # Errors
    ///
    /// Returns `SimError::TopologyStale` if the topology is not built.
    pub fn is_cyclic(&self) -> Result<bool, SimError> {
        self.built_topology().map(|t| t.cyclic)
    }

    /// Runs the depth-first cycle check over the built graph.
    ///
    /// # Errors
    ///
    /// Returns `SimError::TopologyStale` if the topology is not built.
    pub fn has_cycle(&self) -> Result<bool, SimError> {
        self.built_topology().map(Topology::has_cycle)
    }

    /// Recomputes the input, output, clock and memory-element groupings.
    ///
    /// Must run after the last `add` and before `run_cycle` or `generate_truth_table`.
    pub fn classify(&mut self) {
        let classes = Classification::of(&self.gates);
        if classes.clock_count > 1 {
            warn!(
                clocks = classes.clock_count,
                "several CLOCK gates declared; only the last one is driven"
            );
        }
        debug!(
            inputs = classes.inputs.len(),
            outputs = classes.outputs.len(),
            sequential = classes.sequential.len(),
            clock = classes.clock.map(|pos| self.gates[pos].id.as_str()),
            "gates classified"
        );
        self.classes = Some(classes);
    }

    /// Derived classification, if it is current.
    pub const fn classification(&self) -> Option<&Classification> {
        self.classes.as_ref()
    }

    /// Ids of the INPUT gates in bit order.
    ///
    /// # Errors
    ///
    /// Returns `SimError::NotClassified` if `classify` has not run since the last change.
    pub fn input_ids(&self) -> Result<Vec<&str>, SimError> {
        Ok(self.ids(&self.classified()?.inputs))
    }

    /// Ids of the OUTPUT gates in registration order.
    ///
    /// # Errors
    ///
    /// Returns `SimError::NotClassified` if `classify` has not run since the last change.
    pub fn output_ids(&self) -> Result<Vec<&str>, SimError> {
        Ok(self.ids(&self.classified()?.outputs))
    }

    /// Ids of the memory elements in registration order.
    ///
    /// # Errors
    ///
    /// Returns `SimError::NotClassified` if `classify` has not run since the last change.
    pub fn sequential_ids(&self) -> Result<Vec<&str>, SimError> {
        Ok(self.ids(&self.classified()?.sequential))
    }

    /// Id of the driven clock gate, if any.
    ///
    /// # Errors
    ///
    /// Returns `SimError::NotClassified` if `classify` has not run since the last change.
    pub fn clock_id(&self) -> Result<Option<&str>, SimError> {
        Ok(self
            .classified()?
            .clock
            .map(|pos| self.gates[pos].id.as_str()))
    }

    /// Drives the INPUT gates from the bits of `pattern`.
    ///
    /// Bit `i` sets the `i`-th INPUT gate in registration order. Inputs beyond the
    /// pattern width keep their value.
    ///
    /// # Errors
    ///
    /// Returns `SimError::NotClassified` if `classify` has not run since the last change.
    pub fn set_inputs(&mut self, pattern: u32) -> Result<(), SimError> {
        let classes = self.classes.as_ref().ok_or(SimError::NotClassified)?;
        for (bit, &pos) in classes.inputs.iter().take(PATTERN_BITS).enumerate() {
            self.gates[pos].output = (pattern >> bit) & 1 == 1;
        }
        Ok(())
    }

    /// Drives a single INPUT gate by name.
    ///
    /// # Errors
    ///
    /// Returns `SimError::UnknownGate` for an unknown id and `SimError::NotAnInput` if
    /// the gate is not an INPUT.
    pub fn set_input(&mut self, id: &str, value: bool) -> Result<(), SimError> {
        let pos = self.input_position(id)?;
        self.gates[pos].output = value;
        Ok(())
    }

    /// Restores every gate to its construction-time state and the clock to low.
    ///
    /// Structure, derived state and statistics are kept.
    pub fn reset_state(&mut self) {
        for gate in &mut self.gates {
            gate.reset();
        }
        self.clock_level = false;
        self.cycle = 0;
    }

    /// Clock level driven by the most recent cycle.
    pub const fn clock_level(&self) -> bool {
        self.clock_level
    }

    /// Number of cycles stepped since construction or the last reset.
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    pub(crate) fn input_position(&self, id: &str) -> Result<usize, SimError> {
        let pos = self.position(id)?;
        if self.gates[pos].kind == GateKind::Input {
            Ok(pos)
        } else {
            Err(SimError::NotAnInput { id: id.to_owned() })
        }
    }

    pub(crate) fn built_topology(&self) -> Result<&Topology, SimError> {
        self.topology.as_ref().ok_or(SimError::TopologyStale)
    }

    pub(crate) fn classified(&self) -> Result<&Classification, SimError> {
        self.classes.as_ref().ok_or(SimError::NotClassified)
    }

    pub(crate) fn ids(&self, positions: &[usize]) -> Vec<&str> {
        positions
            .iter()
            .map(|&pos| self.gates[pos].id.as_str())
            .collect()
    }

    /// `(id, output)` pairs for the given positions.
    pub(crate) fn snapshot(&self, positions: &[usize]) -> Vec<(String, bool)> {
        positions
            .iter()
            .map(|&pos| (self.gates[pos].id.clone(), self.gates[pos].output))
            .collect()
    }
}
