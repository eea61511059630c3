//! Clocked state transitions.
//!
//! This module advances memory elements by one clock transition. It performs:
//! 1. **Clock Drive:** Sets the shared clock gate (or the internal clock level).
//! 2. **Settling:** Runs the combinational evaluator, which also updates enabled latches.
//! 3. **Staging:** Computes every edge-triggered element's next state from the settled
//!    outputs and its own stored clock sample.
//! 4. **Commit:** Copies all staged states to the outputs in a separate pass, so no
//!    element sees another's new value within the same cycle.

use std::collections::BTreeMap;

use tracing::trace;

use super::combinational::Convergence;
use crate::circuit::{Circuit, Gate, GateKind};
use crate::common::SimError;

/// Clock transition seen by one element in one cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockEdge {
    /// Low at the previous sample, high now.
    pub rising: bool,
    /// High at the previous sample, low now.
    pub falling: bool,
}

impl ClockEdge {
    /// Classifies the transition from `previous` to `now`.
    pub const fn detect(now: bool, previous: bool) -> Self {
        Self {
            rising: now && !previous,
            falling: !now && previous,
        }
    }
}

/// Observable state after a cycle (or after a one-shot combinational evaluation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// Zero-based cycle index.
    pub cycle: u64,
    /// Clock level driven during the cycle.
    pub clock: bool,
    /// Result of the combinational settle step.
    pub convergence: Convergence,
    /// `(id, value)` of every INPUT gate.
    pub inputs: Vec<(String, bool)>,
    /// `(id, value)` of every memory element after commit.
    pub sequential: Vec<(String, bool)>,
    /// `(id, value)` of every OUTPUT gate.
    pub outputs: Vec<(String, bool)>,
}

impl CycleReport {
    /// Value recorded for `id` in any of the three groups.
    pub fn value(&self, id: &str) -> Option<bool> {
        self.inputs
            .iter()
            .chain(&self.sequential)
            .chain(&self.outputs)
            .find(|(name, _)| name == id)
            .map(|&(_, value)| value)
    }
}

/// Next state of a memory element for the given edge.
///
/// Reads only committed outputs. An element without a qualifying edge, and the
/// latch (which is updated by the evaluator), stage their current output.
pub(crate) fn next_state(gate: &Gate, edge: ClockEdge, fanin: &[usize], gates: &[Gate]) -> bool {
    let read = |slot: usize| fanin.get(slot).is_some_and(|&pos| gates[pos].output);
    match gate.kind {
        GateKind::Dff if edge.rising => read(0),
        GateKind::Dffn if edge.falling => read(0),
        GateKind::Tff if edge.rising => gate.output ^ read(0),
        GateKind::Jkff if edge.rising => match (read(0), read(1)) {
            (false, false) => gate.output,
            (true, false) => true,
            (false, true) => false,
            (true, true) => !gate.output,
        },
        _ => gate.output,
    }
}

impl Circuit {
    /// Advances one half clock cycle, inverting the clock level.
    ///
    /// The first call drives the clock high, so cycles alternate rising and falling edges.
    ///
    /// # Errors
    ///
    /// Same as [`Circuit::step`].
    pub fn run_cycle(&mut self) -> Result<CycleReport, SimError> {
        self.step(!self.clock_level)
    }

    /// Runs one cycle with the clock driven to `level`.
    ///
    /// Driving the same level twice produces no edge, which holds every edge-triggered
    /// element.
    ///
    /// # Errors
    ///
    /// Returns `SimError::NotClassified` or `SimError::TopologyStale` if the derived
    /// structures are not current. Nothing is modified in that case.
    pub fn step(&mut self, level: bool) -> Result<CycleReport, SimError> {
        let clock_gate = self.classified()?.clock;
        let _ = self.built_topology()?;

        let previous_level = self.clock_level;
        self.clock_level = level;
        if let Some(pos) = clock_gate {
            self.gates[pos].output = level;
        }

        let convergence = self.evaluate()?;
        let clock_now = clock_gate.map_or(level, |pos| self.gates[pos].output);
        let changes = self.clock_sequential(clock_now)?;

        let edge = ClockEdge::detect(level, previous_level);
        self.stats.cycles += 1;
        self.stats.rising_edges += u64::from(edge.rising);
        self.stats.falling_edges += u64::from(edge.falling);
        self.stats.state_changes += changes;
        trace!(
            cycle = self.cycle,
            clock = level,
            rising = edge.rising,
            falling = edge.falling,
            changes,
            "cycle stepped"
        );

        let report = self.report(convergence)?;
        self.cycle += 1;
        Ok(report)
    }

    /// Runs a simulation request against named inputs.
    ///
    /// A circuit without memory elements is evaluated once; `inputs` must then assign
    /// every INPUT gate. Otherwise `inputs` are applied and `cycles` cycles are run.
    ///
    /// # Arguments
    ///
    /// * `inputs` - Values for INPUT gates, keyed by id.
    /// * `cycles` - Number of cycles to step for a sequential circuit.
    ///
    /// # Returns
    ///
    /// One report per cycle, or a single report for a combinational circuit.
    ///
    /// # Errors
    ///
    /// Returns `SimError::InputCountMismatch`, `SimError::UnknownGate` or
    /// `SimError::NotAnInput` for a bad assignment (before any input is changed), and
    /// the stale-structure errors of [`Circuit::step`].
    pub fn simulate(
        &mut self,
        inputs: &BTreeMap<String, bool>,
        cycles: u64,
    ) -> Result<Vec<CycleReport>, SimError> {
        let classes = self.classified()?;
        let combinational = classes.is_purely_combinational();
        if combinational && inputs.len() != classes.inputs.len() {
            return Err(SimError::InputCountMismatch {
                expected: classes.inputs.len(),
                given: inputs.len(),
            });
        }

        let assignments = inputs
            .iter()
            .map(|(id, &value)| self.input_position(id).map(|pos| (pos, value)))
            .collect::<Result<Vec<_>, _>>()?;
        for (pos, value) in assignments {
            self.gates[pos].output = value;
        }

        if combinational {
            let convergence = self.evaluate()?;
            return Ok(vec![self.report(convergence)?]);
        }
        (0..cycles).map(|_| self.run_cycle()).collect()
    }

    /// Stages and commits every memory element against `clock_now`.
    ///
    /// Returns the number of outputs the commit changed.
    fn clock_sequential(&mut self, clock_now: bool) -> Result<u64, SimError> {
        let Self {
            gates,
            topology,
            classes,
            ..
        } = self;
        let topology = topology.as_ref().ok_or(SimError::TopologyStale)?;
        let classes = classes.as_ref().ok_or(SimError::NotClassified)?;

        for &pos in &classes.sequential {
            let edge = ClockEdge::detect(clock_now, gates[pos].prev_clock_sample);
            let staged = next_state(&gates[pos], edge, &topology.fanin[pos], gates);
            let gate = &mut gates[pos];
            gate.pending_next_state = staged;
            gate.prev_clock_sample = clock_now;
        }

        let mut changes = 0;
        for &pos in &classes.sequential {
            let gate = &mut gates[pos];
            if gate.kind.is_edge_triggered() && gate.output != gate.pending_next_state {
                gate.output = gate.pending_next_state;
                changes += 1;
            }
        }
        Ok(changes)
    }

    fn report(&self, convergence: Convergence) -> Result<CycleReport, SimError> {
        let classes = self.classified()?;
        Ok(CycleReport {
            cycle: self.cycle,
            clock: self.clock_level,
            convergence,
            inputs: self.snapshot(&classes.inputs),
            sequential: self.snapshot(&classes.sequential),
            outputs: self.snapshot(&classes.outputs),
        })
    }
}
