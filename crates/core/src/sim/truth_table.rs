//! Exhaustive truth-table enumeration.

use tracing::warn;

use crate::circuit::Circuit;
use crate::common::{PATTERN_BITS, SimError};

/// One enumerated input pattern and the outputs it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthRow {
    /// Input pattern; bit `i` drove the `i`-th INPUT gate.
    pub pattern: u32,
    /// INPUT values, in bit order.
    pub inputs: Vec<bool>,
    /// OUTPUT values, in registration order.
    pub outputs: Vec<bool>,
    /// False if the evaluator hit its relaxation budget for this row.
    pub converged: bool,
}

/// A complete truth table over a circuit's INPUT and OUTPUT gates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    /// INPUT gate ids, in bit order.
    pub input_ids: Vec<String>,
    /// OUTPUT gate ids, in registration order.
    pub output_ids: Vec<String>,
    /// One row per pattern, in ascending pattern order.
    pub rows: Vec<TruthRow>,
}

impl TruthTable {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True for a table without rows (never produced by enumeration).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for `pattern`, if enumerated.
    pub fn row(&self, pattern: u32) -> Option<&TruthRow> {
        self.rows.get(pattern as usize)
    }

    /// True if every row settled.
    pub fn fully_converged(&self) -> bool {
        self.rows.iter().all(|row| row.converged)
    }
}

impl Circuit {
    /// Enumerates every input pattern and records the resulting outputs.
    ///
    /// Memory elements keep whatever state they hold when this is called; they are
    /// neither reset nor clocked, so rows reflect that frozen state.
    ///
    /// # Errors
    ///
    /// Returns `SimError::TooManyInputs` without enumerating anything when the circuit
    /// has more INPUT gates than `truth_table.max_inputs` (never more than the 32-bit
    /// pattern width), and the stale-structure
    /// errors when `classify` or `build_topology` has not run.
    pub fn generate_truth_table(&mut self) -> Result<TruthTable, SimError> {
        let classes = self.classified()?;
        let _ = self.built_topology()?;

        let count = classes.inputs.len();
        let limit = self.config.truth_table.max_inputs.min(PATTERN_BITS);
        if count > limit {
            return Err(SimError::TooManyInputs { count, limit });
        }
        if !classes.is_purely_combinational() {
            warn!(
                sequential = classes.sequential.len(),
                "truth table uses the current state of sequential elements"
            );
        }

        let inputs = classes.inputs.clone();
        let outputs = classes.outputs.clone();
        let input_ids = self.ids(&inputs).into_iter().map(str::to_owned).collect();
        let output_ids = self.ids(&outputs).into_iter().map(str::to_owned).collect();

        let rows = (0..1u64 << count)
            .map(|pattern| {
                let pattern = pattern as u32;
                self.set_inputs(pattern)?;
                let convergence = self.evaluate()?;
                Ok(TruthRow {
                    pattern,
                    inputs: inputs.iter().map(|&pos| self.gates[pos].output).collect(),
                    outputs: outputs.iter().map(|&pos| self.gates[pos].output).collect(),
                    converged: convergence.is_converged(),
                })
            })
            .collect::<Result<Vec<_>, SimError>>()?;

        self.stats.truth_table_rows += rows.len() as u64;
        Ok(TruthTable {
            input_ids,
            output_ids,
            rows,
        })
    }
}
