//! Text rendering of simulation results.
//!
//! Truth tables right-align input ids to width 5 and output ids to width 6, with
//! ` | ` between the two groups. Cycle reports print as a single line of
//! `id=value` pairs.

use std::fmt;

use crate::sim::{CycleReport, TruthTable};

const INPUT_WIDTH: usize = 5;
const OUTPUT_WIDTH: usize = 6;

fn bit(value: bool) -> u8 {
    u8::from(value)
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in &self.input_ids {
            write!(f, "{id:>INPUT_WIDTH$}")?;
        }
        f.write_str(" | ")?;
        for id in &self.output_ids {
            write!(f, "{id:>OUTPUT_WIDTH$}")?;
        }
        writeln!(f)?;

        f.write_str(&"-".repeat(INPUT_WIDTH * self.input_ids.len()))?;
        f.write_str(" | ")?;
        writeln!(f, "{}", "-".repeat(OUTPUT_WIDTH * self.output_ids.len()))?;

        for row in &self.rows {
            for &value in &row.inputs {
                write!(f, "{:>INPUT_WIDTH$}", bit(value))?;
            }
            f.write_str(" | ")?;
            for &value in &row.outputs {
                write!(f, "{:>OUTPUT_WIDTH$}", bit(value))?;
            }
            if !row.converged {
                f.write_str("  (unsettled)")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cycle {:>3} CLK={}", self.cycle, bit(self.clock))?;
        for (id, value) in self
            .inputs
            .iter()
            .chain(&self.sequential)
            .chain(&self.outputs)
        {
            write!(f, " {id}={}", bit(*value))?;
        }
        if !self.convergence.is_converged() {
            write!(f, " (unsettled after {} passes)", self.convergence.passes())?;
        }
        Ok(())
    }
}
