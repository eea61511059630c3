//! Simulation statistics collection and reporting.
//!
//! This module tracks counters for a circuit's lifetime. It provides:
//! 1. **Cycles:** Cycles stepped and the clock edges they produced.
//! 2. **Evaluation:** Evaluator calls, relaxation passes and non-convergent results.
//! 3. **State:** Committed flip-flop transitions and enumerated truth-table rows.

use std::time::Instant;

/// Simulation statistics structure.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Cycles stepped.
    pub cycles: u64,
    /// Cycles whose clock level rose.
    pub rising_edges: u64,
    /// Cycles whose clock level fell.
    pub falling_edges: u64,

    /// Calls to the combinational evaluator.
    pub evaluations: u64,
    /// Full passes made over the evaluation order, summed across calls.
    pub relaxation_passes: u64,
    /// Evaluations that exhausted the relaxation budget without settling.
    pub non_convergent: u64,

    /// Commits that changed an edge-triggered element's output.
    pub state_changes: u64,
    /// Truth-table rows enumerated.
    pub truth_table_rows: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            rising_edges: 0,
            falling_edges: 0,
            evaluations: 0,
            relaxation_passes: 0,
            non_convergent: 0,
            state_changes: 0,
            truth_table_rows: 0,
        }
    }
}

impl SimStats {
    /// Average passes per evaluation; 0.0 before the first evaluation.
    pub fn passes_per_evaluation(&self) -> f64 {
        if self.evaluations == 0 {
            0.0
        } else {
            self.relaxation_passes as f64 / self.evaluations as f64
        }
    }

    /// Prints all counters to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        println!("\n==========================================================");
        println!("CIRCUIT SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_cycles               {}", self.cycles);
        println!("clock.rising             {}", self.rising_edges);
        println!("clock.falling            {}", self.falling_edges);
        println!("----------------------------------------------------------");
        println!("eval.calls               {}", self.evaluations);
        println!("eval.passes              {}", self.relaxation_passes);
        println!(
            "eval.passes_per_call     {:.2}",
            self.passes_per_evaluation()
        );
        println!("eval.non_convergent      {}", self.non_convergent);
        println!("----------------------------------------------------------");
        println!("state.changes            {}", self.state_changes);
        println!("table.rows               {}", self.truth_table_rows);
        println!("==========================================================");
    }
}
