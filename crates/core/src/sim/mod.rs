//! Evaluation engine.
//!
//! This module implements the behaviour of a built circuit. It provides:
//! 1. **Combinational:** Topological single-pass evaluation, and bounded relaxation for
//!    netlists with feedback.
//! 2. **Sequential:** Edge detection and two-phase (stage, then commit) state updates.
//! 3. **Truth Tables:** Exhaustive enumeration over the input space.

/// Combinational fixed-point evaluation.
pub mod combinational;

/// Clock edges and memory-element updates.
pub mod sequential;

/// Exhaustive input enumeration.
pub mod truth_table;

pub use combinational::Convergence;
pub use sequential::{ClockEdge, CycleReport};
pub use truth_table::{TruthRow, TruthTable};
