//! Gate-level digital circuit simulator library.
//!
//! This crate evaluates netlists of logic gates and memory elements. It provides:
//! 1. **Circuit:** A gate arena with a name index, dependency graph and role classification.
//! 2. **Combinational Evaluation:** Topological single-pass evaluation, with bounded
//!    relaxation for netlists containing feedback.
//! 3. **Sequential Simulation:** Edge-detected flip-flops and a level-sensitive latch,
//!    updated with a two-phase stage-then-commit cycle.
//! 4. **Truth Tables:** Exhaustive enumeration over a bounded number of inputs.
//! 5. **Ingestion and Reporting:** JSON netlists, demo circuits and text rendering.

/// Circuit model (gates, registry, topology, classification).
pub mod circuit;
/// Common types and constants (errors, pattern width).
pub mod common;
/// Simulator configuration (defaults and validation).
pub mod config;
/// Built-in demonstration netlists.
pub mod demo;
/// JSON netlist format.
pub mod netlist;
/// Text rendering of truth tables and cycle reports.
pub mod report;
/// Evaluation engine (combinational, sequential, truth tables).
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Main circuit type; add gates, then `build_topology` and `classify`.
pub use crate::circuit::{Circuit, Gate, GateKind};
/// Engine error type.
pub use crate::common::SimError;
/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Netlist document type.
pub use crate::netlist::Netlist;
/// Evaluation results.
pub use crate::sim::{Convergence, CycleReport, TruthTable};
