//! Common types and constants shared by the circuit model and the evaluation engine.
//!
//! This module provides:
//! 1. **Constants:** Fixed limits of the input-pattern encoding.
//! 2. **Error Handling:** The engine error taxonomy (`SimError`).

/// Fixed limits used across the simulator.
pub mod constants;

/// Engine error types.
pub mod error;

pub use constants::PATTERN_BITS;
pub use error::SimError;
