//! # Unit Tests
//!
//! One module per engine concern, leaf-first.


/// Gate kinds: arity, roles and tags.
pub mod gate;


/// Dependency graph, ordering and cycle detection.
pub mod topology;






/// Randomized invariants over generated netlists.
pub mod properties;
