//! Simulator-wide constants.

/// Width of an input pattern passed to `Circuit::set_inputs`.
///
/// Bit `i` of the pattern drives the `i`-th INPUT gate in registration order; inputs
/// past this width are left untouched.
pub const PATTERN_BITS: usize = 32;
