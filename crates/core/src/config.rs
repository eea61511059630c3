//! Configuration system for the circuit simulator.
//!
//! This module defines the configuration structures used to parameterize a run. It
//! provides:
//! 1. **Defaults:** Baseline limits (relaxation budget, truth-table bound, cycle count).
//! 2. **Structures:** Hierarchical config for general, evaluation and truth-table settings.
//! 3. **Validation:** Rejection of limits the engine cannot honour.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built with `Config::default()`.

use serde::Deserialize;
use thiserror::Error;

use crate::common::PATTERN_BITS;

/// Default configuration constants for the simulator.
mod defaults {
    /// Cycles run by simulation mode when none are requested.
    pub const CYCLES: u64 = 10;

    /// Maximum number of relaxation passes over a cyclic netlist.
    ///
    /// A pass that changes nothing ends relaxation early; hitting this bound
    /// reports non-convergence.
    pub const MAX_RELAXATION_PASSES: usize = 100;

    /// Maximum number of primary inputs enumerated by a truth table (2^10 rows).
    pub const MAX_TRUTH_TABLE_INPUTS: usize = 10;
}

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The relaxation budget must allow at least one pass.
    #[error("evaluation.max_relaxation_passes must be at least 1")]
    ZeroRelaxationBudget,

    /// The truth-table bound is wider than an input pattern.
    #[error("truth_table.max_inputs is {0}, but input patterns are only 32 bits wide")]
    TruthTableBoundTooWide(usize),

    /// The configuration text is not valid JSON for `Config`.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use gatesim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.evaluation.max_relaxation_passes, 100);
/// assert_eq!(config.truth_table.max_inputs, 10);
/// ```
///
/// Deserializing from JSON; missing sections and fields take their defaults:
///
/// ```
/// use gatesim_core::config::Config;
///
/// let config = Config::from_json(r#"{ "evaluation": { "max_relaxation_passes": 8 } }"#).unwrap();
/// assert_eq!(config.evaluation.max_relaxation_passes, 8);
/// assert_eq!(config.general.cycles, 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Run-level settings
    pub general: GeneralConfig,
    /// Combinational evaluator settings
    pub evaluation: EvaluationConfig,
    /// Truth-table enumerator settings
    pub truth_table: TruthTableConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` for malformed input, or a validation error.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every limit can be honoured by the engine.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroRelaxationBudget` or `ConfigError::TruthTableBoundTooWide`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.evaluation.max_relaxation_passes == 0 {
            return Err(ConfigError::ZeroRelaxationBudget);
        }
        if self.truth_table.max_inputs > PATTERN_BITS {
            return Err(ConfigError::TruthTableBoundTooWide(
                self.truth_table.max_inputs,
            ));
        }
        Ok(())
    }
}

/// General run settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Cycles run in simulation mode
    pub cycles: u64,
    /// Print one trace line per cycle in simulation mode
    pub trace_cycles: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            cycles: defaults::CYCLES,
            trace_cycles: true,
        }
    }
}

/// Combinational evaluator settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Pass budget for relaxation over cyclic netlists
    pub max_relaxation_passes: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            max_relaxation_passes: defaults::MAX_RELAXATION_PASSES,
        }
    }
}

/// Truth-table enumerator settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TruthTableConfig {
    /// Largest number of INPUT gates that may be enumerated
    pub max_inputs: usize,
}

impl Default for TruthTableConfig {
    fn default() -> Self {
        Self {
            max_inputs: defaults::MAX_TRUTH_TABLE_INPUTS,
        }
    }
}
