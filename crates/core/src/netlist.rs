//! Netlist ingestion.
//!
//! A netlist is a JSON document listing gates by id, kind tag, input ids and initial
//! output:
//!
//! ```json
//! {
//!   "name": "half adder",
//!   "gates": [
//!     { "id": "A", "type": "INPUT" },
//!     { "id": "B", "type": "INPUT" },
//!     { "id": "S", "type": "XOR", "inputs": ["A", "B"] },
//!     { "id": "SUM", "type": "OUTPUT", "inputs": ["S"] }
//!   ]
//! }
//! ```
//!
//! Gates may reference gates declared later; references are resolved when the
//! circuit is built, and a dangling one rejects the whole netlist.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::circuit::{Circuit, Gate, GateKind};
use crate::common::SimError;
use crate::config::{Config, ConfigError};

/// Errors raised while loading or building a netlist.
#[derive(Debug, Error)]
pub enum NetlistError {
    /// The netlist file could not be read.
    #[error("cannot read netlist `{path}`: {source}")]
    Io {
        /// Path that was opened.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The text is not a valid netlist document.
    #[error("invalid netlist: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration handed to `build` is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The gates do not form a valid circuit.
    #[error(transparent)]
    Sim(#[from] SimError),
}

/// One gate declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateSpec {
    /// Unique gate id.
    pub id: String,
    /// Kind tag (`"AND"`, `"DFF"`, ...).
    #[serde(rename = "type")]
    pub kind: GateKind,
    /// Input ids in port order.
    #[serde(default)]
    pub inputs: Vec<String>,
    /// Initial output.
    #[serde(default)]
    pub output: bool,
}

impl GateSpec {
    /// Shorthand constructor.
    pub fn new(id: &str, kind: GateKind, inputs: &[&str], output: bool) -> Self {
        Self {
            id: id.to_owned(),
            kind,
            inputs: inputs.iter().map(|&s| s.to_owned()).collect(),
            output,
        }
    }
}

/// A named list of gate declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Netlist {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Gates in registration order; INPUT order here is the truth-table bit order.
    pub gates: Vec<GateSpec>,
}

impl Netlist {
    /// Parses a netlist from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `NetlistError::Json` for malformed text or unknown gate tags.
    pub fn from_json(text: &str) -> Result<Self, NetlistError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a netlist file.
    ///
    /// # Errors
    ///
    /// Returns `NetlistError::Io` if the file cannot be read, or `NetlistError::Json`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, NetlistError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| NetlistError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Serializes the netlist as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `NetlistError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, NetlistError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds a circuit ready for evaluation: gates added, topology built, gates classified.
    ///
    /// # Errors
    ///
    /// Returns `NetlistError::Config` if `config` fails validation, and
    /// `NetlistError::Sim` for an arity violation or a dangling reference.
    pub fn build(&self, config: Config) -> Result<Circuit, NetlistError> {
        config.validate()?;
        let mut circuit = Circuit::with_config(config);
        for spec in &self.gates {
            circuit.add(Gate::new(
                spec.id.clone(),
                spec.kind,
                spec.inputs.clone(),
                spec.output,
            ))?;
        }
        circuit.build_topology()?;
        circuit.classify();
        Ok(circuit)
    }
}
