//! Execution request and result types.
//!
//! These mirror the JSON bodies exchanged with the execution endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use qsynth_ir::Circuit;

use crate::error::{HalError, HalResult};
use crate::provider::ProviderKind;

/// Shots used when a request does not specify them.
pub const DEFAULT_SHOTS: u32 = 1024;

fn default_shots() -> u32 {
    DEFAULT_SHOTS
}

/// A circuit to run on a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRequest {
    /// Circuit to execute.
    pub circuit: Circuit,
    /// Provider to execute on.
    pub provider: ProviderKind,
    /// Number of shots.
    #[serde(default = "default_shots")]
    pub shots: u32,
    /// Provider backend; the provider's default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_name: Option<String>,
}

impl ExecutionRequest {
    /// Create a request with default shots and backend.
    pub fn new(circuit: Circuit, provider: ProviderKind) -> Self {
        Self {
            circuit,
            provider,
            shots: DEFAULT_SHOTS,
            backend_name: None,
        }
    }

    /// Set the number of shots.
    #[must_use]
    pub fn with_shots(mut self, shots: u32) -> Self {
        self.shots = shots;
        self
    }

    /// Select a provider backend.
    #[must_use]
    pub fn with_backend(mut self, backend_name: impl Into<String>) -> Self {
        self.backend_name = Some(backend_name.into());
        self
    }

    /// Backend this request targets.
    pub fn backend(&self) -> &str {
        self.backend_name
            .as_deref()
            .unwrap_or_else(|| self.provider.default_backend())
    }

    /// Parse a request body.
    pub fn from_json(json: &str) -> HalResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject requests no executor can run.
    pub fn validate(&self) -> HalResult<()> {
        if self.shots == 0 {
            return Err(HalError::InvalidShots(
                "shots must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

/// Single-qubit amplitude magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Amplitudes {
    /// Magnitude of the `|0⟩` amplitude.
    pub alpha: f64,
    /// Magnitude of the `|1⟩` amplitude.
    pub beta: f64,
}

/// Per-qubit state reported by executors that expose amplitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QubitState {
    /// Qubit index.
    pub qubit: u32,
    /// Amplitude magnitudes.
    pub state: Amplitudes,
}

/// Outcome of an execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Measurement counts keyed by bitstring.
    pub measurements: BTreeMap<String, u64>,
    /// Per-qubit states; empty when the executor does not report them.
    #[serde(default)]
    pub states: Vec<QubitState>,
    /// Provider that ran the circuit.
    pub provider: ProviderKind,
    /// Backend that ran the circuit.
    pub backend_used: String,
    /// Wall-clock execution time in seconds.
    pub execution_time: f64,
}

impl ExecutionResult {
    /// Create a result with the given counts.
    pub fn new(
        provider: ProviderKind,
        backend_used: impl Into<String>,
        measurements: BTreeMap<String, u64>,
    ) -> Self {
        Self {
            measurements,
            states: Vec::new(),
            provider,
            backend_used: backend_used.into(),
            execution_time: 0.0,
        }
    }

    /// Set per-qubit states.
    #[must_use]
    pub fn with_states(mut self, states: Vec<QubitState>) -> Self {
        self.states = states;
        self
    }

    /// Set the execution time in seconds.
    #[must_use]
    pub fn with_execution_time(mut self, seconds: f64) -> Self {
        self.execution_time = seconds;
        self
    }

    /// Sum of all counts.
    pub fn total_shots(&self) -> u64 {
        self.measurements.values().sum()
    }

    /// Most frequent bitstring; ties resolve to the lexicographically
    /// smallest.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.measurements
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(bits, &count)| (bits.as_str(), count))
    }
}
