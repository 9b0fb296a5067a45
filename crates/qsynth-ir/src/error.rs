//! Error types for the IR crate.

use crate::gate::GateKind;
use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A circuit dimension or other construction parameter is out of range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Gate target lies outside the circuit.
    #[error("Qubit {qubit} out of range for circuit with {num_qubits} qubits{}", format_gate_context(.gate_name))]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Qubit count of the circuit.
        num_qubits: u32,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Control qubit lies outside the circuit.
    #[error("Control {control} out of range for circuit with {num_qubits} qubits (gate: {gate_name})")]
    ControlOutOfRange {
        /// The offending control.
        control: QubitId,
        /// Qubit count of the circuit.
        num_qubits: u32,
        /// Gate name for context.
        gate_name: String,
    },

    /// Control and target are the same qubit.
    #[error("Gate '{gate_name}' uses {qubit} as both control and target")]
    ControlIsTarget {
        /// The duplicated qubit.
        qubit: QubitId,
        /// Gate name for context.
        gate_name: String,
    },

    /// A controlled gate was given without a control qubit.
    #[error("Gate '{0}' requires a control qubit")]
    MissingControl(GateKind),

    /// Gate step lies outside the declared step count.
    #[error("Step {step} out of range for circuit with {num_steps} steps (gate: {gate_name})")]
    StepOutOfRange {
        /// The offending step.
        step: u32,
        /// Declared step count of the circuit.
        num_steps: u32,
        /// Gate name for context.
        gate_name: String,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
