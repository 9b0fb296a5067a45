//! Lowering circuit IR to executor operations.
//!
//! Every vendor adapter walks the IR in emission order and translates the
//! tags it knows. [`lower`] is that shared walk: it produces a flat
//! [`Operation`] list and records the gates it skipped.

use serde::Serialize;
use tracing::{debug, instrument, warn};

use qsynth_ir::{Circuit, Gate, GateKind};

use crate::capability::GateSet;
use crate::error::{HalError, HalResult};

/// A single executor instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Operation {
    /// Hadamard.
    H {
        /// Target qubit.
        qubit: u32,
    },
    /// Pauli-X.
    X {
        /// Target qubit.
        qubit: u32,
    },
    /// Pauli-Y.
    Y {
        /// Target qubit.
        qubit: u32,
    },
    /// Pauli-Z.
    Z {
        /// Target qubit.
        qubit: u32,
    },
    /// Controlled-NOT.
    Cnot {
        /// Control qubit.
        control: u32,
        /// Target qubit.
        target: u32,
    },
    /// Measurement into a classical bit.
    Measure {
        /// Measured qubit.
        qubit: u32,
        /// Classical bit receiving the outcome.
        clbit: u32,
    },
}

/// A gate left out of the lowered circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedGate {
    /// Index of the gate in the circuit's emission order.
    pub index: usize,
    /// Its tag.
    pub kind: GateKind,
}

/// Result of lowering a circuit for one executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoweredCircuit {
    /// Width of the quantum and classical registers.
    pub num_qubits: u32,
    /// Operations in emission order.
    pub operations: Vec<Operation>,
    /// Gates whose tag the executor does not accept.
    pub skipped: Vec<SkippedGate>,
}

impl LoweredCircuit {
    /// Number of operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if nothing was lowered.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

/// Lower `circuit` to the operations of an executor with `gate_set`.
///
/// Measurements write to the classical bit with the qubit's own index.
///
/// # Errors
///
/// - [`HalError::CircuitTooLarge`] if the circuit is wider than
///   `gate_set.max_qubits`.
/// - [`HalError::InvalidCircuit`] if an accepted `CNOT` has no control.
/// - [`HalError::Unsupported`] if the gate set accepts a tag that has no
///   operation.
#[instrument(skip(circuit, gate_set), fields(circuit = circuit.name()))]
pub fn lower(circuit: &Circuit, gate_set: &GateSet) -> HalResult<LoweredCircuit> {
    if let Some(max) = gate_set.max_qubits {
        if circuit.num_qubits() > max {
            return Err(HalError::CircuitTooLarge(format!(
                "Circuit requires {} qubits but backend only has {}",
                circuit.num_qubits(),
                max
            )));
        }
    }

    let mut operations = Vec::with_capacity(circuit.len());
    let mut skipped = Vec::new();

    for (index, gate) in circuit.gates().iter().enumerate() {
        if !gate_set.contains(&gate.kind) {
            skipped.push(SkippedGate {
                index,
                kind: gate.kind.clone(),
            });
            continue;
        }
        operations.push(lower_gate(gate)?);
    }

    if !skipped.is_empty() {
        warn!(
            "Skipped {} gates with unsupported tags in '{}'",
            skipped.len(),
            circuit.name()
        );
    }
    debug!("Lowered {} operations", operations.len());

    Ok(LoweredCircuit {
        num_qubits: circuit.num_qubits(),
        operations,
        skipped,
    })
}

fn lower_gate(gate: &Gate) -> HalResult<Operation> {
    let qubit = gate.qubit().0;
    let op = match &gate.kind {
        GateKind::H => Operation::H { qubit },
        GateKind::X => Operation::X { qubit },
        GateKind::Y => Operation::Y { qubit },
        GateKind::Z => Operation::Z { qubit },
        GateKind::Cnot => {
            let control = gate.control.ok_or_else(|| {
                HalError::InvalidCircuit("CNOT gate requires a control qubit".into())
            })?;
            Operation::Cnot {
                control: control.0,
                target: qubit,
            }
        }
        GateKind::Measure => Operation::Measure {
            qubit,
            clbit: qubit,
        },
        GateKind::Other(tag) => {
            return Err(HalError::Unsupported(format!(
                "no executor operation for gate '{tag}'"
            )));
        }
    };
    Ok(op)
}
