//! Grid circuit container and builder API.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::{Gate, GateKind};
use crate::qubit::QubitId;

/// A quantum circuit laid out on a `qubits × steps` grid.
///
/// Gates are kept in emission order. Appending checks the qubit and control
/// invariants of every gate; the declared step count is a budget reported by
/// the producer and is only checked on request via
/// [`Circuit::check_step_bounds`].
///
/// Serializes to the external wire format:
///
/// ```json
/// {"gates": [...], "qubits": 2, "steps": 2, "name": "bell", "description": "..."}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CircuitRepr")]
pub struct Circuit {
    /// Gates in emission order.
    gates: Vec<Gate>,
    /// Number of qubits.
    #[serde(rename = "qubits")]
    num_qubits: u32,
    /// Declared number of time steps.
    #[serde(rename = "steps")]
    num_steps: u32,
    /// Name of the circuit.
    name: String,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

/// Unchecked wire representation, validated into a [`Circuit`].
#[derive(Deserialize)]
struct CircuitRepr {
    gates: Vec<Gate>,
    qubits: u32,
    steps: u32,
    name: String,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<CircuitRepr> for Circuit {
    type Error = IrError;

    fn try_from(repr: CircuitRepr) -> IrResult<Self> {
        let mut circuit = Circuit::new(repr.name, repr.qubits, repr.steps)?;
        circuit.description = repr.description;
        circuit.gates.reserve(repr.gates.len());
        for gate in repr.gates {
            circuit.push(gate)?;
        }
        Ok(circuit)
    }
}

impl Circuit {
    /// Create an empty circuit with the given grid dimensions.
    ///
    /// Both dimensions must be non-zero.
    pub fn new(name: impl Into<String>, num_qubits: u32, num_steps: u32) -> IrResult<Self> {
        if num_qubits == 0 {
            return Err(IrError::InvalidParameter(
                "circuit must have at least one qubit".into(),
            ));
        }
        if num_steps == 0 {
            return Err(IrError::InvalidParameter(
                "circuit must have at least one step".into(),
            ));
        }
        Ok(Self {
            gates: vec![],
            num_qubits,
            num_steps,
            name: name.into(),
            description: None,
        })
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a gate after checking it against the circuit's qubit range.
    pub fn push(&mut self, gate: Gate) -> IrResult<&mut Self> {
        self.check_gate(&gate)?;
        self.gates.push(gate);
        Ok(self)
    }

    fn check_gate(&self, gate: &Gate) -> IrResult<()> {
        let target = gate.qubit();
        if target.0 >= self.num_qubits {
            return Err(IrError::QubitOutOfRange {
                qubit: target,
                num_qubits: self.num_qubits,
                gate_name: Some(gate.kind.to_string()),
            });
        }

        match gate.control {
            Some(control) if control.0 >= self.num_qubits => Err(IrError::ControlOutOfRange {
                control,
                num_qubits: self.num_qubits,
                gate_name: gate.kind.to_string(),
            }),
            Some(control) if control == target => Err(IrError::ControlIsTarget {
                qubit: control,
                gate_name: gate.kind.to_string(),
            }),
            None if gate.kind.is_controlled() => Err(IrError::MissingControl(gate.kind.clone())),
            _ => Ok(()),
        }
    }

    // =========================================================================
    // Gate helpers
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: u32, step: u32) -> IrResult<&mut Self> {
        self.push(Gate::new(GateKind::H, qubit, step))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: u32, step: u32) -> IrResult<&mut Self> {
        self.push(Gate::new(GateKind::X, qubit, step))
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: u32, step: u32) -> IrResult<&mut Self> {
        self.push(Gate::new(GateKind::Y, qubit, step))
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: u32, step: u32) -> IrResult<&mut Self> {
        self.push(Gate::new(GateKind::Z, qubit, step))
    }

    /// Apply CNOT gate.
    pub fn cnot(&mut self, control: u32, target: u32, step: u32) -> IrResult<&mut Self> {
        self.push(Gate::controlled(GateKind::Cnot, control, target, step))
    }

    /// Measure a qubit.
    pub fn measure(&mut self, qubit: u32, step: u32) -> IrResult<&mut Self> {
        self.push(Gate::new(GateKind::Measure, qubit, step))
    }

    /// Measure every qubit at `step`.
    pub fn measure_all(&mut self, step: u32) -> IrResult<&mut Self> {
        for qubit in 0..self.num_qubits {
            self.measure(qubit, step)?;
        }
        Ok(self)
    }

    /// Apply an arbitrary uncontrolled gate.
    pub fn gate(
        &mut self,
        kind: impl Into<GateKind>,
        qubit: u32,
        step: u32,
    ) -> IrResult<&mut Self> {
        self.push(Gate::new(kind, qubit, step))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Get the declared number of steps.
    pub fn num_steps(&self) -> u32 {
        self.num_steps
    }

    /// Gates in emission order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Number of gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Check if the circuit has no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Number of steps actually occupied by gates (highest step + 1).
    ///
    /// May exceed [`Circuit::num_steps`] for producers whose declared budget
    /// undercounts their layout.
    pub fn depth(&self) -> u32 {
        self.gates
            .iter()
            .map(|g| g.step().saturating_add(1))
            .max()
            .unwrap_or(0)
    }

    /// Gates placed at `step`, in emission order.
    pub fn gates_at_step(&self, step: u32) -> impl Iterator<Item = &Gate> + '_ {
        self.gates.iter().filter(move |g| g.step() == step)
    }

    /// Count gates of a given kind.
    pub fn count_kind(&self, kind: &GateKind) -> usize {
        self.gates.iter().filter(|g| &g.kind == kind).count()
    }

    /// Verify that every gate lies within the declared step count.
    ///
    /// Reports the first offending gate in emission order.
    pub fn check_step_bounds(&self) -> IrResult<()> {
        match self.gates.iter().find(|g| g.step() >= self.num_steps) {
            Some(gate) => Err(IrError::StepOutOfRange {
                step: gate.step(),
                num_steps: self.num_steps,
                gate_name: gate.kind.to_string(),
            }),
            None => Ok(()),
        }
    }

    // =========================================================================
    // Wire format
    // =========================================================================

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> IrResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> IrResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a circuit from JSON.
    pub fn from_json(json: &str) -> IrResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    // =========================================================================
    // Pre-built circuits
    // =========================================================================

    /// Create a Bell state circuit: H, CNOT, then measure both qubits.
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Self::new("bell", 2, 3)?;
        circuit.h(0, 0)?.cnot(0, 1, 1)?.measure_all(2)?;
        Ok(circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_circuit() {
        let circuit = Circuit::new("test", 3, 4).unwrap();
        assert_eq!(circuit.name(), "test");
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_steps(), 4);
        assert!(circuit.is_empty());
        assert_eq!(circuit.depth(), 0);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Circuit::new("test", 0, 1),
            Err(IrError::InvalidParameter(_))
        ));
        assert!(matches!(
            Circuit::new("test", 1, 0),
            Err(IrError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_bell_state() {
        let circuit = Circuit::bell().unwrap();
        assert_eq!(circuit.len(), 4);
        assert_eq!(circuit.depth(), 3);
        assert_eq!(circuit.count_kind(&GateKind::Measure), 2);
        assert!(circuit.check_step_bounds().is_ok());
    }

    #[test]
    fn test_fluent_api() {
        let mut circuit = Circuit::new("test", 2, 2).unwrap();
        circuit.h(0, 0).unwrap().x(1, 0).unwrap().cnot(0, 1, 1).unwrap();
        assert_eq!(circuit.len(), 3);
        assert_eq!(circuit.gates_at_step(0).count(), 2);
    }

    #[test]
    fn test_qubit_out_of_range() {
        let mut circuit = Circuit::new("test", 2, 2).unwrap();
        let err = circuit.h(2, 0).unwrap_err();
        assert!(matches!(err, IrError::QubitOutOfRange { qubit: QubitId(2), .. }));
    }

    #[test]
    fn test_control_checks() {
        let mut circuit = Circuit::new("test", 2, 2).unwrap();
        assert!(matches!(
            circuit.cnot(5, 1, 0),
            Err(IrError::ControlOutOfRange { .. })
        ));
        assert!(matches!(
            circuit.cnot(1, 1, 0),
            Err(IrError::ControlIsTarget { .. })
        ));
        assert!(matches!(
            circuit.gate(GateKind::Cnot, 1, 0),
            Err(IrError::MissingControl(GateKind::Cnot))
        ));
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_steps_are_not_bounded_on_push() {
        let mut circuit = Circuit::new("test", 1, 1).unwrap();
        circuit.h(0, 0).unwrap().measure(0, 1).unwrap();
        assert_eq!(circuit.depth(), 2);
        assert!(matches!(
            circuit.check_step_bounds(),
            Err(IrError::StepOutOfRange { step: 1, num_steps: 1, .. })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let circuit = Circuit::bell().unwrap().with_description("entangle two qubits");
        let json = circuit.to_json().unwrap();
        let parsed = Circuit::from_json(&json).unwrap();
        assert_eq!(parsed, circuit);
    }

    #[test]
    fn test_json_omits_absent_description() {
        let circuit = Circuit::new("empty", 1, 1).unwrap();
        assert_eq!(
            circuit.to_json().unwrap(),
            r#"{"gates":[],"qubits":1,"steps":1,"name":"empty"}"#
        );
    }

    #[test]
    fn test_from_json_rejects_missing_control() {
        let json = r#"{
            "gates": [{"type": "CNOT", "position": {"qubit": 1, "step": 0}}],
            "qubits": 2, "steps": 1, "name": "broken"
        }"#;
        let err = Circuit::from_json(json).unwrap_err();
        assert!(err.to_string().contains("requires a control qubit"));
    }

    #[test]
    fn test_from_json_rejects_zero_qubits() {
        let json = r#"{"gates": [], "qubits": 0, "steps": 1, "name": "empty"}"#;
        assert!(Circuit::from_json(json).is_err());
    }

    #[test]
    fn test_from_json_keeps_unknown_tags() {
        let json = r#"{
            "gates": [{"type": "T", "position": {"qubit": 0, "step": 0}}],
            "qubits": 1, "steps": 1, "name": "t", "description": null
        }"#;
        let circuit = Circuit::from_json(json).unwrap();
        assert_eq!(circuit.gates()[0].kind, GateKind::Other("T".into()));
        assert_eq!(circuit.description(), None);
    }
}
