//! Gate tags and positioned gates.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::qubit::{Position, QubitId};

/// Tag identifying what a gate does.
///
/// The vocabulary is open: the wire format carries the tag as a free-form
/// string and each executor decides which tags it accepts. Tags outside the
/// built-in set round-trip unchanged through [`GateKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GateKind {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Controlled-NOT gate. Targets `position.qubit`, controlled by `control`.
    Cnot,
    /// Computational-basis measurement.
    Measure,
    /// Any other tag, kept verbatim.
    Other(String),
}

impl GateKind {
    /// Wire name of this tag.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            GateKind::H => "H",
            GateKind::X => "X",
            GateKind::Y => "Y",
            GateKind::Z => "Z",
            GateKind::Cnot => "CNOT",
            GateKind::Measure => "MEASURE",
            GateKind::Other(name) => name,
        }
    }

    /// Whether gates of this kind need a control qubit.
    ///
    /// Besides `CNOT`, the common two-qubit controlled spellings are
    /// recognised so that hand-written or generated IR using them is held to
    /// the same invariant.
    pub fn is_controlled(&self) -> bool {
        match self {
            GateKind::Cnot => true,
            GateKind::Other(name) => matches!(name.as_str(), "CX" | "CY" | "CZ" | "CH"),
            _ => false,
        }
    }

    /// Whether this is a measurement.
    #[inline]
    pub fn is_measure(&self) -> bool {
        matches!(self, GateKind::Measure)
    }
}

impl From<&str> for GateKind {
    fn from(tag: &str) -> Self {
        match tag {
            "H" => GateKind::H,
            "X" => GateKind::X,
            "Y" => GateKind::Y,
            "Z" => GateKind::Z,
            "CNOT" => GateKind::Cnot,
            "MEASURE" => GateKind::Measure,
            other => GateKind::Other(other.to_string()),
        }
    }
}

impl From<String> for GateKind {
    fn from(tag: String) -> Self {
        match GateKind::from(tag.as_str()) {
            GateKind::Other(_) => GateKind::Other(tag),
            known => known,
        }
    }
}

impl From<GateKind> for String {
    fn from(kind: GateKind) -> Self {
        match kind {
            GateKind::Other(name) => name,
            known => known.name().to_string(),
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A gate placed on the instruction grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gate {
    /// What the gate does.
    #[serde(rename = "type")]
    pub kind: GateKind,
    /// Target qubit and time step.
    pub position: Position,
    /// Control qubit for controlled gates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control: Option<QubitId>,
}

impl Gate {
    /// Create an uncontrolled gate.
    pub fn new(kind: impl Into<GateKind>, qubit: u32, step: u32) -> Self {
        Self {
            kind: kind.into(),
            position: Position::new(qubit, step),
            control: None,
        }
    }

    /// Create a controlled gate acting on `target`.
    pub fn controlled(kind: impl Into<GateKind>, control: u32, target: u32, step: u32) -> Self {
        Self {
            kind: kind.into(),
            position: Position::new(target, step),
            control: Some(QubitId(control)),
        }
    }

    /// Target qubit.
    #[inline]
    pub fn qubit(&self) -> QubitId {
        self.position.qubit
    }

    /// Time step.
    #[inline]
    pub fn step(&self) -> u32 {
        self.position.step
    }

    /// All qubits this gate touches, control first.
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.control.into_iter().chain(std::iter::once(self.position.qubit))
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.control {
            Some(control) => write!(f, "{} {} -> {}", self.kind, control, self.position),
            None => write!(f, "{} {}", self.kind, self.position),
        }
    }
}
