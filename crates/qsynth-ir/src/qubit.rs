//! Qubit identifiers and grid positions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a qubit within a circuit.
///
/// Serialized as a bare integer, matching the `qubit` and `control` fields of
/// the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QubitId(pub u32);

impl QubitId {
    /// The raw index.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

/// Coordinate of a gate in the two-dimensional instruction grid.
///
/// `qubit` selects the row (the target wire), `step` the column (the time
/// slot). Both are plain non-negative indices; range checks against a
/// particular circuit happen when the gate is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Target qubit.
    pub qubit: QubitId,
    /// Time step.
    pub step: u32,
}

impl Position {
    /// Create a new position.
    pub fn new(qubit: u32, step: u32) -> Self {
        Self {
            qubit: QubitId(qubit),
            step,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.qubit, self.step)
    }
}
