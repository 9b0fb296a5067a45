//! Surface-code lattice model.
//!
//! A distance-`d` code has `d²` data qubits and `2(d−1)²` syndrome (ancilla)
//! qubits. Syndrome index `i` sits at `row = i / (d−1)`, `col = i % (d−1)` on
//! a grid `d−1` columns wide. Sites with both coordinates even measure an
//! X-type stabilizer, sites with both odd a Z-type one, and the rest are
//! inert. An active site touches up to four data qubits:
//!
//! ```text
//!   row·d + col       row·d + col + 1
//!   (row+1)·d + col   (row+1)·d + col + 1
//! ```
//!
//! Candidates at or above `d²` are dropped, so sites in the lower half of the
//! ancilla grid have fewer neighbors or none.

use serde::Serialize;
use tracing::debug;

use qsynth_ir::QubitId;

use crate::error::{QecError, QecResult};

/// Smallest supported code distance.
pub const MIN_DISTANCE: u32 = 3;

/// Largest supported code distance.
///
/// Keeps every absolute qubit index and the neighbor table comfortably
/// within `u32` and memory.
pub const MAX_DISTANCE: u32 = 1001;

/// Stabilizer measured by a syndrome qubit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StabilizerType {
    /// X-type stabilizer (both grid coordinates even).
    X,
    /// Z-type stabilizer (both grid coordinates odd).
    Z,
    /// No stabilizer; the site has no neighbors.
    Inert,
}

/// A syndrome qubit with its position and neighborhood, for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyndromeSite {
    /// Syndrome index.
    pub index: u32,
    /// Absolute qubit in the stabilizer circuit.
    pub qubit: QubitId,
    /// Stabilizer classification.
    #[serde(rename = "type")]
    pub kind: StabilizerType,
    /// Neighboring data qubits.
    pub neighbors: Vec<u32>,
}

/// Surface-code topology for a fixed code distance.
///
/// Immutable after construction and safe to share across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceCodeTopology {
    distance: u32,
    /// Neighbor lists indexed by syndrome index.
    neighbors: Vec<Vec<u32>>,
}

impl SurfaceCodeTopology {
    /// Build the topology for `distance`.
    ///
    /// Fails with [`QecError::InvalidParameter`] unless `distance` is odd and
    /// between [`MIN_DISTANCE`] and [`MAX_DISTANCE`].
    pub fn new(distance: u32) -> QecResult<Self> {
        if distance < MIN_DISTANCE || distance % 2 == 0 {
            return Err(QecError::InvalidParameter(format!(
                "code distance must be odd and at least {MIN_DISTANCE}, got {distance}"
            )));
        }
        if distance > MAX_DISTANCE {
            return Err(QecError::InvalidParameter(format!(
                "code distance {distance} exceeds the maximum of {MAX_DISTANCE}"
            )));
        }

        let width = distance - 1;
        let data = distance * distance;
        let neighbors = (0..2 * width * width)
            .map(|i| {
                let (row, col) = (i / width, i % width);
                match classify(row, col) {
                    StabilizerType::Inert => Vec::new(),
                    _ => [
                        row * distance + col,
                        row * distance + col + 1,
                        (row + 1) * distance + col,
                        (row + 1) * distance + col + 1,
                    ]
                    .into_iter()
                    .filter(|&q| q < data)
                    .collect(),
                }
            })
            .collect::<Vec<_>>();

        debug!(
            "Built surface code topology: distance {}, {} data, {} syndrome qubits",
            distance,
            data,
            neighbors.len()
        );

        Ok(Self {
            distance,
            neighbors,
        })
    }

    /// Code distance.
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Number of data qubits, `d²`.
    pub fn data_qubit_count(&self) -> u32 {
        self.distance * self.distance
    }

    /// Number of syndrome qubits, `2(d−1)²`.
    pub fn syndrome_qubit_count(&self) -> u32 {
        // Bounded by MAX_DISTANCE at construction.
        self.neighbors.len() as u32
    }

    /// Data plus syndrome qubits.
    pub fn total_qubits(&self) -> u32 {
        self.data_qubit_count() + self.syndrome_qubit_count()
    }

    /// Data qubits adjacent to syndrome qubit `index`.
    ///
    /// Empty for inert sites and for indices past the last syndrome qubit.
    pub fn neighbors(&self, index: u32) -> &[u32] {
        self.neighbors
            .get(index as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Stabilizer measured by syndrome qubit `index`.
    ///
    /// Indices past the last syndrome qubit are reported as inert.
    pub fn stabilizer_type(&self, index: u32) -> StabilizerType {
        if index >= self.syndrome_qubit_count() {
            return StabilizerType::Inert;
        }
        let (row, col) = self.grid_position(index);
        classify(row, col)
    }

    /// `(row, col)` of syndrome qubit `index` on the ancilla grid.
    pub fn grid_position(&self, index: u32) -> (u32, u32) {
        let width = self.distance - 1;
        (index / width, index % width)
    }

    /// Absolute qubit of syndrome qubit `index` in the stabilizer circuit.
    ///
    /// Data qubits occupy `0..d²`; syndrome qubits follow.
    pub fn syndrome_qubit(&self, index: u32) -> QubitId {
        QubitId(self.data_qubit_count() + index)
    }

    /// Every syndrome site in index order.
    pub fn sites(&self) -> impl Iterator<Item = SyndromeSite> + '_ {
        (0..self.syndrome_qubit_count()).map(|index| SyndromeSite {
            index,
            qubit: self.syndrome_qubit(index),
            kind: self.stabilizer_type(index),
            neighbors: self.neighbors(index).to_vec(),
        })
    }

    /// Syndrome indices with at least one neighbor.
    pub fn active_sites(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.syndrome_qubit_count()).filter(|&i| !self.neighbors(i).is_empty())
    }
}

fn classify(row: u32, col: u32) -> StabilizerType {
    match (row % 2, col % 2) {
        (0, 0) => StabilizerType::X,
        (1, 1) => StabilizerType::Z,
        _ => StabilizerType::Inert,
    }
}
