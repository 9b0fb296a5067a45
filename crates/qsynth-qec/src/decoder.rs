//! Syndrome decoding.
//!
//! [`NearestNeighborDecoder`] is a purely local rule: each flagged syndrome
//! is corrected on its first neighboring data qubit. There is no matching
//! between flags, no path reconstruction and no weighting. A decoder built on
//! minimum-weight perfect matching would implement the same [`Decoder`]
//! trait.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::syndrome::Syndrome;
use crate::topology::SurfaceCodeTopology;

/// Pauli operator applied by a correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PauliOp {
    /// Bit flip.
    X,
    /// Phase flip.
    Z,
}

impl fmt::Display for PauliOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PauliOp::X => f.write_str("X"),
            PauliOp::Z => f.write_str("Z"),
        }
    }
}

/// A Pauli operator to apply to one data qubit.
///
/// Serialized as a `[op, data_qubit]` pair, e.g. `["X", 4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(PauliOp, u32)", into = "(PauliOp, u32)")]
pub struct Correction {
    /// Operator to apply.
    pub op: PauliOp,
    /// Data qubit index.
    pub data_qubit: u32,
}

impl Correction {
    /// Create a correction.
    pub fn new(op: PauliOp, data_qubit: u32) -> Self {
        Self { op, data_qubit }
    }
}

impl From<(PauliOp, u32)> for Correction {
    fn from((op, data_qubit): (PauliOp, u32)) -> Self {
        Self { op, data_qubit }
    }
}

impl From<Correction> for (PauliOp, u32) {
    fn from(c: Correction) -> Self {
        (c.op, c.data_qubit)
    }
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} q{}", self.op, self.data_qubit)
    }
}

/// Turns a measured syndrome into corrections.
pub trait Decoder: Send + Sync {
    /// Corrections for `syndrome`, in ascending syndrome-index order.
    ///
    /// Decoding never fails; a syndrome with no usable flags yields an empty
    /// list.
    fn decode(&self, syndrome: &Syndrome) -> Vec<Correction>;
}

/// Local decoder that fixes each flag on its first neighbor.
///
/// For every set bit `i` with a non-empty neighborhood, emits one correction
/// on `neighbors(i)[0]`: `X` when `i / (d−1)` is even, `Z` when it is odd.
/// Flags on sites without neighbors, including indices past the end of the
/// topology, are dropped.
///
/// ```rust
/// use qsynth_qec::{Correction, Decoder, NearestNeighborDecoder, PauliOp};
/// use qsynth_qec::{Syndrome, SurfaceCodeTopology};
///
/// let topology = SurfaceCodeTopology::new(3).unwrap();
/// let decoder = NearestNeighborDecoder::new(&topology);
///
/// let corrections = decoder.decode(&Syndrome::parse("10000000").unwrap());
/// assert_eq!(corrections, vec![Correction::new(PauliOp::X, 0)]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NearestNeighborDecoder<'a> {
    topology: &'a SurfaceCodeTopology,
}

impl<'a> NearestNeighborDecoder<'a> {
    /// Create a decoder over `topology`.
    pub fn new(topology: &'a SurfaceCodeTopology) -> Self {
        Self { topology }
    }

    /// The topology this decoder reads.
    pub fn topology(&self) -> &'a SurfaceCodeTopology {
        self.topology
    }

    fn correction_for(&self, index: u32) -> Option<Correction> {
        let first = *self.topology.neighbors(index).first()?;
        let (row, _) = self.topology.grid_position(index);
        let op = if row % 2 == 0 { PauliOp::X } else { PauliOp::Z };
        Some(Correction::new(op, first))
    }
}

impl Decoder for NearestNeighborDecoder<'_> {
    #[instrument(skip(self, syndrome), fields(weight = syndrome.weight()))]
    fn decode(&self, syndrome: &Syndrome) -> Vec<Correction> {
        let expected = self.topology.syndrome_qubit_count() as usize;
        if syndrome.len() != expected {
            debug!(
                "Syndrome length {} does not match {} syndrome qubits",
                syndrome.len(),
                expected
            );
        }

        let corrections: Vec<_> = syndrome
            .flagged()
            .filter_map(|i| u32::try_from(i).ok())
            .filter_map(|i| self.correction_for(i))
            .collect();

        debug!(
            "Decoded {} flags into {} corrections",
            syndrome.weight(),
            corrections.len()
        );
        corrections
    }
}
