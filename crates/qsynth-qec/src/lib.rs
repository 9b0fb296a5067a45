//! qsynth Surface-Code Error Correction
//!
//! Lattice model, syndrome-extraction circuit and decoder for a simplified
//! rotated surface code.
//!
//! # Components
//!
//! - [`SurfaceCodeTopology`]: qubit counts and the syndrome → data-qubit
//!   neighbor table for a code distance
//! - [`stabilizer_circuit`]: fixed-depth measurement circuit as
//!   [`qsynth_ir::Circuit`]
//! - [`Syndrome`]: measured bit-vector
//! - [`Decoder`] / [`NearestNeighborDecoder`]: syndrome → [`Correction`]s
//!
//! # Example
//!
//! ```rust
//! use qsynth_qec::{Decoder, NearestNeighborDecoder, Syndrome, SurfaceCodeTopology};
//!
//! let topology = SurfaceCodeTopology::new(3).unwrap();
//! assert_eq!(topology.total_qubits(), 17);
//!
//! let circuit = topology.stabilizer_circuit().unwrap();
//! assert_eq!(circuit.num_steps(), 6);
//!
//! let decoder = NearestNeighborDecoder::new(&topology);
//! let corrections = decoder.decode(&Syndrome::zeros(8));
//! assert!(corrections.is_empty());
//! ```

pub mod decoder;
pub mod error;
pub mod stabilizer;
pub mod syndrome;
pub mod topology;

pub use decoder::{Correction, Decoder, NearestNeighborDecoder, PauliOp};
pub use error::{QecError, QecResult};
pub use stabilizer::{CNOT_LAYERS, STABILIZER_STEPS, stabilizer_circuit};
pub use syndrome::Syndrome;
pub use topology::{
    MAX_DISTANCE, MIN_DISTANCE, StabilizerType, SurfaceCodeTopology, SyndromeSite,
};
