//! qsynth Algorithm Generators
//!
//! Deterministic generators that compile algorithm parameters into
//! [`qsynth_ir::Circuit`]s.
//!
//! # Generators
//!
//! | Generator | Entry point | Declared steps |
//! |-----------|-------------|----------------|
//! | Grover-style search | [`GroverSearch`], [`grover_circuit`] | `1 + 3·k` |
//! | QFT-style transform | [`qft_circuit`] | `2n` |
//!
//! Identical inputs always produce an identical gate sequence.
//!
//! # Example
//!
//! ```rust
//! use qsynth_algo::{grover_circuit, optimal_iterations};
//!
//! // Search a 3-qubit space for |101⟩.
//! let oracle = |bits: &[bool]| bits == [true, false, true];
//! let circuit = grover_circuit(3, oracle, None).unwrap();
//!
//! assert_eq!(optimal_iterations(3), 2);
//! assert_eq!(circuit.num_steps(), 7);
//! ```

pub mod error;
pub mod grover;
pub mod oracle;
pub mod qft;

pub use error::{AlgoError, AlgoResult};
pub use grover::{
    DEFAULT_MAX_SEARCH_QUBITS, GroverSearch, MAX_ENUMERABLE_QUBITS, grover_circuit,
    optimal_iterations,
};
pub use oracle::{MarkedStates, Oracle};
pub use qft::qft_circuit;
