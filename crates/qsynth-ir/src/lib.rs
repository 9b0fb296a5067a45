//! qsynth Circuit Intermediate Representation
//!
//! This crate provides the data structures every qsynth generator emits and
//! every consumer (executors, the CLI, external IR producers) reads.
//!
//! # Overview
//!
//! A [`Circuit`] is a `qubits × steps` instruction grid. Each [`Gate`] carries
//! a [`GateKind`] tag, a [`Position`] on the grid and, for controlled gates, a
//! control qubit. Gates are stored in the order the producer emitted them.
//!
//! # Core Components
//!
//! - **Addressing**: [`QubitId`] and [`Position`]
//! - **Gates**: [`GateKind`] (open tag vocabulary) and [`Gate`]
//! - **Circuit**: [`Circuit`] container with a checked builder API
//! - **Wire format**: JSON via [`Circuit::to_json`] / [`Circuit::from_json`]
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use qsynth_ir::{Circuit, GateKind};
//!
//! let mut circuit = Circuit::new("bell_state", 2, 3).unwrap();
//! circuit.h(0, 0).unwrap();
//! circuit.cnot(0, 1, 1).unwrap();
//! circuit.measure_all(2).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.count_kind(&GateKind::Measure), 2);
//! ```
//!
//! # Example: Parsing External IR
//!
//! ```rust
//! use qsynth_ir::Circuit;
//!
//! let json = r#"{
//!     "gates": [{"type": "CNOT", "position": {"qubit": 1, "step": 0}}],
//!     "qubits": 2, "steps": 1, "name": "broken"
//! }"#;
//!
//! // Controlled gates must name their control.
//! assert!(Circuit::from_json(json).is_err());
//! ```
//!
//! # Validation
//!
//! | Invariant | Checked |
//! |-----------|---------|
//! | `qubits > 0`, `steps > 0` | construction |
//! | `position.qubit < qubits` | every append and parse |
//! | control in range and distinct from target | every append and parse |
//! | controlled tags (`CNOT`, `CX`, `CZ`, …) carry a control | every append and parse |
//! | `position.step < steps` | on demand, [`Circuit::check_step_bounds`] |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{Gate, GateKind};
pub use qubit::{Position, QubitId};
