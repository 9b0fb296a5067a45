//! qsynth Hardware Abstraction Layer
//!
//! The boundary between circuit IR and the vendor executors that run it.
//!
//! # Overview
//!
//! - [`ProviderKind`]: the four provider tags (`ibm`, `rigetti`, `google`,
//!   `microsoft`)
//! - [`ExecutionRequest`] / [`ExecutionResult`]: execution endpoint bodies
//! - [`Executor`]: async trait each vendor adapter implements
//! - [`GateSet`] and [`lower`]: the tag vocabulary of an executor and the
//!   shared IR → operation walk
//! - [`ExecutorRegistry`]: provider → executor dispatch
//!
//! # Example: Dispatching a Request
//!
//! ```ignore
//! use qsynth_hal::{ExecutionRequest, ExecutorRegistry, ProviderKind};
//! use qsynth_ir::Circuit;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut registry = ExecutorRegistry::new();
//!     registry.register(MyIbmExecutor::connect(token).await?);
//!
//!     let request = ExecutionRequest::new(Circuit::bell()?, ProviderKind::Ibm).with_shots(2048);
//!     let result = registry.dispatch(&request).await?;
//!
//!     if let Some((bits, count)) = result.most_frequent() {
//!         println!("Most frequent: {bits} ({count} times)");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Example: Lowering
//!
//! ```rust
//! use qsynth_hal::{GateSet, Operation, lower};
//! use qsynth_ir::Circuit;
//!
//! let lowered = lower(&Circuit::bell().unwrap(), &GateSet::vendor()).unwrap();
//! assert_eq!(lowered.operations[0], Operation::H { qubit: 0 });
//! assert!(lowered.skipped.is_empty());
//! ```

pub mod capability;
pub mod error;
pub mod execution;
pub mod executor;
pub mod lower;
pub mod provider;
pub mod registry;

pub use capability::GateSet;
pub use error::{HalError, HalResult};
pub use execution::{
    Amplitudes, DEFAULT_SHOTS, ExecutionRequest, ExecutionResult, QubitState,
};
pub use executor::Executor;
pub use lower::{LoweredCircuit, Operation, SkippedGate, lower};
pub use provider::ProviderKind;
pub use registry::ExecutorRegistry;
