//! Executor trait.
//!
//! An [`Executor`] is the adapter between circuit IR and one vendor's SDK.
//! The vendor adapters themselves live outside this workspace; this trait is
//! the contract they implement.
//!
//! | Method | Kind | Returns |
//! |--------|------|---------|
//! | `provider()` | sync | [`ProviderKind`] |
//! | `gate_set()` | sync | `&GateSet` |
//! | `execute()` | async | `HalResult<ExecutionResult>` |
//! | `lower()` | sync, provided | `HalResult<LoweredCircuit>` |

use async_trait::async_trait;

use qsynth_ir::Circuit;

use crate::capability::GateSet;
use crate::error::HalResult;
use crate::execution::ExecutionResult;
use crate::lower::{LoweredCircuit, lower};
use crate::provider::ProviderKind;

/// Trait for vendor executors.
///
/// # Contract
///
/// - `gate_set()` is synchronous and infallible. Implementations cache it at
///   construction time.
/// - `execute()` runs the circuit with the given shots on `backend_name`, or
///   on the provider's default backend when `None`. Gates outside
///   `gate_set()` are skipped, not rejected.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Provider this executor talks to.
    fn provider(&self) -> ProviderKind;

    /// Tags this executor accepts.
    fn gate_set(&self) -> &GateSet;

    /// Run a circuit.
    async fn execute(
        &self,
        circuit: &Circuit,
        shots: u32,
        backend_name: Option<&str>,
    ) -> HalResult<ExecutionResult>;

    /// Lower a circuit against this executor's gate set.
    fn lower(&self, circuit: &Circuit) -> HalResult<LoweredCircuit> {
        lower(circuit, self.gate_set())
    }
}
