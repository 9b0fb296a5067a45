//! Executor registry and request dispatch.
//!
//! The [`ExecutorRegistry`] is passed explicitly to whatever serves
//! execution requests; there is no global provider table.

use std::sync::Arc;
use std::time::Duration;

use rustc_hash::FxHashMap;
use tracing::{debug, info, instrument};

use crate::error::{HalError, HalResult};
use crate::execution::{ExecutionRequest, ExecutionResult};
use crate::executor::Executor;
use crate::provider::ProviderKind;

/// Registered executors keyed by provider.
#[derive(Default)]
pub struct ExecutorRegistry {
    executors: FxHashMap<ProviderKind, Arc<dyn Executor>>,
    /// Upper bound on a single execution. `None` waits indefinitely.
    timeout: Option<Duration>,
}

impl ExecutorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail dispatches that take longer than `timeout`.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Register an executor under its own provider, replacing any previous
    /// one.
    pub fn register(&mut self, executor: impl Executor + 'static) {
        self.register_shared(Arc::new(executor));
    }

    /// Register a shared executor.
    pub fn register_shared(&mut self, executor: Arc<dyn Executor>) {
        let provider = executor.provider();
        debug!("Registering executor for provider: {}", provider);
        self.executors.insert(provider, executor);
    }

    /// Executor for `provider`.
    pub fn get(&self, provider: ProviderKind) -> HalResult<Arc<dyn Executor>> {
        self.executors
            .get(&provider)
            .cloned()
            .ok_or_else(|| {
                HalError::ProviderNotConfigured(format!(
                    "No executor registered for provider '{provider}'"
                ))
            })
    }

    /// Check if an executor is registered for `provider`.
    pub fn has_provider(&self, provider: ProviderKind) -> bool {
        self.executors.contains_key(&provider)
    }

    /// Registered providers in wire-tag order.
    pub fn providers(&self) -> Vec<ProviderKind> {
        let mut providers: Vec<_> = self.executors.keys().copied().collect();
        providers.sort();
        providers
    }

    /// Number of registered executors.
    pub fn len(&self) -> usize {
        self.executors.len()
    }

    /// Check if no executor is registered.
    pub fn is_empty(&self) -> bool {
        self.executors.is_empty()
    }

    /// Validate a request and run it on its provider's executor.
    #[instrument(skip(self, request), fields(provider = %request.provider, shots = request.shots))]
    pub async fn dispatch(&self, request: &ExecutionRequest) -> HalResult<ExecutionResult> {
        request.validate()?;
        let executor = self.get(request.provider)?;

        info!(
            "Dispatching '{}' ({} qubits) to {}/{}",
            request.circuit.name(),
            request.circuit.num_qubits(),
            request.provider,
            request.backend()
        );

        let execution = executor.execute(
            &request.circuit,
            request.shots,
            request.backend_name.as_deref(),
        );
        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, execution)
                .await
                .map_err(|_| {
                    HalError::Timeout(format!(
                        "{}/{} did not finish within {:?}",
                        request.provider,
                        request.backend(),
                        limit
                    ))
                })??,
            None => execution.await?,
        };

        debug!(
            "Execution on {} finished in {:.3}s",
            result.backend_used, result.execution_time
        );
        Ok(result)
    }
}

impl std::fmt::Debug for ExecutorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutorRegistry")
            .field("providers", &self.providers())
            .field("timeout", &self.timeout)
            .finish()
    }
}
