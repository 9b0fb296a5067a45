//! Dispatch tests against an in-process mock executor.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use qsynth_hal::{
    ExecutionRequest, ExecutionResult, Executor, ExecutorRegistry, GateSet, HalError, HalResult,
    Operation, ProviderKind,
};
use qsynth_ir::Circuit;

/// Executor that lowers the circuit and reports every shot as all-zeros.
struct MockExecutor {
    provider: ProviderKind,
    gate_set: GateSet,
    delay: Option<Duration>,
    offline: bool,
    calls: AtomicU32,
}

impl MockExecutor {
    fn new(provider: ProviderKind) -> Self {
        Self {
            provider,
            gate_set: GateSet::for_provider(provider),
            delay: None,
            offline: false,
            calls: AtomicU32::new(0),
        }
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn offline(mut self) -> Self {
        self.offline = true;
        self
    }
}

#[async_trait]
impl Executor for MockExecutor {
    fn provider(&self) -> ProviderKind {
        self.provider
    }

    fn gate_set(&self) -> &GateSet {
        &self.gate_set
    }

    async fn execute(
        &self,
        circuit: &Circuit,
        shots: u32,
        backend_name: Option<&str>,
    ) -> HalResult<ExecutionResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.offline {
            return Err(HalError::BackendUnavailable(format!(
                "{} is in maintenance",
                backend_name.unwrap_or(self.provider.default_backend())
            )));
        }

        let lowered = self.lower(circuit)?;
        let clbits = lowered
            .operations
            .iter()
            .filter(|op| matches!(op, Operation::Measure { .. }))
            .count();

        let mut counts = BTreeMap::new();
        counts.insert("0".repeat(clbits), u64::from(shots));
        let backend = backend_name.unwrap_or(self.provider.default_backend());
        Ok(ExecutionResult::new(self.provider, backend, counts).with_execution_time(0.01))
    }
}

#[tokio::test]
async fn test_dispatch_to_registered_provider() {
    let mut registry = ExecutorRegistry::new();
    registry.register(MockExecutor::new(ProviderKind::Ibm));
    registry.register(MockExecutor::new(ProviderKind::Google));

    let request = ExecutionRequest::new(Circuit::bell().unwrap(), ProviderKind::Google);
    let result = registry.dispatch(&request).await.unwrap();

    assert_eq!(result.provider, ProviderKind::Google);
    assert_eq!(result.backend_used, "simulator");
    assert_eq!(result.measurements.get("00"), Some(&1024));
    assert_eq!(result.total_shots(), 1024);
}

#[tokio::test]
async fn test_dispatch_forwards_backend_and_shots() {
    let mut registry = ExecutorRegistry::new();
    registry.register(MockExecutor::new(ProviderKind::Rigetti));

    let request = ExecutionRequest::new(Circuit::bell().unwrap(), ProviderKind::Rigetti)
        .with_shots(100)
        .with_backend("Aspen-M-3");
    let result = registry.dispatch(&request).await.unwrap();

    assert_eq!(result.backend_used, "Aspen-M-3");
    assert_eq!(result.total_shots(), 100);
}

#[tokio::test]
async fn test_unregistered_provider() {
    let mut registry = ExecutorRegistry::new();
    registry.register(MockExecutor::new(ProviderKind::Ibm));

    let request = ExecutionRequest::new(Circuit::bell().unwrap(), ProviderKind::Microsoft);
    let err = registry.dispatch(&request).await.unwrap_err();
    assert!(matches!(err, HalError::ProviderNotConfigured(_)));
}

#[tokio::test]
async fn test_zero_shots_rejected_before_execution() {
    let executor = Arc::new(MockExecutor::new(ProviderKind::Ibm));
    let mut registry = ExecutorRegistry::new();
    registry.register_shared(executor.clone());

    let request = ExecutionRequest::new(Circuit::bell().unwrap(), ProviderKind::Ibm).with_shots(0);
    let err = registry.dispatch(&request).await.unwrap_err();

    assert!(matches!(err, HalError::InvalidShots(_)));
    assert_eq!(executor.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_executor_errors_propagate() {
    let mut registry = ExecutorRegistry::new();
    registry.register(MockExecutor::new(ProviderKind::Google).offline());

    let request = ExecutionRequest::new(Circuit::bell().unwrap(), ProviderKind::Google);
    let err = registry.dispatch(&request).await.unwrap_err();
    assert!(matches!(err, HalError::BackendUnavailable(ref msg) if msg.contains("simulator")));
}

#[tokio::test(start_paused = true)]
async fn test_dispatch_timeout() {
    let mut registry = ExecutorRegistry::new().with_timeout(Duration::from_secs(5));
    registry.register(MockExecutor::new(ProviderKind::Ibm).with_delay(Duration::from_secs(60)));

    let request = ExecutionRequest::new(Circuit::bell().unwrap(), ProviderKind::Ibm);
    let err = registry.dispatch(&request).await.unwrap_err();
    assert!(matches!(err, HalError::Timeout(_)));
}

#[tokio::test]
async fn test_request_from_json_round_trip() {
    let mut registry = ExecutorRegistry::new();
    registry.register(MockExecutor::new(ProviderKind::Microsoft));

    let body = serde_json::to_string(
        &ExecutionRequest::new(Circuit::bell().unwrap(), ProviderKind::Microsoft).with_shots(8),
    )
    .unwrap();
    let request = ExecutionRequest::from_json(&body).unwrap();
    let result = registry.dispatch(&request).await.unwrap();
    assert_eq!(result.backend_used, "qsharp.simulator");
    assert_eq!(result.total_shots(), 8);
}

#[test]
fn test_registry_listing() {
    let mut registry = ExecutorRegistry::new();
    assert!(registry.is_empty());

    registry.register(MockExecutor::new(ProviderKind::Microsoft));
    registry.register(MockExecutor::new(ProviderKind::Ibm));
    registry.register(MockExecutor::new(ProviderKind::Ibm));

    assert_eq!(registry.len(), 2);
    assert!(registry.has_provider(ProviderKind::Ibm));
    assert!(!registry.has_provider(ProviderKind::Rigetti));
    assert_eq!(
        registry.providers(),
        vec![ProviderKind::Ibm, ProviderKind::Microsoft]
    );
}
