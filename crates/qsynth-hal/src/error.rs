//! Error types for the HAL crate.

use qsynth_ir::IrError;
use thiserror::Error;

/// Errors that can occur at the executor boundary.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HalError {
    /// No executor is registered for the requested provider.
    #[error("Provider not configured: {0}")]
    ProviderNotConfigured(String),

    /// Provider tag is not one of the known providers.
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// Executor is registered but cannot run jobs right now.
    ///
    /// Raised by vendor executors from `execute()`, e.g. when the target
    /// backend is offline or in maintenance.
    #[error("Backend not available: {0}")]
    BackendUnavailable(String),

    /// Invalid circuit.
    #[error("Invalid circuit: {0}")]
    InvalidCircuit(String),

    /// Circuit exceeds executor capabilities.
    #[error("Circuit exceeds backend capabilities: {0}")]
    CircuitTooLarge(String),

    /// Unsupported feature.
    #[error("Unsupported feature: {0}")]
    Unsupported(String),

    /// Execution did not finish in time.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Invalid number of shots.
    #[error("Invalid shots: {0}")]
    InvalidShots(String),

    /// Circuit IR error.
    #[error("IR error: {0}")]
    Ir(#[from] IrError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic executor error.
    ///
    /// Raised by vendor executors from `execute()` for failures reported by
    /// the vendor SDK that have no more specific variant.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type for HAL operations.
pub type HalResult<T> = Result<T, HalError>;
