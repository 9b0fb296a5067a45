//! Error types for the algorithm generators.

use qsynth_ir::IrError;
use thiserror::Error;

/// Errors that can occur while generating algorithm circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AlgoError {
    /// A generator parameter is outside its supported range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The generated circuit violated an IR invariant.
    #[error("IR error: {0}")]
    Ir(#[from] IrError),
}

/// Result type for generator operations.
pub type AlgoResult<T> = Result<T, AlgoError>;
