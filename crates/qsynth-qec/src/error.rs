//! Error types for the error-correction crate.

use qsynth_ir::IrError;
use thiserror::Error;

/// Errors that can occur in surface-code operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QecError {
    /// A code parameter is outside its supported range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A syndrome string contained something other than `0` or `1`.
    #[error("Invalid syndrome: unexpected '{found}' at position {position}")]
    InvalidSyndrome {
        /// Character offset of the bad symbol.
        position: usize,
        /// The symbol found.
        found: char,
    },

    /// The generated circuit violated an IR invariant.
    #[error("IR error: {0}")]
    Ir(#[from] IrError),
}

/// Result type for surface-code operations.
pub type QecResult<T> = Result<T, QecError>;
