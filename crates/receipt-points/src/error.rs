//! Error types for the processor.

use receipt_points_core::{ReceiptId, ValidationError};
use receipt_points_store::StoreError;
use thiserror::Error;

/// Errors that can occur while processing or looking up receipts.
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// The receipt was rejected.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No receipt is stored under the identifier.
    #[error("receipt not found: {0}")]
    ReceiptNotFound(ReceiptId),

    /// No identifier could be produced for an accepted receipt.
    #[error("identifier generation failed: {0}")]
    IdGeneration(String),

    /// A freshly generated identifier was already bound.
    #[error("identifier collision: {0}")]
    IdCollision(ReceiptId),

    /// Storage error.
    #[error("storage error: {0}")]
    Store(StoreError),
}

impl ProcessorError {
    /// Whether the caller, not the service, is at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ProcessorError::Validation(_) | ProcessorError::ReceiptNotFound(_)
        )
    }
}

impl From<StoreError> for ProcessorError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::IdGeneration(msg) => ProcessorError::IdGeneration(msg),
            other => ProcessorError::Store(other),
        }
    }
}

/// Result type for processor operations.
pub type Result<T> = std::result::Result<T, ProcessorError>;
