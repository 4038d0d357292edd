//! Receipt identifier generation.

use rand::rngs::OsRng;
use rand::RngCore;
use uuid::Builder;

use receipt_points_core::ReceiptId;

use crate::error::{Result, StoreError};

/// A source of fresh receipt identifiers.
///
/// Identifiers must be unique for practical purposes; the store still refuses
/// to rebind one that is already taken.
pub trait IdGenerator: Send + Sync {
    /// Produce a new identifier.
    fn generate(&self) -> Result<ReceiptId>;
}

/// Random version-4 UUIDs drawn from the operating system RNG.
///
/// An RNG failure is reported as [`StoreError::IdGeneration`] instead of
/// panicking, so only the request that needed the identifier fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> Result<ReceiptId> {
        let mut bytes = [0u8; 16];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| StoreError::IdGeneration(e.to_string()))?;

        let uuid = Builder::from_random_bytes(bytes).into_uuid();
        Ok(ReceiptId::new(uuid.hyphenated().to_string()))
    }
}
