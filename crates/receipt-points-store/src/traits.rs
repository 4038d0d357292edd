//! Store trait: the abstract interface for receipt persistence.
//!
//! This trait keeps the processor storage-agnostic. The bundled
//! implementation is in-memory; nothing survives a restart.

use async_trait::async_trait;
use receipt_points_core::{Receipt, ReceiptId};

use crate::error::Result;

/// Result of inserting a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertResult {
    /// Receipt was inserted under a fresh identifier.
    Inserted,
    /// The identifier is already bound; the stored receipt was left as is.
    AlreadyExists,
}

/// The Store trait: async interface for receipt persistence.
///
/// Receipts are keyed by an identifier chosen by the caller. There is no
/// update and no delete.
#[async_trait]
pub trait Store: Send + Sync {
    /// Bind `id` to `receipt`.
    ///
    /// Returns `AlreadyExists` without overwriting if `id` is taken.
    async fn insert(&self, id: &ReceiptId, receipt: &Receipt) -> Result<InsertResult>;

    /// Get a receipt by identifier.
    async fn get(&self, id: &ReceiptId) -> Result<Option<Receipt>>;

    /// Number of stored receipts.
    async fn count(&self) -> Result<usize>;
}
