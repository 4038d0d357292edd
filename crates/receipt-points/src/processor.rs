//! The processor: unified API for receipt points.
//!
//! The processor brings together validation, identifier generation, storage
//! and scoring. Validation and scoring are pure functions from the core
//! crate; the processor only sequences them around the store.

use receipt_points_core::{
    points_breakdown, score_receipt, validate_receipt, PointsBreakdown, Receipt, ReceiptId,
};
use receipt_points_store::{IdGenerator, InsertResult, Store, UuidGenerator};

use crate::error::{ProcessorError, Result};

/// Configuration for the processor.
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Whether to validate receipts before storing them.
    pub validate_on_process: bool,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            validate_on_process: true,
        }
    }
}

/// The main processor struct.
///
/// Provides a unified API for:
/// - Accepting receipts
/// - Looking up stored receipts
/// - Scoring stored receipts
pub struct ReceiptProcessor<S: Store, G: IdGenerator = UuidGenerator> {
    /// The storage backend.
    store: S,
    /// Identifier source.
    ids: G,
    /// Configuration.
    config: ProcessorConfig,
}

impl<S: Store> ReceiptProcessor<S> {
    /// Create a processor that assigns random UUIDs.
    pub fn new(store: S, config: ProcessorConfig) -> Self {
        Self::with_id_generator(store, UuidGenerator, config)
    }
}

impl<S: Store, G: IdGenerator> ReceiptProcessor<S, G> {
    /// Create a processor with a custom identifier source.
    pub fn with_id_generator(store: S, ids: G, config: ProcessorConfig) -> Self {
        Self {
            store,
            ids,
            config,
        }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the configuration.
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Accept a receipt and return its new identifier.
    ///
    /// Nothing is stored unless the receipt passes validation and an
    /// identifier was obtained.
    pub async fn process(&self, receipt: Receipt) -> Result<ReceiptId> {
        if self.config.validate_on_process {
            if let Err(e) = validate_receipt(&receipt) {
                tracing::info!(reason = %e.reason(), "receipt rejected: {e}");
                return Err(e.into());
            }
        }

        let id = self.ids.generate().map_err(|e| {
            tracing::warn!("identifier generation failed: {e}");
            ProcessorError::from(e)
        })?;

        match self.store.insert(&id, &receipt).await? {
            InsertResult::Inserted => {
                tracing::debug!(%id, items = receipt.item_count(), "receipt stored");
                Ok(id)
            }
            InsertResult::AlreadyExists => {
                tracing::warn!(%id, "generated identifier already bound");
                Err(ProcessorError::IdCollision(id))
            }
        }
    }

    /// Get a stored receipt by identifier.
    pub async fn receipt(&self, id: &ReceiptId) -> Result<Option<Receipt>> {
        Ok(self.store.get(id).await?)
    }

    /// Compute the points of a stored receipt.
    pub async fn points(&self, id: &ReceiptId) -> Result<u64> {
        let receipt = self.require(id).await?;
        let points = score_receipt(&receipt);
        tracing::debug!(%id, points, "receipt scored");
        Ok(points)
    }

    /// Compute each rule's contribution for a stored receipt.
    pub async fn breakdown(&self, id: &ReceiptId) -> Result<PointsBreakdown> {
        let receipt = self.require(id).await?;
        Ok(points_breakdown(&receipt))
    }

    async fn require(&self, id: &ReceiptId) -> Result<Receipt> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| ProcessorError::ReceiptNotFound(id.clone()))
    }
}
