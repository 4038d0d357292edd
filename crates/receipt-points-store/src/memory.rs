//! In-memory implementation of the Store trait.
//!
//! All data is lost when the store is dropped.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use receipt_points_core::{Receipt, ReceiptId};

use crate::error::Result;
use crate::traits::{InsertResult, Store};

/// In-memory store implementation.
///
/// Thread-safe via an async `RwLock`: lookups run concurrently, inserts take
/// the lock exclusively.
pub struct MemoryStore {
    receipts: RwLock<HashMap<ReceiptId, Receipt>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            receipts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert(&self, id: &ReceiptId, receipt: &Receipt) -> Result<InsertResult> {
        let mut receipts = self.receipts.write().await;

        if receipts.contains_key(id) {
            tracing::debug!(%id, "identifier already bound");
            return Ok(InsertResult::AlreadyExists);
        }

        receipts.insert(id.clone(), receipt.clone());
        Ok(InsertResult::Inserted)
    }

    async fn get(&self, id: &ReceiptId) -> Result<Option<Receipt>> {
        let receipts = self.receipts.read().await;
        Ok(receipts.get(id).cloned())
    }

    async fn count(&self) -> Result<usize> {
        let receipts = self.receipts.read().await;
        Ok(receipts.len())
    }
}
