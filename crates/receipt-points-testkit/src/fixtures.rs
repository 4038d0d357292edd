//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use receipt_points_core::{Receipt, ReceiptId};
use receipt_points_store::{IdGenerator, Result, StoreError};

/// Five items on an odd day, before two o'clock: 28 points.
pub fn target_receipt() -> Receipt {
    Receipt::builder("Target")
        .purchase_date("2022-01-01")
        .purchase_time("13:01")
        .item("Mountain Dew 12PK", "6.49")
        .item("Emils Cheese Pizza", "12.25")
        .item("Knorr Creamy Chicken", "1.26")
        .item("Doritos Nacho Cheese", "3.35")
        .item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00")
        .total("35.35")
        .build()
}

/// Whole-dollar total in the afternoon: 109 points.
///
/// The ampersand in the retailer name fails validation, so this receipt can
/// only be scored directly, never processed.
pub fn corner_market_receipt() -> Receipt {
    Receipt::builder("M&M Corner Market")
        .purchase_date("2022-03-20")
        .purchase_time("14:33")
        .item("Gatorade", "2.25")
        .item("Gatorade", "2.25")
        .item("Gatorade", "2.25")
        .item("Gatorade", "2.25")
        .total("9.00")
        .build()
}

/// Two drinks on an even morning: 15 points.
pub fn morning_receipt() -> Receipt {
    Receipt::builder("Walgreens")
        .purchase_date("2022-01-02")
        .purchase_time("08:13")
        .item("Pepsi - 12-oz", "1.25")
        .item("Dasani", "1.40")
        .total("2.65")
        .build()
}

/// Serialize a receipt the way a client would submit it.
pub fn receipt_json(receipt: &Receipt) -> String {
    serde_json::to_string(receipt).expect("receipts always serialize")
}

/// Deterministic identifiers: `prefix-1`, `prefix-2`, ...
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    /// Start a new sequence at 1.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> Result<ReceiptId> {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        Ok(ReceiptId::new(format!("{}-{n}", self.prefix)))
    }
}

/// An identifier source whose entropy is always exhausted.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingIds;

impl IdGenerator for FailingIds {
    fn generate(&self) -> Result<ReceiptId> {
        Err(StoreError::IdGeneration("entropy source exhausted".into()))
    }
}
