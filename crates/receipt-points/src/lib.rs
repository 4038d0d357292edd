//! # Receipt Points
//!
//! The processing API for receipt points: accept a purchase receipt, give it
//! an identifier, keep it, and score it on request.
//!
//! ## Overview
//!
//! - **Validation**: malformed receipts are rejected with a single reason
//! - **Storage**: accepted receipts are kept under an opaque identifier
//! - **Scoring**: points are computed from the stored receipt on every lookup
//!
//! ## Usage
//!
//! ```rust,no_run
//! use receipt_points::{ProcessorConfig, Receipt, ReceiptProcessor};
//! use receipt_points::store::MemoryStore;
//!
//! async fn example() {
//!     let processor = ReceiptProcessor::new(MemoryStore::new(), ProcessorConfig::default());
//!
//!     let receipt = Receipt::builder("Target")
//!         .purchase_date("2022-01-01")
//!         .purchase_time("13:01")
//!         .item("Mountain Dew 12PK", "6.49")
//!         .total("6.49")
//!         .build();
//!
//!     let id = processor.process(receipt).await.unwrap();
//!     let points = processor.points(&id).await.unwrap();
//!     println!("{id}: {points} points");
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `receipt_points::core` - Receipt types, validation and scoring
//! - `receipt_points::store` - Storage abstraction and identifier generation

pub mod error;
pub mod processor;

// Re-export component crates
pub use receipt_points_core as core;
pub use receipt_points_store as store;

// Re-export main types for convenience
pub use error::{ProcessorError, Result};
pub use processor::{ProcessorConfig, ReceiptProcessor};

// Re-export commonly used core types
pub use receipt_points_core::{
    points_breakdown, score_receipt, validate_receipt, Item, PointsBreakdown, Receipt,
    ReceiptBuilder, ReceiptId, RejectionReason, ValidationError,
};
