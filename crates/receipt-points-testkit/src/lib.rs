//! # Receipt Points Testkit
//!
//! Testing utilities for receipt points.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known receipts with their expected point totals
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Sample receipts and deterministic identifier sources
//!
//! ## Golden Vectors
//!
//! ```rust
//! use receipt_points_core::score_receipt;
//! use receipt_points_testkit::vectors::all_vectors;
//!
//! for vector in all_vectors() {
//!     assert_eq!(score_receipt(&vector.receipt()), vector.expected_points, "{}", vector.name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use receipt_points_testkit::generators::{ReceiptParams, receipt_from_params};
//!
//! proptest! {
//!     #[test]
//!     fn scoring_is_deterministic(params: ReceiptParams) {
//!         let receipt = receipt_from_params(&params);
//!         prop_assert_eq!(score_receipt(&receipt), score_receipt(&receipt));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use receipt_points_testkit::fixtures::{target_receipt, SequentialIds};
//!
//! let receipt = target_receipt();
//! let ids = SequentialIds::new("receipt");
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{
    corner_market_receipt, morning_receipt, target_receipt, FailingIds, SequentialIds,
};
pub use generators::{receipt_from_params, ReceiptParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
