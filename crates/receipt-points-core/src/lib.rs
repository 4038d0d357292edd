//! # Receipt Points Core
//!
//! Pure primitives for receipt points: receipts, validation, and scoring.
//!
//! This crate contains no I/O, no storage, no networking. It is pure computation
//! over receipt values.
//!
//! ## Key Types
//!
//! - [`Receipt`] - One purchase event, as submitted
//! - [`Item`] - One priced line on a receipt
//! - [`ReceiptId`] - Opaque identifier assigned on acceptance
//! - [`PointsBreakdown`] - Per-rule point contributions
//!
//! ## Validation and Scoring
//!
//! [`validate_receipt`] decides whether a receipt is well-formed and reports
//! the first problem found. [`score_receipt`] turns any receipt into a point
//! total and never fails; fields it cannot parse contribute nothing.
//!
//! Monetary values stay exact: amounts are carried as text and parsed into
//! [`bigdecimal::BigDecimal`], never into binary floats.

pub mod amount;
pub mod calendar;
pub mod error;
pub mod receipt;
pub mod scoring;
pub mod types;
pub mod validation;

pub use amount::parse_amount;
pub use calendar::{parse_purchase_date, parse_purchase_time};
pub use error::{RejectionReason, ValidationError};
pub use receipt::{Item, Receipt, ReceiptBuilder};
pub use scoring::{points_breakdown, score_receipt, PointsBreakdown};
pub use types::ReceiptId;
pub use validation::validate_receipt;
