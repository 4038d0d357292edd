//! Error types for receipt validation.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Why a receipt was rejected.
///
/// Exactly one reason is reported per validation call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid retailer name")]
    InvalidRetailerName,

    #[error("invalid purchase date")]
    InvalidPurchaseDate,

    #[error("invalid purchase time")]
    InvalidPurchaseTime,

    #[error("item {index}: description cannot be empty")]
    EmptyItemDescription { index: usize },

    #[error("item {index}: invalid price")]
    InvalidItemPrice { index: usize },
}

impl ValidationError {
    /// The machine-readable reason, without item position.
    pub fn reason(&self) -> RejectionReason {
        match self {
            ValidationError::InvalidRetailerName => RejectionReason::InvalidRetailerName,
            ValidationError::InvalidPurchaseDate => RejectionReason::InvalidPurchaseDate,
            ValidationError::InvalidPurchaseTime => RejectionReason::InvalidPurchaseTime,
            ValidationError::EmptyItemDescription { .. } => RejectionReason::EmptyItemDescription,
            ValidationError::InvalidItemPrice { .. } => RejectionReason::InvalidItemPrice,
        }
    }
}

/// Stable rejection codes exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectionReason {
    InvalidRetailerName,
    InvalidPurchaseDate,
    InvalidPurchaseTime,
    EmptyItemDescription,
    InvalidItemPrice,
}

impl RejectionReason {
    /// The kebab-case code, e.g. `invalid-retailer-name`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            RejectionReason::InvalidRetailerName => "invalid-retailer-name",
            RejectionReason::InvalidPurchaseDate => "invalid-purchase-date",
            RejectionReason::InvalidPurchaseTime => "invalid-purchase-time",
            RejectionReason::EmptyItemDescription => "empty-item-description",
            RejectionReason::InvalidItemPrice => "invalid-item-price",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
