//! Receipt validation: the checks a receipt must pass before it is stored.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::amount::parse_non_negative_amount;
use crate::calendar::{parse_purchase_date, parse_purchase_time};
use crate::error::ValidationError;
use crate::receipt::Receipt;

/// Letters, digits and ASCII whitespace; at least one character.
static RETAILER_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9\t\n\x0C\r ]+$").expect("retailer name pattern is valid")
});

/// Validate a receipt.
///
/// Checks run in this order and stop at the first failure:
/// 1. Retailer name is non-empty letters, digits and whitespace
/// 2. Purchase date is `YYYY-MM-DD`
/// 3. Purchase time is `HH:MM`
/// 4. Each item, in order, has a description and a non-negative price
///
/// The total is not checked here; scoring tolerates any total text.
pub fn validate_receipt(receipt: &Receipt) -> Result<(), ValidationError> {
    if !is_valid_retailer_name(&receipt.retailer) {
        return Err(ValidationError::InvalidRetailerName);
    }

    if parse_purchase_date(&receipt.purchase_date).is_none() {
        return Err(ValidationError::InvalidPurchaseDate);
    }

    if parse_purchase_time(&receipt.purchase_time).is_none() {
        return Err(ValidationError::InvalidPurchaseTime);
    }

    for (index, item) in receipt.items.iter().enumerate() {
        if item.short_description.is_empty() {
            return Err(ValidationError::EmptyItemDescription { index });
        }
        if parse_non_negative_amount(&item.price).is_none() {
            return Err(ValidationError::InvalidItemPrice { index });
        }
    }

    Ok(())
}

/// Whether a retailer name would pass validation.
pub fn is_valid_retailer_name(name: &str) -> bool {
    RETAILER_NAME.is_match(name)
}
