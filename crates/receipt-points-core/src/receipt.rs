//! Receipt: one purchase event submitted for scoring.
//!
//! Every field is carried as the text that was submitted. Parsing happens in
//! the validator and again in the scorer, so a receipt value is never in a
//! half-interpreted state.

use serde::{Deserialize, Serialize};

/// One line on a receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    /// Short description of the purchased item.
    pub short_description: String,
    /// Price as exact decimal text, e.g. `"12.25"`.
    pub price: String,
}

impl Item {
    /// Create an item from its description and price text.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A purchase receipt.
///
/// Missing fields deserialize as empty strings (or an empty item list) and
/// are rejected by validation rather than by the decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    /// Retailer name as printed.
    pub retailer: String,
    /// Purchase date, `YYYY-MM-DD`.
    pub purchase_date: String,
    /// Purchase time, 24-hour `HH:MM`.
    pub purchase_time: String,
    /// Purchased items, in receipt order.
    pub items: Vec<Item>,
    /// Total amount as exact decimal text.
    pub total: String,
}

impl Receipt {
    /// Start building a receipt for the given retailer.
    pub fn builder(retailer: impl Into<String>) -> ReceiptBuilder {
        ReceiptBuilder::new(retailer)
    }

    /// Number of items on the receipt.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// Builder for constructing receipts, mostly in tests and fixtures.
#[derive(Debug, Clone)]
pub struct ReceiptBuilder {
    retailer: String,
    purchase_date: String,
    purchase_time: String,
    items: Vec<Item>,
    total: String,
}

impl ReceiptBuilder {
    /// Start building a receipt.
    pub fn new(retailer: impl Into<String>) -> Self {
        Self {
            retailer: retailer.into(),
            purchase_date: String::new(),
            purchase_time: String::new(),
            items: Vec::new(),
            total: String::new(),
        }
    }

    /// Set the purchase date.
    pub fn purchase_date(mut self, date: impl Into<String>) -> Self {
        self.purchase_date = date.into();
        self
    }

    /// Set the purchase time.
    pub fn purchase_time(mut self, time: impl Into<String>) -> Self {
        self.purchase_time = time.into();
        self
    }

    /// Add an item.
    pub fn item(mut self, short_description: impl Into<String>, price: impl Into<String>) -> Self {
        self.items.push(Item::new(short_description, price));
        self
    }

    /// Replace the item list.
    pub fn items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    /// Set the total.
    pub fn total(mut self, total: impl Into<String>) -> Self {
        self.total = total.into();
        self
    }

    /// Finish the receipt.
    pub fn build(self) -> Receipt {
        Receipt {
            retailer: self.retailer,
            purchase_date: self.purchase_date,
            purchase_time: self.purchase_time,
            items: self.items,
            total: self.total,
        }
    }
}
