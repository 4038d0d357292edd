//! Golden point vectors.
//!
//! Each vector pins one receipt to the point total every scorer must
//! produce for it. Several vectors isolate a single rule.

use receipt_points_core::{score_receipt, Item, Receipt};

use crate::fixtures::{corner_market_receipt, morning_receipt, target_receipt};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Builds the receipt under test.
    pub build: fn() -> Receipt,
    /// Whether the receipt passes validation.
    pub valid: bool,
    /// Expected point total.
    pub expected_points: u64,
}

impl GoldenVector {
    /// Build the vector's receipt.
    pub fn receipt(&self) -> Receipt {
        (self.build)()
    }
}

/// A receipt that scores zero on every rule but rule 1.
fn baseline(retailer: &str) -> Receipt {
    Receipt::builder(retailer)
        .purchase_date("2022-01-02")
        .purchase_time("10:00")
        .total("1.01")
        .build()
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "target, five items",
            build: target_receipt,
            valid: true,
            expected_points: 28,
        },
        GoldenVector {
            name: "corner market, round total in the afternoon",
            build: corner_market_receipt,
            valid: false,
            expected_points: 109,
        },
        GoldenVector {
            name: "walgreens, two drinks",
            build: morning_receipt,
            valid: true,
            expected_points: 15,
        },
        GoldenVector {
            name: "retailer characters only",
            build: || baseline("Corner Store 24"),
            valid: true,
            expected_points: 13,
        },
        GoldenVector {
            name: "quarter total",
            build: || Receipt {
                total: "10.25".into(),
                ..baseline("A")
            },
            valid: true,
            expected_points: 1 + 25,
        },
        GoldenVector {
            name: "zero total literal",
            build: || Receipt {
                total: "0".into(),
                ..baseline("A")
            },
            valid: true,
            expected_points: 1 + 50 + 25,
        },
        GoldenVector {
            name: "whole total without cents",
            build: || Receipt {
                total: "7".into(),
                ..baseline("A")
            },
            valid: true,
            expected_points: 1 + 25,
        },
        GoldenVector {
            name: "malformed short total",
            build: || Receipt {
                total: "x".into(),
                ..baseline("A")
            },
            valid: true,
            expected_points: 1,
        },
        GoldenVector {
            name: "three items, one pair",
            build: || Receipt {
                items: vec![
                    Item::new("ab", "1.00"),
                    Item::new("abcd", "1.00"),
                    Item::new("abcde", "1.00"),
                ],
                ..baseline("A")
            },
            valid: true,
            expected_points: 1 + 5,
        },
        GoldenVector {
            name: "description multiple of three",
            build: || Receipt {
                items: vec![Item::new(" abc ", "10.00")],
                ..baseline("A")
            },
            valid: true,
            expected_points: 1 + 2,
        },
        GoldenVector {
            name: "odd day, afternoon",
            build: || Receipt {
                purchase_date: "2024-01-15".into(),
                purchase_time: "14:30".into(),
                ..baseline("A")
            },
            valid: true,
            expected_points: 1 + 6 + 10,
        },
        GoldenVector {
            name: "four o'clock is not afternoon",
            build: || Receipt {
                purchase_time: "16:00".into(),
                ..baseline("A")
            },
            valid: true,
            expected_points: 1,
        },
    ]
}

/// Score every vector and return the ones that disagree, as
/// `(name, expected, actual)`.
pub fn verify_all_vectors() -> Vec<(&'static str, u64, u64)> {
    all_vectors()
        .into_iter()
        .filter_map(|vector| {
            let actual = score_receipt(&vector.receipt());
            (actual != vector.expected_points).then_some((
                vector.name,
                vector.expected_points,
                actual,
            ))
        })
        .collect()
}
