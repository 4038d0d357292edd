//! Proptest generators for property-based testing.
//!
//! Every strategy here produces values that pass validation.

use chrono::NaiveDate;
use proptest::prelude::*;

use receipt_points_core::{Item, Receipt};

/// Day numbers (from the common era) for 2000-01-01 through 2099-12-31.
const DAYS_2000_TO_2100: std::ops::Range<i32> = 730_120..766_645;

/// Generate a valid retailer name.
pub fn retailer_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ]{0,31}".prop_map(String::from)
}

/// Generate a valid `YYYY-MM-DD` purchase date.
pub fn purchase_date() -> impl Strategy<Value = String> {
    DAYS_2000_TO_2100
        .prop_filter_map("day out of range", NaiveDate::from_num_days_from_ce_opt)
        .prop_map(|date| date.format("%Y-%m-%d").to_string())
}

/// Generate a valid `HH:MM` purchase time.
pub fn purchase_time() -> impl Strategy<Value = String> {
    (0u32..24, 0u32..60).prop_map(|(h, m)| format!("{h:02}:{m:02}"))
}

/// Generate a non-negative amount with two decimal places.
pub fn amount() -> impl Strategy<Value = String> {
    (0u64..10_000, 0u64..100).prop_map(|(dollars, cents)| format!("{dollars}.{cents:02}"))
}

/// Generate a non-empty item description, sometimes padded with spaces.
pub fn description() -> impl Strategy<Value = String> {
    "[ ]{0,2}[A-Za-z0-9][A-Za-z0-9 -]{0,23}".prop_map(String::from)
}

/// Generate a valid item.
pub fn item() -> impl Strategy<Value = Item> {
    (description(), amount()).prop_map(|(d, p)| Item::new(d, p))
}

/// Parameters for generating a receipt.
#[derive(Debug, Clone)]
pub struct ReceiptParams {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

impl Arbitrary for ReceiptParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            retailer_name(),
            purchase_date(),
            purchase_time(),
            prop::collection::vec(item(), 0..12),
            amount(),
        )
            .prop_map(|(retailer, date, time, items, total)| ReceiptParams {
                retailer,
                purchase_date: date,
                purchase_time: time,
                items,
                total,
            })
            .boxed()
    }
}

/// Generate a receipt from parameters.
pub fn receipt_from_params(params: &ReceiptParams) -> Receipt {
    Receipt::builder(params.retailer.clone())
        .purchase_date(params.purchase_date.clone())
        .purchase_time(params.purchase_time.clone())
        .items(params.items.clone())
        .total(params.total.clone())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_points_core::scoring::{item_pair_points, retailer_name_points};
    use receipt_points_core::{points_breakdown, score_receipt, validate_receipt};

    proptest! {
        #[test]
        fn test_generated_receipts_are_valid(params: ReceiptParams) {
            let receipt = receipt_from_params(&params);
            prop_assert_eq!(validate_receipt(&receipt), Ok(()));
        }

        #[test]
        fn test_scoring_is_deterministic(params: ReceiptParams) {
            let r1 = receipt_from_params(&params);
            let r2 = receipt_from_params(&params);

            prop_assert_eq!(score_receipt(&r1), score_receipt(&r2));
        }

        #[test]
        fn test_breakdown_sums_to_score(params: ReceiptParams) {
            let receipt = receipt_from_params(&params);
            let breakdown = points_breakdown(&receipt);

            prop_assert_eq!(breakdown.total(), score_receipt(&receipt));
            prop_assert_eq!(breakdown.retailer_name, retailer_name_points(&receipt.retailer));
            prop_assert_eq!(breakdown.item_pairs, item_pair_points(receipt.items.len()));
        }

        #[test]
        fn test_item_order_does_not_matter(params: ReceiptParams) {
            let receipt = receipt_from_params(&params);
            let mut reversed = receipt.clone();
            reversed.items.reverse();

            prop_assert_eq!(score_receipt(&receipt), score_receipt(&reversed));
        }

        #[test]
        fn test_retailer_char_order_does_not_matter(params: ReceiptParams) {
            let receipt = receipt_from_params(&params);
            let mut shuffled = receipt.clone();
            shuffled.retailer = receipt.retailer.chars().rev().collect();

            prop_assert_eq!(
                points_breakdown(&receipt).retailer_name,
                points_breakdown(&shuffled).retailer_name
            );
        }
    }
}
