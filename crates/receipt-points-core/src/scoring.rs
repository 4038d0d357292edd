//! Point scoring: seven independent rules, summed.
//!
//! Scoring is total. It accepts any [`Receipt`], validated or not, and a
//! field that cannot be parsed simply contributes nothing to the rules that
//! read it. Dates, times and amounts are parsed again here instead of
//! trusting an earlier validation pass.

use bigdecimal::{BigDecimal, One, ToPrimitive, Zero};
use chrono::{Datelike, Timelike};
use serde::{Deserialize, Serialize};

use crate::amount::parse_amount;
use crate::calendar::{parse_purchase_date, parse_purchase_time};
use crate::receipt::{Item, Receipt};

/// Points for a whole-dollar total.
pub const ROUND_DOLLAR_POINTS: u64 = 50;
/// Points for a total that is a multiple of 0.25.
pub const QUARTER_MULTIPLE_POINTS: u64 = 25;
/// Points for every two items.
pub const ITEM_PAIR_POINTS: u64 = 5;
/// Points for an odd day of month.
pub const ODD_DAY_POINTS: u64 = 6;
/// Points for a purchase between 14:00 and 16:00.
pub const AFTERNOON_POINTS: u64 = 10;

/// Afternoon window, hours `[start, end)`.
const AFTERNOON_HOURS: std::ops::Range<u32> = 14..16;

/// Contribution of each rule to a receipt's points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsBreakdown {
    /// One point per ASCII alphanumeric character in the retailer name.
    pub retailer_name: u64,
    /// Total ends in `.00` (or is `"0"`).
    pub round_dollar_total: u64,
    /// Total is a multiple of 0.25 (or is `"0"`).
    pub quarter_multiple_total: u64,
    /// Five points per pair of items.
    pub item_pairs: u64,
    /// Price-based points for items whose trimmed description length is a
    /// multiple of three.
    pub item_descriptions: u64,
    /// Purchase day of month is odd.
    pub odd_purchase_day: u64,
    /// Purchase hour is 14 or 15.
    pub afternoon_purchase: u64,
}

impl PointsBreakdown {
    /// Sum of all rule contributions.
    pub fn total(&self) -> u64 {
        [
            self.retailer_name,
            self.round_dollar_total,
            self.quarter_multiple_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_purchase_day,
            self.afternoon_purchase,
        ]
        .into_iter()
        .fold(0u64, u64::saturating_add)
    }
}

/// Compute the point total for a receipt.
pub fn score_receipt(receipt: &Receipt) -> u64 {
    points_breakdown(receipt).total()
}

/// Compute every rule's contribution for a receipt.
///
/// All seven rules are always evaluated.
pub fn points_breakdown(receipt: &Receipt) -> PointsBreakdown {
    PointsBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        round_dollar_total: round_dollar_points(&receipt.total),
        quarter_multiple_total: quarter_multiple_points(&receipt.total),
        item_pairs: item_pair_points(receipt.item_count()),
        item_descriptions: receipt
            .items
            .iter()
            .map(item_description_points)
            .fold(0u64, u64::saturating_add),
        odd_purchase_day: odd_day_points(&receipt.purchase_date),
        afternoon_purchase: afternoon_points(&receipt.purchase_time),
    }
}

/// Rule 1.
pub fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// Rule 2. A literal suffix check on the submitted text.
pub fn round_dollar_points(total: &str) -> u64 {
    if total == "0" || total.ends_with(".00") {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

/// Rule 3. Exact: the total in cents must be a whole number divisible by 25.
pub fn quarter_multiple_points(total: &str) -> u64 {
    if total == "0" || parse_amount(total).is_some_and(|amount| is_quarter_multiple(&amount)) {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

fn is_quarter_multiple(amount: &BigDecimal) -> bool {
    let cents = amount * BigDecimal::from(100u32);
    let whole_cents = cents.with_scale(0);
    if whole_cents != cents {
        return false;
    }

    let (digits, _) = whole_cents.as_bigint_and_exponent();
    (digits % 25u32).is_zero()
}

/// Rule 4.
pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * ITEM_PAIR_POINTS
}

/// Rule 5, for a single item.
///
/// Negative or unparsable prices contribute nothing. A bonus too large for
/// `u64` saturates.
pub fn item_description_points(item: &Item) -> u64 {
    if item.short_description.trim().chars().count() % 3 != 0 {
        return 0;
    }

    match parse_amount(&item.price) {
        Some(price) if price > BigDecimal::zero() => {
            let fifth = price * BigDecimal::new(2.into(), 1);
            ceil_positive(&fifth).to_u64().unwrap_or(u64::MAX)
        }
        _ => 0,
    }
}

fn ceil_positive(value: &BigDecimal) -> BigDecimal {
    let floor = value.with_scale(0);
    if floor == *value {
        floor
    } else {
        floor + BigDecimal::one()
    }
}

/// Rule 6.
pub fn odd_day_points(purchase_date: &str) -> u64 {
    match parse_purchase_date(purchase_date) {
        Some(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

/// Rule 7.
pub fn afternoon_points(purchase_time: &str) -> u64 {
    match parse_purchase_time(purchase_time) {
        Some(time) if AFTERNOON_HOURS.contains(&time.hour()) => AFTERNOON_POINTS,
        _ => 0,
    }
}
