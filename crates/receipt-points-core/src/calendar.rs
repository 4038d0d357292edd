//! Strict parsing of purchase dates and times.
//!
//! Dates must be exactly `YYYY-MM-DD` and times exactly `HH:MM`; chrono
//! alone accepts unpadded fields, so the shape is checked first.

use chrono::{NaiveDate, NaiveTime};

/// Parse a purchase date in `YYYY-MM-DD` form.
///
/// Returns `None` for malformed text or impossible dates (`2023-02-29`).
pub fn parse_purchase_date(s: &str) -> Option<NaiveDate> {
    if !matches_shape(s, "dddd-dd-dd") {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a purchase time in 24-hour `HH:MM` form.
pub fn parse_purchase_time(s: &str) -> Option<NaiveTime> {
    if !matches_shape(s, "dd:dd") {
        return None;
    }
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

/// `d` in the shape stands for any ASCII digit; other bytes match literally.
fn matches_shape(s: &str, shape: &str) -> bool {
    s.len() == shape.len()
        && s.bytes().zip(shape.bytes()).all(|(c, expected)| match expected {
            b'd' => c.is_ascii_digit(),
            literal => c == literal,
        })
}
