//! Exact parsing of monetary amounts.
//!
//! Amounts arrive as text such as `"35.35"`. They are parsed into an
//! arbitrary-precision [`BigDecimal`], so no digit of the submitted text is
//! rounded away.

use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero};

/// Parse a plain decimal number.
///
/// Accepted: an optional sign, then digits with at most one decimal point
/// (`"12"`, `"12.25"`, `"-3.5"`, `".5"`, `"7."`). Exponents, `inf`/`nan`,
/// digit separators and surrounding whitespace are rejected.
pub fn parse_amount(s: &str) -> Option<BigDecimal> {
    let (negative, unsigned) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !all_digits(fraction) || (whole.is_empty() && fraction.is_empty()) {
        return None;
    }

    let mut normalized = String::with_capacity(s.len() + 1);
    if negative {
        normalized.push('-');
    }
    normalized.push_str(if whole.is_empty() { "0" } else { whole });
    if !fraction.is_empty() {
        normalized.push('.');
        normalized.push_str(fraction);
    }

    BigDecimal::from_str(&normalized).ok()
}

/// Parse an amount that must not be negative.
pub fn parse_non_negative_amount(s: &str) -> Option<BigDecimal> {
    parse_amount(s).filter(|amount| *amount >= BigDecimal::zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_plain_amounts() {
        assert_eq!(parse_amount("35.35"), Some(dec("35.35")));
        assert_eq!(parse_amount("0"), Some(BigDecimal::zero()));
        assert_eq!(parse_amount("12"), Some(dec("12")));
        assert_eq!(parse_amount("-3.50"), Some(dec("-3.50")));
        assert_eq!(parse_amount("+1.25"), Some(dec("1.25")));
    }

    #[test]
    fn test_bare_point_forms() {
        assert_eq!(parse_amount(".5"), Some(dec("0.5")));
        assert_eq!(parse_amount("7."), Some(dec("7")));
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount("-"), None);
    }

    #[test]
    fn test_rejects_non_decimal_text() {
        for input in ["", "abc", "1e3", "inf", "NaN", "1_000", " 1.00", "1.00 ", "1.2.3", "$5"] {
            assert_eq!(parse_amount(input), None, "accepted {input:?}");
        }
    }

    #[test]
    fn test_trailing_zeros_compare_equal() {
        assert_eq!(parse_amount("10.00"), Some(dec("10")));
    }

    #[test]
    fn test_long_amounts_are_exact() {
        let thirty_digits = format!("1{}", "0".repeat(29));
        assert_eq!(parse_amount(&thirty_digits), Some(dec(&thirty_digits)));

        let tiny = format!("0.{}1", "0".repeat(28));
        let parsed = parse_amount(&tiny).unwrap();
        assert!(parsed > BigDecimal::zero());
        assert_eq!(parsed, dec(&tiny));

        assert_eq!(
            parse_amount("12.123456789012345678901234567890"),
            Some(dec("12.12345678901234567890123456789"))
        );
    }

    #[test]
    fn test_non_negative() {
        assert!(parse_non_negative_amount("0.00").is_some());
        assert!(parse_non_negative_amount("-0.01").is_none());
        assert!(parse_non_negative_amount("-0").is_some());
    }
}
