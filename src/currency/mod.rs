//! Currency string handling.
//!
//! Raw CSV amounts arrive as display strings ("$1,234.56"). The importer
//! stores integer cents, so amounts are cleaned and converted here; the
//! validator reuses the same cleaning to decide whether a field holds a
//! valid currency value at all.

use once_cell::sync::Lazy;
use regex::Regex;

/// Accepted shape after cleaning: optional sign, digits, optional fraction.
static CURRENCY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").unwrap());

/// Strip currency symbols, thousands separators and whitespace.
///
/// Separator placement is not checked: "1,2,3" cleans to "123".
fn strip_symbols(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|&c| !matches!(c, '$' | '\u{20ac}' | '\u{a3}' | ',' | ' '))
        .collect()
}

/// Whether `raw` is acceptable as a monetary field.
///
/// Empty values are acceptable: they default to zero cents downstream.
pub fn is_valid(raw: &str) -> bool {
    let cleaned = strip_symbols(raw);
    cleaned.is_empty() || CURRENCY_RE.is_match(&cleaned)
}

/// Convert a raw amount string to integer cents.
///
/// Keeps at most two decimal digits and rounds half-up on the first dropped
/// digit. Empty or malformed values (including more than one decimal point)
/// convert to 0, as do amounts whose cent value does not fit in an `i64`.
pub fn to_cents(raw: &str) -> i64 {
    let cleaned = strip_symbols(raw);
    if !CURRENCY_RE.is_match(&cleaned) {
        return 0;
    }

    let (sign, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, cleaned.as_str()),
    };
    let (whole, frac) = match digits.split_once('.') {
        Some((w, f)) => (w, f),
        None => (digits, ""),
    };

    let Ok(whole) = whole.parse::<i64>() else {
        return 0;
    };
    let mut frac_digits = frac.bytes().map(|b| i64::from(b - b'0'));
    let tens = frac_digits.next().unwrap_or(0);
    let ones = frac_digits.next().unwrap_or(0);
    let round_up = i64::from(frac_digits.next().unwrap_or(0) >= 5);
    let cents = whole
        .checked_mul(100)
        .and_then(|c| c.checked_add(tens * 10 + ones + round_up));
    match cents {
        Some(cents) => sign * cents,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_cents_equivalent_formats() {
        assert_eq!(to_cents("$1,234.56"), 123456);
        assert_eq!(to_cents("1,234.56"), 123456);
        assert_eq!(to_cents("1234.56"), 123456);
        assert_eq!(to_cents("  1234.56  "), 123456);
    }

    #[test]
    fn test_to_cents_whole_and_short_fractions() {
        assert_eq!(to_cents("5"), 500);
        assert_eq!(to_cents("5.1"), 510);
        assert_eq!(to_cents("0.07"), 7);
    }

    #[test]
    fn test_to_cents_rounds_half_up() {
        assert_eq!(to_cents("1.005"), 101);
        assert_eq!(to_cents("1.004"), 100);
        assert_eq!(to_cents("1.999"), 200);
        assert_eq!(to_cents("2.349"), 235);
    }

    #[test]
    fn test_to_cents_negative() {
        assert_eq!(to_cents("-42.50"), -4250);
        assert_eq!(to_cents("-$1,000"), -100000);
    }

    #[test]
    fn test_to_cents_empty_and_malformed_default_to_zero() {
        assert_eq!(to_cents(""), 0);
        assert_eq!(to_cents("   "), 0);
        assert_eq!(to_cents("1.2.3"), 0);
        assert_eq!(to_cents("abc"), 0);
    }

    #[test]
    fn test_to_cents_out_of_range_amounts_convert_to_zero() {
        // Cent value would exceed i64; treated like malformed input.
        assert_eq!(to_cents("922337203685477580"), 0);
        assert_eq!(to_cents("-922337203685477580"), 0);
        // Whole part alone exceeds i64.
        assert_eq!(to_cents("99999999999999999999"), 0);
        // Near the limit still converts exactly.
        assert_eq!(to_cents("92233720368547758.07"), 9223372036854775807);
    }

    #[test]
    fn test_separator_placement_is_not_checked() {
        // Separators are stripped wherever they appear.
        assert!(is_valid("1,2,3"));
        assert_eq!(to_cents("1,2,3"), 12300);
        assert!(is_valid("1 234.56"));
        assert_eq!(to_cents("1 234.56"), 123456);
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid("$1,234.56"));
        assert!(is_valid("-12"));
        assert!(is_valid(""));
        assert!(is_valid("  "));
        assert!(!is_valid("1.2.3"));
        assert!(!is_valid("abc"));
        assert!(!is_valid("12abc"));
    }
}
