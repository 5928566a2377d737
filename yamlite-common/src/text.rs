//! Byte-span string operations shared by the tokenizer and its callers.

use crate::chars::{is_digit, is_spacing};

/// Strips leading and trailing spacing from a span.
///
/// Token spans never cross a line end, so only spacing bytes are stripped.
/// An empty or all-spacing span trims to the empty span.
#[must_use]
pub fn trim(span: &[u8]) -> &[u8] {
    let start = span
        .iter()
        .position(|c| !is_spacing(*c))
        .unwrap_or(span.len());
    let end = span
        .iter()
        .rposition(|c| !is_spacing(*c))
        .map_or(start, |found| found + 1);
    &span[start..end]
}

/// Length plus bytewise equality against a literal, no case folding.
#[inline]
#[must_use]
pub fn eq_literal(span: &[u8], literal: &str) -> bool {
    span == literal.as_bytes()
}

/// `true` when the span is non-empty and every byte is a decimal digit.
#[must_use]
pub fn is_all_digits(span: &[u8]) -> bool {
    !span.is_empty() && span.iter().all(|c| is_digit(*c))
}

/// Decimal conversion with a tagged result: `None` for spans that are not
/// purely numeric or that overflow `i64`.
#[must_use]
pub fn to_integer(span: &[u8]) -> Option<i64> {
    if !is_all_digits(span) {
        return None;
    }
    span.iter().try_fold(0i64, |acc, c| {
        acc.checked_mul(10)?.checked_add(i64::from(*c - b'0'))
    })
}

#[test]
fn test_trim() {
    assert_eq!(trim(b"  period  "), b"period");
    assert_eq!(trim(b"\t si session one\x0b"), b"si session one");
    assert_eq!(trim(b"   "), b"");
    assert_eq!(trim(b""), b"");
}

#[test]
fn test_trim_idempotent() {
    let spans: [&[u8]; 5] = [b"  a ", b"", b" \t\x0c ", b"ab", b" x y "];
    for span in spans {
        assert_eq!(trim(trim(span)), trim(span));
    }
}

#[test]
fn test_eq_literal() {
    assert!(eq_literal(b"siSession", "siSession"));
    assert!(!eq_literal(b"siSession", "siSessio"));
    assert!(!eq_literal(b"Sisession", "siSession"));
}

#[test]
fn test_numeric() {
    assert_eq!(to_integer(b"42"), Some(42));
    assert_eq!(to_integer(b"0"), Some(0));
    assert_eq!(to_integer(b"12a"), None);
    assert_eq!(to_integer(b"-7"), None);
    assert_eq!(to_integer(b""), None);
    assert_eq!(to_integer(b"99999999999999999999"), None);
    assert!(is_all_digits(b"007"));
    assert!(!is_all_digits(b""));
}
