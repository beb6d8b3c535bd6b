//! Operand parsing and addition
//!
//! Operands arrive as free-form query strings. They are read the way a
//! lenient integer parser reads them: leading whitespace and an optional
//! sign are accepted, a `0x` prefix selects base 16, and parsing stops at
//! the first character that is not a digit, so `"3.7"` reads as 3 and
//! `"12abc"` as 12. Input without a single leading digit is not a number.

use tracing::debug;

use crate::error::{WebServerError, WebServerResult};

/// Parse an operand, returning `None` when it is not a number.
///
/// A digit run too large for `i64` is also reported as `None`.
pub fn parse_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();

    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, body) = match unsigned.get(..2) {
        Some("0x") | Some("0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let end = body.find(|c: char| !c.is_digit(radix)).unwrap_or(body.len());
    let digits = &body[..end];
    if digits.is_empty() {
        return None;
    }

    let magnitude = i128::from(u64::from_str_radix(digits, radix).ok()?);
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}

/// Add two operands, rejecting sums outside the `i64` range
pub fn add(a: i64, b: i64) -> WebServerResult<i64> {
    debug!(a, b, "performing addition");
    a.checked_add(b).ok_or(WebServerError::SumOutOfRange)
}
