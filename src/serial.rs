//! Serial notation, one character per decimal digit.
//!
//! Phone numbers, room numbers and product codes read digit by digit:
//! 二〇二五 is 2025 and 〇〇七 is 7. There are no multipliers and no section
//! words, so both directions are a straight base-ten walk.

use crate::decode::{classify_unexpected, decode_fixed, KANJI_BYTES};
use crate::error::{Error, Result};
use crate::table::lookup;

/// Digit characters by value, as the formatter writes them.
const SERIAL_DIGITS: [char; 10] = ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// Parses serial notation into a `u64`.
///
/// Every character must carry a value of 0 through 9; the daiji digits and
/// both zero literals qualify. Multipliers and section words have no place
/// in serial notation and report [`Error::InvalidSequence`].
///
/// # Examples
///
/// ```
/// use kanjinum::parse_serial_uint;
///
/// assert_eq!(parse_serial_uint("二〇二五"), Ok(2025));
/// assert_eq!(parse_serial_uint("〇〇七"), Ok(7));
/// assert!(parse_serial_uint("百二十三").is_err());
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_serial_uint(s: &str) -> Result<u64> {
    let bytes = s.as_bytes();
    let n = bytes.len();
    if n == 0 {
        return Err(Error::Empty);
    }
    let mut sum: u64 = 0;
    let mut i = 0;
    while i + KANJI_BYTES <= n {
        let digit = match lookup(decode_fixed(bytes, i)) {
            Some(value) if value <= 9 => value,
            Some(_) => return Err(Error::InvalidSequence),
            None => return Err(classify_unexpected(&bytes[i..], None)),
        };
        sum = sum
            .checked_mul(10)
            .and_then(|shifted| shifted.checked_add(digit))
            .ok_or(Error::Overflow)?;
        i += KANJI_BYTES;
    }
    if i < n {
        return Err(classify_unexpected(&bytes[i..], None));
    }
    Ok(sum)
}

/// Parses serial notation into an `i64`, with an optional leading `-`.
///
/// # Examples
///
/// ```
/// use kanjinum::parse_serial_int;
///
/// assert_eq!(parse_serial_int("二〇二五"), Ok(2025));
/// assert_eq!(parse_serial_int("-三〇二"), Ok(-302));
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_serial_int(s: &str) -> Result<i64> {
    let (abs, negative) = match s.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (s, false),
    };
    let sum = parse_serial_uint(abs)?;
    if negative {
        if sum > i64::MIN.unsigned_abs() {
            return Err(Error::Overflow);
        }
        Ok(sum.wrapping_neg() as i64)
    } else {
        i64::try_from(sum).map_err(|_| Error::Overflow)
    }
}

/// Formats a `u64` in serial notation.
///
/// # Examples
///
/// ```
/// use kanjinum::format_serial_uint;
///
/// assert_eq!(format_serial_uint(2025), "二〇二五");
/// assert_eq!(format_serial_uint(0), "〇");
/// ```
#[must_use]
pub fn format_serial_uint(u: u64) -> String {
    let decimal = u.to_string();
    let mut out = String::with_capacity(decimal.len() * KANJI_BYTES);
    for b in decimal.bytes() {
        out.push(SERIAL_DIGITS[usize::from(b - b'0')]);
    }
    out
}

/// Formats an `i64` in serial notation, with a leading `-` when negative.
///
/// # Examples
///
/// ```
/// use kanjinum::format_serial_int;
///
/// assert_eq!(format_serial_int(-302), "-三〇二");
/// ```
#[must_use]
pub fn format_serial_int(i: i64) -> String {
    let decimal = i.to_string();
    let mut out = String::with_capacity(decimal.len() * KANJI_BYTES);
    for b in decimal.bytes() {
        if b == b'-' {
            out.push('-');
        } else {
            out.push(SERIAL_DIGITS[usize::from(b - b'0')]);
        }
    }
    out
}
