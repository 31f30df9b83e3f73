//! Parsing of kanji numerals into 64-bit integers.
//!
//! The reading follows the positional grammar: inside a segment a digit may
//! precede a multiplier (二十 is 2 × 10), multipliers must strictly shrink
//! (五百三千 is no number), and a section word of 万 or above closes the
//! segment and scales it (二十万 is 20 × 10^4). Sections must strictly shrink
//! as well, so 一万二万 is rejected rather than summed.
//!
//! Input is consumed three bytes at a time; see the `decode` module for why
//! that is sound without pre-validating the UTF-8.

use crate::decode::{classify_unexpected, decode_fixed, KANJI_BYTES};
use crate::error::{Error, Result};
use crate::table::{is_extended_head, is_zero_char, lookup, MAN};

/// Parses a kanji numeral into a `u64`.
///
/// Accepts the standard vocabulary up to 京 plus the daiji variants,
/// including the obsolete ones, and the two zero literals 零 and 〇 on their
/// own. The magnitudes above 京 never fit in 64 bits and report
/// [`Error::Overflow`]; use [`parse_big_int`] for those.
///
/// [`parse_big_int`]: crate::parse_big_int
///
/// # Errors
///
/// * [`Error::Empty`] when `s` has no characters.
/// * [`Error::Overflow`] when the value exceeds `u64::MAX` or uses a
///   magnitude above 京.
/// * [`Error::InvalidSequence`] when every character is a numeral but the
///   ordering rules are broken, as in 一一 or 五百三千.
/// * [`Error::UnexpectedChar`] when a character outside the vocabulary shows
///   up, or [`Error::Encoding`] when it is U+FFFD.
///
/// # Examples
///
/// ```
/// use kanjinum::parse_uint;
///
/// assert_eq!(parse_uint("千二百三十四"), Ok(1234));
/// assert_eq!(parse_uint("二十万"), Ok(200_000));
/// assert_eq!(parse_uint("〇"), Ok(0));
/// assert!(parse_uint("一垓").is_err());
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_uint(s: &str) -> Result<u64> {
    let bytes = s.as_bytes();
    let n = bytes.len();
    if n == 0 {
        return Err(Error::Empty);
    }
    let mut sum: u64 = 0;
    let mut segment: u64 = 0;
    let mut last_value: u64 = 0;
    let mut min_multiplier = u64::MAX;
    let mut min_section = u64::MAX;
    let mut i = 0;
    while i + KANJI_BYTES <= n {
        let r = decode_fixed(bytes, i);
        match lookup(r) {
            Some(value) if value > 0 => {
                if value < 10 {
                    // two bare digits in a row cannot combine
                    if (1..10).contains(&last_value) {
                        return Err(Error::InvalidSequence);
                    }
                    last_value = value;
                } else if value < MAN {
                    // each multiplier at most once per segment, shrinking
                    if value >= min_multiplier {
                        return Err(Error::InvalidSequence);
                    }
                    min_multiplier = value;
                    if (1..10).contains(&last_value) {
                        segment += last_value * value;
                    } else {
                        segment += value;
                    }
                    last_value = value;
                } else {
                    // section close; sections must shrink over the whole number
                    if value >= min_section {
                        return Err(Error::InvalidSequence);
                    }
                    min_section = value;
                    if (1..10).contains(&last_value) {
                        segment += last_value;
                    }
                    if segment == 0 {
                        return Err(Error::InvalidSequence);
                    }
                    let section = segment.checked_mul(value).ok_or(Error::Overflow)?;
                    sum = sum.checked_add(section).ok_or(Error::Overflow)?;
                    min_multiplier = u64::MAX;
                    segment = 0;
                    last_value = 0;
                }
            }
            _ => {
                if is_zero_char(r) {
                    // a zero literal stands alone at the front
                    if i != 0 {
                        return Err(Error::InvalidSequence);
                    }
                    i += KANJI_BYTES;
                    break;
                }
                if is_extended_head(r) {
                    return Err(Error::Overflow);
                }
                return Err(classify_unexpected(&bytes[i..], None));
            }
        }
        i += KANJI_BYTES;
    }
    if i < n {
        return Err(classify_unexpected(&bytes[i..], None));
    }
    if (1..10).contains(&last_value) {
        segment += last_value;
    }
    if segment > 0 {
        sum = sum.checked_add(segment).ok_or(Error::Overflow)?;
    }
    Ok(sum)
}

/// Parses a kanji numeral into an `i64`, with an optional leading `-`.
///
/// The absolute value follows the same grammar as [`parse_uint`].
///
/// # Errors
///
/// As [`parse_uint`], with [`Error::Overflow`] raised against the `i64`
/// bounds instead.
///
/// # Examples
///
/// ```
/// use kanjinum::parse_int;
///
/// assert_eq!(parse_int("一万二千三百四十五"), Ok(12_345));
/// assert_eq!(parse_int("-二百十"), Ok(-210));
/// assert_eq!(parse_int("壱万弐千"), Ok(12_000));
/// assert_eq!(parse_int("零"), Ok(0));
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_int(s: &str) -> Result<i64> {
    let (abs, negative) = match s.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (s, false),
    };
    let sum = parse_uint(abs)?;
    if negative {
        if sum > i64::MIN.unsigned_abs() {
            return Err(Error::Overflow);
        }
        Ok(sum.wrapping_neg() as i64)
    } else {
        i64::try_from(sum).map_err(|_| Error::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_digits_and_multipliers() {
        assert_eq!(parse_uint("七"), Ok(7));
        assert_eq!(parse_uint("十"), Ok(10));
        assert_eq!(parse_uint("一十"), Ok(10));
        assert_eq!(parse_uint("十一"), Ok(11));
        assert_eq!(parse_uint("二十"), Ok(20));
        assert_eq!(parse_uint("百一十"), Ok(110));
        assert_eq!(parse_uint("千二百三十四"), Ok(1_234));
    }

    #[test]
    fn test_parses_sections() {
        assert_eq!(parse_uint("十万"), Ok(100_000));
        assert_eq!(parse_uint("二十万三千"), Ok(203_000));
        assert_eq!(parse_uint("一億"), Ok(100_000_000));
        assert_eq!(parse_uint("三兆四億"), Ok(3_000_400_000_000));
        assert_eq!(parse_uint("一京"), Ok(10_000_000_000_000_000));
    }

    #[test]
    fn test_parses_zero_literals() {
        assert_eq!(parse_uint("零"), Ok(0));
        assert_eq!(parse_uint("〇"), Ok(0));
        assert_eq!(parse_int("零"), Ok(0));
    }

    #[test]
    fn test_parses_daiji_spellings() {
        assert_eq!(parse_uint("壱万弐千"), Ok(12_000));
        assert_eq!(parse_uint("拾萬"), Ok(100_000));
        assert_eq!(parse_uint("漆阡"), Ok(7_000));
        assert_eq!(parse_uint("柒仟"), Ok(7_000));
        assert_eq!(parse_uint("玖佰"), Ok(900));
        assert_eq!(parse_uint("壹貳參"), Err(Error::InvalidSequence));
    }

    #[test]
    fn test_rejects_broken_ordering() {
        assert_eq!(parse_uint("一一"), Err(Error::InvalidSequence));
        assert_eq!(parse_uint("十十"), Err(Error::InvalidSequence));
        assert_eq!(parse_uint("五百three千"), Err(Error::unexpected('t')));
        assert_eq!(parse_uint("五百三千"), Err(Error::InvalidSequence));
        assert_eq!(parse_uint("一万二万"), Err(Error::InvalidSequence));
        assert_eq!(parse_uint("万"), Err(Error::InvalidSequence));
    }

    #[test]
    fn test_zero_literal_must_stand_alone() {
        assert_eq!(parse_uint("一〇"), Err(Error::InvalidSequence));
        assert_eq!(parse_uint("〇〇"), Err(Error::unexpected('〇')));
        assert_eq!(parse_uint("〇一"), Err(Error::unexpected('一')));
        assert_eq!(parse_uint("零零"), Err(Error::unexpected('零')));
    }

    #[test]
    fn test_reports_strangers_and_damage() {
        assert_eq!(parse_uint(""), Err(Error::Empty));
        assert_eq!(parse_uint("一a"), Err(Error::unexpected('a')));
        assert_eq!(parse_uint("abc"), Err(Error::unexpected('a')));
        assert_eq!(parse_uint("🎌"), Err(Error::unexpected('🎌')));
        assert_eq!(parse_uint("\u{fffd}"), Err(Error::Encoding));
        assert_eq!(parse_uint("一\u{fffd}"), Err(Error::Encoding));
    }

    #[test]
    fn test_extended_magnitudes_overflow_the_fixed_path() {
        assert_eq!(parse_uint("一垓"), Err(Error::Overflow));
        assert_eq!(parse_uint("垓"), Err(Error::Overflow));
        assert_eq!(parse_uint("無量大数"), Err(Error::Overflow));
        assert_eq!(parse_int("-一垓"), Err(Error::Overflow));
    }

    #[test]
    fn test_unsigned_bounds() {
        let max = "千八百四十四京六千七百四十四兆七百三十七億九百五十五万千六百十五";
        assert_eq!(parse_uint(max), Ok(u64::MAX));
        assert_eq!(parse_uint("二千京"), Err(Error::Overflow));
        let above = "千八百四十四京六千七百四十四兆七百三十七億九百五十五万千六百十六";
        assert_eq!(parse_uint(above), Err(Error::Overflow));
    }

    #[test]
    fn test_signed_bounds() {
        let max = "九百二十二京三千三百七十二兆三百六十八億五千四百七十七万五千八百七";
        let min = "-九百二十二京三千三百七十二兆三百六十八億五千四百七十七万五千八百八";
        assert_eq!(parse_int(max), Ok(i64::MAX));
        assert_eq!(parse_int(min), Ok(i64::MIN));
        let above = "九百二十二京三千三百七十二兆三百六十八億五千四百七十七万五千八百八";
        assert_eq!(parse_int(above), Err(Error::Overflow));
        let below = "-九百二十二京三千三百七十二兆三百六十八億五千四百七十七万五千八百九";
        assert_eq!(parse_int(below), Err(Error::Overflow));
    }

    #[test]
    fn test_sign_handling() {
        assert_eq!(parse_int("-十一"), Ok(-11));
        assert_eq!(parse_int("-"), Err(Error::Empty));
        assert_eq!(parse_int("--一"), Err(Error::unexpected('-')));
        assert_eq!(parse_int("一-"), Err(Error::unexpected('-')));
    }
}
