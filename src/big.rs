//! Arbitrary-precision parsing for magnitudes beyond 京.
//!
//! The grammar is the same as on the 64-bit path, extended with the
//! magnitude words from 垓 (10^20) to 無量大数 (10^68). Values come from the
//! shared [`Magnitudes`] table instead of the perfect-hash table, and the
//! multi-character words 恒河沙, 阿僧祇, 那由他, 不可思議 and 無量大数 are
//! recognized character by character through a small stack of expected
//! continuations.
//!
//! Digits inside a segment are staged in a fixed array and folded when the
//! segment closes, because which multiplier a digit binds to is only known
//! once the next section word arrives.

use num_bigint::{BigInt, Sign};

use crate::decode::{classify_unexpected, decode_fixed, KANJI_BYTES};
use crate::error::{Error, Result};
use crate::magnitude::Magnitudes;
use crate::table::is_zero_char;

/// Staging capacity per segment. A segment that can still close legally
/// stages at most eight values, so this never fills on valid input.
const SEGMENT_SLOTS: usize = 16;

/// Parses a kanji numeral of any size into a [`BigInt`], with an optional
/// leading `-`.
///
/// Everything [`parse_int`] accepts is accepted here with the same value,
/// plus the magnitudes above 京: the single characters 垓 through 極 and the
/// words 恒河沙, 阿僧祇, 那由他, 不可思議 and 無量大数 (10^68). The largest
/// readable number starts with 九千九百九十九無量大数 and sits just below
/// 10^72.
///
/// [`parse_int`]: crate::parse_int
///
/// # Errors
///
/// * [`Error::Empty`] when nothing follows the optional sign.
/// * [`Error::Eof`] when input ends inside a multi-character word, as in
///   一恒河.
/// * [`Error::UnexpectedChar`] when a multi-character word continues wrongly;
///   `expected` names the character that should have come next.
/// * [`Error::InvalidSequence`] when the ordering rules are broken, exactly
///   as on the 64-bit path.
///
/// # Examples
///
/// ```
/// use kanjinum::parse_big_int;
/// use num_bigint::BigInt;
///
/// assert_eq!(parse_big_int("十一"), Ok(BigInt::from(11)));
/// assert_eq!(parse_big_int("一垓"), Ok(BigInt::from(10u32).pow(20)));
///
/// let expected = BigInt::from(3u32) * BigInt::from(10u32).pow(52) + BigInt::from(2u32);
/// assert_eq!(parse_big_int("三恒河沙二"), Ok(expected));
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_big_int(s: &str) -> Result<BigInt> {
    let (abs, negative) = match s.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (s, false),
    };
    if abs.is_empty() {
        return Err(Error::Empty);
    }
    let mut parser = BigParser::new(Magnitudes::get());
    parser.parse(abs.as_bytes())?;
    let sum = parser.into_sum();
    Ok(if negative { -sum } else { sum })
}

struct BigParser {
    mags: &'static Magnitudes,
    sum: BigInt,
    /// Digits of the open segment, staged until the segment closes.
    segment: [BigInt; SEGMENT_SLOTS],
    len: usize,
    /// Smallest multiplier used in the open segment.
    min_multiplier: Option<&'static BigInt>,
    /// Smallest section word closed so far.
    min_section: Option<&'static BigInt>,
    /// Continuation characters still owed by a multi-character word, next
    /// one on top.
    pending: Vec<char>,
}

impl BigParser {
    fn new(mags: &'static Magnitudes) -> BigParser {
        BigParser {
            mags,
            sum: BigInt::default(),
            segment: std::array::from_fn(|_| BigInt::default()),
            len: 0,
            min_multiplier: None,
            min_section: None,
            pending: Vec::new(),
        }
    }

    fn parse(&mut self, bytes: &[u8]) -> Result<()> {
        let mags = self.mags;
        let n = bytes.len();
        let mut i = 0;
        while i + KANJI_BYTES <= n {
            let r = decode_fixed(bytes, i);
            if let Some(&expected) = self.pending.last() {
                if r != expected as u32 {
                    return Err(classify_unexpected(&bytes[i..], Some(expected)));
                }
                self.pending.pop();
                i += KANJI_BYTES;
                continue;
            }
            match mags.value_of(r) {
                Some(value) if value.sign() == Sign::Plus => {
                    if value < mags.myriad() {
                        self.push(value)?;
                    } else {
                        self.end_segment_with(value)?;
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
                    return Err(classify_unexpected(&bytes[i..], None));
                }
            }
            match char::from_u32(r) {
                Some('恒') => self.pending.extend(['沙', '河']),
                Some('阿') => self.pending.extend(['祇', '僧']),
                Some('那') => self.pending.extend(['他', '由']),
                Some('不') => self.pending.extend(['議', '思', '可']),
                Some('無') => self.pending.extend(['数', '大', '量']),
                _ => {}
            }
            i += KANJI_BYTES;
        }
        if i < n {
            return Err(classify_unexpected(&bytes[i..], None));
        }
        if !self.pending.is_empty() {
            return Err(Error::Eof);
        }
        self.end_segment()
    }

    /// Integrates one value below 万 into the open segment.
    fn push(&mut self, digit: &'static BigInt) -> Result<()> {
        let mags = self.mags;
        if *digit >= mags.ten {
            // each multiplier at most once per segment, shrinking
            if let Some(min) = self.min_multiplier {
                if *digit >= *min {
                    return Err(Error::InvalidSequence);
                }
            }
            self.min_multiplier = Some(digit);
        }
        if self.len == 0 {
            self.segment[0].clone_from(digit);
            self.len = 1;
            return Ok(());
        }
        let last = self.len - 1;
        if self.segment[last] < *digit {
            if *digit < mags.ten {
                return Err(Error::InvalidSequence);
            }
            if (*digit == mags.hundred || *digit == mags.thousand) && self.segment[last] >= mags.ten
            {
                return Err(Error::InvalidSequence);
            }
            // a digit ahead of a larger multiplier scales it, as in 二十
            self.segment[last] *= digit;
            Ok(())
        } else if self.segment[last] > *digit
            && self.len < SEGMENT_SLOTS
            && (*digit >= mags.ten || self.segment[last] >= mags.ten)
        {
            // a smaller value starts the next place, as the 一 in 十一
            self.segment[self.len].clone_from(digit);
            self.len += 1;
            Ok(())
        } else {
            Err(Error::InvalidSequence)
        }
    }

    /// Closes the open segment at a section word worth 万 or more.
    fn end_segment_with(&mut self, section: &'static BigInt) -> Result<()> {
        // sections must shrink over the whole number
        if let Some(min) = self.min_section {
            if *section >= *min {
                return Err(Error::InvalidSequence);
            }
        }
        self.min_section = Some(section);
        if self.len == 0 {
            return Err(Error::InvalidSequence);
        }
        let multiplier = self.fold_segment()?;
        if multiplier >= *self.mags.myriad() || multiplier >= *section {
            return Err(Error::InvalidSequence);
        }
        self.sum += multiplier * section;
        self.len = 0;
        self.min_multiplier = None;
        Ok(())
    }

    /// Closes the trailing segment at end of input.
    fn end_segment(&mut self) -> Result<()> {
        if self.len == 0 {
            return Ok(());
        }
        let total = self.fold_segment()?;
        if total >= *self.mags.myriad() {
            return Err(Error::InvalidSequence);
        }
        self.sum += total;
        self.len = 0;
        Ok(())
    }

    /// Checks the staged values strictly shrink and returns their sum.
    fn fold_segment(&self) -> Result<BigInt> {
        let mut total = BigInt::default();
        let mut previous: Option<&BigInt> = None;
        for staged in &self.segment[..self.len] {
            if let Some(previous) = previous {
                if staged >= previous {
                    return Err(Error::InvalidSequence);
                }
            }
            total += staged;
            previous = Some(staged);
        }
        Ok(total)
    }

    fn into_sum(self) -> BigInt {
        self.sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(text: &str) -> BigInt {
        text.parse().unwrap()
    }

    fn pow10(exp: u32) -> BigInt {
        BigInt::from(10u32).pow(exp)
    }

    #[test]
    fn test_agrees_with_the_fixed_path_below_the_boundary() {
        for (text, value) in [
            ("零", 0i64),
            ("十一", 11),
            ("千二百三十四", 1_234),
            ("二十万三千", 203_000),
            ("-二百十", -210),
            ("壱万弐千", 12_000),
        ] {
            assert_eq!(parse_big_int(text), Ok(BigInt::from(value)), "{text}");
        }
    }

    #[test]
    fn test_parses_extended_single_characters() {
        assert_eq!(parse_big_int("一垓"), Ok(pow10(20)));
        assert_eq!(parse_big_int("一極"), Ok(pow10(48)));
        assert_eq!(
            parse_big_int("二垓一京"),
            Ok(BigInt::from(2u32) * pow10(20) + pow10(16)),
        );
        assert_eq!(
            parse_big_int("九千九百九十九無量大数"),
            Ok(BigInt::from(9_999u32) * pow10(68)),
        );
    }

    #[test]
    fn test_parses_multi_character_words() {
        assert_eq!(parse_big_int("一恒河沙"), Ok(pow10(52)));
        assert_eq!(parse_big_int("一阿僧祇"), Ok(pow10(56)));
        assert_eq!(parse_big_int("一那由他"), Ok(pow10(60)));
        assert_eq!(parse_big_int("一不可思議"), Ok(pow10(64)));
        assert_eq!(parse_big_int("一無量大数"), Ok(pow10(68)));
        assert_eq!(
            parse_big_int("一恒河沙一"),
            Ok(pow10(52) + BigInt::from(1u32)),
        );
    }

    #[test]
    fn test_reports_truncated_words_as_eof() {
        assert_eq!(parse_big_int("一恒"), Err(Error::Eof));
        assert_eq!(parse_big_int("一恒河"), Err(Error::Eof));
        assert_eq!(parse_big_int("一不可思"), Err(Error::Eof));
        assert_eq!(parse_big_int("一無量大"), Err(Error::Eof));
    }

    #[test]
    fn test_names_the_expected_continuation() {
        assert_eq!(parse_big_int("一恒一"), Err(Error::mismatch('一', '河')));
        assert_eq!(parse_big_int("一恒河一"), Err(Error::mismatch('一', '沙')));
        assert_eq!(parse_big_int("一無量数"), Err(Error::mismatch('数', '大')));
        assert_eq!(parse_big_int("一恒河\u{fffd}"), Err(Error::Encoding));
    }

    #[test]
    fn test_word_tails_alone_are_strangers() {
        assert_eq!(parse_big_int("河"), Err(Error::unexpected('河')));
        assert_eq!(parse_big_int("一沙"), Err(Error::unexpected('沙')));
    }

    #[test]
    fn test_enforces_the_ordering_rules() {
        assert_eq!(parse_big_int("一一"), Err(Error::InvalidSequence));
        assert_eq!(parse_big_int("十十"), Err(Error::InvalidSequence));
        assert_eq!(parse_big_int("二十一十"), Err(Error::InvalidSequence));
        assert_eq!(parse_big_int("五百三千"), Err(Error::InvalidSequence));
        assert_eq!(parse_big_int("一万二万"), Err(Error::InvalidSequence));
        assert_eq!(parse_big_int("一垓一垓"), Err(Error::InvalidSequence));
        assert_eq!(parse_big_int("垓"), Err(Error::InvalidSequence));
        assert_eq!(parse_big_int("一〇"), Err(Error::InvalidSequence));
    }

    #[test]
    fn test_sections_carry_at_most_four_digits() {
        assert_eq!(
            parse_big_int("一万垓"),
            Err(Error::InvalidSequence),
            "a section multiplier must stay below 万",
        );
        assert_eq!(parse_big_int("九千九百九十九垓"), Ok(big("999900000000000000000000")));
    }

    #[test]
    fn test_sign_and_empty_handling() {
        assert_eq!(parse_big_int(""), Err(Error::Empty));
        assert_eq!(parse_big_int("-"), Err(Error::Empty));
        assert_eq!(parse_big_int("-一垓"), Ok(-pow10(20)));
        assert_eq!(parse_big_int("-零"), Ok(BigInt::default()));
    }

    #[test]
    fn test_reads_the_largest_supported_number() {
        let text = "九千九百九十九無量大数九千九百九十九不可思議九千九百九十九那由他\
                    九千九百九十九阿僧祇九千九百九十九恒河沙九千九百九十九極九千九百九十九載\
                    九千九百九十九正九千九百九十九澗九千九百九十九溝九千九百九十九穣\
                    九千九百九十九秭九千九百九十九垓九千九百九十九京九千九百九十九兆\
                    九千九百九十九億九千九百九十九万九千九百九十九";
        let expected = big(&"9999".repeat(18));
        assert_eq!(parse_big_int(text), Ok(expected));
    }
}
