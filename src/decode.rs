//! Fixed-width character decoding for the parser hot loops.
//!
//! The numeral vocabulary lives entirely in three-byte UTF-8 range, which
//! lets the parsers walk input three bytes at a time without a general
//! decoder. [`decode_fixed`] folds the UTF-8 marker bits of a three-byte
//! group into the high bits of the result instead of validating them up
//! front. For a well formed three-byte sequence those bits cancel to zero and
//! the result is the real code point; for anything else at least one high bit
//! survives and the value misses the character table, at which point
//! [`classify_unexpected`] takes the slow path to name the problem.

use crate::error::Error;

/// Width in bytes of every character in the numeral vocabulary.
pub(crate) const KANJI_BYTES: usize = 3;

/// Decodes the three bytes at `i` as a three-byte UTF-8 sequence, folding the
/// marker bits into bits 24..32. The caller must guarantee
/// `i + KANJI_BYTES <= bytes.len()`.
///
/// Marker layout of a three-byte sequence, with `x` the payload:
///
/// ```text
/// 1110_xxxx  10xx_xxxx  10xx_xxxx
/// ```
///
/// The four leading marker bits of byte one and the two of bytes two and
/// three are packed into one byte and xored with their expected pattern
/// `0b1110_1010`, so a valid sequence contributes nothing and an invalid one
/// forges a code point above `char::MAX`.
#[inline]
pub(crate) fn decode_fixed(bytes: &[u8], i: usize) -> u32 {
    let b1 = u32::from(bytes[i]);
    let b2 = u32::from(bytes[i + 1]);
    let b3 = u32::from(bytes[i + 2]);
    let validation =
        ((b1 & 0b1111_0000) | ((b2 & 0b1100_0000) >> 4) | ((b3 & 0b1100_0000) >> 6)) ^ 0b1110_1010;
    (b3 & 0b0011_1111) | ((b2 & 0b0011_1111) << 6) | ((b1 & 0b0000_1111) << 12) | (validation << 24)
}

/// Names the offending input at the head of `rest` once the fast path has
/// rejected it.
///
/// Decodes the first character properly and reports it as unexpected, with
/// `expected` filled in when the parser was waiting for the continuation of a
/// multi-character magnitude word. Bytes that do not form a character, and a
/// literal U+FFFD which cannot be told apart from a decoding failure, come
/// back as [`Error::Encoding`].
pub(crate) fn classify_unexpected(rest: &[u8], expected: Option<char>) -> Error {
    let valid = match std::str::from_utf8(rest) {
        Ok(text) => text,
        Err(err) => std::str::from_utf8(&rest[..err.valid_up_to()]).unwrap_or(""),
    };
    match valid.chars().next() {
        None | Some(char::REPLACEMENT_CHARACTER) => Error::Encoding,
        Some(actual) => match expected {
            Some(expected) => Error::mismatch(actual, expected),
            None => Error::unexpected(actual),
        },
    }
}
