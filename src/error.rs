//! Error types for kanji numeral parsing.
//!
//! All parse failures are local and non-retryable: the offending input is
//! rejected as a whole and the call returns immediately. Formatting has no
//! error path for values inside the supported range.
//!
//! ## Error Categories
//!
//! - **Grammar violations**: digits in an impossible order (`一一`, `十百`),
//!   a misplaced zero, or an empty/repeated section (`京` alone, `一万二万`)
//! - **Range violations**: the value does not fit the requested integer type
//! - **Input violations**: empty input, malformed UTF-8, characters outside
//!   the numeral vocabulary, or a magnitude word cut off mid-spelling
//!
//! ## Examples
//!
//! ```rust
//! use kanjinum::{parse_int, Error};
//!
//! assert_eq!(parse_int("一一"), Err(Error::InvalidSequence));
//! assert_eq!(parse_int("一垓"), Err(Error::Overflow));
//! assert_eq!(
//!     parse_int("〇一"),
//!     Err(Error::UnexpectedChar { actual: '一', expected: None }),
//! );
//! ```

use thiserror::Error;

/// Represents all possible errors that can occur while parsing kanji numerals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The input was empty where at least one numeral was required.
    #[error("empty string")]
    Empty,

    /// A multi-character magnitude word (恒河沙, 阿僧祇, 那由他, 不可思議,
    /// 無量大数) began but the input ended before its spelling completed.
    #[error("unexpected end of input")]
    Eof,

    /// The number does not fit the target integer type, or a magnitude of
    /// 10^20 or above appeared on the 64-bit path.
    #[error("number overflows the target type")]
    Overflow,

    /// The input contained a malformed UTF-8 sequence (or a replacement
    /// character left behind by earlier transcoding damage).
    #[error("invalid utf-8 encoding")]
    Encoding,

    /// The digits form an invalid sequence, such as `一一` or `十百`.
    #[error("invalid sequence of digits")]
    InvalidSequence,

    /// A character outside the numeral vocabulary, or one that breaks the
    /// spelling of a multi-character magnitude word.
    #[error("{}", unexpected_message(.actual, .expected))]
    UnexpectedChar {
        /// The character actually present in the input.
        actual: char,
        /// The character required at this position, when one specific
        /// character was required (inside a magnitude word).
        expected: Option<char>,
    },
}

impl Error {
    /// Creates an [`Error::UnexpectedChar`] for a character with no specific
    /// expectation, i.e. one that is simply not part of the vocabulary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kanjinum::Error;
    ///
    /// let err = Error::unexpected('a');
    /// assert_eq!(err.to_string(), "unexpected character: 'a'");
    /// ```
    #[must_use]
    pub fn unexpected(actual: char) -> Self {
        Error::UnexpectedChar {
            actual,
            expected: None,
        }
    }

    /// Creates an [`Error::UnexpectedChar`] for a mismatch inside a
    /// multi-character magnitude word, recording which character the
    /// spelling required next.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kanjinum::Error;
    ///
    /// let err = Error::mismatch('一', '河');
    /// assert_eq!(
    ///     err.to_string(),
    ///     "unexpected character: expected '河', actual '一'",
    /// );
    /// ```
    #[must_use]
    pub fn mismatch(actual: char, expected: char) -> Self {
        Error::UnexpectedChar {
            actual,
            expected: Some(expected),
        }
    }
}

fn unexpected_message(actual: &char, expected: &Option<char>) -> String {
    match expected {
        Some(expected) => format!("unexpected character: expected '{expected}', actual '{actual}'"),
        None => format!("unexpected character: '{actual}'"),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
