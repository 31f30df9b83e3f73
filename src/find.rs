//! Locating kanji numerals inside running text.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::Error;
use crate::parse::parse_int;

/// Matches a maximal run of numeral vocabulary in text.
///
/// The five multi-character magnitude words are listed ahead of the single
/// character class so they only match whole; a lone 恒 or 沙 is not part of
/// any numeral. The run being maximal does not make it grammatical, which is
/// for the parsers to decide.
pub const NUMERAL_PATTERN: &str = "(?:恒河沙|阿僧祇|那由他|不可思議|無量大数|\
     [〇零一二三四五六七八九十百千万億兆京垓秭穣溝澗正載極\
     壱弐参伍拾萬壹貳參肆陸柒漆捌玖佰阡仟])+";

static NUMERAL_REGEX: OnceLock<Regex> = OnceLock::new();

fn numeral_regex() -> &'static Regex {
    NUMERAL_REGEX.get_or_init(|| Regex::new(NUMERAL_PATTERN).expect("NUMERAL_PATTERN compiles"))
}

/// One numeral found in a larger text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<'a> {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset past the last character.
    pub end: usize,
    /// The matched text, `&text[start..end]`.
    pub text: &'a str,
    /// The matched text read as a signed number, or why it does not read as
    /// one.
    pub value: Result<i64, Error>,
}

/// Finds every numeral in `text`, in order.
///
/// Each maximal run of numeral characters becomes one [`SearchResult`] with
/// its byte offsets and its value under [`parse_int`]. Runs that are not
/// grammatical, or that overflow an `i64`, are still reported with the error
/// in [`SearchResult::value`]; serial notation such as 三〇一 is one common
/// case and can be re-read with [`parse_serial_int`].
///
/// [`parse_int`]: crate::parse_int
/// [`parse_serial_int`]: crate::parse_serial_int
///
/// # Examples
///
/// ```
/// let hits = kanjinum::find("値段は三千二百円、送料は二百十円。");
///
/// assert_eq!(hits.len(), 2);
/// assert_eq!((hits[0].start, hits[0].end, hits[0].text), (9, 21, "三千二百"));
/// assert_eq!(hits[0].value, Ok(3200));
/// assert_eq!(hits[1].text, "二百十");
/// assert_eq!(hits[1].value, Ok(210));
/// ```
///
/// A match that does not read as a positional numeral keeps its error:
///
/// ```
/// let hits = kanjinum::find("部屋番号は三〇一です");
///
/// assert_eq!(hits[0].text, "三〇一");
/// assert!(hits[0].value.is_err());
/// ```
#[must_use]
pub fn find(text: &str) -> Vec<SearchResult<'_>> {
    numeral_regex()
        .find_iter(text)
        .map(|m| SearchResult {
            start: m.start(),
            end: m.end(),
            text: m.as_str(),
            value: parse_int(m.as_str()),
        })
        .collect()
}
