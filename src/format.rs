//! Formatting of integers as kanji numerals.
//!
//! Output follows the standard reading: a multiplier of at most 9999 ahead
//! of each section word, zero as 〇, 十 and 百 without a leading 一 (110 is
//! 百十, not 一百一十), and 一 kept ahead of 万 and above. Values up to 100
//! come straight from a lookup table, which covers the bulk of realistic
//! input without assembling anything.

use num_bigint::{BigInt, Sign};

use crate::magnitude::{Magnitudes, EXTENDED_WORDS};
use crate::table::{CHOU, HYAKU, KEI, MAN, OKU, SEN};

/// Spellings of 0 through 100, indexed by value.
static SMALL_NUMERALS: [&str; 101] = [
    "〇", "一", "二", "三", "四", "五", "六", "七", "八", "九",
    "十", "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九",
    "二十", "二十一", "二十二", "二十三", "二十四", "二十五", "二十六", "二十七", "二十八", "二十九",
    "三十", "三十一", "三十二", "三十三", "三十四", "三十五", "三十六", "三十七", "三十八", "三十九",
    "四十", "四十一", "四十二", "四十三", "四十四", "四十五", "四十六", "四十七", "四十八", "四十九",
    "五十", "五十一", "五十二", "五十三", "五十四", "五十五", "五十六", "五十七", "五十八", "五十九",
    "六十", "六十一", "六十二", "六十三", "六十四", "六十五", "六十六", "六十七", "六十八", "六十九",
    "七十", "七十一", "七十二", "七十三", "七十四", "七十五", "七十六", "七十七", "七十八", "七十九",
    "八十", "八十一", "八十二", "八十三", "八十四", "八十五", "八十六", "八十七", "八十八", "八十九",
    "九十", "九十一", "九十二", "九十三", "九十四", "九十五", "九十六", "九十七", "九十八", "九十九",
    "百",
];

/// Values below this come straight from [`SMALL_NUMERALS`].
const FAST_SMALL_COUNT: u64 = 101;

/// Starting buffer capacity, enough for most everyday values.
const INITIAL_CAPACITY: usize = 24;

/// Formats a `u64` as a kanji numeral.
///
/// # Examples
///
/// ```
/// use kanjinum::format_uint;
///
/// assert_eq!(format_uint(0), "〇");
/// assert_eq!(format_uint(1_234), "千二百三十四");
/// assert_eq!(format_uint(200_000), "二十万");
/// assert_eq!(
///     format_uint(u64::MAX),
///     "千八百四十四京六千七百四十四兆七百三十七億九百五十五万千六百十五",
/// );
/// ```
#[must_use]
pub fn format_uint(u: u64) -> String {
    if u < FAST_SMALL_COUNT {
        return SMALL_NUMERALS[u as usize].to_owned();
    }
    let mut out = String::with_capacity(INITIAL_CAPACITY);
    format_unsigned(&mut out, u);
    out
}

/// Formats an `i64` as a kanji numeral, with a leading `-` when negative.
///
/// # Examples
///
/// ```
/// use kanjinum::format_int;
///
/// assert_eq!(format_int(12_345), "一万二千三百四十五");
/// assert_eq!(format_int(-11), "-十一");
/// assert_eq!(format_int(0), "〇");
/// ```
#[must_use]
pub fn format_int(i: i64) -> String {
    if (0..FAST_SMALL_COUNT as i64).contains(&i) {
        return SMALL_NUMERALS[i as usize].to_owned();
    }
    let mut out = String::with_capacity(INITIAL_CAPACITY);
    let mut u = i as u64;
    if i < 0 {
        out.push('-');
        u = u.wrapping_neg();
    }
    format_unsigned(&mut out, u);
    out
}

/// Formats a [`BigInt`] as a kanji numeral.
///
/// Values that fit in 64 bits come out exactly as [`format_int`] and
/// [`format_uint`] would write them. Beyond that the magnitude words 垓
/// through 無量大数 take over, which reach up to but not including 10^72.
/// The caller keeps values inside that range; larger magnitudes have no word
/// to name them and come out wrong rather than panicking.
///
/// # Examples
///
/// ```
/// use kanjinum::format_big_int;
/// use num_bigint::BigInt;
///
/// let value = BigInt::from(2u32) * BigInt::from(10u32).pow(68) + BigInt::from(12_345u32);
/// assert_eq!(format_big_int(&value), "二無量大数一万二千三百四十五");
/// ```
#[must_use]
pub fn format_big_int(value: &BigInt) -> String {
    if let Ok(i) = i64::try_from(value) {
        return format_int(i);
    }
    if let Ok(u) = u64::try_from(value) {
        return format_uint(u);
    }
    let mags = Magnitudes::get();
    let mut out = String::with_capacity(INITIAL_CAPACITY);
    if value.sign() == Sign::Minus {
        out.push('-');
    }
    let mut rest = BigInt::from(value.magnitude().clone());
    for (i, word) in EXTENDED_WORDS.iter().enumerate() {
        format_append_big(&mut out, &mut rest, word, &mags.powers[17 - i], &mags.max_multiplier);
    }
    // below the 京 tier the remainder always fits in 64 bits
    format_unsigned(&mut out, u64::try_from(&rest).unwrap_or(0));
    out
}

fn format_unsigned(out: &mut String, mut u: u64) {
    if u >= KEI {
        u = format_append(out, u, '京', KEI, u / KEI);
    }
    if u >= CHOU {
        u = format_append(out, u, '兆', CHOU, u / CHOU);
    }
    if u >= OKU {
        u = format_append(out, u, '億', OKU, u / OKU);
    }
    if u >= MAN {
        u = format_append(out, u, '万', MAN, u / MAN);
    }
    if u >= SEN {
        u = format_append(out, u, '千', SEN, u / SEN);
    }
    if u > HYAKU {
        u = format_append(out, u, '百', HYAKU, u / HYAKU);
    }
    if u > 0 {
        out.push_str(SMALL_NUMERALS[u as usize]);
    }
}

/// Writes `multiplier` and the section character, returning what is left of
/// `u`. A multiplier of one is written out only ahead of 万 and above.
fn format_append(out: &mut String, u: u64, kanji: char, kanji_value: u64, multiplier: u64) -> u64 {
    let total = multiplier * kanji_value;
    if multiplier == 1 {
        if kanji_value >= MAN {
            out.push('一');
        }
    } else {
        append_multiplier(out, multiplier);
    }
    out.push(kanji);
    u - total
}

/// Writes a section multiplier in the 1..=9999 range.
fn append_multiplier(out: &mut String, mut m: u64) {
    if m < FAST_SMALL_COUNT {
        out.push_str(SMALL_NUMERALS[m as usize]);
        return;
    }
    if m >= SEN {
        m = format_append(out, m, '千', SEN, m / SEN);
    }
    if m > HYAKU {
        m = format_append(out, m, '百', HYAKU, m / HYAKU);
    }
    if m > 0 {
        out.push_str(SMALL_NUMERALS[m as usize]);
    }
}

/// Writes one extended tier of `rest`, from 京 up to 無量大数.
///
/// The written multiplier is capped at 9999 but the subtracted amount is
/// not, so an out-of-range value degrades to a wrong spelling instead of
/// spilling into lower tiers twice.
fn format_append_big(out: &mut String, rest: &mut BigInt, word: &str, tier: &BigInt, cap: &BigInt) {
    if &*rest < tier {
        return;
    }
    let mut multiplier = &*rest / tier;
    let total = &multiplier * tier;
    if multiplier > *cap {
        multiplier.clone_from(cap);
    }
    append_multiplier(out, u64::try_from(&multiplier).unwrap_or(0));
    out.push_str(word);
    *rest -= total;
}
