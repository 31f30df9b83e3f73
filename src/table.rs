//! Character-to-value table for the 64-bit parsing path.
//!
//! Every character the 64-bit parsers accept occupies exactly three bytes in
//! UTF-8. A multiplicative perfect hash spreads the 36 table characters over
//! 64 slots with no collisions, so classifying a character costs one multiply,
//! one shift and one equality check instead of a match over the vocabulary.
//!
//! Lookups also accept the forged code points produced by
//! `decode::decode_fixed` for invalid byte sequences. Forged values carry
//! leftover validation bits above bit 23, so they can never equal a stored
//! character and always miss.

/// 十
pub(crate) const JUU: u64 = 10;
/// 百
pub(crate) const HYAKU: u64 = 100;
/// 千
pub(crate) const SEN: u64 = 1_000;
/// 万
pub(crate) const MAN: u64 = 10_000;
/// 億
pub(crate) const OKU: u64 = 100_000_000;
/// 兆
pub(crate) const CHOU: u64 = 1_000_000_000_000;
/// 京
pub(crate) const KEI: u64 = 10_000_000_000_000_000;

/// Multiplier of the perfect hash over the table characters, found by search.
/// The tests prove the mapping stays collision free.
const HASH_MULTIPLIER: u32 = 3_247_328_111;
const HASH_SHIFT: u32 = 26;
const TABLE_SLOTS: usize = 64;

#[derive(Clone, Copy)]
struct Entry {
    ch: u32,
    value: u64,
}

impl Entry {
    /// Unused slot. No character and no forged code point can equal
    /// `u32::MAX`, so empty slots never match a probe.
    const EMPTY: Entry = Entry { ch: u32::MAX, value: 0 };

    const fn new(ch: char, value: u64) -> Entry {
        Entry { ch: ch as u32, value }
    }
}

static CHAR_VALUES: [Entry; TABLE_SLOTS] = [
    Entry::EMPTY, Entry::new('柒', 7), Entry::EMPTY, Entry::new('億', OKU),
    Entry::EMPTY, Entry::EMPTY, Entry::new('陸', 6), Entry::EMPTY,
    Entry::new('壱', 1), Entry::new('貳', 2), Entry::new('三', 3), Entry::new('壹', 1),
    Entry::EMPTY, Entry::new('二', 2), Entry::EMPTY, Entry::new('漆', 7),
    Entry::new('五', 5), Entry::new('十', JUU), Entry::EMPTY, Entry::EMPTY,
    Entry::new('阡', SEN), Entry::new('玖', 9), Entry::new('一', 1), Entry::new('零', 0),
    Entry::new('四', 4), Entry::new('京', KEI), Entry::EMPTY, Entry::new('六', 6),
    Entry::EMPTY, Entry::new('肆', 4), Entry::EMPTY, Entry::new('捌', 8),
    Entry::EMPTY, Entry::new('拾', JUU), Entry::EMPTY, Entry::EMPTY,
    Entry::new('參', 3), Entry::new('佰', HYAKU), Entry::EMPTY, Entry::new('七', 7),
    Entry::new('萬', MAN), Entry::new('万', MAN), Entry::new('九', 9), Entry::EMPTY,
    Entry::EMPTY, Entry::EMPTY, Entry::EMPTY, Entry::new('伍', 5),
    Entry::EMPTY, Entry::EMPTY, Entry::new('千', SEN), Entry::EMPTY,
    Entry::new('参', 3), Entry::EMPTY, Entry::new('百', HYAKU), Entry::EMPTY,
    Entry::EMPTY, Entry::new('弐', 2), Entry::EMPTY, Entry::new('八', 8),
    Entry::new('兆', CHOU), Entry::new('仟', SEN), Entry::new('〇', 0), Entry::EMPTY,
];

#[inline]
fn slot(r: u32) -> usize {
    (HASH_MULTIPLIER.wrapping_mul(r) >> HASH_SHIFT) as usize & (TABLE_SLOTS - 1)
}

/// Looks up a code point, possibly forged, and returns its value when the
/// probed slot stores exactly that character.
#[inline]
pub(crate) fn lookup(r: u32) -> Option<u64> {
    let entry = CHAR_VALUES[slot(r)];
    if entry.ch == r {
        Some(entry.value)
    } else {
        None
    }
}

/// The two zero literals sit in the table with value 0 and need their own
/// check because a missed lookup and a zero hit look the same to callers.
#[inline]
pub(crate) fn is_zero_char(r: u32) -> bool {
    r == '零' as u32 || r == '〇' as u32
}

/// Heads of the magnitudes above 京. None of them fit in 64 bits, so the
/// fixed-width parsers report them as overflow rather than as strangers.
#[inline]
pub(crate) fn is_extended_head(r: u32) -> bool {
    matches!(
        char::from_u32(r),
        Some('垓' | '秭' | '穣' | '溝' | '澗' | '正' | '載' | '極' | '恒' | '阿' | '那' | '不' | '無')
    )
}

/// Returns the numeric value of a single numeral character.
///
/// Covers every character the 64-bit parsers accept: the digits, the small
/// multipliers, the section words up to 京, and the daiji variants including
/// the obsolete ones. Returns `None` for anything else, including the
/// magnitude characters above 京 that only [`parse_big_int`] understands.
///
/// [`parse_big_int`]: crate::parse_big_int
///
/// # Examples
///
/// ```
/// assert_eq!(kanjinum::value_of('七'), Some(7));
/// assert_eq!(kanjinum::value_of('萬'), Some(10_000));
/// assert_eq!(kanjinum::value_of('〇'), Some(0));
/// assert_eq!(kanjinum::value_of('垓'), None);
/// assert_eq!(kanjinum::value_of('a'), None);
/// ```
#[must_use]
pub fn value_of(c: char) -> Option<u64> {
    lookup(c as u32)
}
