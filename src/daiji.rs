//! Conversion between everyday numerals and daiji.
//!
//! Daiji are the tamper-resistant spellings used on banknotes and in legal
//! writing, where a stroke could turn 一 into 十. Six characters are still
//! prescribed for that use: 壱 弐 参 伍 拾 萬. The conversions here swap
//! exactly that set and leave everything else alone, so they are inverses of
//! each other. The parsers additionally accept the obsolete daiji such as
//! 壹 and 阡, which have no modern counterpart to convert back to.

/// Rewrites the six convertible characters to their daiji forms.
///
/// # Examples
///
/// ```
/// use kanjinum::to_daiji;
///
/// assert_eq!(to_daiji("一万二千三百四十五"), "壱萬弐千参百四拾伍");
/// assert_eq!(to_daiji("〇"), "〇");
/// ```
#[must_use]
pub fn to_daiji(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '一' => '壱',
            '二' => '弐',
            '三' => '参',
            '五' => '伍',
            '十' => '拾',
            '万' => '萬',
            other => other,
        })
        .collect()
}

/// Rewrites the six convertible daiji back to their everyday forms.
///
/// # Examples
///
/// ```
/// use kanjinum::from_daiji;
///
/// assert_eq!(from_daiji("壱萬弐千"), "一万二千");
/// ```
#[must_use]
pub fn from_daiji(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '壱' => '一',
            '弐' => '二',
            '参' => '三',
            '伍' => '五',
            '拾' => '十',
            '萬' => '万',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{format_int, parse_int};

    #[test]
    fn test_converts_the_six_prescribed_characters() {
        assert_eq!(to_daiji("一二三五十万"), "壱弐参伍拾萬");
        assert_eq!(from_daiji("壱弐参伍拾萬"), "一二三五十万");
    }

    #[test]
    fn test_leaves_everything_else_alone() {
        assert_eq!(to_daiji("四六七八九百千億兆"), "四六七八九百千億兆");
        assert_eq!(to_daiji("令和七年"), "令和七年");
        assert_eq!(from_daiji("壹貳參"), "壹貳參", "obsolete daiji have no modern form");
    }

    #[test]
    fn test_daiji_spellings_parse_to_the_same_value() {
        for i in [1, 25, 12_345, 3_051_000, i64::MAX] {
            let plain = format_int(i);
            let daiji = to_daiji(&plain);
            assert_eq!(parse_int(&daiji), Ok(i), "{daiji}");
            assert_eq!(from_daiji(&daiji), plain);
        }
    }
}
