//! Arbitrary-precision magnitude constants.
//!
//! The parsers and formatters above 京 compare against powers of ten up to
//! 10^68, the value of 無量大数. Building those as [`BigInt`] values is not
//! free, so a single [`Magnitudes`] instance is created on first use and
//! shared for the life of the process.

use std::sync::OnceLock;

use num_bigint::BigInt;

/// Tier words above 京, largest first, as the formatter walks them. The tier
/// at index `i` is worth `powers[17 - i]`.
pub(crate) const EXTENDED_WORDS: [&str; 14] = [
    "無量大数",
    "不可思議",
    "那由他",
    "阿僧祇",
    "恒河沙",
    "極",
    "載",
    "正",
    "澗",
    "溝",
    "穣",
    "秭",
    "垓",
    "京",
];

static MAGNITUDES: OnceLock<Magnitudes> = OnceLock::new();

/// Shared big-integer constants for the arbitrary-precision path.
pub(crate) struct Magnitudes {
    /// 〇 through 九.
    pub(crate) digits: [BigInt; 10],
    pub(crate) ten: BigInt,
    pub(crate) hundred: BigInt,
    pub(crate) thousand: BigInt,
    /// `powers[k]` is 10^(4k): 一, 万, 億, ... up to 無量大数 at index 17.
    pub(crate) powers: [BigInt; 18],
    /// 9999, the largest multiplier a single section can carry.
    pub(crate) max_multiplier: BigInt,
}

impl Magnitudes {
    pub(crate) fn get() -> &'static Magnitudes {
        MAGNITUDES.get_or_init(Magnitudes::new)
    }

    fn new() -> Magnitudes {
        let ten = BigInt::from(10u32);
        Magnitudes {
            digits: std::array::from_fn(BigInt::from),
            hundred: ten.pow(2),
            thousand: ten.pow(3),
            powers: std::array::from_fn(|k| ten.pow(4 * k as u32)),
            max_multiplier: BigInt::from(9_999u32),
            ten,
        }
    }

    /// 10^4, the threshold between in-segment digits and section words.
    pub(crate) fn myriad(&self) -> &BigInt {
        &self.powers[1]
    }

    /// Value of a numeral character on the arbitrary-precision path. For the
    /// multi-character magnitude words only the head character carries the
    /// value; the continuation characters are matched separately and resolve
    /// to nothing here.
    pub(crate) fn value_of(&self, r: u32) -> Option<&BigInt> {
        let value = match char::from_u32(r)? {
            '零' | '〇' => &self.digits[0],
            '一' | '壱' | '壹' => &self.digits[1],
            '二' | '弐' | '貳' => &self.digits[2],
            '三' | '参' | '參' => &self.digits[3],
            '四' | '肆' => &self.digits[4],
            '五' | '伍' => &self.digits[5],
            '六' | '陸' => &self.digits[6],
            '七' | '柒' | '漆' => &self.digits[7],
            '八' | '捌' => &self.digits[8],
            '九' | '玖' => &self.digits[9],
            '十' | '拾' => &self.ten,
            '百' | '佰' => &self.hundred,
            '千' | '阡' | '仟' => &self.thousand,
            '万' | '萬' => &self.powers[1],
            '億' => &self.powers[2],
            '兆' => &self.powers[3],
            '京' => &self.powers[4],
            '垓' => &self.powers[5],
            '秭' => &self.powers[6],
            '穣' => &self.powers[7],
            '溝' => &self.powers[8],
            '澗' => &self.powers[9],
            '正' => &self.powers[10],
            '載' => &self.powers[11],
            '極' => &self.powers[12],
            '恒' => &self.powers[13],
            '阿' => &self.powers[14],
            '那' => &self.powers[15],
            '不' => &self.powers[16],
            '無' => &self.powers[17],
            _ => return None,
        };
        Some(value)
    }
}
