//! Tests for the error taxonomy: every rejected input maps to one
//! specific [`Error`] value, and the three positional parsers agree on
//! inputs inside the shared 64-bit vocabulary.

use kanjinum::{
    parse_big_int, parse_int, parse_serial_int, parse_serial_uint, parse_uint, Error,
};

/// Inputs every positional parser must reject, with the exact error.
fn common_error_cases() -> Vec<(&'static str, Error)> {
    vec![
        ("", Error::Empty),
        // A section word needs at least one digit in front of it.
        ("京", Error::InvalidSequence),
        // Bare digits cannot follow each other.
        ("一一", Error::InvalidSequence),
        ("一二", Error::InvalidSequence),
        ("二一", Error::InvalidSequence),
        ("二一十", Error::InvalidSequence),
        ("一二十", Error::InvalidSequence),
        ("十二一", Error::InvalidSequence),
        ("十一二", Error::InvalidSequence),
        // Multipliers must shrink within a section.
        ("十百", Error::InvalidSequence),
        ("十千", Error::InvalidSequence),
        ("二十一十", Error::InvalidSequence),
        ("一十二十", Error::InvalidSequence),
        // Sections must shrink across the whole number.
        ("一万二万", Error::InvalidSequence),
        ("二万一万", Error::InvalidSequence),
        // Zero stands alone: never after another numeral, never before one.
        ("一〇", Error::InvalidSequence),
        ("一零", Error::InvalidSequence),
        ("〇一", Error::unexpected('一')),
        ("零一", Error::unexpected('一')),
        // Replacement characters mark transcoding damage.
        ("\u{fffd}", Error::Encoding),
        ("\u{fffd}一", Error::Encoding),
        ("一\u{fffd}", Error::Encoding),
    ]
}

#[test]
fn test_parse_int_rejects_common_error_cases() {
    for (text, expected) in common_error_cases() {
        assert_eq!(parse_int(text), Err(expected), "parsing {text:?}");
    }
}

#[test]
fn test_parse_uint_rejects_common_error_cases() {
    for (text, expected) in common_error_cases() {
        assert_eq!(parse_uint(text), Err(expected), "parsing {text:?}");
    }
}

#[test]
fn test_parse_big_int_rejects_common_error_cases() {
    for (text, expected) in common_error_cases() {
        assert_eq!(parse_big_int(text), Err(expected), "parsing {text:?}");
    }
}

#[test]
fn test_sign_handling_at_the_boundary_of_the_grammar() {
    // A minus sign with nothing after it is an empty numeral.
    assert_eq!(parse_int("-"), Err(Error::Empty));
    assert_eq!(parse_big_int("-"), Err(Error::Empty));
    assert_eq!(parse_serial_int("-"), Err(Error::Empty));

    // Only one leading sign is consumed; anything further is plain input.
    assert_eq!(parse_int("--一"), Err(Error::unexpected('-')));

    // The unsigned parsers accept no sign at all.
    assert_eq!(parse_uint("-十"), Err(Error::unexpected('-')));
}

#[test]
fn test_values_overflow_their_target_type() {
    // i64::MAX + 1 and i64::MIN - 1.
    assert_eq!(
        parse_int("九百二十二京三千三百七十二兆三百六十八億五千四百七十七万五千八百八"),
        Err(Error::Overflow),
    );
    assert_eq!(
        parse_int("-九百二十二京三千三百七十二兆三百六十八億五千四百七十七万五千八百九"),
        Err(Error::Overflow),
    );

    // u64::MAX fits the unsigned parser but not the signed one.
    assert_eq!(
        parse_int("千八百四十四京六千七百四十四兆七百三十七億九百五十五万千六百十五"),
        Err(Error::Overflow),
    );

    // u64::MAX + 1.
    assert_eq!(
        parse_uint("千八百四十四京六千七百四十四兆七百三十七億九百五十五万千六百十六"),
        Err(Error::Overflow),
    );

    // 2000 * 10^16 overflows while folding the 京 section.
    assert_eq!(parse_uint("二千京"), Err(Error::Overflow));
}

#[test]
fn test_extended_magnitudes_overflow_the_64_bit_parsers() {
    for text in ["一垓", "一恒河沙", "九千九百九十九無量大数"] {
        assert_eq!(parse_int(text), Err(Error::Overflow), "parsing {text}");
        assert_eq!(parse_uint(text), Err(Error::Overflow), "parsing {text}");
    }
}

#[test]
fn test_truncated_magnitude_words() {
    // Every prefix of a multi-character magnitude word must either run out
    // of input (Eof) or name the exact character the spelling required.
    // Trailing bytes too short to form another kanji are reported as the
    // stray character alone, before the pending word is considered.
    let cases: &[(&str, Error)] = &[
        ("一恒", Error::Eof),
        ("一恒a", Error::unexpected('a')),
        ("一恒一", Error::mismatch('一', '河')),
        ("一恒河", Error::Eof),
        ("一恒河一", Error::mismatch('一', '沙')),
        ("一阿", Error::Eof),
        ("一阿一", Error::mismatch('一', '僧')),
        ("一阿僧", Error::Eof),
        ("一阿僧一", Error::mismatch('一', '祇')),
        ("一那", Error::Eof),
        ("一那一", Error::mismatch('一', '由')),
        ("一那由", Error::Eof),
        ("一那由一", Error::mismatch('一', '他')),
        ("一不", Error::Eof),
        ("一不一", Error::mismatch('一', '可')),
        ("一不可", Error::Eof),
        ("一不可一", Error::mismatch('一', '思')),
        ("一不可思", Error::Eof),
        ("一不可思一", Error::mismatch('一', '議')),
        ("一無", Error::Eof),
        ("一無一", Error::mismatch('一', '量')),
        ("一無量", Error::Eof),
        ("一無量一", Error::mismatch('一', '大')),
        ("一無量大", Error::Eof),
        ("一無量大一", Error::mismatch('一', '数')),
        ("一無量大a", Error::unexpected('a')),
    ];
    for &(text, expected) in cases {
        assert_eq!(parse_big_int(text), Err(expected), "parsing {text}");
    }
}

#[test]
fn test_big_parser_enforces_section_order_with_extended_tiers() {
    let cases: &[(&str, Error)] = &[
        ("垓", Error::InvalidSequence),
        ("一万垓", Error::InvalidSequence),
        ("一京一垓", Error::InvalidSequence),
        ("二垓一垓", Error::InvalidSequence),
        ("一垓零", Error::InvalidSequence),
        ("零零", Error::unexpected('零')),
    ];
    for &(text, expected) in cases {
        assert_eq!(parse_big_int(text), Err(expected), "parsing {text}");
    }
}

#[test]
fn test_serial_notation_rejects_positional_vocabulary() {
    let cases: &[(&str, Error)] = &[
        ("", Error::Empty),
        // Digit strings take only 〇 through 九 and the daiji digits.
        ("十", Error::InvalidSequence),
        ("百一", Error::InvalidSequence),
        ("垓", Error::unexpected('垓')),
        ("一a", Error::unexpected('a')),
        ("\u{fffd}", Error::Encoding),
    ];
    for &(text, expected) in cases {
        assert_eq!(parse_serial_uint(text), Err(expected), "parsing {text:?}");
    }

    // One past u64::MAX, then one past i64::MAX, in digit notation.
    assert_eq!(
        parse_serial_uint("一八四四六七四四〇七三七〇九五五一六一六"),
        Err(Error::Overflow),
    );
    assert_eq!(
        parse_serial_int("九二二三三七二〇三六八五四七七五八〇八"),
        Err(Error::Overflow),
    );
}
