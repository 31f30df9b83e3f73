//! Serde adapters that carry numbers as kanji numeral strings.
//!
//! Each submodule plugs into `#[serde(with = "...")]` on a field. The
//! serialized form is the kanji spelling; deserialization parses it back and
//! surfaces grammar problems as ordinary serde errors.
//!
//! # Examples
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Receipt {
//!     #[serde(with = "kanjinum::as_kanji")]
//!     total: i64,
//! }
//!
//! let json = serde_json::to_string(&Receipt { total: 12_345 }).unwrap();
//! assert_eq!(json, r#"{"total":"一万二千三百四十五"}"#);
//!
//! let back: Receipt = serde_json::from_str(&json).unwrap();
//! assert_eq!(back.total, 12_345);
//! ```

/// Carries an `i64` field as its kanji spelling.
pub mod as_kanji {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::{format_int, parse_int};

    pub fn serialize<S>(value: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_int(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_int(&text).map_err(serde::de::Error::custom)
    }
}

/// Carries a `u64` field as its kanji spelling.
pub mod as_kanji_uint {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::{format_uint, parse_uint};

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_uint(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_uint(&text).map_err(serde::de::Error::custom)
    }
}

/// Carries a [`BigInt`](num_bigint::BigInt) field as its kanji spelling,
/// covering the magnitudes beyond 京.
pub mod as_kanji_big {
    use num_bigint::BigInt;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::{format_big_int, parse_big_int};

    pub fn serialize<S>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_big_int(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_big_int(&text).map_err(serde::de::Error::custom)
    }
}
