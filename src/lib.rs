//! # kanjinum
//!
//! Parsing, formatting and searching of Japanese kanji numerals (漢数字).
//!
//! ## What are kanji numerals?
//!
//! Japanese writes numbers with digit characters and named magnitudes rather
//! than positionally: 1234 is 千二百三十四 (thousand, two hundred, three
//! tens, four). Above 9999 the number is grouped by powers of ten thousand,
//! so 123456789 reads 一億二千三百四十五万六千七百八十九. Legal documents
//! and banknotes use the tamper-resistant daiji variants (壱 for 一, 萬 for
//! 万), and phone or room numbers are written digit for digit: 三〇一 for
//! room 301.
//!
//! This crate converts between all of those spellings and Rust integers, in
//! both directions.
//!
//! ## Key Features
//!
//! - **Both directions**: parse kanji numerals into `i64`/`u64`/`BigInt`,
//!   format any of those back
//! - **Full range**: the everyday magnitudes 十 through 京, and the long
//!   scale beyond, 垓 (10^20) up to 無量大数 (10^68)
//! - **Daiji aware**: parses 壱弐参伍拾萬 and the obsolete forms such as
//!   壹, 阡 and 漆; converts text to and from the modern daiji set
//! - **Serial notation**: digit-for-digit readings like 二〇二五 for 2025
//! - **Text search**: scan running text for numerals with byte offsets
//! - **Serde support**: `#[serde(with = "kanjinum::as_kanji")]` carries
//!   integer fields as kanji strings
//! - **Strict grammar**: ill-formed sequences like 一一 or 五百三千 are
//!   rejected with precise errors, never silently misread
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! kanjinum = "0.1"
//! ```
//!
//! ### Parsing and Formatting
//!
//! ```rust
//! use kanjinum::{format_int, parse_int};
//!
//! assert_eq!(parse_int("一万二千三百四十五"), Ok(12_345));
//! assert_eq!(format_int(12_345), "一万二千三百四十五");
//!
//! // daiji spellings parse to the same values
//! assert_eq!(parse_int("壱万弐千"), Ok(12_000));
//! assert_eq!(parse_int("-二百十"), Ok(-210));
//! ```
//!
//! ### Beyond 64 bits
//!
//! The magnitudes above 京 overflow any machine integer, so they live on the
//! [`num_bigint::BigInt`] path:
//!
//! ```rust
//! use kanjinum::{format_big_int, parse_big_int};
//! use num_bigint::BigInt;
//!
//! let kougasha = parse_big_int("三恒河沙").unwrap(); // 3 × 10^52
//! assert_eq!(kougasha, BigInt::from(3u32) * BigInt::from(10u32).pow(52));
//! assert_eq!(format_big_int(&kougasha), "三恒河沙");
//! ```
//!
//! ### Finding numerals in text
//!
//! ```rust
//! let hits = kanjinum::find("値段は三千二百円、送料は二百十円。");
//!
//! assert_eq!(hits.len(), 2);
//! assert_eq!(hits[0].text, "三千二百");
//! assert_eq!(hits[0].value, Ok(3200));
//! ```
//!
//! ### Serial notation
//!
//! ```rust
//! use kanjinum::{format_serial_uint, parse_serial_uint};
//!
//! assert_eq!(parse_serial_uint("二〇二五"), Ok(2025));
//! assert_eq!(format_serial_uint(301), "三〇一");
//! ```
//!
//! ## Grammar
//!
//! The positional parsers enforce the standard reading:
//!
//! - Inside a segment a digit may scale the multiplier that follows it
//!   (二十 is 20), and multipliers must strictly shrink (三千五百 is fine,
//!   五百三千 is not)
//! - A section word of 万 or above closes the segment and scales it; section
//!   words must strictly shrink too, so 一万二万 is rejected
//! - The zero literals 零 and 〇 stand alone
//! - The multi-character words 恒河沙, 阿僧祇, 那由他, 不可思議 and
//!   無量大数 only count when complete; 一恒河 reports an unexpected end of
//!   input
//!
//! Violations map to [`Error`] variants that name the offending character
//! where there is one.
//!
//! ## Performance Characteristics
//!
//! - **Parsing**: one pass over the bytes; characters classify through a
//!   collision-free multiplicative hash instead of a match over the
//!   vocabulary
//! - **Formatting**: values up to 100 are a single table lookup; larger ones
//!   assemble into one pre-sized buffer
//! - **Big integers**: the shared power-of-ten constants build once on first
//!   use and are reused for the life of the process
//!
//! ## Examples
//!
//! See the `demos/` directory for runnable examples:
//!
//! - **`parse_format.rs`** - Round trips, daiji and serial notation
//! - **`search.rs`** - Scanning text for numerals
//! - **`serde_fields.rs`** - Kanji-valued fields in JSON
//!
//! Run any example with: `cargo run --example <name>`

pub mod big;
pub mod daiji;
mod decode;
pub mod error;
pub mod find;
pub mod format;
mod magnitude;
pub mod parse;
pub mod serde_impl;
pub mod serial;
pub mod table;

pub use big::parse_big_int;
pub use daiji::{from_daiji, to_daiji};
pub use error::{Error, Result};
pub use find::{find, SearchResult, NUMERAL_PATTERN};
pub use format::{format_big_int, format_int, format_uint};
pub use parse::{parse_int, parse_uint};
pub use serde_impl::{as_kanji, as_kanji_big, as_kanji_uint};
pub use serial::{format_serial_int, format_serial_uint, parse_serial_int, parse_serial_uint};
pub use table::value_of;
