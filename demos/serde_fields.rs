//! Reading and writing kanji numeral fields in JSON documents.
//!
//! Run with: cargo run --example serde_fields

use kanjinum::{as_kanji, as_kanji_big, as_kanji_uint};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Invoice {
    title: String,
    #[serde(with = "as_kanji")]
    total: i64,
    #[serde(with = "as_kanji_uint")]
    count: u64,
    #[serde(with = "as_kanji_big")]
    endowment: BigInt,
}

fn main() -> Result<(), Box<dyn Error>> {
    let invoice = Invoice {
        title: "八月分".to_string(),
        total: -12_345,
        count: 200_000,
        endowment: "100000000000000000000".parse()?,
    };

    let json = serde_json::to_string_pretty(&invoice)?;
    println!("Invoice JSON:\n{}\n", json);

    let back: Invoice = serde_json::from_str(&json)?;
    assert_eq!(invoice, back);
    println!("✓ Round-trip successful");

    // Handwritten input may use any valid reading, including daiji.
    let manual = r#"{
        "title": "控え",
        "total": "壱萬弐千参百四拾伍",
        "count": "一千",
        "endowment": "九千九百九十九無量大数"
    }"#;
    let parsed: Invoice = serde_json::from_str(manual)?;
    println!("total = {}, count = {}", parsed.total, parsed.count);

    Ok(())
}
