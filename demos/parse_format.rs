//! Converting between machine integers and kanji numerals.
//!
//! Run with: cargo run --example parse_format

use kanjinum::{format_big_int, format_int, parse_big_int, parse_int, to_daiji};
use num_bigint::BigInt;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Machine to kanji
    for value in [0i64, 7, 42, 1000, 12_345, -9_876_543_210] {
        println!("{:>14} => {}", value, format_int(value));
    }
    println!();

    // Kanji back to machine
    for text in [
        "十一",
        "二百十",
        "一万二千三百四十五",
        "九百二十二京三千三百七十二兆三百六十八億五千四百七十七万五千八百七",
    ] {
        println!("{} => {}", text, parse_int(text)?);
    }
    println!();

    // Daiji for banknotes and contracts
    let amount = format_int(20_000);
    println!("{} => {}", amount, to_daiji(&amount));
    println!();

    // Values past the 64-bit range use the extended magnitude words
    let endowment: BigInt = "123456789012345678901234567890".parse()?;
    let reading = format_big_int(&endowment);
    println!("{} => {}", endowment, reading);
    assert_eq!(parse_big_int(&reading)?, endowment);
    println!("✓ Round-trip successful");

    Ok(())
}
