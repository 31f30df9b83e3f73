//! Locating kanji numerals inside running text.
//!
//! Run with: cargo run --example search

use kanjinum::{find, parse_serial_int};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let listing = "徒歩五分、家賃七万三千円、礼金一ヶ月";
    println!("{listing}");
    for hit in find(listing) {
        match hit.value {
            Ok(value) => println!("  bytes {}..{}: {} = {}", hit.start, hit.end, hit.text, value),
            Err(err) => println!("  bytes {}..{}: {} ({})", hit.start, hit.end, hit.text, err),
        }
    }
    println!();

    // Digit strings fail positional parsing but keep their text, so a
    // second pass can read them as serial notation.
    let form = "部屋番号三〇一、内線九五〇〇";
    println!("{form}");
    for hit in find(form) {
        match hit.value {
            Ok(value) => println!("  {} = {}", hit.text, value),
            Err(_) => println!("  {} = {} (serial)", hit.text, parse_serial_int(hit.text)?),
        }
    }

    Ok(())
}
