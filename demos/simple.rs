//! Basic CSV decoding and encoding.
//!
//! Run with: cargo run --example simple

use csv_codec::{from_str, row, to_string};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let rows = vec![
        row!["id", "name", "email"],
        row![42, "Alice Johnson", "alice@example.com"],
        row![43, "Smith, Bob", "bob \"the builder\"@example.com"],
    ];

    // Encode with the default (excel) dialect
    let text = to_string(&rows)?;
    println!("CSV output:\n{}", text);

    // Decode it again; CRLF endings produce an empty row after each line
    let decoded: Vec<_> = from_str(&text)?
        .into_iter()
        .filter(|r| !r.is_empty())
        .collect();
    for row in &decoded {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        println!("{:?}", cells);
    }

    assert_eq!(decoded[2][1].as_str(), Some("Smith, Bob"));
    println!("✓ Round-trip successful");

    Ok(())
}
