//! Reading and writing header-keyed records.
//!
//! Run with: cargo run --example records

use csv_codec::{Dialect, ExtrasAction, Field, Reader, Record, RecordReader, RecordWriter};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let input = "fruits,vegetables,meats\napple,spinach\npear,kale,beef,extra,columns";

    let reader = Reader::from_str(input, Dialect::new())?;
    let records = RecordReader::new(reader)?
        .restval("N/A")
        .restkey("outstanding_fields");
    println!("Header: {:?}", records.fieldnames());

    let records: Vec<Record> = records.collect::<Result<_, _>>()?;
    for record in &records {
        println!("{}", serde_json::to_string(record)?);
    }

    // Write them back under a narrower header, dropping unknown keys
    let mut writer = RecordWriter::new(Vec::new(), ["meats", "fruits"], Dialect::unix())?
        .extras_action(ExtrasAction::Ignore);
    writer.write_header()?;
    writer.write_records(&records)?;

    let mut extra = Record::new();
    extra.insert("fruits", Field::from("plum"));
    writer.write_record(&extra)?;

    println!("\nRewritten:\n{}", String::from_utf8(writer.into_inner())?);

    Ok(())
}
