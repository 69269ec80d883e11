//! Custom dialects loaded from JSON, with logging enabled.
//!
//! Run with: RUST_LOG=csv_codec=trace cargo run --example custom_dialect

use csv_codec::{from_str_with_dialect, row, to_string_with_dialect, Dialect, Quoting};
use std::error::Error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let rows = vec![row!["my", "\"test", 4.2, 2, null]];

    // Built-in presets and builder tweaks
    for (name, dialect) in [
        ("excel", Dialect::excel()),
        ("excel-tab", Dialect::excel_tab()),
        ("unix", Dialect::unix()),
        (
            "nonnumeric",
            Dialect::new().with_quoting(Quoting::NonNumeric),
        ),
        (
            "none",
            Dialect::new()
                .with_quoting(Quoting::None)
                .with_escape_char('\\'),
        ),
    ] {
        let text = to_string_with_dialect(&rows, dialect)?;
        println!("{:<11} {:?}", name, text);
    }

    // Dialects are plain data, so any serde format can configure them
    let dialect: Dialect = serde_json::from_str(
        r#"{"delimiter": ";", "quoting": "nonnumeric", "line_terminator": "\n"}"#,
    )?;
    let decoded = from_str_with_dialect("price;\"label\"\n 9.5;\"a;b\"", dialect.clone())?;
    println!("\nDecoded with {:?}:\n{:?}", dialect, decoded);

    // Invalid dialects are rejected before any data is touched
    let invalid = Dialect::new().with_double_quote(false);
    if let Err(e) = to_string_with_dialect(&rows, invalid) {
        println!("\nRejected: {}", e);
    }

    Ok(())
}
