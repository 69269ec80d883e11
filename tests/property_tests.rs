//! Property-based tests for the tokenizer and encoder
//!
//! Inputs are kept to the shapes the codec promises to round-trip: plain
//! fields, and fields with embedded delimiters or backslashes but no trailing
//! whitespace.

use csv_codec::{encode_row, tokenize, Dialect, Field, Quoting};
use proptest::prelude::*;

fn texts(fields: &[String]) -> Vec<Field> {
    fields.iter().map(Field::from).collect()
}

proptest! {
    #[test]
    fn prop_tokenize_is_idempotent(line in "[^\r\n]{0,40}") {
        let dialect = Dialect::new();
        prop_assert_eq!(tokenize(&line, &dialect), tokenize(&line, &dialect));
    }

    #[test]
    fn prop_tokenize_never_panics_on_any_dialect_input(
        line in "[a-z,\"\\\\ ]{0,30}",
        quoting in prop_oneof![
            Just(Quoting::Minimal),
            Just(Quoting::All),
            Just(Quoting::NonNumeric),
        ],
    ) {
        let dialect = Dialect::new().with_quoting(quoting).with_escape_char('\\');
        let row = tokenize(&line, &dialect);
        prop_assert_eq!(row.is_empty(), line.is_empty());
    }

    #[test]
    fn prop_plain_fields_roundtrip(
        fields in prop::collection::vec("[a-zA-Z0-9][a-zA-Z0-9 ]{0,10}", 1..6),
    ) {
        let dialect = Dialect::new();
        let row = texts(&fields);
        let line = encode_row(&row, &dialect);
        prop_assert_eq!(line, fields.join(","));
        prop_assert_eq!(tokenize(&fields.join(","), &dialect), row);
    }

    #[test]
    fn prop_fields_with_delimiters_roundtrip(
        fields in prop::collection::vec("[a-z]([a-z ,]{0,8}[a-z])?", 1..6),
    ) {
        let dialect = Dialect::new();
        let row = texts(&fields);
        let line = encode_row(&row, &dialect);
        prop_assert_eq!(tokenize(&line, &dialect), row);
    }

    #[test]
    fn prop_backslashes_survive_with_escape_char(
        fields in prop::collection::vec("[a-z]([a-z ,\\\\]{0,8}[a-z])?", 1..6),
    ) {
        let dialect = Dialect::new().with_escape_char('\\');
        let row = texts(&fields);
        let line = encode_row(&row, &dialect);
        prop_assert_eq!(tokenize(&line, &dialect), row);
    }

    #[test]
    fn prop_quote_all_roundtrip(
        fields in prop::collection::vec("[a-z]([a-z ,]{0,8}[a-z])?", 1..6),
    ) {
        let dialect = Dialect::new().with_quoting(Quoting::All);
        let row = texts(&fields);
        let line = encode_row(&row, &dialect);
        prop_assert!(line.starts_with('"'));
        prop_assert_eq!(tokenize(&line, &dialect), row);
    }

    #[test]
    fn prop_nonnumeric_reads_integers_as_numbers(n in -100_000i32..100_000) {
        let dialect = Dialect::new().with_quoting(Quoting::NonNumeric);
        let row = tokenize(&format!("x,{}", n), &dialect);
        prop_assert_eq!(row, vec![Field::from("x"), Field::Number(f64::from(n))]);
    }
}
