//! # csv_codec
//!
//! A dialect-driven CSV codec. It decodes raw text into rows of typed fields
//! and encodes rows back into correctly quoted and escaped CSV text.
//!
//! ## Key Features
//!
//! - **Configurable Dialects**: delimiter, quote and escape characters, line
//!   terminator and four quoting policies (minimal, all, non-numeric, none)
//! - **Total Decoding**: malformed quoting never fails; it degrades to literal text
//! - **Typed Fields**: non-numeric quoting coerces numeric text to `f64` on read
//! - **Lazy Rows**: readers yield one row per call, so infinite sources work
//! - **Header-Keyed Records**: map rows onto a header with overflow and
//!   underflow handling, and back
//! - **Serde Friendly**: dialects load from any serde format; fields and
//!   records serialize directly
//!
//! ## Quick Start
//!
//! ```rust
//! use csv_codec::{from_str, row, to_string, Field};
//!
//! let rows = from_str("my,test,strings\nmy,second,rows").unwrap();
//! assert_eq!(rows[0], row!["my", "test", "strings"]);
//!
//! let text = to_string(&[row!["my", "test", "\"string"]]).unwrap();
//! assert_eq!(text, "my,test,\"\"\"string\"\r\n");
//! ```
//!
//! ### Custom Dialects
//!
//! ```rust
//! use csv_codec::{from_str_with_dialect, to_string_with_dialect, row, Dialect, Field, Quoting};
//!
//! let dialect = Dialect::new().with_quoting(Quoting::NonNumeric);
//!
//! let rows = from_str_with_dialect("a, 1,2.0", dialect.clone()).unwrap();
//! assert_eq!(rows[0], vec![Field::from("a"), Field::Number(1.0), Field::Number(2.0)]);
//!
//! let text = to_string_with_dialect(&[row!["my", 4.2, 2]], dialect).unwrap();
//! assert_eq!(text, "\"my\",4.2,2\r\n");
//! ```
//!
//! ### Records
//!
//! ```rust
//! use csv_codec::{Dialect, Field, Reader, RecordReader};
//!
//! let reader = Reader::from_str("fruits,vegetables\napple,spinach,boat,house,car", Dialect::new()).unwrap();
//! let mut records = RecordReader::new(reader).unwrap().restkey("outstanding_fields");
//!
//! let record = records.next().unwrap().unwrap();
//! assert_eq!(record.field("fruits"), Some(&Field::from("apple")));
//! assert_eq!(record.rest("outstanding_fields").map(|r| r.len()), Some(3));
//! ```
//!
//! ## Data Flow
//!
//! Decoding: source → [`splitter`] → [`tokenizer`] → rows → optional [`mapper`].
//! Encoding: optional [`mapper`] → [`encoder`] → [`Writer`] (appends the line
//! terminator) → sink.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events: `debug` when sessions open or a dialect
//! is rejected, `trace` per written row and when an unterminated quote is kept
//! verbatim. Install any subscriber to see them.

pub mod dialect;
pub mod encoder;
pub mod error;
pub mod field;
pub mod macros;
pub mod mapper;
pub mod reader;
pub mod record;
pub mod splitter;
pub mod tokenizer;
pub mod writer;

pub use dialect::{Dialect, Quoting};
pub use encoder::{encode_field, encode_row};
pub use error::{Error, Result};
pub use field::{parse_number, Field, Row};
pub use mapper::{decode_record, encode_record, ExtrasAction, RecordReader, RecordWriter};
pub use reader::Reader;
pub use record::{Record, RecordValue};
pub use splitter::{CharLines, Presplit, ReadLines};
pub use tokenizer::{tokenize, Tokenizer};
pub use writer::Writer;

use std::io;

/// Decodes every row of a string with the default dialect.
///
/// # Examples
///
/// ```rust
/// use csv_codec::{from_str, row};
///
/// let rows = from_str("a,b\rc,d").unwrap();
/// assert_eq!(rows, vec![row!["a", "b"], row!["c", "d"]]);
/// ```
///
/// # Errors
///
/// This function does not fail for the default dialect; the `Result` keeps
/// the signature in line with [`from_str_with_dialect`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Vec<Row>> {
    from_str_with_dialect(s, Dialect::default())
}

/// Decodes every row of a string with a custom dialect.
///
/// # Errors
///
/// Returns [`Error::InvalidDialect`] if the dialect does not validate.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_dialect(s: &str, dialect: Dialect) -> Result<Vec<Row>> {
    Reader::from_str(s, dialect)?.collect()
}

/// Decodes every row of a UTF-8 byte stream.
///
/// # Examples
///
/// ```rust
/// use csv_codec::{from_reader, row, Dialect};
/// use std::io::Cursor;
///
/// let rows = from_reader(Cursor::new("a,b\nc,d"), Dialect::new()).unwrap();
/// assert_eq!(rows, vec![row!["a", "b"], row!["c", "d"]]);
/// ```
///
/// # Errors
///
/// Returns an error if the dialect does not validate, reading fails, or a
/// line is not valid UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(reader: R, dialect: Dialect) -> Result<Vec<Row>> {
    Reader::from_reader(reader, dialect)?.collect()
}

/// Encodes rows into a string with the default dialect.
///
/// # Errors
///
/// This function does not fail for the default dialect; the `Result` keeps
/// the signature in line with [`to_string_with_dialect`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<R: AsRef<[Field]>>(rows: &[R]) -> Result<String> {
    to_string_with_dialect(rows, Dialect::default())
}

/// Encodes rows into a string with a custom dialect.
///
/// Every row, the last one included, ends with the dialect's line terminator.
///
/// # Examples
///
/// ```rust
/// use csv_codec::{row, to_string_with_dialect, Dialect, Quoting};
///
/// let dialect = Dialect::new().with_quoting(Quoting::All);
/// let text = to_string_with_dialect(&[row!["my", "\"test", 4.2, 2, null]], dialect).unwrap();
/// assert_eq!(text, "\"my\",\"\"\"test\",\"4.2\",\"2\",\"\"\r\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidDialect`] if the dialect does not validate.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_dialect<R: AsRef<[Field]>>(rows: &[R], dialect: Dialect) -> Result<String> {
    dialect.validate()?;
    let mut output = String::with_capacity(64 * rows.len());
    for row in rows {
        output.push_str(&encode_row(row.as_ref(), &dialect));
        output.push_str(&dialect.line_terminator);
    }
    Ok(output)
}

/// Encodes rows into an [`io::Write`] sink.
///
/// # Examples
///
/// ```rust
/// use csv_codec::{row, to_writer, Dialect};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &[row!["a", "b,c"]], Dialect::new()).unwrap();
/// assert_eq!(buffer, b"a,\"b,c\"\r\n");
/// ```
///
/// # Errors
///
/// Returns an error if the dialect does not validate or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, R>(writer: W, rows: &[R], dialect: Dialect) -> Result<()>
where
    W: io::Write,
    R: AsRef<[Field]>,
{
    let mut writer = Writer::new(writer, dialect)?;
    for row in rows {
        let fields: &[Field] = row.as_ref();
        writer.write_row(fields)?;
    }
    writer.flush()
}
