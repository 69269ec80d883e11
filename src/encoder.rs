//! Row encoder: fields in, one quoted and escaped line out.
//!
//! Each field is encoded on its own and the results are joined with the
//! delimiter. The line terminator is not part of the output; the
//! [`Writer`](crate::Writer) appends it.
//!
//! ## Per-field policy
//!
//! 1. [`Field::Null`] encodes as an empty string.
//! 2. Under [`Quoting::None`] quote characters in text are prefixed with the
//!    escape character and nothing is framed.
//! 3. Otherwise a field is *numeric* when it is a number or its text parses
//!    as one. Quote characters in non-numeric fields are doubled (no escape
//!    character set) or prefixed with the escape character.
//! 4. A field is framed in quotes when it contains the delimiter or the quote
//!    character (minimal quoting, no escape character), and always under
//!    [`Quoting::NonNumeric`] unless it is numeric.
//! 5. Under [`Quoting::All`] every field is framed, empty ones included,
//!    unless its escaped text already starts and ends with the quote character.
//!
//! Without a quote character nothing can be framed; delimiters inside a field
//! are written as the escape character followed by the delimiter.
//!
//! ## Examples
//!
//! ```rust
//! use csv_codec::{encode_row, Dialect, Field, Quoting};
//!
//! let row = vec![Field::from("my"), Field::from("test"), Field::from("\"string")];
//! assert_eq!(encode_row(&row, &Dialect::new()), r#"my,test,"""string""#);
//!
//! let row = vec![Field::from("my"), Field::Null, Field::from("string")];
//! assert_eq!(encode_row(&row, &Dialect::new()), "my,,string");
//!
//! let dialect = Dialect::new().with_quoting(Quoting::NonNumeric);
//! let row = vec![Field::from("my"), Field::from(4.2), Field::from(2)];
//! assert_eq!(encode_row(&row, &dialect), r#""my",4.2,2"#);
//! ```

use crate::dialect::{Dialect, Quoting};
use crate::field::Field;
use std::borrow::Borrow;

/// Encodes a sequence of fields into one line, without a terminator.
#[must_use]
pub fn encode_row<I>(fields: I, dialect: &Dialect) -> String
where
    I: IntoIterator,
    I::Item: Borrow<Field>,
{
    let mut line = String::with_capacity(64);
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            line.push(dialect.delimiter);
        }
        line.push_str(&encode_field(field.borrow(), dialect));
    }
    line
}

/// Encodes a single field.
///
/// # Examples
///
/// ```rust
/// use csv_codec::{encode_field, Dialect, Field, Quoting};
///
/// let all = Dialect::new().with_quoting(Quoting::All);
/// assert_eq!(encode_field(&Field::Null, &all), r#""""#);
/// assert_eq!(encode_field(&Field::from(4.2), &all), r#""4.2""#);
///
/// let none = Dialect::new().with_quoting(Quoting::None).with_escape_char('\\');
/// assert_eq!(encode_field(&Field::from("\"test"), &none), r#"\"test"#);
/// ```
#[must_use]
pub fn encode_field(field: &Field, dialect: &Dialect) -> String {
    let text = field.to_string();

    if dialect.quoting == Quoting::None {
        let text = if field.is_text() {
            escape_with_escape_char(text, dialect)
        } else {
            text
        };
        return escape_delimiters(text, dialect);
    }

    let numeric = field.numeric_value().is_some();
    let text = if numeric {
        text
    } else {
        escape_quotes(text, dialect)
    };

    let Some(quote) = dialect.quote_char else {
        return escape_delimiters(text, dialect);
    };

    let needs_quotes = text.contains(dialect.delimiter)
        || dialect.quoting == Quoting::NonNumeric
        || (text.contains(quote)
            && dialect.escape_char.is_none()
            && dialect.quoting == Quoting::Minimal);

    let frame = match dialect.quoting {
        Quoting::All => text.is_empty() || !(text.starts_with(quote) && text.ends_with(quote)),
        Quoting::Minimal => needs_quotes,
        Quoting::NonNumeric => needs_quotes && !numeric,
        Quoting::None => false,
    };

    if frame {
        let mut framed = String::with_capacity(text.len() + 2);
        framed.push(quote);
        framed.push_str(&text);
        framed.push(quote);
        framed
    } else {
        text
    }
}

/// Doubles quote characters, or prefixes them with the escape character when one is set.
fn escape_quotes(text: String, dialect: &Dialect) -> String {
    let Some(quote) = dialect.quote_char else {
        return text;
    };
    if !text.contains(quote) {
        return text;
    }

    match dialect.escape_char {
        None => {
            let mut doubled = String::with_capacity(text.len() + 2);
            for c in text.chars() {
                doubled.push(c);
                if c == quote {
                    doubled.push(quote);
                }
            }
            doubled
        }
        Some(_) => escape_with_escape_char(text, dialect),
    }
}

fn escape_with_escape_char(text: String, dialect: &Dialect) -> String {
    match (dialect.quote_char, dialect.escape_char) {
        (Some(quote), Some(escape)) if text.contains(quote) => prefix_char(&text, quote, escape),
        _ => text,
    }
}

/// Without a quote character, delimiters are the only thing that needs escaping.
fn escape_delimiters(text: String, dialect: &Dialect) -> String {
    match (dialect.quote_char, dialect.escape_char) {
        (None, Some(escape)) if text.contains(dialect.delimiter) => {
            prefix_char(&text, dialect.delimiter, escape)
        }
        _ => text,
    }
}

fn prefix_char(text: &str, target: char, prefix: char) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    for c in text.chars() {
        if c == target {
            out.push(prefix);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enc(fields: Vec<Field>, dialect: &Dialect) -> String {
        encode_row(&fields, dialect)
    }

    #[test]
    fn test_plain_row() {
        let row = vec![Field::from("my"), Field::from("test"), Field::from("string")];
        assert_eq!(enc(row, &Dialect::new()), "my,test,string");
    }

    #[test]
    fn test_empty_row() {
        assert_eq!(enc(vec![], &Dialect::new()), "");
    }

    #[test]
    fn test_minimal_quotes_delimiter() {
        let row = vec![Field::from("a,b"), Field::from("c")];
        assert_eq!(enc(row, &Dialect::new()), r#""a,b",c"#);
    }

    #[test]
    fn test_minimal_doubles_quotes() {
        let row = vec![Field::from("say \"hi\"")];
        assert_eq!(enc(row, &Dialect::new()), r#""say ""hi""""#);
    }

    #[test]
    fn test_escape_char_instead_of_doubling() {
        let dialect = Dialect::new()
            .with_double_quote(false)
            .with_escape_char('\\');
        let row = vec![Field::from("my"), Field::from("test"), Field::from("\"string")];
        assert_eq!(enc(row, &dialect), r#"my,test,\"string"#);
    }

    #[test]
    fn test_escape_char_still_frames_delimiters() {
        let dialect = Dialect::new()
            .with_double_quote(false)
            .with_escape_char('\\');
        let row = vec![Field::from("a,\"b")];
        assert_eq!(enc(row, &dialect), r#""a,\"b""#);
    }

    #[test]
    fn test_nonnumeric() {
        let dialect = Dialect::new().with_quoting(Quoting::NonNumeric);
        let row = vec![
            Field::from("my"),
            Field::from("test"),
            Field::from(4.2),
            Field::from(2),
        ];
        assert_eq!(enc(row, &dialect), r#""my","test",4.2,2"#);
    }

    #[test]
    fn test_nonnumeric_numeric_text_stays_bare() {
        let dialect = Dialect::new().with_quoting(Quoting::NonNumeric);
        let row = vec![Field::from("3.5"), Field::Null];
        assert_eq!(enc(row, &dialect), r#"3.5,"""#);
    }

    #[test]
    fn test_all() {
        let dialect = Dialect::new().with_quoting(Quoting::All);
        let row = vec![
            Field::from("my"),
            Field::from("\"test"),
            Field::from(4.2),
            Field::from(2),
            Field::Null,
        ];
        assert_eq!(enc(row, &dialect), r#""my","""test","4.2","2","""#);
    }

    #[test]
    fn test_all_skips_text_already_framed() {
        let dialect = Dialect::new().with_quoting(Quoting::All);
        let row = vec![Field::from("\"q\""), Field::from("")];
        let line = enc(row.clone(), &dialect);
        assert_eq!(line, r#"""q"","""#);
        assert_eq!(crate::tokenize(&line, &dialect), row);
    }

    #[test]
    fn test_none() {
        let dialect = Dialect::new()
            .with_quoting(Quoting::None)
            .with_escape_char('\\');
        let row = vec![
            Field::from("my"),
            Field::from("\"test"),
            Field::from(4.2),
            Field::from(2),
            Field::Null,
        ];
        assert_eq!(enc(row, &dialect), r#"my,\"test,4.2,2,"#);
    }

    #[test]
    fn test_no_quote_char_escapes_delimiters() {
        let dialect = Dialect::new()
            .without_quote_char()
            .with_escape_char('\\');
        let row = vec![Field::from("a,b"), Field::from("\"c\"")];
        assert_eq!(enc(row, &dialect), r#"a\,b,"c""#);
    }

    #[test]
    fn test_custom_delimiter_and_quote() {
        let dialect = Dialect::new().with_delimiter('|').with_quote_char('\'');
        let row = vec![Field::from("a|b"), Field::from("it's"), Field::from("x,y")];
        assert_eq!(enc(row, &dialect), "'a|b'|'it''s'|x,y");
    }
}
