//! Row tokenizer: one raw line in, one row of fields out.
//!
//! The tokenizer is total. Every input line produces a row; unbalanced
//! quotes and text that fails numeric coercion degrade to literal content
//! instead of raising errors.
//!
//! ## Rules
//!
//! Scanning runs left to right, building one field at a time:
//!
//! - **Doubled quote** (`""`): one literal quote when `double_quote` is on,
//!   both quotes when it is off. A field consisting of exactly `""` is an
//!   empty quoted field.
//! - **Quote**: opens a quoted span that runs to the next unescaped quote.
//!   The span's content, with trailing whitespace trimmed, joins the field and
//!   scanning resumes after the closing quote. Delimiters inside the span are
//!   content. An unclosed span takes the rest of the line verbatim.
//! - **Escape before delimiter**, with no quote character configured: the
//!   delimiter is content.
//! - **Escape before quote**: the quote is content, inside or outside a
//!   quoted span. Any other escape inside a span is kept as is.
//! - **Delimiter**: ends the field. With `skip_initial_space` a single space
//!   right after it is dropped.
//!
//! A delimiter at the very end of a line ends a last, empty field. An empty
//! line is an empty row. Under [`Quoting::NonNumeric`] each finished field
//! that parses as a number becomes [`Field::Number`].
//!
//! ## Examples
//!
//! ```rust
//! use csv_codec::{tokenize, Dialect, Field, Quoting};
//!
//! let row = tokenize("my,test,strings", &Dialect::new());
//! assert_eq!(row, vec![Field::from("my"), Field::from("test"), Field::from("strings")]);
//!
//! let row = tokenize(r#""hello, world",x"#, &Dialect::new());
//! assert_eq!(row, vec![Field::from("hello, world"), Field::from("x")]);
//!
//! let dialect = Dialect::new().with_quoting(Quoting::NonNumeric);
//! let row = tokenize("a, 1,2.0", &dialect);
//! assert_eq!(row, vec![Field::from("a"), Field::Number(1.0), Field::Number(2.0)]);
//! ```

use crate::dialect::{Dialect, Quoting};
use crate::field::{Field, Row};

/// Tokenizes one raw line with the given dialect.
///
/// The line must not contain a line terminator; see [`crate::splitter`].
#[must_use]
pub fn tokenize(line: &str, dialect: &Dialect) -> Row {
    Tokenizer::new(dialect).tokenize(line)
}

/// A reusable tokenizer bound to one dialect.
///
/// It holds no state between lines, so tokenizing the same line twice gives
/// the same row.
#[derive(Clone, Copy, Debug)]
pub struct Tokenizer<'d> {
    dialect: &'d Dialect,
}

impl<'d> Tokenizer<'d> {
    pub fn new(dialect: &'d Dialect) -> Self {
        Tokenizer { dialect }
    }

    pub fn tokenize(&self, line: &str) -> Row {
        let chars: Vec<char> = line.chars().collect();
        let coerce = self.dialect.quoting == Quoting::NonNumeric;
        let mut row = Row::new();
        let mut pos = 0;

        while pos < chars.len() {
            let (text, next, ended_by_delimiter) = self.scan_field(&chars, pos);
            row.push(Field::from_raw(text, coerce));
            pos = next;

            if ended_by_delimiter && pos >= chars.len() {
                row.push(Field::from_raw(String::new(), coerce));
            }
        }

        row
    }

    /// Scans one field starting at `start`.
    ///
    /// Returns the field text, the position where the next field starts and
    /// whether a delimiter ended this field.
    fn scan_field(&self, chars: &[char], start: usize) -> (String, usize, bool) {
        let d = self.dialect;
        let mut field = String::new();
        let mut pos = start;

        while pos < chars.len() {
            let c = chars[pos];
            let next = chars.get(pos + 1).copied();

            if Some(c) == d.quote_char {
                if next == Some(c) {
                    if pos == start && self.ends_field(chars, pos + 2) {
                        // `""` alone is an empty quoted field
                        pos += 2;
                        continue;
                    }
                    field.push(c);
                    if !d.double_quote {
                        field.push(c);
                    }
                    pos += 2;
                    continue;
                }

                pos = self.scan_quoted(chars, pos, &mut field);
                continue;
            }

            if Some(c) == d.escape_char {
                if d.quote_char.is_none() && next == Some(d.delimiter) {
                    field.push(d.delimiter);
                    pos += 2;
                    continue;
                }
                if let Some(q) = d.quote_char.filter(|&q| next == Some(q)) {
                    field.push(q);
                    pos += 2;
                    continue;
                }
            }

            if c == d.delimiter {
                pos += 1;
                if d.skip_initial_space && chars.get(pos) == Some(&' ') {
                    pos += 1;
                }
                return (field, pos, true);
            }

            field.push(c);
            pos += 1;
        }

        (field, pos, false)
    }

    /// Scans a quoted span whose opening quote sits at `open`.
    ///
    /// Appends the span content to `field` and returns the position after the
    /// closing quote, or the end of the line if the span never closes.
    fn scan_quoted(&self, chars: &[char], open: usize, field: &mut String) -> usize {
        let d = self.dialect;
        let quote = chars[open];
        let mut span = String::new();
        let mut pos = open + 1;

        while pos < chars.len() {
            let c = chars[pos];
            let next = chars.get(pos + 1).copied();

            if c == quote {
                if d.double_quote && next == Some(quote) {
                    span.push(quote);
                    pos += 2;
                    continue;
                }
                field.push_str(span.trim_end());
                return pos + 1;
            }

            // only an escaped quote is special; other escapes stay literal
            if Some(c) == d.escape_char && next == Some(quote) {
                span.push(quote);
                pos += 2;
                continue;
            }

            span.push(c);
            pos += 1;
        }

        tracing::trace!(column = open, "unterminated quoted span, keeping text verbatim");
        field.extend(&chars[open..]);
        chars.len()
    }

    /// Returns `true` if a field would end at `pos`: end of line or a delimiter.
    fn ends_field(&self, chars: &[char], pos: usize) -> bool {
        chars.get(pos).map_or(true, |&c| c == self.dialect.delimiter)
    }
}
