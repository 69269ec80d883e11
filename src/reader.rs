//! Lazy row-at-a-time CSV input.
//!
//! [`Reader`] pairs a line source with a dialect and tokenizes one line per
//! call to [`Iterator::next`]. Nothing is buffered beyond the current line,
//! so infinite sources work.
//!
//! ```rust
//! use csv_codec::{Dialect, Field, Reader};
//!
//! let mut reader = Reader::from_str("my,test,strings\nmy,second,rows", Dialect::new()).unwrap();
//!
//! let first = reader.next().unwrap().unwrap();
//! assert_eq!(first, vec![Field::from("my"), Field::from("test"), Field::from("strings")]);
//! assert_eq!(reader.line_number(), 1);
//!
//! let rest: Vec<_> = reader.collect::<Result<_, _>>().unwrap();
//! assert_eq!(rest.len(), 1);
//! ```

use crate::splitter::{CharLines, Presplit, ReadLines};
use crate::tokenizer::Tokenizer;
use crate::{Dialect, Result, Row};
use std::io;
use std::str::Chars;

/// Decodes rows from a source of raw lines.
pub struct Reader<L> {
    lines: L,
    dialect: Dialect,
    line_number: usize,
}

impl<L> Reader<L>
where
    L: Iterator<Item = Result<String>>,
{
    /// Opens a reading session over an iterator of raw lines.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDialect`](crate::Error::InvalidDialect) if the
    /// dialect does not validate.
    pub fn new(lines: L, dialect: Dialect) -> Result<Self> {
        dialect.validate()?;
        tracing::debug!(
            delimiter = ?dialect.delimiter,
            quote_char = ?dialect.quote_char,
            quoting = dialect.quoting.as_str(),
            "opened csv reader"
        );
        Ok(Reader {
            lines,
            dialect,
            line_number: 0,
        })
    }

    /// Returns the dialect in effect.
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Returns how many raw lines have been consumed so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<'a> Reader<CharLines<Chars<'a>>> {
    /// Reads rows from a string, splitting lines on `\r` and `\n`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDialect`](crate::Error::InvalidDialect) if the
    /// dialect does not validate.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'a str, dialect: Dialect) -> Result<Self> {
        Reader::new(CharLines::new(input.chars()), dialect)
    }
}

impl<R: io::Read> Reader<ReadLines<R>> {
    /// Reads rows from a UTF-8 byte stream, splitting lines on `\r` and `\n`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDialect`](crate::Error::InvalidDialect) if the
    /// dialect does not validate.
    pub fn from_reader(reader: R, dialect: Dialect) -> Result<Self> {
        Reader::new(ReadLines::new(reader), dialect)
    }
}

impl<I> Reader<Presplit<I>>
where
    I: Iterator,
    I::Item: Into<String>,
{
    /// Reads rows from lines that are already split; each item is one row.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_codec::{Dialect, Field, Reader};
    ///
    /// let lines = vec!["my,test,strings", "my,second,rows"];
    /// let rows: Vec<_> = Reader::from_lines(lines, Dialect::new())
    ///     .unwrap()
    ///     .collect::<Result<_, _>>()
    ///     .unwrap();
    /// assert_eq!(rows[1][1], Field::from("second"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDialect`](crate::Error::InvalidDialect) if the
    /// dialect does not validate.
    pub fn from_lines<T>(lines: T, dialect: Dialect) -> Result<Self>
    where
        T: IntoIterator<IntoIter = I>,
    {
        Reader::new(Presplit::new(lines), dialect)
    }
}

impl<L> Iterator for Reader<L>
where
    L: Iterator<Item = Result<String>>,
{
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e)),
        };
        self.line_number += 1;
        Some(Ok(Tokenizer::new(&self.dialect).tokenize(&line)))
    }
}
