//! Row-at-a-time CSV output.
//!
//! [`Writer`] owns a sink for the duration of a session. Each call to
//! [`Writer::write_row`] encodes one row, appends the dialect's line
//! terminator and writes the whole line to the sink.
//!
//! ```rust
//! use csv_codec::{row, Dialect, Writer};
//!
//! let mut writer = Writer::new(Vec::new(), Dialect::new()).unwrap();
//! writer.write_row(&row!["my", "test", "string"]).unwrap();
//! writer.write_row(&row!["my", null, "string"]).unwrap();
//!
//! let output = String::from_utf8(writer.into_inner()).unwrap();
//! assert_eq!(output, "my,test,string\r\nmy,,string\r\n");
//! ```

use crate::encoder::encode_row;
use crate::{Dialect, Field, Result};
use std::borrow::Borrow;
use std::io;

/// Encodes rows into an [`io::Write`] sink.
pub struct Writer<W: io::Write> {
    sink: W,
    dialect: Dialect,
}

impl<W: io::Write> Writer<W> {
    /// Opens a writing session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDialect`] if the dialect does not validate.
    pub fn new(sink: W, dialect: Dialect) -> Result<Self> {
        dialect.validate()?;
        tracing::debug!(
            delimiter = ?dialect.delimiter,
            quoting = dialect.quoting.as_str(),
            "opened csv writer"
        );
        Ok(Writer { sink, dialect })
    }

    /// Returns the dialect in effect.
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Encodes and writes one row.
    ///
    /// Returns the number of characters in the encoded line, not counting the
    /// line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the sink rejects the write.
    pub fn write_row<I>(&mut self, row: I) -> Result<usize>
    where
        I: IntoIterator,
        I::Item: Borrow<Field>,
    {
        let mut line = encode_row(row, &self.dialect);
        let written = line.chars().count();
        line.push_str(&self.dialect.line_terminator);

        self.sink.write_all(line.as_bytes())?;
        tracing::trace!(chars = written, "wrote csv row");
        Ok(written)
    }

    /// Encodes and writes every row in order.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first write error.
    pub fn write_rows<R, I>(&mut self, rows: R) -> Result<()>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator,
        I::Item: Borrow<Field>,
    {
        for row in rows {
            self.write_row(row)?;
        }
        Ok(())
    }

    /// Flushes the sink.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if flushing fails.
    pub fn flush(&mut self) -> Result<()> {
        Ok(self.sink.flush()?)
    }

    /// Returns a reference to the sink.
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Ends the session and returns the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}
