//! Dialect configuration for CSV decoding and encoding.
//!
//! This module provides the types that govern how text is split into fields
//! and how fields are quoted on the way out:
//!
//! - [`Dialect`]: delimiter, quote and escape characters, line terminator and
//!   quoting policy
//! - [`Quoting`]: when the encoder frames fields in quote characters, and
//!   whether the decoder coerces fields to numbers
//!
//! ## Examples
//!
//! ```rust
//! use csv_codec::{Dialect, Quoting};
//!
//! // Semicolon separated, every field quoted, Unix line endings
//! let dialect = Dialect::new()
//!     .with_delimiter(';')
//!     .with_quoting(Quoting::All)
//!     .with_line_terminator("\n");
//! assert!(dialect.validate().is_ok());
//!
//! // Turning off quote doubling requires an escape character
//! let broken = Dialect::new().with_double_quote(false);
//! assert!(broken.validate().is_err());
//! ```
//!
//! A dialect is plain data and can be loaded from any serde format. Missing
//! keys fall back to the defaults:
//!
//! ```rust
//! use csv_codec::{Dialect, Quoting};
//!
//! let dialect: Dialect = serde_json::from_str(r#"{"delimiter": "|", "quoting": "nonnumeric"}"#).unwrap();
//! assert_eq!(dialect.delimiter, '|');
//! assert_eq!(dialect.quoting, Quoting::NonNumeric);
//! assert_eq!(dialect.line_terminator, "\r\n");
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Quoting policy for a dialect.
///
/// - **Minimal**: quote only fields that contain the delimiter or quote character
/// - **All**: quote every field, including empty ones
/// - **NonNumeric**: quote every field that does not parse as a number; when
///   decoding, fields that parse as numbers become [`Field::Number`](crate::Field::Number)
/// - **None**: never quote; escape quote characters instead
///
/// # Examples
///
/// ```rust
/// use csv_codec::Quoting;
///
/// assert_eq!(Quoting::default(), Quoting::Minimal);
/// assert_eq!(Quoting::NonNumeric.as_str(), "nonnumeric");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quoting {
    #[default]
    Minimal,
    All,
    NonNumeric,
    None,
}

impl Quoting {
    /// Returns the lowercase name of this policy.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Quoting::Minimal => "minimal",
            Quoting::All => "all",
            Quoting::NonNumeric => "nonnumeric",
            Quoting::None => "none",
        }
    }
}

/// Formatting rules for one CSV stream.
///
/// A dialect is built once with the `with_*` methods and then handed to a
/// [`Reader`](crate::Reader) or [`Writer`](crate::Writer), which validate it
/// before touching any input. After that it is only ever read, so a single
/// dialect can be cloned across any number of sessions.
///
/// # Examples
///
/// ```rust
/// use csv_codec::Dialect;
///
/// let dialect = Dialect::new();
/// assert_eq!(dialect.delimiter, ',');
/// assert_eq!(dialect.quote_char, Some('"'));
/// assert_eq!(dialect.escape_char, None);
/// assert!(dialect.double_quote);
/// assert!(!dialect.skip_initial_space);
/// assert_eq!(dialect.line_terminator, "\r\n");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dialect {
    pub delimiter: char,
    pub quote_char: Option<char>,
    pub escape_char: Option<char>,
    pub double_quote: bool,
    pub skip_initial_space: bool,
    pub line_terminator: String,
    pub quoting: Quoting,
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect {
            delimiter: ',',
            quote_char: Some('"'),
            escape_char: None,
            double_quote: true,
            skip_initial_space: false,
            line_terminator: "\r\n".to_string(),
            quoting: Quoting::Minimal,
        }
    }
}

impl Dialect {
    /// Creates the default dialect (comma delimited, `"` quoted, CRLF, minimal quoting).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The spreadsheet dialect. Identical to [`Dialect::new`].
    #[must_use]
    pub fn excel() -> Self {
        Self::default()
    }

    /// The spreadsheet dialect with a tab delimiter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_codec::Dialect;
    ///
    /// assert_eq!(Dialect::excel_tab().delimiter, '\t');
    /// ```
    #[must_use]
    pub fn excel_tab() -> Self {
        Dialect {
            delimiter: '\t',
            ..Default::default()
        }
    }

    /// Unix-style output: `\n` line endings and every field quoted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_codec::{Dialect, Quoting};
    ///
    /// let dialect = Dialect::unix();
    /// assert_eq!(dialect.line_terminator, "\n");
    /// assert_eq!(dialect.quoting, Quoting::All);
    /// ```
    #[must_use]
    pub fn unix() -> Self {
        Dialect {
            line_terminator: "\n".to_string(),
            quoting: Quoting::All,
            ..Default::default()
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the quote character.
    #[must_use]
    pub fn with_quote_char(mut self, quote_char: char) -> Self {
        self.quote_char = Some(quote_char);
        self
    }

    /// Removes the quote character.
    ///
    /// Without a quote character fields are never framed. Delimiters inside a
    /// field are written and read as `escape_char` followed by the delimiter,
    /// so an escape character must be set as well.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_codec::Dialect;
    ///
    /// let dialect = Dialect::new().without_quote_char().with_escape_char('\\');
    /// assert_eq!(dialect.quote_char, None);
    /// assert!(dialect.validate().is_ok());
    /// ```
    #[must_use]
    pub fn without_quote_char(mut self) -> Self {
        self.quote_char = None;
        self
    }

    /// Sets the escape character.
    #[must_use]
    pub fn with_escape_char(mut self, escape_char: char) -> Self {
        self.escape_char = Some(escape_char);
        self
    }

    /// Controls whether a quote character inside a field is written (and read) as two quote characters.
    #[must_use]
    pub fn with_double_quote(mut self, double_quote: bool) -> Self {
        self.double_quote = double_quote;
        self
    }

    /// Controls whether a single space directly after a delimiter is dropped while decoding.
    #[must_use]
    pub fn with_skip_initial_space(mut self, skip_initial_space: bool) -> Self {
        self.skip_initial_space = skip_initial_space;
        self
    }

    /// Sets the terminator the writer appends after every row.
    ///
    /// The reader always splits on `\r` and `\n` regardless of this setting.
    #[must_use]
    pub fn with_line_terminator(mut self, line_terminator: &str) -> Self {
        self.line_terminator = line_terminator.to_string();
        self
    }

    /// Sets the quoting policy.
    #[must_use]
    pub fn with_quoting(mut self, quoting: Quoting) -> Self {
        self.quoting = quoting;
        self
    }

    /// Checks that the options can work together.
    ///
    /// Readers and writers call this on construction, so an invalid dialect
    /// never reaches the tokenizer or encoder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDialect`] when:
    ///
    /// - `double_quote` is off, quoting is [`Quoting::None`], or there is no
    ///   quote character, and no escape character is set
    /// - the delimiter equals the quote or escape character
    /// - the delimiter, quote or escape character is `\r` or `\n`
    /// - the line terminator is empty
    pub fn validate(&self) -> Result<()> {
        let result = self.check();
        if let Err(ref err) = result {
            tracing::debug!(error = %err, "rejected dialect");
        }
        result
    }

    fn check(&self) -> Result<()> {
        if self.escape_char.is_none() {
            if !self.double_quote {
                return Err(Error::invalid_dialect(
                    "need to escape, but no escape_char set while double_quote is off",
                ));
            }
            if self.quoting == Quoting::None {
                return Err(Error::invalid_dialect(
                    "quoting is none, but no escape_char set",
                ));
            }
            if self.quote_char.is_none() {
                return Err(Error::invalid_dialect(
                    "no quote_char, but no escape_char set to escape delimiters",
                ));
            }
        }

        if self.quote_char == Some(self.delimiter) {
            return Err(Error::invalid_dialect(
                "delimiter and quote_char must differ",
            ));
        }
        if self.escape_char == Some(self.delimiter) {
            return Err(Error::invalid_dialect(
                "delimiter and escape_char must differ",
            ));
        }

        let is_line_break = |c: char| c == '\r' || c == '\n';
        if is_line_break(self.delimiter)
            || self.quote_char.is_some_and(is_line_break)
            || self.escape_char.is_some_and(is_line_break)
        {
            return Err(Error::invalid_dialect(
                "delimiter, quote_char and escape_char must not be line breaks",
            ));
        }

        if self.line_terminator.is_empty() {
            return Err(Error::invalid_dialect("line_terminator must not be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dialect_is_valid() {
        assert!(Dialect::new().validate().is_ok());
        assert!(Dialect::excel_tab().validate().is_ok());
        assert!(Dialect::unix().validate().is_ok());
    }

    #[test]
    fn test_double_quote_off_requires_escape() {
        let dialect = Dialect::new().with_double_quote(false);
        assert!(matches!(
            dialect.validate(),
            Err(Error::InvalidDialect { .. })
        ));

        let dialect = dialect.with_escape_char('\\');
        assert!(dialect.validate().is_ok());
    }

    #[test]
    fn test_quoting_none_requires_escape() {
        let dialect = Dialect::new().with_quoting(Quoting::None);
        assert!(dialect.validate().is_err());
        assert!(dialect.with_escape_char('\\').validate().is_ok());
    }

    #[test]
    fn test_missing_quote_char_requires_escape() {
        let dialect = Dialect::new().without_quote_char();
        assert!(dialect.validate().is_err());
        assert!(dialect.with_escape_char('\\').validate().is_ok());
    }

    #[test]
    fn test_delimiter_collisions() {
        assert!(Dialect::new().with_delimiter('"').validate().is_err());
        assert!(Dialect::new()
            .with_escape_char(';')
            .with_delimiter(';')
            .validate()
            .is_err());
        assert!(Dialect::new().with_delimiter('\n').validate().is_err());
        assert!(Dialect::new().with_quote_char('\r').validate().is_err());
    }

    #[test]
    fn test_empty_line_terminator() {
        assert!(Dialect::new().with_line_terminator("").validate().is_err());
    }

    #[test]
    fn test_builder_chain() {
        let dialect = Dialect::new()
            .with_delimiter('\t')
            .with_quote_char('\'')
            .with_escape_char('\\')
            .with_double_quote(false)
            .with_skip_initial_space(true)
            .with_line_terminator("\n")
            .with_quoting(Quoting::NonNumeric);

        assert_eq!(dialect.delimiter, '\t');
        assert_eq!(dialect.quote_char, Some('\''));
        assert_eq!(dialect.escape_char, Some('\\'));
        assert!(!dialect.double_quote);
        assert!(dialect.skip_initial_space);
        assert_eq!(dialect.line_terminator, "\n");
        assert_eq!(dialect.quoting, Quoting::NonNumeric);
    }

    #[test]
    fn test_serde_roundtrip_through_json() {
        let dialect = Dialect::unix().with_escape_char('\\');
        let json = serde_json::to_string(&dialect).unwrap();
        assert!(json.contains(r#""quoting":"all""#));

        let back: Dialect = serde_json::from_str(&json).unwrap();
        assert_eq!(dialect, back);
    }

    #[test]
    fn test_serde_missing_keys_use_defaults() {
        let dialect: Dialect = serde_json::from_str(r#"{"skip_initial_space": true}"#).unwrap();
        assert!(dialect.skip_initial_space);
        assert_eq!(dialect.delimiter, ',');
        assert_eq!(dialect.quote_char, Some('"'));
    }
}
