//! Error types for CSV decoding and encoding.
//!
//! Decoding itself never fails on malformed text: unbalanced quotes and
//! unparsable numbers degrade to literal field content. Errors only come from
//! three places:
//!
//! - **Dialect validation**: an impossible combination of options, rejected
//!   before any row is processed
//! - **Record mapping**: a record carries keys outside the writer's fieldnames
//!   while [`ExtrasAction::Raise`](crate::ExtrasAction::Raise) is in effect
//! - **I/O**: the underlying source or sink failed, or a byte source produced a
//!   line that is not valid UTF-8
//!
//! ## Examples
//!
//! ```rust
//! use csv_codec::{Dialect, Error, Writer};
//!
//! let dialect = Dialect::new().with_double_quote(false);
//! let result = Writer::new(Vec::new(), dialect);
//!
//! match result {
//!     Err(Error::InvalidDialect { reason }) => assert!(reason.contains("escape")),
//!     _ => panic!("expected a dialect error"),
//! }
//! ```

use thiserror::Error;

/// Represents all possible errors produced by this crate.
///
/// The enum is closed so callers can match on the kind of failure and decide
/// how to recover.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The dialect combines options that cannot work together.
    #[error("Invalid dialect: {reason}")]
    InvalidDialect { reason: String },

    /// A record holds keys that are not part of the writer's fieldnames.
    #[error("Record contains fields not in fieldnames: {}", .fields.join(", "))]
    UnexpectedFields { fields: Vec<String> },

    /// IO error while reading from a source or writing to a sink
    #[error("IO error: {0}")]
    Io(String),

    /// A byte source produced a line that is not valid UTF-8.
    #[error("Invalid UTF-8 on line {line}")]
    InvalidUtf8 { line: usize },
}

impl Error {
    /// Creates a dialect validation error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_codec::Error;
    ///
    /// let err = Error::invalid_dialect("delimiter must not be a line break");
    /// assert!(err.to_string().contains("line break"));
    /// ```
    pub fn invalid_dialect(reason: &str) -> Self {
        Error::InvalidDialect {
            reason: reason.to_string(),
        }
    }

    /// Creates an unexpected-fields error naming every offending key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_codec::Error;
    ///
    /// let err = Error::unexpected_fields(vec!["color".to_string(), "size".to_string()]);
    /// assert!(err.to_string().ends_with("color, size"));
    /// ```
    pub fn unexpected_fields(fields: Vec<String>) -> Self {
        Error::UnexpectedFields { fields }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_fields_message_lists_every_key() {
        let err = Error::unexpected_fields(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(
            err.to_string(),
            "Record contains fields not in fieldnames: a, b"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("pipe closed")));
    }
}
