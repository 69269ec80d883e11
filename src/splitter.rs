//! Line splitting for CSV sources.
//!
//! Every source is turned into a lazy iterator of raw lines
//! (`Iterator<Item = Result<String>>`) before it reaches the tokenizer:
//!
//! - [`CharLines`]: pulls one `char` at a time from any character iterator
//! - [`ReadLines`]: pulls bytes from an [`io::Read`] and decodes each line as UTF-8
//! - [`Presplit`]: passes lines that are already split through unchanged
//!
//! Character and byte sources end a line at every `\r` and every `\n`. The
//! terminator is consumed and never appears in the yielded line. A `\r\n`
//! pair is two terminators, so it yields an extra empty line. A non-empty
//! tail after the last terminator is yielded as the final line.
//!
//! ```rust
//! use csv_codec::CharLines;
//!
//! let lines: Vec<String> = CharLines::new("a,b\rc,d\ne".chars())
//!     .map(|line| line.unwrap())
//!     .collect();
//! assert_eq!(lines, vec!["a,b", "c,d", "e"]);
//!
//! let lines: Vec<String> = CharLines::new("a\r\nb\r\n".chars())
//!     .map(|line| line.unwrap())
//!     .collect();
//! assert_eq!(lines, vec!["a", "", "b", ""]);
//! ```

use crate::{Error, Result};
use std::io::{self, BufRead, BufReader, Read};

#[inline]
fn is_terminator(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Splits a character iterator into lines.
pub struct CharLines<I> {
    chars: I,
    done: bool,
}

impl<I> CharLines<I>
where
    I: Iterator<Item = char>,
{
    pub fn new(chars: I) -> Self {
        CharLines { chars, done: false }
    }
}

impl<I> Iterator for CharLines<I>
where
    I: Iterator<Item = char>,
{
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut line = String::new();
        for c in self.chars.by_ref() {
            if is_terminator(c) {
                return Some(Ok(line));
            }
            line.push(c);
        }

        self.done = true;
        if line.is_empty() {
            None
        } else {
            Some(Ok(line))
        }
    }
}

/// Splits a byte reader into UTF-8 lines.
///
/// `\r` and `\n` are single bytes that never occur inside a multi-byte UTF-8
/// sequence, so lines are cut on raw bytes and decoded afterwards.
///
/// # Examples
///
/// ```rust
/// use csv_codec::ReadLines;
/// use std::io::Cursor;
///
/// let lines: Vec<String> = ReadLines::new(Cursor::new("näive,b\nc"))
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(lines, vec!["näive,b", "c"]);
/// ```
pub struct ReadLines<R> {
    reader: BufReader<R>,
    line_number: usize,
    done: bool,
}

impl<R: Read> ReadLines<R> {
    pub fn new(reader: R) -> Self {
        ReadLines {
            reader: BufReader::new(reader),
            line_number: 0,
            done: false,
        }
    }

    /// Reads bytes up to the next terminator. Returns `false` at end of input.
    fn fill_line(&mut self, line: &mut Vec<u8>) -> io::Result<bool> {
        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                return Ok(false);
            }

            match buf.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(pos) => {
                    line.extend_from_slice(&buf[..pos]);
                    self.reader.consume(pos + 1);
                    return Ok(true);
                }
                None => {
                    let len = buf.len();
                    line.extend_from_slice(buf);
                    self.reader.consume(len);
                }
            }
        }
    }
}

impl<R: Read> Iterator for ReadLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut bytes = Vec::new();
        let terminated = match self.fill_line(&mut bytes) {
            Ok(terminated) => terminated,
            Err(e) => {
                self.done = true;
                return Some(Err(Error::from(e)));
            }
        };

        if !terminated {
            self.done = true;
            if bytes.is_empty() {
                return None;
            }
        }

        self.line_number += 1;
        let line_number = self.line_number;
        Some(String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 { line: line_number }))
    }
}

/// Passes already-split lines through without scanning for terminators.
///
/// # Examples
///
/// ```rust
/// use csv_codec::Presplit;
///
/// let lines: Vec<String> = Presplit::new(vec!["my,test", "a\rb"])
///     .map(|line| line.unwrap())
///     .collect();
/// assert_eq!(lines, vec!["my,test", "a\rb"]);
/// ```
pub struct Presplit<I> {
    lines: I,
}

impl<I> Presplit<I>
where
    I: Iterator,
    I::Item: Into<String>,
{
    pub fn new<T>(lines: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Presplit {
            lines: lines.into_iter(),
        }
    }
}

impl<I> Iterator for Presplit<I>
where
    I: Iterator,
    I::Item: Into<String>,
{
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| Ok(line.into()))
    }
}
