//! Mapping rows to header-keyed records and back.
//!
//! [`decode_record`] zips a header with a decoded row. Missing values are
//! filled with a `restval`; surplus values are collected under a `restkey`.
//! [`encode_record`] projects a record onto a header, filling missing keys
//! with `restval` and handling unknown keys per [`ExtrasAction`].
//!
//! [`RecordReader`] and [`RecordWriter`] run these over whole sessions.
//!
//! ```rust
//! use csv_codec::{Dialect, Field, Reader, RecordReader};
//!
//! let reader = Reader::from_str("fruits,vegetables,meats\napple,spinach", Dialect::new()).unwrap();
//! let mut records = RecordReader::new(reader).unwrap().restval("N/A");
//!
//! let record = records.next().unwrap().unwrap();
//! assert_eq!(record.field("fruits"), Some(&Field::from("apple")));
//! assert_eq!(record.field("meats"), Some(&Field::from("N/A")));
//! ```

use crate::record::{Record, RecordValue};
use crate::{Dialect, Error, Field, Reader, Result, Row, Writer};
use std::io;

/// What to do with record keys that are not in the writer's fieldnames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExtrasAction {
    /// Fail with [`Error::UnexpectedFields`] naming every unknown key.
    #[default]
    Raise,
    /// Drop unknown keys silently.
    Ignore,
}

/// Zips `fieldnames` with the values of `row`.
///
/// Fieldnames without a value map to `restval`. Values without a fieldname
/// are collected, in order, under `restkey`; with no `restkey` they are dropped.
///
/// # Examples
///
/// ```rust
/// use csv_codec::{decode_record, row, Field};
///
/// let fieldnames = vec!["fruits".to_string(), "vegetables".to_string()];
/// let record = decode_record(
///     row!["apple", "spinach", "boat", "house", "car"],
///     &fieldnames,
///     Some("outstanding_fields"),
///     &Field::Null,
/// );
///
/// assert_eq!(record.field("vegetables"), Some(&Field::from("spinach")));
/// assert_eq!(
///     record.rest("outstanding_fields"),
///     Some(&row!["boat", "house", "car"][..])
/// );
/// ```
#[must_use]
pub fn decode_record(
    row: Row,
    fieldnames: &[String],
    restkey: Option<&str>,
    restval: &Field,
) -> Record {
    let mut record = Record::with_capacity(fieldnames.len() + 1);
    let mut values = row.into_iter();

    for name in fieldnames {
        let value = values.next().unwrap_or_else(|| restval.clone());
        record.insert(name.as_str(), value);
    }

    let surplus: Vec<Field> = values.collect();
    if !surplus.is_empty() {
        match restkey {
            Some(key) => {
                record.insert(key, surplus);
            }
            None => {
                tracing::debug!(dropped = surplus.len(), "row longer than header and no restkey set");
            }
        }
    }

    record
}

/// Projects `record` onto `fieldnames`, in fieldname order.
///
/// Missing keys become `restval`. Surplus fields stored under a fieldname are
/// written in place, one column each, so a record read with a rest key writes
/// back to the original row when the rest key is the last fieldname.
///
/// # Errors
///
/// With [`ExtrasAction::Raise`], returns [`Error::UnexpectedFields`] listing
/// every key of `record` that is not in `fieldnames`, in record order.
///
/// # Examples
///
/// ```rust
/// use csv_codec::{encode_record, ExtrasAction, Field, Record};
///
/// let mut record = Record::new();
/// record.insert("b", Field::from(2));
/// record.insert("a", Field::from(1));
///
/// let fieldnames = vec!["a".to_string(), "b".to_string(), "c".to_string()];
/// let row = encode_record(&record, &fieldnames, &Field::from(""), ExtrasAction::Raise).unwrap();
/// assert_eq!(row, vec![Field::from(1), Field::from(2), Field::from("")]);
/// ```
pub fn encode_record(
    record: &Record,
    fieldnames: &[String],
    restval: &Field,
    extras: ExtrasAction,
) -> Result<Row> {
    if extras == ExtrasAction::Raise {
        let unexpected: Vec<String> = record
            .keys()
            .filter(|key| !fieldnames.contains(key))
            .cloned()
            .collect();
        if !unexpected.is_empty() {
            return Err(Error::unexpected_fields(unexpected));
        }
    }

    let mut row = Row::with_capacity(fieldnames.len());
    for name in fieldnames {
        match record.get(name) {
            Some(RecordValue::Field(field)) => row.push(field.clone()),
            Some(RecordValue::Rest(fields)) => row.extend(fields.iter().cloned()),
            None => row.push(restval.clone()),
        }
    }
    Ok(row)
}

/// Reads header-keyed records.
///
/// The header is either given up front or taken from the first decoded row.
pub struct RecordReader<L> {
    reader: Reader<L>,
    fieldnames: Vec<String>,
    restkey: Option<String>,
    restval: Field,
}

impl<L> RecordReader<L>
where
    L: Iterator<Item = Result<String>>,
{
    /// Takes the header from the first row of `reader`.
    ///
    /// Empty input leaves the header empty, and the reader yields no records.
    ///
    /// # Errors
    ///
    /// Returns the source error if reading the first line fails.
    pub fn new(mut reader: Reader<L>) -> Result<Self> {
        let fieldnames = match reader.next() {
            Some(row) => row?.iter().map(Field::to_string).collect(),
            None => Vec::new(),
        };
        tracing::debug!(?fieldnames, "read csv header");
        Ok(Self::with_fieldnames(reader, fieldnames))
    }

    /// Uses `fieldnames` as the header; every row of `reader` is data.
    pub fn with_fieldnames<I, S>(reader: Reader<L>, fieldnames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RecordReader {
            reader,
            fieldnames: fieldnames.into_iter().map(Into::into).collect(),
            restkey: None,
            restval: Field::Null,
        }
    }

    /// Sets the key under which surplus values are collected.
    #[must_use]
    pub fn restkey(mut self, restkey: &str) -> Self {
        self.restkey = Some(restkey.to_string());
        self
    }

    /// Sets the value for fieldnames that a short row has no value for.
    #[must_use]
    pub fn restval<F: Into<Field>>(mut self, restval: F) -> Self {
        self.restval = restval.into();
        self
    }

    /// Returns the header in effect.
    pub fn fieldnames(&self) -> &[String] {
        &self.fieldnames
    }
}

impl<L> Iterator for RecordReader<L>
where
    L: Iterator<Item = Result<String>>,
{
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fieldnames.is_empty() {
            return None;
        }
        let row = match self.reader.next()? {
            Ok(row) => row,
            Err(e) => return Some(Err(e)),
        };
        Some(Ok(decode_record(
            row,
            &self.fieldnames,
            self.restkey.as_deref(),
            &self.restval,
        )))
    }
}

/// Writes header-keyed records.
///
/// # Examples
///
/// ```rust
/// use csv_codec::{Dialect, ExtrasAction, Field, Record, RecordWriter};
///
/// let mut writer = RecordWriter::new(Vec::new(), ["fruits", "meats"], Dialect::new())
///     .unwrap()
///     .extras_action(ExtrasAction::Ignore);
/// writer.write_header().unwrap();
///
/// let mut record = Record::new();
/// record.insert("fruits", Field::from("apple"));
/// record.insert("boats", Field::from("dinghy"));
/// writer.write_record(&record).unwrap();
///
/// let output = String::from_utf8(writer.into_inner()).unwrap();
/// assert_eq!(output, "fruits,meats\r\napple,\r\n");
/// ```
pub struct RecordWriter<W: io::Write> {
    writer: Writer<W>,
    fieldnames: Vec<String>,
    restval: Field,
    extras: ExtrasAction,
}

impl<W: io::Write> RecordWriter<W> {
    /// Opens a writing session with the given header.
    ///
    /// Missing keys are written as empty fields and unknown keys are rejected
    /// until [`RecordWriter::restval`] or [`RecordWriter::extras_action`] say otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDialect`] if the dialect does not validate.
    pub fn new<I, S>(sink: W, fieldnames: I, dialect: Dialect) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(RecordWriter {
            writer: Writer::new(sink, dialect)?,
            fieldnames: fieldnames.into_iter().map(Into::into).collect(),
            restval: Field::from(""),
            extras: ExtrasAction::Raise,
        })
    }

    /// Sets the value written for fieldnames a record has no key for.
    #[must_use]
    pub fn restval<F: Into<Field>>(mut self, restval: F) -> Self {
        self.restval = restval.into();
        self
    }

    /// Sets how keys outside the fieldnames are handled.
    #[must_use]
    pub fn extras_action(mut self, extras: ExtrasAction) -> Self {
        self.extras = extras;
        self
    }

    /// Returns the header in effect.
    pub fn fieldnames(&self) -> &[String] {
        &self.fieldnames
    }

    /// Writes the fieldnames as a row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the sink rejects the write.
    pub fn write_header(&mut self) -> Result<usize> {
        let header: Row = self.fieldnames.iter().map(Field::from).collect();
        self.writer.write_row(&header)
    }

    /// Writes one record. Nothing is written if the record is rejected.
    ///
    /// Returns the number of characters written, not counting the terminator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnexpectedFields`] for unknown keys under
    /// [`ExtrasAction::Raise`], or [`Error::Io`] if the sink rejects the write.
    pub fn write_record(&mut self, record: &Record) -> Result<usize> {
        let row = encode_record(record, &self.fieldnames, &self.restval, self.extras)?;
        self.writer.write_row(&row)
    }

    /// Writes every record in order, stopping at the first error.
    ///
    /// # Errors
    ///
    /// See [`RecordWriter::write_record`].
    pub fn write_records<'a, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Flushes the sink.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if flushing fails.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()
    }

    /// Ends the session and returns the sink.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_decode_short_row_uses_restval() {
        let record = decode_record(
            row!["apple", "spinach"],
            &names(&["fruits", "vegetables", "meats"]),
            None,
            &Field::from("N/A"),
        );
        let expected: Record = vec![
            ("fruits".to_string(), Field::from("apple")),
            ("vegetables".to_string(), Field::from("spinach")),
            ("meats".to_string(), Field::from("N/A")),
        ]
        .into_iter()
        .collect();
        assert_eq!(record, expected);
    }

    #[test]
    fn test_decode_long_row_uses_restkey() {
        let record = decode_record(
            row!["apple", "spinach", "boat", "house", "car"],
            &names(&["fruits", "vegetables"]),
            Some("outstanding_fields"),
            &Field::Null,
        );
        assert_eq!(record.len(), 3);
        assert_eq!(record.field("fruits"), Some(&Field::from("apple")));
        assert_eq!(record.field("vegetables"), Some(&Field::from("spinach")));
        assert_eq!(
            record.rest("outstanding_fields"),
            Some(&row!["boat", "house", "car"][..])
        );
    }

    #[test]
    fn test_decode_long_row_without_restkey_drops_surplus() {
        let record = decode_record(row!["a", "b", "c"], &names(&["x"]), None, &Field::Null);
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_decode_default_restval_is_null() {
        let record = decode_record(row![], &names(&["x"]), None, &Field::Null);
        assert_eq!(record.field("x"), Some(&Field::Null));
    }

    #[test]
    fn test_encode_raise_lists_all_unexpected_keys() {
        let mut record = Record::new();
        record.insert("a", Field::from(1));
        record.insert("zeta", Field::from(2));
        record.insert("alpha", Field::from(3));

        let err = encode_record(&record, &names(&["a"]), &Field::Null, ExtrasAction::Raise)
            .unwrap_err();
        assert_eq!(
            err,
            Error::UnexpectedFields {
                fields: names(&["zeta", "alpha"])
            }
        );
    }

    #[test]
    fn test_encode_ignore_drops_unexpected_keys() {
        let mut record = Record::new();
        record.insert("a", Field::from(1));
        record.insert("b", Field::from(2));

        let row = encode_record(&record, &names(&["b"]), &Field::Null, ExtrasAction::Ignore)
            .unwrap();
        assert_eq!(row, vec![Field::from(2)]);
    }

    #[test]
    fn test_encode_flattens_rest_values() {
        let record = decode_record(
            row!["apple", "spinach", "boat", "car"],
            &names(&["fruits", "vegetables"]),
            Some("rest"),
            &Field::Null,
        );
        let row = encode_record(
            &record,
            &names(&["fruits", "vegetables", "rest"]),
            &Field::Null,
            ExtrasAction::Raise,
        )
        .unwrap();
        assert_eq!(row, row!["apple", "spinach", "boat", "car"]);
    }

    #[test]
    fn test_record_reader_takes_header_from_first_row() {
        let reader = Reader::from_str("fruits,vegetables,meats\napple,spinach,pork", Dialect::new())
            .unwrap();
        let mut records = RecordReader::new(reader).unwrap();
        assert_eq!(records.fieldnames(), &names(&["fruits", "vegetables", "meats"])[..]);

        let record = records.next().unwrap().unwrap();
        assert_eq!(record.field("meats"), Some(&Field::from("pork")));
        assert!(records.next().is_none());
    }

    #[test]
    fn test_record_reader_given_fieldnames() {
        let reader = Reader::from_str("fruits,vegetables,meats\napple,spinach,pork", Dialect::new())
            .unwrap();
        let records = RecordReader::with_fieldnames(reader, ["column_1", "column_2", "column_3"]);
        assert_eq!(
            records.fieldnames(),
            &names(&["column_1", "column_2", "column_3"])[..]
        );

        let all: Vec<Record> = records.collect::<Result<_>>().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].field("column_1"), Some(&Field::from("fruits")));
    }

    #[test]
    fn test_record_reader_empty_input() {
        let reader = Reader::from_str("", Dialect::new()).unwrap();
        let mut records = RecordReader::new(reader).unwrap();
        assert!(records.fieldnames().is_empty());
        assert!(records.next().is_none());
    }

    #[test]
    fn test_record_writer_rejects_without_writing() {
        let mut writer = RecordWriter::new(Vec::new(), ["a"], Dialect::new()).unwrap();
        let mut record = Record::new();
        record.insert("a", Field::from("x"));
        record.insert("b", Field::from("y"));

        assert!(matches!(
            writer.write_record(&record),
            Err(Error::UnexpectedFields { .. })
        ));
        assert!(writer.into_inner().is_empty());
    }

    #[test]
    fn test_record_writer_restval_and_header() {
        let mut writer = RecordWriter::new(Vec::new(), ["fruits", "meats"], Dialect::new())
            .unwrap()
            .restval("none");
        assert_eq!(writer.write_header().unwrap(), "fruits,meats".len());

        let mut record = Record::new();
        record.insert("fruits", Field::from("apple"));
        writer.write_records([&record, &record]).unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(output, "fruits,meats\r\napple,none\r\napple,none\r\n");
    }
}
