//! Header-keyed records.
//!
//! This module provides [`Record`], a wrapper around [`IndexMap`] that maps
//! header names to values in column order. A value is either a single
//! [`Field`] or, under the reader's rest key, the list of surplus fields a row
//! carried beyond its header.
//!
//! ## Examples
//!
//! ```rust
//! use csv_codec::{Field, Record};
//!
//! let mut record = Record::new();
//! record.insert("fruits", Field::from("apple"));
//! record.insert("count", Field::from(3));
//!
//! assert_eq!(record.len(), 2);
//! assert_eq!(record.field("fruits"), Some(&Field::from("apple")));
//!
//! let keys: Vec<_> = record.keys().cloned().collect();
//! assert_eq!(keys, vec!["fruits", "count"]);
//! ```

use crate::Field;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// A value stored in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    Field(Field),
    /// Surplus fields of a row that was longer than its header.
    Rest(Vec<Field>),
}

impl RecordValue {
    /// If this is a single field, returns it.
    #[must_use]
    pub fn as_field(&self) -> Option<&Field> {
        match self {
            RecordValue::Field(field) => Some(field),
            RecordValue::Rest(_) => None,
        }
    }

    /// If this is a list of surplus fields, returns it.
    #[must_use]
    pub fn as_rest(&self) -> Option<&[Field]> {
        match self {
            RecordValue::Field(_) => None,
            RecordValue::Rest(fields) => Some(fields),
        }
    }
}

impl From<Field> for RecordValue {
    fn from(field: Field) -> Self {
        RecordValue::Field(field)
    }
}

impl From<Vec<Field>> for RecordValue {
    fn from(fields: Vec<Field>) -> Self {
        RecordValue::Rest(fields)
    }
}

impl Serialize for RecordValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            RecordValue::Field(field) => field.serialize(serializer),
            RecordValue::Rest(fields) => fields.serialize(serializer),
        }
    }
}

/// An insertion-ordered mapping from header name to value.
///
/// Serializes as a map, so a record converts directly to JSON and other
/// serde formats:
///
/// ```rust
/// use csv_codec::{Field, Record};
///
/// let record: Record = vec![
///     ("fruits".to_string(), Field::from("apple")),
///     ("price".to_string(), Field::from(1.5)),
/// ]
/// .into_iter()
/// .collect();
///
/// let json = serde_json::to_string(&record).unwrap();
/// assert_eq!(json, r#"{"fruits":"apple","price":1.5}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record(IndexMap<String, RecordValue>);

impl Record {
    /// Creates an empty `Record`.
    #[must_use]
    pub fn new() -> Self {
        Record(IndexMap::new())
    }

    /// Creates an empty `Record` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Record(IndexMap::with_capacity(capacity))
    }

    /// Inserts a value under `key`, returning the previous value if there was one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_codec::{Field, Record};
    ///
    /// let mut record = Record::new();
    /// assert!(record.insert("meats", Field::from("pork")).is_none());
    /// assert!(record.insert("meats", Field::from("beef")).is_some());
    /// ```
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<RecordValue>
    where
        K: Into<String>,
        V: Into<RecordValue>,
    {
        self.0.insert(key.into(), value.into())
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RecordValue> {
        self.0.get(key)
    }

    /// Returns the single field stored under `key`.
    ///
    /// Returns `None` if the key is missing or holds surplus fields.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Field> {
        self.get(key).and_then(RecordValue::as_field)
    }

    /// Returns the surplus fields stored under `key`.
    #[must_use]
    pub fn rest(&self, key: &str) -> Option<&[Field]> {
        self.get(key).and_then(RecordValue::as_rest)
    }

    /// Returns `true` if the record holds `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the record has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, RecordValue> {
        self.0.keys()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, RecordValue> {
        self.0.iter()
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl From<HashMap<String, Field>> for Record {
    fn from(map: HashMap<String, Field>) -> Self {
        map.into_iter().collect()
    }
}

impl FromIterator<(String, Field)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, Field)>>(iter: T) -> Self {
        Record(
            iter.into_iter()
                .map(|(key, field)| (key, RecordValue::Field(field)))
                .collect(),
        )
    }
}

impl FromIterator<(String, RecordValue)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, RecordValue)>>(iter: T) -> Self {
        Record(IndexMap::from_iter(iter))
    }
}

impl IntoIterator for Record {
    type Item = (String, RecordValue);
    type IntoIter = indexmap::map::IntoIter<String, RecordValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a RecordValue);
    type IntoIter = indexmap::map::Iter<'a, String, RecordValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
