//! Typed field values.
//!
//! This module provides the [`Field`] enum, the unit a row is made of. The
//! tokenizer produces text fields, or number fields when the dialect asks for
//! numeric coercion; the encoder accepts all three variants.
//!
//! ## Creating Fields
//!
//! ```rust
//! use csv_codec::Field;
//!
//! let text = Field::from("apple");
//! let number = Field::from(4.2);
//! let integer = Field::from(2);
//! let missing = Field::from(None::<&str>);
//!
//! assert!(text.is_text());
//! assert!(number.is_number());
//! assert_eq!(integer.as_f64(), Some(2.0));
//! assert!(missing.is_null());
//! ```
//!
//! ## Numeric Checks
//!
//! [`parse_number`] is the single place that decides whether text reads as a
//! number. Surrounding whitespace is ignored:
//!
//! ```rust
//! use csv_codec::parse_number;
//!
//! assert_eq!(parse_number(" 1"), Some(1.0));
//! assert_eq!(parse_number("2.0"), Some(2.0));
//! assert_eq!(parse_number("spinach"), None);
//! assert_eq!(parse_number(""), None);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One decoded row: fields in column order.
pub type Row = Vec<Field>;

/// A single CSV field.
///
/// # Examples
///
/// ```rust
/// use csv_codec::Field;
///
/// let field = Field::Text("spinach".to_string());
/// assert_eq!(field.as_str(), Some("spinach"));
/// assert_eq!(field.to_string(), "spinach");
///
/// let field = Field::Number(2.5);
/// assert_eq!(field.to_string(), "2.5");
///
/// assert_eq!(Field::Null.to_string(), "");
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Field {
    /// An absent value. Encodes as an empty field; never produced by the tokenizer.
    #[default]
    Null,
    Text(String),
    Number(f64),
}

/// Parses text as a floating point number, ignoring surrounding whitespace.
///
/// Returns `None` for anything that is not a number, including the empty string.
#[inline]
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

impl Field {
    /// Returns `true` if the field is [`Field::Null`].
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    /// Returns `true` if the field is text.
    #[inline]
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Field::Text(_))
    }

    /// Returns `true` if the field is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Field::Number(_))
    }

    /// If the field is text, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Field::Text(s) => Some(s),
            _ => None,
        }
    }

    /// If the field is a number, returns it.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Field::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the numeric value of the field if it has one.
    ///
    /// Numbers are returned as is; text is run through [`parse_number`];
    /// null never reads as a number.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use csv_codec::Field;
    ///
    /// assert_eq!(Field::from("4.2").numeric_value(), Some(4.2));
    /// assert_eq!(Field::from(7).numeric_value(), Some(7.0));
    /// assert_eq!(Field::from("pork").numeric_value(), None);
    /// assert_eq!(Field::Null.numeric_value(), None);
    /// ```
    #[must_use]
    pub fn numeric_value(&self) -> Option<f64> {
        match self {
            Field::Null => None,
            Field::Text(s) => parse_number(s),
            Field::Number(n) => Some(*n),
        }
    }

    /// Builds a field from raw text, coercing it to a number when `coerce` is set and it parses.
    pub(crate) fn from_raw(text: String, coerce: bool) -> Self {
        if coerce {
            if let Some(n) = parse_number(&text) {
                return Field::Number(n);
            }
        }
        Field::Text(text)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Null => Ok(()),
            Field::Text(s) => f.write_str(s),
            Field::Number(n) => write!(f, "{}", n),
        }
    }
}

impl Serialize for Field {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Field::Null => serializer.serialize_unit(),
            Field::Text(s) => serializer.serialize_str(s),
            Field::Number(n) => serializer.serialize_f64(*n),
        }
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Visitor;

        struct FieldVisitor;

        impl<'de> Visitor<'de> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, a number or null")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Field::Text(value.to_string()))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Field::Number(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Field::Number(value as f64))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Field::Number(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Field::Text(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Field::Text(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Field::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Field::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }
        }

        deserializer.deserialize_any(FieldVisitor)
    }
}

impl From<String> for Field {
    fn from(value: String) -> Self {
        Field::Text(value)
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::Text(value.to_string())
    }
}

impl From<&String> for Field {
    fn from(value: &String) -> Self {
        Field::Text(value.clone())
    }
}

impl From<f64> for Field {
    fn from(value: f64) -> Self {
        Field::Number(value)
    }
}

impl From<f32> for Field {
    fn from(value: f32) -> Self {
        Field::Number(value as f64)
    }
}

impl From<i32> for Field {
    fn from(value: i32) -> Self {
        Field::Number(value as f64)
    }
}

// Values beyond 2^53 lose precision.
impl From<i64> for Field {
    fn from(value: i64) -> Self {
        Field::Number(value as f64)
    }
}

impl From<u32> for Field {
    fn from(value: u32) -> Self {
        Field::Number(value as f64)
    }
}

impl<T: Into<Field>> From<Option<T>> for Field {
    fn from(value: Option<T>) -> Self {
        value.map_or(Field::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_trims_whitespace() {
        assert_eq!(parse_number(" 1"), Some(1.0));
        assert_eq!(parse_number("2.0 "), Some(2.0));
        assert_eq!(parse_number("-3e2"), Some(-300.0));
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("1,5"), None);
    }

    #[test]
    fn test_from_raw_coercion() {
        assert_eq!(Field::from_raw("2.0".to_string(), true), Field::Number(2.0));
        assert_eq!(
            Field::from_raw("2.0".to_string(), false),
            Field::Text("2.0".to_string())
        );
        assert_eq!(
            Field::from_raw("a".to_string(), true),
            Field::Text("a".to_string())
        );
    }

    #[test]
    fn test_display_numbers() {
        assert_eq!(Field::from(2).to_string(), "2");
        assert_eq!(Field::from(4.2).to_string(), "4.2");
        assert_eq!(Field::from(-0.5).to_string(), "-0.5");
    }

    #[test]
    fn test_serde_json() {
        let row = vec![Field::from("a"), Field::from(1.5), Field::Null];
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"["a",1.5,null]"#);

        let back: Vec<Field> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Field::from(Some("x")), Field::Text("x".to_string()));
        assert_eq!(Field::from(None::<f64>), Field::Null);
    }
}
