//! Value representations for generated documents.

use serde_json::{Map, Number, Value};
use std::fmt;

/// Value produced by one generator invocation.
///
/// Values keep their numeric type internally; how they are written out is
/// decided by [`ValueEncoding`].
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Double(f64),

    /// String value
    Text(String),
}

impl GeneratedValue {
    /// Try to get this value as an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get this value as a float. Integers widen.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Double(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    /// Try to get this value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to a JSON value using the given encoding.
    pub fn to_json(&self, encoding: ValueEncoding) -> Value {
        match (encoding, self) {
            (ValueEncoding::Text, value) => Value::String(value.to_string()),
            (ValueEncoding::Typed, Self::Int(v)) => Value::Number((*v).into()),
            (ValueEncoding::Typed, Self::Double(v)) => Number::from_f64(*v)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(v.to_string())),
            (ValueEncoding::Typed, Self::Text(s)) => Value::String(s.clone()),
        }
    }
}

impl fmt::Display for GeneratedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// How generated values are written into the output JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueEncoding {
    /// Every value is a JSON string, numbers included.
    #[default]
    Text,

    /// Numbers are JSON numbers, text stays a string.
    Typed,
}

/// One generated document: field names mapped to values, in schema order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    fields: Vec<(String, GeneratedValue)>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document with room for `capacity` fields.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Append a field. Names are expected to be unique; the schema guarantees it.
    pub fn push(&mut self, name: impl Into<String>, value: GeneratedValue) {
        self.fields.push((name.into(), value));
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&GeneratedValue> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Fields and values in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GeneratedValue)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Convert to a JSON object with fields in document order.
    pub fn to_json(&self, encoding: ValueEncoding) -> Value {
        let mut obj = Map::with_capacity(self.fields.len());
        for (name, value) in self.iter() {
            obj.insert(name.to_string(), value.to_json(encoding));
        }
        Value::Object(obj)
    }
}
