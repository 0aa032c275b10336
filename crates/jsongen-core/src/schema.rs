//! Schema definitions for jsongen.
//!
//! A schema is a flat JSON object mapping output field names to invocation
//! strings:
//!
//! ```json
//! {"age": "getInt(18,65)", "email": "getEmail()", "tier": "getFromList(gold,silver)"}
//! ```
//!
//! Field order is preserved exactly as written in the source, so generated
//! documents list their fields in the same order.

use serde_json::Value;
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Top-level value is not a JSON object
    #[error("Schema must be a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// Field value is not an invocation string
    #[error("Field '{field}' must map to an invocation string, found {found}")]
    NonStringInvocation { field: String, found: &'static str },

    /// Field name is empty
    #[error("Field names must not be empty")]
    EmptyFieldName,
}

// ============================================================================
// Schema Types
// ============================================================================

/// A single schema entry: output field name and the invocation producing its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Output field name
    pub name: String,
    /// Invocation string, e.g. `getInt(1,100)`
    pub invocation: String,
}

impl FieldDefinition {
    /// Create a new field definition.
    pub fn new(name: impl Into<String>, invocation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            invocation: invocation.into(),
        }
    }
}

/// Ordered mapping from field names to invocation strings.
///
/// Immutable once loaded; the generator only ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldDefinition>,
}

impl Schema {
    /// Load schema from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse schema from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build a schema from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        let object = match value {
            Value::Object(object) => object,
            other => return Err(SchemaError::NotAnObject(json_kind(&other))),
        };

        let fields = object
            .into_iter()
            .map(|(name, invocation)| {
                if name.is_empty() {
                    return Err(SchemaError::EmptyFieldName);
                }
                match invocation {
                    Value::String(invocation) => Ok(FieldDefinition { name, invocation }),
                    other => Err(SchemaError::NonStringInvocation {
                        field: name,
                        found: json_kind(&other),
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { fields })
    }

    /// Build a schema from `(name, invocation)` pairs, keeping their order.
    ///
    /// A repeated name replaces the earlier invocation in place.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut schema = Self::default();
        for (name, invocation) in pairs {
            schema.add_field(FieldDefinition::new(name, invocation))?;
        }
        Ok(schema)
    }

    /// Add a field, replacing the invocation of an existing field with the same name.
    pub fn add_field(&mut self, field: FieldDefinition) -> Result<(), SchemaError> {
        if field.name.is_empty() {
            return Err(SchemaError::EmptyFieldName);
        }
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => existing.invocation = field.invocation,
            None => self.fields.push(field),
        }
        Ok(())
    }

    /// Fields in schema order.
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Get a field's invocation string by name.
    pub fn get_invocation(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.invocation.as_str())
    }

    /// Get all field names in schema order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
