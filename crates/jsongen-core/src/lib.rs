//! Core types for the jsongen document generator.
//!
//! This crate provides the foundational types shared by the generator and
//! the command-line tool:
//!
//! - [`Schema`] - Ordered field name to invocation string mapping, loaded from JSON
//! - [`GeneratedValue`] - Value produced by a single generator invocation
//! - [`Document`] - Ordered field name to generated value mapping
//!
//! # Architecture
//!
//! ```text
//! jsongen-core (this crate)
//!    │
//!    ├─── jsongen-generator  (parses invocations, dispatches generators)
//!    │
//!    └─── jsongen            (CLI, document writer)
//! ```
//!
//! # Example
//!
//! ```rust
//! use jsongen_core::Schema;
//!
//! let schema = Schema::from_json(r#"{"age": "getInt(18,65)", "email": "getEmail()"}"#).unwrap();
//! assert_eq!(schema.field_names(), vec!["age", "email"]);
//! ```

pub mod schema;
pub mod values;

// Re-exports for convenience
pub use schema::{FieldDefinition, Schema, SchemaError};
pub use values::{Document, GeneratedValue, ValueEncoding};
