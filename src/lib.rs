//! jsongen library
//!
//! Generates synthetic JSON documents from a declarative schema that maps
//! field names to generator invocations:
//!
//! ```json
//! {"age": "getInt(18,65)", "email": "getEmail()", "tier": "getFromList(gold,silver)"}
//! ```
//!
//! # Crates
//!
//! - `jsongen_core` - Schema, generated value and document types
//! - `jsongen_generator` - Invocation parser, generator registry, document generator
//!
//! # CLI Usage
//!
//! ```bash
//! # One document, values as strings
//! jsongen generate --schema schema.json --seed 42
//!
//! # 1000 documents as JSON Lines, numbers kept numeric
//! jsongen generate --schema schema.json --count 1000 --typed --output fixtures.jsonl
//!
//! # Report every broken field
//! jsongen check --schema schema.json
//!
//! # List generator names
//! jsongen generators
//! ```

pub mod args;
pub mod check;
pub mod generate;
pub mod list;
pub mod writer;

pub use args::{CheckArgs, GenerateArgs};
pub use writer::{DocumentWriter, WriteMetrics, WriterError, WriterOptions};
