//! Document generator for jsongen.
//!
//! This crate turns a [`Schema`](jsongen_core::Schema) of invocation strings
//! into a [`Document`](jsongen_core::Document) of generated values. The
//! random source is a seeded `StdRng` owned by the [`GeneratorRegistry`], so
//! runs with the same seed and schema are reproducible.
//!
//! # Architecture
//!
//! ```text
//! Schema { field -> "getInt(1,100)" }
//!        │
//!        ▼
//! ┌─────────────────────┐
//! │  DocumentGenerator  │
//! │                     │
//! │  parse_invocation() │──▶ InvocationSpec { generator_name, raw_args }
//! │  GeneratorRegistry  │──▶ static name -> handler table, rng (StdRng)
//! └─────────┬───────────┘
//!           │
//!           ▼
//!    Document { field -> GeneratedValue }
//! ```
//!
//! # Example
//!
//! ```rust
//! use jsongen_core::Schema;
//! use jsongen_generator::DocumentGenerator;
//!
//! let schema = Schema::from_json(r#"{"count": "getInt(1,3)", "label": "getFromList(x,y)"}"#).unwrap();
//!
//! let mut generator = DocumentGenerator::new(42);
//! let document = generator.generate_document(&schema).unwrap();
//! assert_eq!(document.field_names(), vec!["count", "label"]);
//! ```
//!
//! # Generators
//!
//! - `getInt()` / `getInt(min,max)` - Random integer, inclusive range
//! - `getDouble(min,max)` - Random float in `[min,max)`
//! - `getEmail()` - Random email address
//! - `getName()` - Random personal name
//! - `getLatitude()` - Random latitude in `[-90,90]`
//! - `getLongitude()` - Random longitude in `[-180,180)`
//! - `getFromList(a,b,...)` - One of the arguments, verbatim

pub mod generator;
pub mod generators;
pub mod invocation;
pub mod registry;

// Re-exports for convenience
pub use generator::{DocumentGenerator, DocumentIterator, FieldError, GeneratorError};
pub use generators::ArgumentError;
pub use invocation::{parse_invocation, InvocationSpec, InvocationSyntaxError};
pub use registry::{GeneratorRegistry, InvocationError};
