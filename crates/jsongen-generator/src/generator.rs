//! Document generator: assembles one document per pass over the schema.

use crate::invocation::parse_invocation;
use crate::registry::{GeneratorRegistry, InvocationError};
use jsongen_core::{Document, FieldDefinition, GeneratedValue, Schema, ValueEncoding};
use tracing::debug;

/// A schema field whose invocation could not be turned into a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("field '{field}' (invocation '{invocation}')")]
pub struct FieldError {
    pub field: String,
    pub invocation: String,
    #[source]
    pub source: InvocationError,
}

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// A field failed; the document was abandoned
    #[error(transparent)]
    Field(#[from] FieldError),

    /// JSON encoding error
    #[error("Failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Generates documents from a schema.
///
/// All randomness comes from the owned [`GeneratorRegistry`]; the generator
/// itself only orchestrates parsing and dispatch.
#[derive(Debug)]
pub struct DocumentGenerator {
    registry: GeneratorRegistry,
    /// Number of documents generated so far
    index: u64,
}

impl DocumentGenerator {
    /// Create a new document generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self::with_registry(GeneratorRegistry::new(seed))
    }

    /// Create a document generator drawing values from an existing registry.
    ///
    /// The registry's RNG state carries over, so a registry built with
    /// [`GeneratorRegistry::new`] keeps the run reproducible.
    pub fn with_registry(registry: GeneratorRegistry) -> Self {
        Self { registry, index: 0 }
    }

    /// Number of documents generated so far.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate one document. The first failing field aborts the document.
    pub fn generate_document(&mut self, schema: &Schema) -> Result<Document, GeneratorError> {
        let mut document = Document::with_capacity(schema.len());

        for field in schema.fields() {
            let value = self.generate_field(field)?;
            document.push(field.name.clone(), value);
        }

        debug!(
            index = self.index,
            fields = document.len(),
            "Generated document"
        );
        self.index += 1;

        Ok(document)
    }

    /// Generate one document and encode it as a JSON object string.
    pub fn generate_json(
        &mut self,
        schema: &Schema,
        encoding: ValueEncoding,
    ) -> Result<String, GeneratorError> {
        let document = self.generate_document(schema)?;
        Ok(serde_json::to_string(&document.to_json(encoding))?)
    }

    /// Run every field once and collect all failures instead of stopping at the first.
    ///
    /// An empty result means every invocation in the schema is usable.
    pub fn check(&mut self, schema: &Schema) -> Vec<FieldError> {
        schema
            .fields()
            .iter()
            .filter_map(|field| self.generate_field(field).err())
            .collect()
    }

    /// Lazily generate `count` documents.
    ///
    /// The iterator yields the first error and then stops.
    pub fn documents<'a>(&'a mut self, schema: &'a Schema, count: u64) -> DocumentIterator<'a> {
        DocumentIterator {
            generator: self,
            schema,
            remaining: count,
        }
    }

    fn generate_field(&mut self, field: &FieldDefinition) -> Result<GeneratedValue, FieldError> {
        let to_field_error = |source: InvocationError| FieldError {
            field: field.name.clone(),
            invocation: field.invocation.clone(),
            source,
        };

        let spec = parse_invocation(&field.invocation)
            .map_err(|e| to_field_error(InvocationError::from(e)))?;
        let value = self.registry.invoke(&spec).map_err(to_field_error)?;

        debug!(field = %field.name, invocation = %field.invocation, %value, "Generated field");
        Ok(value)
    }
}

/// Iterator that lazily generates documents.
pub struct DocumentIterator<'a> {
    generator: &'a mut DocumentGenerator,
    schema: &'a Schema,
    remaining: u64,
}

impl Iterator for DocumentIterator<'_> {
    type Item = Result<Document, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let result = self.generator.generate_document(self.schema);
        self.remaining = if result.is_ok() { self.remaining - 1 } else { 0 };
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (0, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::ArgumentError;
    use crate::invocation::InvocationSyntaxError;

    fn test_schema() -> Schema {
        Schema::from_json(
            r#"{
                "count": "getInt(1,3)",
                "label": "getFromList(x,y)",
                "email": "getEmail()",
                "lat": "getLatitude()"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_generate_document() {
        let schema = test_schema();
        let mut generator = DocumentGenerator::new(42);

        let document = generator.generate_document(&schema).unwrap();

        assert_eq!(document.field_names(), vec!["count", "label", "email", "lat"]);

        let count = document.get("count").and_then(GeneratedValue::as_i64).unwrap();
        assert!((1..=3).contains(&count));

        let label = document.get("label").and_then(GeneratedValue::as_str).unwrap();
        assert!(label == "x" || label == "y");
    }

    #[test]
    fn test_deterministic_generation() {
        let schema = test_schema();

        let mut gen1 = DocumentGenerator::new(42);
        let mut gen2 = DocumentGenerator::new(42);

        assert_eq!(
            gen1.generate_document(&schema).unwrap(),
            gen2.generate_document(&schema).unwrap()
        );
    }

    #[test]
    fn test_with_registry_matches_seeded_constructor() {
        let schema = test_schema();

        let mut from_seed = DocumentGenerator::new(99);
        let mut from_registry = DocumentGenerator::with_registry(GeneratorRegistry::new(99));

        assert_eq!(
            from_seed.generate_document(&schema).unwrap(),
            from_registry.generate_document(&schema).unwrap()
        );
    }

    #[test]
    fn test_empty_schema_gives_empty_document() {
        let mut generator = DocumentGenerator::new(42);
        let document = generator.generate_document(&Schema::default()).unwrap();
        assert!(document.is_empty());
    }

    #[test]
    fn test_unknown_generator_aborts_document() {
        let schema = Schema::from_pairs([("ok", "getInt()"), ("bad", "getFoo()")]).unwrap();
        let mut generator = DocumentGenerator::new(42);

        match generator.generate_document(&schema) {
            Err(GeneratorError::Field(err)) => {
                assert_eq!(err.field, "bad");
                assert_eq!(err.invocation, "getFoo()");
                assert_eq!(
                    err.source,
                    InvocationError::UnknownGenerator("getFoo".to_string())
                );
            }
            other => panic!("Expected field error, got {other:?}"),
        }
        assert_eq!(generator.current_index(), 0);
    }

    #[test]
    fn test_syntax_error_aborts_document() {
        let schema = Schema::from_pairs([("n", "getInt(1,10")]).unwrap();
        let mut generator = DocumentGenerator::new(42);

        let result = generator.generate_document(&schema);
        assert!(matches!(
            result,
            Err(GeneratorError::Field(FieldError {
                source: InvocationError::Syntax(InvocationSyntaxError::MissingCloseParen(_)),
                ..
            }))
        ));
    }

    #[test]
    fn test_check_collects_every_failure() {
        let schema = Schema::from_pairs([
            ("a", "getInt(3,1)"),
            ("b", "getName()"),
            ("c", "nope"),
            ("d", "getBar()"),
        ])
        .unwrap();
        let mut generator = DocumentGenerator::new(42);

        let errors = generator.check(&schema);
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["a", "c", "d"]);
        assert!(matches!(
            errors[0].source,
            InvocationError::Argument(ArgumentError::InvertedRange { .. })
        ));
    }

    #[test]
    fn test_generate_json_text_encoding() {
        let schema = Schema::from_pairs([("n", "getInt(5,5)"), ("s", "getFromList(v)")]).unwrap();
        let mut generator = DocumentGenerator::new(42);

        let json = generator.generate_json(&schema, ValueEncoding::Text).unwrap();
        assert_eq!(json, r#"{"n":"5","s":"v"}"#);
    }

    #[test]
    fn test_documents_iterator() {
        let schema = test_schema();
        let mut generator = DocumentGenerator::new(42);

        let documents: Vec<_> = generator
            .documents(&schema, 10)
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(documents.len(), 10);
        assert_eq!(generator.current_index(), 10);
    }

    #[test]
    fn test_documents_iterator_stops_after_error() {
        let schema = Schema::from_pairs([("bad", "getInt(x,1)")]).unwrap();
        let mut generator = DocumentGenerator::new(42);

        let results: Vec<_> = generator.documents(&schema, 5).collect();
        assert_eq!(results.len(), 1);
        assert!(results[0].is_err());
    }

    #[test]
    fn test_field_error_message() {
        let schema = Schema::from_pairs([("bad", "getFoo()")]).unwrap();
        let mut generator = DocumentGenerator::new(42);

        let err = generator.generate_document(&schema).unwrap_err();
        assert_eq!(err.to_string(), "field 'bad' (invocation 'getFoo()')");
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("unknown generator 'getFoo'"));
    }
}
