//! `jsongen check` command handler.

use crate::args::CheckArgs;
use anyhow::Context;
use jsongen_core::Schema;
use jsongen_generator::{DocumentGenerator, FieldError};

/// Check every field of a schema, returning the failing ones.
pub fn check_schema(schema: &Schema) -> Vec<FieldError> {
    DocumentGenerator::new(0).check(schema)
}

/// Run the check command. Fails if any field cannot be generated.
pub fn run_check(args: CheckArgs) -> anyhow::Result<()> {
    let schema = Schema::from_file(&args.schema)
        .with_context(|| format!("Failed to load schema file: {:?}", args.schema))?;

    let errors = check_schema(&schema);
    if errors.is_empty() {
        println!("{:?}: all {} fields OK", args.schema, schema.len());
        return Ok(());
    }

    for error in &errors {
        println!("{error}: {}", error.source);
    }
    anyhow::bail!(
        "{} of {} fields in {:?} failed",
        errors.len(),
        schema.len(),
        args.schema
    )
}
