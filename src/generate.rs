//! `jsongen generate` command handler.

use crate::args::GenerateArgs;
use crate::writer::{DocumentWriter, WriterOptions};
use anyhow::Context;
use jsongen_core::Schema;
use jsongen_generator::DocumentGenerator;
use std::io::BufWriter;

/// Run the generate command.
pub fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let schema = Schema::from_file(&args.schema)
        .with_context(|| format!("Failed to load schema file: {:?}", args.schema))?;

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(
        "Generating {} document(s) from {:?} ({} fields, seed {})",
        args.count,
        args.schema,
        schema.len(),
        seed
    );

    let options = WriterOptions {
        encoding: args.encoding(),
        pretty: args.pretty,
    };
    let mut writer = DocumentWriter::new(DocumentGenerator::new(seed), options);

    match &args.output {
        Some(path) => {
            writer
                .write_to_path(&schema, args.count, path)
                .with_context(|| format!("Failed to generate into {}", path.display()))?;
        }
        None => {
            let stdout = std::io::stdout().lock();
            writer
                .write(&schema, args.count, BufWriter::new(stdout))
                .context("Failed to generate documents")?;
        }
    }

    Ok(())
}
