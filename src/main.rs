//! Command-line interface for jsongen
//!
//! # Usage Examples
//!
//! ```bash
//! # Single document on stdout
//! jsongen generate --schema schema.json
//!
//! # Reproducible fixtures file
//! jsongen generate --schema schema.json --seed 42 --count 100 --output users.jsonl
//!
//! # Validate every invocation in a schema
//! jsongen check --schema schema.json
//!
//! # List generator names
//! jsongen generators
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use clap::{Parser, Subcommand};
use jsongen::check::run_check;
use jsongen::generate::run_generate;
use jsongen::list::run_list_generators;
use jsongen::{CheckArgs, GenerateArgs};

#[derive(Parser)]
#[command(name = "jsongen")]
#[command(about = "Generate synthetic JSON documents from a declarative schema")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate documents from a schema
    Generate(GenerateArgs),

    /// Check every invocation in a schema and report all failures
    Check(CheckArgs),

    /// List the available generators
    Generators,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Check(args) => run_check(args),
        Commands::Generators => run_list_generators(std::io::stdout().lock()),
    }
}
