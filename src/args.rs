//! CLI argument definitions.

use clap::Args;
use jsongen_core::ValueEncoding;
use std::path::PathBuf;

/// Arguments for `jsongen generate`.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Path to schema JSON file
    #[arg(long, short = 's', env = "JSONGEN_SCHEMA")]
    pub schema: PathBuf,

    /// Random seed for deterministic generation (same seed = same data).
    /// A random seed is chosen and logged when omitted.
    #[arg(long, env = "JSONGEN_SEED")]
    pub seed: Option<u64>,

    /// Number of documents to generate; more than one is written as JSON Lines
    #[arg(long, short = 'n', default_value = "1")]
    pub count: u64,

    /// Output file (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Pretty-print the document (single document only)
    #[arg(long)]
    pub pretty: bool,

    /// Write numbers as JSON numbers instead of strings
    #[arg(long)]
    pub typed: bool,
}

impl GenerateArgs {
    pub fn encoding(&self) -> ValueEncoding {
        if self.typed {
            ValueEncoding::Typed
        } else {
            ValueEncoding::Text
        }
    }
}

/// Arguments for `jsongen check`.
#[derive(Args, Clone, Debug)]
pub struct CheckArgs {
    /// Path to schema JSON file
    #[arg(long, short = 's', env = "JSONGEN_SCHEMA")]
    pub schema: PathBuf,
}
