//! `jsongen generators` command handler.

use jsongen_generator::GeneratorRegistry;
use std::io::Write;

/// Write the registered generator names, one per line.
pub fn run_list_generators<W: Write>(mut out: W) -> anyhow::Result<()> {
    for name in GeneratorRegistry::new(0).names() {
        writeln!(out, "{name}")?;
    }
    out.flush()?;
    Ok(())
}
