//! Document writer: generates documents and serializes them to an output.

use jsongen_core::{Schema, ValueEncoding};
use jsongen_generator::{DocumentGenerator, GeneratorError};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Default buffer size for output writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Errors that can occur while writing documents.
#[derive(thiserror::Error, Debug)]
pub enum WriterError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Document generation error.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of documents written.
    pub documents_written: u64,
    /// Bytes written, newlines included.
    pub bytes_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating documents.
    pub generation_duration: Duration,
    /// Time spent serializing and writing.
    pub write_duration: Duration,
}

impl WriteMetrics {
    /// Calculate documents per second.
    pub fn documents_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.documents_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Output layout options.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriterOptions {
    pub encoding: ValueEncoding,
    /// Pretty-print; only honored when a single document is written.
    pub pretty: bool,
}

/// Writes generated documents: one JSON object for a single document,
/// JSON Lines for several.
pub struct DocumentWriter {
    generator: DocumentGenerator,
    options: WriterOptions,
}

impl DocumentWriter {
    /// Create a new document writer.
    ///
    /// # Arguments
    ///
    /// * `generator` - Document generator; its seed decides the output
    /// * `options` - Value encoding and pretty-printing
    pub fn new(generator: DocumentGenerator, options: WriterOptions) -> Self {
        Self { generator, options }
    }

    /// Get a reference to the underlying generator.
    pub fn generator(&self) -> &DocumentGenerator {
        &self.generator
    }

    /// Generate `count` documents into `out`.
    ///
    /// Stops at the first generation error; documents already written stay written.
    pub fn write<W: Write>(
        &mut self,
        schema: &Schema,
        count: u64,
        mut out: W,
    ) -> Result<WriteMetrics, WriterError> {
        let start_time = Instant::now();
        let mut metrics = WriteMetrics::default();

        let pretty = self.options.pretty && count == 1;
        if self.options.pretty && count > 1 {
            warn!("--pretty is ignored when writing {} documents as JSON Lines", count);
        }

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        for _ in 0..count {
            let gen_start = Instant::now();
            let document = self.generator.generate_document(schema)?;
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            let json = document.to_json(self.options.encoding);
            let mut bytes = if pretty {
                serde_json::to_vec_pretty(&json)?
            } else {
                serde_json::to_vec(&json)?
            };
            bytes.push(b'\n');
            out.write_all(&bytes)?;
            write_time += write_start.elapsed();

            metrics.documents_written += 1;
            metrics.bytes_written += bytes.len() as u64;

            if metrics.documents_written % 10000 == 0 {
                debug!("Written {} documents", metrics.documents_written);
            }
        }

        out.flush()?;

        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        info!(
            "Generation complete: {} documents, {} bytes in {:?} ({:.2} documents/sec)",
            metrics.documents_written,
            metrics.bytes_written,
            metrics.total_duration,
            metrics.documents_per_second()
        );

        Ok(metrics)
    }

    /// Generate `count` documents into a file, replacing it.
    ///
    /// Documents go to a temporary file in the same directory that only
    /// replaces `output_path` once every document was written. On error the
    /// existing file is left untouched.
    pub fn write_to_path<P: AsRef<Path>>(
        &mut self,
        schema: &Schema,
        count: u64,
        output_path: P,
    ) -> Result<WriteMetrics, WriterError> {
        let output_path = output_path.as_ref();
        info!(
            "Writing {} document(s) to '{}'",
            count,
            output_path.display()
        );

        let dir = match output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir)?;

        let writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, temp.as_file_mut());
        let metrics = self.write(schema, count, writer)?;

        temp.persist(output_path).map_err(|e| e.error)?;
        Ok(metrics)
    }
}
