//! Writing generated records.

use serde::Serialize;
use std::io::{BufWriter, Write};
use synth_core::SyntheticRecord;
use synth_registry::GenerationError;
use thiserror::Error;
use tracing::debug;

/// Default buffer size for writers (64KB)
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Output layout for generated records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One JSON array holding every record
    #[default]
    Json,
    /// One JSON object per line
    Jsonl,
}

/// Errors that can occur while writing records.
#[derive(Error, Debug)]
pub enum OutputError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A generator failed mid-stream.
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Write all records as a single JSON array.
pub fn write_json<W, T>(writer: W, records: &[T], pretty: bool) -> Result<(), OutputError>
where
    W: Write,
    T: Serialize,
{
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, writer);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, records)?;
    } else {
        serde_json::to_writer(&mut writer, records)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Stream records as JSON lines, one record per line.
///
/// Lines already written stay written when a later record fails.
/// Returns the number of records written.
pub fn write_jsonl<W, I>(writer: W, records: I) -> Result<u64, OutputError>
where
    W: Write,
    I: IntoIterator<Item = Result<SyntheticRecord, GenerationError>>,
{
    let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, writer);
    let mut written = 0u64;

    for record in records {
        serde_json::to_writer(&mut writer, &record?)?;
        writeln!(writer)?;
        written += 1;

        if written % 10000 == 0 {
            debug!("Written {} records", written);
        }
    }

    writer.flush()?;
    Ok(written)
}
