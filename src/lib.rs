//! doctto Library
//!
//! Generates synthetic document data from declarative field schemas.
//!
//! # Features
//!
//! - Config sources: YAML or JSON files, or an in-memory mapping
//! - Canonical fields: loose attribute literals coerced into typed values
//! - Named generators: a data-type name picks a fake-value generator, with a
//!   text fallback for unknown names
//! - Seeded generation: a `seed` makes output reproducible
//!
//! # Workspace Crates
//!
//! - `synth_registry` - generator registry and built-in providers
//! - `synth_core` - canonical fields, coercion and record synthesis
//! - `synth_config` - config source resolution and loaders
//!
//! # Example
//!
//! ```rust
//! use doctto::Document;
//! use serde_json::json;
//!
//! let mut document = Document::create_document(json!({
//!     "name": "Invoice",
//!     "copies": 2,
//!     "fields": [{"name": "id", "data_type": "hexadecimal_string"}]
//! }))
//! .unwrap();
//!
//! assert_eq!(document.to_string(), "Invoice | Fields count: 1");
//!
//! let records = document.synthesize_data(None).unwrap();
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].get("id").unwrap().value.len(), 8);
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! doctto generate --config invoice.yaml --copies 10 --format jsonl
//! doctto describe --config invoice.yaml
//! doctto generators
//! ```

use clap::Parser;
use std::path::PathBuf;

mod document;
mod error;
pub mod output;

pub use document::{Document, DocumentMetadata, DEFAULT_COPIES};
pub use error::DocumentError;
pub use output::OutputFormat;

pub use synth_config::{ConfigError, ConfigSource, IntoConfigSource};
pub use synth_core::{
    CanonicalField, FieldSnapshot, SchemaError, SyntheticDocument, SyntheticRecord,
};
pub use synth_registry::{GenerationError, Generator, GeneratorRegistry};

/// Options for `doctto generate`.
#[derive(Parser, Clone, Debug)]
pub struct GenerateOpts {
    /// Document config file (.yaml, .yml or .json)
    #[arg(long, env = "DOCTTO_CONFIG")]
    pub config: PathBuf,

    /// Number of copies (defaults to the config's `copies`, else 1)
    #[arg(long)]
    pub copies: Option<usize>,

    /// RNG seed for reproducible output (overrides the config's `seed`)
    #[arg(long, env = "DOCTTO_SEED")]
    pub seed: Option<u64>,

    /// Output format. `json` writes nothing unless every copy succeeds;
    /// `jsonl` streams records, so lines written before a generator failure
    /// stay on stdout
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}
