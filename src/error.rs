//! Error types for document creation and synthesis.

use synth_config::ConfigError;
use synth_core::SchemaError;
use synth_registry::GenerationError;
use thiserror::Error;

/// Errors that can occur while creating or synthesizing a [`crate::Document`].
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The config source could not be resolved or loaded.
    #[error(transparent)]
    Source(#[from] ConfigError),

    /// One entry of `fields` is not a valid field definition.
    #[error("Invalid field definition at index {index}: {source}")]
    InvalidField {
        index: usize,
        #[source]
        source: SchemaError,
    },

    /// A document-level key (`fields`, `name`, `copies`, `seed`) is malformed.
    #[error("Invalid document metadata: {0}")]
    InvalidMetadata(SchemaError),

    /// A generator failed while producing records.
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl DocumentError {
    /// True when the source itself was rejected before anything was parsed.
    pub fn is_unsupported_source(&self) -> bool {
        matches!(self, Self::Source(e) if e.is_unsupported_source())
    }

    /// True for errors caused by the schema content.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self, Self::InvalidField { .. } | Self::InvalidMetadata(_))
    }
}
