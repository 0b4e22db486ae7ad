//! Core types for doctto documents.
//!
//! This crate provides the field model that documents are built from:
//!
//! - [`CanonicalField`] - Fully typed field with a bound generator
//! - [`BoundingBox`], [`DataType`], [`Alignment`], [`Spacing`], [`FontSize`],
//!   [`FieldMetadata`] - Canonical attribute types and their coercion rules
//! - [`SyntheticDocument`] - Produces records from an ordered field list
//! - [`SyntheticRecord`] / [`FieldSnapshot`] - Generated output
//!
//! # Architecture
//!
//! ```text
//! synth-registry        (generator names -> generator functions)
//!    │
//! synth-core (this crate)
//!    │
//!    ├─── synth-config  (turns sources into raw configs)
//!    └─── doctto        (Document aggregate and CLI)
//! ```
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use synth_core::{CanonicalField, SyntheticDocument};
//!
//! let mut fields = vec![
//!     CanonicalField::from_definition(&json!({
//!         "name": "zip",
//!         "prefix": "ZIP: ",
//!         "data_type": "postalcode",
//!         "bbox": [10, 20, 110, 40]
//!     }))
//!     .unwrap(),
//! ];
//!
//! let records = SyntheticDocument::new(&mut fields)
//!     .with_seed(7)
//!     .synthesize_data(2)
//!     .unwrap();
//!
//! assert_eq!(records.len(), 2);
//! assert!(records[0].get("zip").unwrap().value.starts_with("ZIP: "));
//! ```

pub mod coerce;
pub mod error;
pub mod field;
pub mod generator;
pub mod types;
pub mod values;

pub use error::SchemaError;
pub use field::{CanonicalField, FieldBuilder, FIELD_ATTRIBUTES};
pub use generator::{RecordIterator, SyntheticDocument};
pub use types::{Alignment, BoundingBox, DataType, FieldMetadata, FontSize, Spacing};
pub use values::{FieldSnapshot, SyntheticRecord};

// Registry types callers need alongside fields
pub use synth_registry::{GenerationError, Generator, GeneratorRegistry};
