//! Generator registry for doctto.
//!
//! This crate maps a data-type name (`"name"`, `"postalcode"`,
//! `"hexadecimal_string"`, ...) to a generator that produces a representative
//! fake value of that kind. The table is declared statically by the provider
//! modules under [`generators`] and built once per process.
//!
//! # Architecture
//!
//! ```text
//! generators::providers()  (static tables)
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │  GeneratorRegistry   │
//! │                      │
//! │  - name → Generator  │
//! │  - default ("text")  │
//! └──────────┬───────────┘
//!            │ resolve(data_type)
//!            ▼
//!        Generator ── generate(&mut rng) ──▶ String
//! ```
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use synth_registry::GeneratorRegistry;
//!
//! let registry = GeneratorRegistry::global();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let hex = registry.resolve("hexadecimal_string").generate(&mut rng).unwrap();
//! assert_eq!(hex.len(), 8);
//!
//! // Unknown data types fall back to free-form text.
//! let text = registry.resolve("not-a-real-type").generate(&mut rng).unwrap();
//! assert!(!text.is_empty());
//! ```
//!
//! # Extending
//!
//! Extra capabilities are added through [`RegistryBuilder`], which starts from
//! the built-in table and rejects duplicate names:
//!
//! ```rust
//! use synth_registry::{Generator, GeneratorRegistry};
//!
//! let registry = GeneratorRegistry::builder()
//!     .register(Generator::from_fn("invoice_number", |_| "INV-0001".to_string()))
//!     .unwrap()
//!     .build()
//!     .unwrap();
//! assert!(registry.contains("invoice_number"));
//! ```

pub mod generators;
pub mod registry;

// Re-exports for convenience
pub use generators::{providers, GeneratorFn, Provider};
pub use registry::{
    GenerationError, Generator, GeneratorRegistry, RegistryBuilder, RegistryError,
    DEFAULT_GENERATOR,
};
