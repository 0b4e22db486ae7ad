//! Config loading for doctto documents.
//!
//! Resolves a source (a YAML or JSON path, or an in-memory mapping) and
//! loads it into a [`RawConfig`]: an untyped mapping whose `fields` key is
//! later turned into canonical fields.
//!
//! # Source Types
//!
//! - **Yaml**: `.yaml` / `.yml` files, parsed with `serde_yaml`
//! - **Json**: `.json` files
//! - **Mapping**: a `serde_json` object held in memory
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use synth_config::load_config;
//!
//! let config = load_config(json!({"name": "Invoice", "fields": []})).unwrap();
//! assert_eq!(config["name"], "Invoice");
//!
//! assert!(load_config("invoice.txt").unwrap_err().is_unsupported_source());
//! ```

mod error;
mod loader;
mod source;

pub use error::ConfigError;
pub use loader::{ConfigLoader, JsonLoader, MappingLoader, RawConfig, YamlLoader};
pub use source::{ConfigSource, IntoConfigSource};

/// Resolve `source` and load it into a raw config mapping.
pub fn load_config(source: impl IntoConfigSource) -> Result<RawConfig, ConfigError> {
    let source = source.into_config_source()?;
    tracing::debug!("Loading config from {}", source.display_name());
    source.load()
}
