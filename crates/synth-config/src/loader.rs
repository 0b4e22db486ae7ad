//! Loaders that turn a config source into a raw mapping.

use crate::error::ConfigError;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use synth_core::error::describe;
use tracing::debug;

/// A loaded config before any schema interpretation.
pub type RawConfig = Map<String, Value>;

/// Reads a config source.
///
/// Implementors only parse; [`ConfigLoader::load_config`] checks the
/// top-level shape.
pub trait ConfigLoader {
    /// Name used in logs and errors.
    fn source_name(&self) -> String;

    /// Parse the source into an untyped value.
    fn load_raw(&self) -> Result<Value, ConfigError>;

    /// Parse the source and require a top-level mapping.
    fn load_config(&self) -> Result<RawConfig, ConfigError> {
        let raw = self.load_raw()?;
        debug!(source = %self.source_name(), "Loaded raw config: {raw}");

        match raw {
            Value::Object(config) => Ok(config),
            other => Err(ConfigError::NotAMapping {
                source_name: self.source_name(),
                found: describe(&other),
            }),
        }
    }
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// YAML file loader.
#[derive(Debug, Clone)]
pub struct YamlLoader {
    path: PathBuf,
}

impl YamlLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse YAML text directly.
    pub fn parse(path: &Path, content: &str) -> Result<Value, ConfigError> {
        serde_yaml::from_str(content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl ConfigLoader for YamlLoader {
    fn source_name(&self) -> String {
        self.path.display().to_string()
    }

    fn load_raw(&self) -> Result<Value, ConfigError> {
        let content = read_file(&self.path)?;
        Self::parse(&self.path, &content)
    }
}

/// JSON file loader.
#[derive(Debug, Clone)]
pub struct JsonLoader {
    path: PathBuf,
}

impl JsonLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigLoader for JsonLoader {
    fn source_name(&self) -> String {
        self.path.display().to_string()
    }

    fn load_raw(&self) -> Result<Value, ConfigError> {
        let content = read_file(&self.path)?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: self.path.clone(),
            source,
        })
    }
}

/// Pass-through for a config that is already in memory.
#[derive(Debug, Clone)]
pub struct MappingLoader {
    config: RawConfig,
}

impl MappingLoader {
    pub fn new(config: RawConfig) -> Self {
        Self { config }
    }
}

impl ConfigLoader for MappingLoader {
    fn source_name(&self) -> String {
        "<in-memory mapping>".to_string()
    }

    fn load_raw(&self) -> Result<Value, ConfigError> {
        Ok(Value::Object(self.config.clone()))
    }
}
