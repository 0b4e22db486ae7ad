//! Config source resolution.

use crate::error::ConfigError;
use crate::loader::{ConfigLoader, JsonLoader, MappingLoader, RawConfig, YamlLoader};
use serde_json::Value;
use std::path::{Path, PathBuf};
use synth_core::error::describe;

/// Where a document config comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// `.yaml` / `.yml` file
    Yaml(PathBuf),
    /// `.json` file
    Json(PathBuf),
    /// Config already in memory
    Mapping(RawConfig),
}

impl ConfigSource {
    /// Pick a source kind from a path's extension (case-insensitive).
    ///
    /// - `yaml`, `yml` -> Yaml
    /// - `json` -> Json
    /// - anything else -> [`ConfigError::UnsupportedSource`]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("yaml") | Some("yml") => Ok(ConfigSource::Yaml(path.to_path_buf())),
            Some("json") => Ok(ConfigSource::Json(path.to_path_buf())),
            _ => Err(ConfigError::UnsupportedSource(format!(
                "{} (expected a .yaml, .yml or .json file)",
                path.display()
            ))),
        }
    }

    /// Get a display name for logging
    pub fn display_name(&self) -> String {
        match self {
            ConfigSource::Yaml(path) | ConfigSource::Json(path) => path.display().to_string(),
            ConfigSource::Mapping(_) => "<in-memory mapping>".to_string(),
        }
    }

    /// Loader for this source.
    pub fn loader(self) -> Box<dyn ConfigLoader> {
        match self {
            ConfigSource::Yaml(path) => Box::new(YamlLoader::new(path)),
            ConfigSource::Json(path) => Box::new(JsonLoader::new(path)),
            ConfigSource::Mapping(config) => Box::new(MappingLoader::new(config)),
        }
    }

    /// Read and parse the source into a raw config mapping.
    pub fn load(self) -> Result<RawConfig, ConfigError> {
        self.loader().load_config()
    }
}

/// Anything that can name a config source.
pub trait IntoConfigSource {
    fn into_config_source(self) -> Result<ConfigSource, ConfigError>;
}

impl IntoConfigSource for ConfigSource {
    fn into_config_source(self) -> Result<ConfigSource, ConfigError> {
        Ok(self)
    }
}

impl IntoConfigSource for &str {
    fn into_config_source(self) -> Result<ConfigSource, ConfigError> {
        ConfigSource::from_path(self)
    }
}

impl IntoConfigSource for String {
    fn into_config_source(self) -> Result<ConfigSource, ConfigError> {
        ConfigSource::from_path(self)
    }
}

impl IntoConfigSource for &Path {
    fn into_config_source(self) -> Result<ConfigSource, ConfigError> {
        ConfigSource::from_path(self)
    }
}

impl IntoConfigSource for PathBuf {
    fn into_config_source(self) -> Result<ConfigSource, ConfigError> {
        ConfigSource::from_path(self)
    }
}

impl IntoConfigSource for &PathBuf {
    fn into_config_source(self) -> Result<ConfigSource, ConfigError> {
        ConfigSource::from_path(self)
    }
}

impl IntoConfigSource for RawConfig {
    fn into_config_source(self) -> Result<ConfigSource, ConfigError> {
        Ok(ConfigSource::Mapping(self))
    }
}

/// Strings are paths, objects are in-memory configs.
impl IntoConfigSource for Value {
    fn into_config_source(self) -> Result<ConfigSource, ConfigError> {
        match self {
            Value::String(path) => ConfigSource::from_path(path),
            Value::Object(config) => Ok(ConfigSource::Mapping(config)),
            other => Err(ConfigError::UnsupportedSource(describe(&other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_path_by_extension() {
        assert!(matches!(
            ConfigSource::from_path("invoice.yaml"),
            Ok(ConfigSource::Yaml(_))
        ));
        assert!(matches!(
            ConfigSource::from_path("configs/invoice.YML"),
            Ok(ConfigSource::Yaml(_))
        ));
        assert!(matches!(
            ConfigSource::from_path("invoice.Json"),
            Ok(ConfigSource::Json(_))
        ));
    }

    #[test]
    fn test_unsupported_paths() {
        for path in ["invoice.txt", "invoice", "yaml", "invoice.yaml.bak"] {
            let err = ConfigSource::from_path(path).unwrap_err();
            assert!(err.is_unsupported_source(), "{path} should be unsupported");
        }
    }

    #[test]
    fn test_value_sources() {
        assert!(matches!(
            json!("a.json").into_config_source(),
            Ok(ConfigSource::Json(_))
        ));
        assert!(matches!(
            json!({"name": "Invoice"}).into_config_source(),
            Ok(ConfigSource::Mapping(_))
        ));

        for value in [json!(1), json!(null), json!([1, 2]), json!(true)] {
            let err = value.into_config_source().unwrap_err();
            assert!(err.is_unsupported_source());
        }
    }

    #[test]
    fn test_display_name() {
        let source = ConfigSource::from_path("configs/a.yaml").unwrap();
        assert_eq!(source.display_name(), "configs/a.yaml");

        let source = ConfigSource::Mapping(RawConfig::new());
        assert_eq!(source.display_name(), "<in-memory mapping>");
    }
}
