use std::path::PathBuf;

/// Errors raised while resolving or loading a config source.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The source is neither a YAML/JSON path nor an in-memory mapping
    #[error("Unsupported config source: {0}")]
    UnsupportedSource(String),

    /// Error reading config file
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing YAML
    #[error("Failed to parse YAML config {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Error parsing JSON
    #[error("Failed to parse JSON config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The parsed document is not a top-level mapping
    #[error("Config {source_name} must be a mapping, found {found}")]
    NotAMapping { source_name: String, found: String },
}

impl ConfigError {
    /// True for errors about the kind of source rather than its contents.
    pub fn is_unsupported_source(&self) -> bool {
        matches!(self, Self::UnsupportedSource(_))
    }
}
