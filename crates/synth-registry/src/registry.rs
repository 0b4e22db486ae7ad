//! Name-keyed generator lookup table.

use crate::generators::{providers, GeneratorFn};
use rand::RngCore;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Name of the generator used when a data type has no registered match.
pub const DEFAULT_GENERATOR: &str = "text";

/// Error raised by a generator while producing a value.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The generator could not produce a value
    #[error("Generator '{generator}' failed: {reason}")]
    Failed { generator: String, reason: String },
}

impl GenerationError {
    /// Create a failure for the named generator.
    pub fn failed(generator: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Failed {
            generator: generator.into(),
            reason: reason.into(),
        }
    }
}

/// Error type for registry construction.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A generator with the same name is already registered
    #[error("Generator already registered: {0}")]
    DuplicateGenerator(String),

    /// The requested default generator is not registered
    #[error("Default generator not registered: {0}")]
    UnknownDefault(String),
}

type GenerateFn = dyn Fn(&mut dyn RngCore) -> Result<String, GenerationError> + Send + Sync;

/// A named value generator.
///
/// Cloning is cheap: the underlying function is shared.
#[derive(Clone)]
pub struct Generator {
    name: Arc<str>,
    func: Arc<GenerateFn>,
}

impl Generator {
    /// Create a generator from a fallible function.
    pub fn new<F>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(&mut dyn RngCore) -> Result<String, GenerationError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Create a generator from an infallible function pointer.
    pub fn from_fn(name: impl Into<Arc<str>>, generate: GeneratorFn) -> Self {
        Self::new(name, move |rng| Ok(generate(rng)))
    }

    /// The name this generator is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Produce a value using the given RNG.
    pub fn generate(&self, rng: &mut dyn RngCore) -> Result<String, GenerationError> {
        (self.func)(rng)
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Immutable mapping from data-type name to generator.
#[derive(Debug, Clone)]
pub struct GeneratorRegistry {
    generators: HashMap<String, Generator>,
    default: Generator,
}

impl GeneratorRegistry {
    /// Build a registry holding every built-in provider's generators.
    pub fn builtin() -> Self {
        let generators = builtin_generators();
        debug!("Built generator registry with {} generators", generators.len());
        let default = generators
            .get(DEFAULT_GENERATOR)
            .cloned()
            .unwrap_or_else(|| Generator::from_fn(DEFAULT_GENERATOR, crate::generators::text::text));
        Self {
            generators,
            default,
        }
    }

    /// The process-wide registry, built on first use.
    pub fn global() -> &'static GeneratorRegistry {
        static GLOBAL: OnceLock<GeneratorRegistry> = OnceLock::new();
        GLOBAL.get_or_init(GeneratorRegistry::builtin)
    }

    /// Start a builder seeded with the built-in generators.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder {
            generators: builtin_generators(),
            default_name: DEFAULT_GENERATOR.to_string(),
        }
    }

    /// Look up a generator by exact, case-sensitive name.
    ///
    /// Unknown names resolve to the default generator.
    pub fn resolve(&self, name: &str) -> Generator {
        match self.generators.get(name) {
            Some(generator) => generator.clone(),
            None => {
                debug!(
                    "No generator named '{}', using '{}'",
                    name,
                    self.default.name()
                );
                self.default.clone()
            }
        }
    }

    /// Look up a generator without falling back.
    pub fn get(&self, name: &str) -> Option<&Generator> {
        self.generators.get(name)
    }

    /// Whether a generator is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.generators.contains_key(name)
    }

    /// The fallback generator.
    pub fn default_generator(&self) -> &Generator {
        &self.default
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.generators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Builder for registries with extra or replacement capabilities.
#[derive(Debug)]
pub struct RegistryBuilder {
    generators: HashMap<String, Generator>,
    default_name: String,
}

impl RegistryBuilder {
    /// Start a builder with no generators at all.
    pub fn empty() -> Self {
        Self {
            generators: HashMap::new(),
            default_name: DEFAULT_GENERATOR.to_string(),
        }
    }

    /// Add a generator under its own name.
    pub fn register(mut self, generator: Generator) -> Result<Self, RegistryError> {
        let name = generator.name().to_string();
        if self.generators.contains_key(&name) {
            return Err(RegistryError::DuplicateGenerator(name));
        }
        self.generators.insert(name, generator);
        Ok(self)
    }

    /// Select the fallback generator by name.
    pub fn default_generator(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }

    /// Freeze the table.
    pub fn build(self) -> Result<GeneratorRegistry, RegistryError> {
        let default = self
            .generators
            .get(&self.default_name)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownDefault(self.default_name.clone()))?;

        Ok(GeneratorRegistry {
            generators: self.generators,
            default,
        })
    }
}

fn builtin_generators() -> HashMap<String, Generator> {
    providers()
        .iter()
        .flat_map(|provider| provider.generators.iter())
        .map(|builtin| {
            (
                builtin.name.to_string(),
                Generator::from_fn(builtin.name, builtin.generate),
            )
        })
        .collect()
}
