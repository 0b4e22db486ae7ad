//! The document aggregate: config metadata plus an ordered field list.

use crate::error::DocumentError;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use synth_config::{IntoConfigSource, RawConfig};
use synth_core::coerce::{coerce, coerce_text};
use synth_core::error::describe;
use synth_core::{CanonicalField, SchemaError, SyntheticDocument, SyntheticRecord};
use synth_registry::GeneratorRegistry;
use tracing::{info, warn};

/// Copies produced when neither the caller nor the config asks for a count.
pub const DEFAULT_COPIES: usize = 1;

/// Everything in a document config except `fields`.
///
/// `name`, `copies` and `seed` are validated when the document is created;
/// other keys are kept as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentMetadata {
    entries: RawConfig,
    name: Option<String>,
    copies: Option<usize>,
    seed: Option<u64>,
}

impl DocumentMetadata {
    pub fn from_config(entries: RawConfig) -> Result<Self, SchemaError> {
        let name = match entries.get("name") {
            None | Some(Value::Null) => None,
            Some(value) => Some(coerce_text("name", value)?),
        };
        let copies = optional(&entries, "copies")?;
        let seed = optional(&entries, "seed")?;

        Ok(Self {
            entries,
            name,
            copies,
            seed,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Requested number of copies, if the config names one.
    pub fn copies(&self) -> Option<usize> {
        self.copies
    }

    /// RNG seed for reproducible output, if the config names one.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_map(&self) -> &RawConfig {
        &self.entries
    }
}

fn optional<T: serde::de::DeserializeOwned>(
    entries: &RawConfig,
    key: &str,
) -> Result<Option<T>, SchemaError> {
    match entries.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => coerce(key, value).map(Some),
    }
}

/// A loaded document: metadata and canonical fields in declaration order.
#[derive(Debug, Clone)]
pub struct Document {
    metadata: DocumentMetadata,
    fields: Vec<CanonicalField>,
}

impl Document {
    /// Load `source` and build a document, binding generators through the
    /// global registry.
    pub fn create_document(source: impl IntoConfigSource) -> Result<Self, DocumentError> {
        Self::create_document_with(source, GeneratorRegistry::global())
    }

    /// Load `source` and build a document, binding generators through `registry`.
    ///
    /// A missing or `null` `fields` key gives an empty document.
    pub fn create_document_with(
        source: impl IntoConfigSource,
        registry: &GeneratorRegistry,
    ) -> Result<Self, DocumentError> {
        let mut config = synth_config::load_config(source)?;

        let definitions = match config.remove("fields") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(definitions)) => definitions,
            Some(other) => {
                return Err(DocumentError::InvalidMetadata(SchemaError::invalid(
                    "fields",
                    format!(
                        "expected a sequence of field definitions, found {}",
                        describe(&other)
                    ),
                )))
            }
        };

        let fields = definitions
            .iter()
            .enumerate()
            .map(|(index, definition)| {
                CanonicalField::from_definition_with(definition, registry)
                    .map_err(|source| DocumentError::InvalidField { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let metadata =
            DocumentMetadata::from_config(config).map_err(DocumentError::InvalidMetadata)?;
        let document = Self::new(metadata, fields);

        info!(
            "Created document '{}' with {} fields",
            document.display_name(),
            document.fields.len()
        );
        Ok(document)
    }

    /// Assemble a document from already-built parts.
    pub fn new(metadata: DocumentMetadata, fields: Vec<CanonicalField>) -> Self {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                warn!(
                    "Duplicate field name '{}': later values replace earlier ones in records",
                    field.name
                );
            }
        }
        Self { metadata, fields }
    }

    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    pub fn fields(&self) -> &[CanonicalField] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut [CanonicalField] {
        &mut self.fields
    }

    /// First field with the given name.
    pub fn field(&self, name: &str) -> Option<&CanonicalField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut CanonicalField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn name(&self) -> Option<&str> {
        self.metadata.name()
    }

    fn display_name(&self) -> &str {
        self.name().unwrap_or("<unnamed>")
    }

    /// Copies to produce: `requested`, else the config's `copies`, else 1.
    pub fn resolve_copies(&self, requested: Option<usize>) -> usize {
        requested
            .or(self.metadata.copies())
            .unwrap_or(DEFAULT_COPIES)
    }

    /// Record generator over this document's fields.
    ///
    /// `seed` overrides the config's `seed`; with neither the RNG is seeded
    /// from entropy.
    pub fn synthesizer(&mut self, seed: Option<u64>) -> SyntheticDocument<'_> {
        let seed = seed.or(self.metadata.seed());
        let generator = SyntheticDocument::new(&mut self.fields);
        match seed {
            Some(seed) => generator.with_seed(seed),
            None => generator,
        }
    }

    /// Generate records.
    ///
    /// Uses `copies`, else the config's `copies`, else 1. Fails on the first
    /// generator error and returns no records.
    pub fn synthesize_data(
        &mut self,
        copies: Option<usize>,
    ) -> Result<Vec<SyntheticRecord>, DocumentError> {
        self.synthesize_data_seeded(copies, None)
    }

    /// [`Document::synthesize_data`] with an explicit seed override.
    pub fn synthesize_data_seeded(
        &mut self,
        copies: Option<usize>,
        seed: Option<u64>,
    ) -> Result<Vec<SyntheticRecord>, DocumentError> {
        let copies = self.resolve_copies(copies);
        Ok(self.synthesizer(seed).synthesize_data(copies)?)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Fields count: {}",
            self.display_name(),
            self.fields.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use synth_registry::{GenerationError, Generator};

    fn invoice() -> Value {
        json!({
            "name": "Invoice",
            "copies": 2,
            "author": "billing",
            "fields": [
                {"name": "id", "data_type": "hexadecimal_string"},
                {"name": "customer", "data_type": "name", "prefix": "Bill to: "},
                {"name": "total", "data_type": "pricetag", "bbox": [400, 700, 560, 720]}
            ]
        })
    }

    #[test]
    fn test_create_from_mapping() {
        let document = Document::create_document(invoice()).unwrap();

        assert_eq!(document.name(), Some("Invoice"));
        assert_eq!(document.fields().len(), 3);
        assert_eq!(document.metadata().copies(), Some(2));
        assert_eq!(document.metadata().get("author"), Some(&json!("billing")));
        assert!(document.metadata().get("fields").is_none());
        assert_eq!(
            document.field("total").unwrap().bbox.to_tuple(),
            (400, 700, 560, 720)
        );
    }

    #[test]
    fn test_display() {
        let document = Document::create_document(invoice()).unwrap();
        assert_eq!(document.to_string(), "Invoice | Fields count: 3");

        let unnamed = Document::create_document(json!({"fields": []})).unwrap();
        assert_eq!(unnamed.to_string(), "<unnamed> | Fields count: 0");
    }

    #[test]
    fn test_missing_or_null_fields() {
        let document = Document::create_document(json!({"name": "Blank"})).unwrap();
        assert!(document.fields().is_empty());

        let document = Document::create_document(json!({"name": "Blank", "fields": null})).unwrap();
        assert!(document.fields().is_empty());
    }

    #[test]
    fn test_fields_must_be_sequence() {
        let err = Document::create_document(json!({"fields": {"name": "id"}})).unwrap_err();
        assert!(err.is_invalid_schema());
        assert!(matches!(err, DocumentError::InvalidMetadata(_)));
    }

    #[test]
    fn test_invalid_field_reports_index() {
        let err = Document::create_document(json!({
            "fields": [{"name": "ok"}, {"data_type": "name"}]
        }))
        .unwrap_err();

        match err {
            DocumentError::InvalidField { index, source } => {
                assert_eq!(index, 1);
                assert_eq!(source, SchemaError::MissingName);
            }
            other => panic!("Expected InvalidField, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_copies() {
        for copies in [json!(-1), json!("two"), json!(1.5)] {
            let err = Document::create_document(json!({"copies": copies})).unwrap_err();
            assert!(matches!(err, DocumentError::InvalidMetadata(_)));
        }
    }

    #[test]
    fn test_unsupported_source() {
        let err = Document::create_document("invoice.txt").unwrap_err();
        assert!(err.is_unsupported_source());

        let err = Document::create_document(json!(42)).unwrap_err();
        assert!(err.is_unsupported_source());
    }

    #[test]
    fn test_copies_resolution() {
        let mut document = Document::create_document(invoice()).unwrap();
        assert_eq!(document.synthesize_data(None).unwrap().len(), 2);
        assert_eq!(document.synthesize_data(Some(5)).unwrap().len(), 5);
        assert!(document.synthesize_data(Some(0)).unwrap().is_empty());

        let mut document = Document::create_document(json!({"fields": [{"name": "a"}]})).unwrap();
        assert_eq!(document.synthesize_data(None).unwrap().len(), DEFAULT_COPIES);
    }

    #[test]
    fn test_metadata_seed_is_deterministic() {
        let mut config = invoice();
        config["seed"] = json!(1234);

        let mut first = Document::create_document(config.clone()).unwrap();
        let mut second = Document::create_document(config).unwrap();
        assert_eq!(
            first.synthesize_data(None).unwrap(),
            second.synthesize_data(None).unwrap()
        );
    }

    #[test]
    fn test_explicit_seed_overrides_metadata() {
        let mut config = invoice();
        config["seed"] = json!(1);

        let mut from_metadata = Document::create_document(config.clone()).unwrap();
        let mut overridden = Document::create_document(config).unwrap();
        let mut plain = Document::create_document(invoice()).unwrap();

        let expected = plain.synthesize_data_seeded(Some(3), Some(99)).unwrap();
        assert_eq!(
            overridden.synthesize_data_seeded(Some(3), Some(99)).unwrap(),
            expected
        );
        assert_ne!(from_metadata.synthesize_data(Some(3)).unwrap(), expected);
    }

    #[test]
    fn test_custom_registry() {
        let registry = GeneratorRegistry::builder()
            .register(Generator::new("invoice_number", |_| Ok("INV-0001".to_string())))
            .unwrap()
            .build()
            .unwrap();
        let mut document = Document::create_document_with(
            json!({"fields": [{"name": "number", "data_type": "invoice_number"}]}),
            &registry,
        )
        .unwrap();

        let records = document.synthesize_data(Some(1)).unwrap();
        assert_eq!(records[0].get("number").unwrap().value, "INV-0001");
    }

    #[test]
    fn test_generation_failure() {
        let registry = GeneratorRegistry::builder()
            .register(Generator::new("down", |_| {
                Err(GenerationError::failed("down", "service unavailable"))
            }))
            .unwrap()
            .build()
            .unwrap();
        let mut document = Document::create_document_with(
            json!({"fields": [{"name": "a", "data_type": "down"}]}),
            &registry,
        )
        .unwrap();

        let err = document.synthesize_data(Some(3)).unwrap_err();
        assert!(matches!(err, DocumentError::Generation(_)));
    }

    #[test]
    fn test_field_mut() {
        let mut document = Document::create_document(invoice()).unwrap();
        document
            .field_mut("customer")
            .unwrap()
            .set("postfix", json!(" Ltd"))
            .unwrap();

        let records = document.synthesize_data(Some(1)).unwrap();
        assert!(records[0].get("customer").unwrap().value.ends_with(" Ltd"));
    }
}
