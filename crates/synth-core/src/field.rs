//! Canonical document fields.
//!
//! A [`CanonicalField`] is built once from a loosely-typed definition (or a
//! [`FieldBuilder`]), binds a generator from the registry at that moment, and
//! is then synthesized repeatedly: each call replaces `value` with a fresh
//! generated string.

use crate::coerce::{
    attribute_or_default, coerce_flag, coerce_name, coerce_nullable, coerce_text, text_or_default,
};
use crate::error::{describe, SchemaError};
use crate::types::{Alignment, BoundingBox, DataType, FieldMetadata, FontSize, Spacing};
use crate::values::FieldSnapshot;
use rand::RngCore;
use serde_json::{json, Value};
use std::fmt;
use synth_registry::{GenerationError, Generator, GeneratorRegistry};
use tracing::trace;

/// Every fixed attribute a field definition may carry.
pub const FIELD_ATTRIBUTES: &[&str] = &[
    "name",
    "prefix",
    "postfix",
    "value",
    "bbox",
    "data_type",
    "multiline",
    "fontsize",
    "h_align",
    "v_align",
    "spacing",
    "metadata",
];

/// Fully typed representation of one document field.
///
/// The generator is resolved from `data_type` when the field is built.
/// Assigning a new `data_type` afterwards does not change the generator;
/// call [`CanonicalField::rebind`] to re-resolve it.
#[derive(Debug, Clone)]
pub struct CanonicalField {
    pub name: String,
    pub prefix: String,
    pub postfix: String,
    pub value: String,
    pub bbox: BoundingBox,
    pub data_type: DataType,
    pub multiline: bool,
    pub fontsize: FontSize,
    pub h_align: Alignment,
    pub v_align: Alignment,
    pub spacing: Spacing,
    pub metadata: FieldMetadata,
    generator: Generator,
}

impl CanonicalField {
    /// A field with every attribute defaulted, bound through the global registry.
    pub fn new(name: impl Into<String>) -> Self {
        Self::builder(name).build()
    }

    pub fn builder(name: impl Into<String>) -> FieldBuilder {
        FieldBuilder::new(name)
    }

    /// Build a field from a loose definition using the global registry.
    pub fn from_definition(definition: &Value) -> Result<Self, SchemaError> {
        Self::from_definition_with(definition, GeneratorRegistry::global())
    }

    /// Build a field from a loose definition, binding through `registry`.
    ///
    /// The definition must be a mapping with a non-empty `name`; every other
    /// key must be one of [`FIELD_ATTRIBUTES`].
    pub fn from_definition_with(
        definition: &Value,
        registry: &GeneratorRegistry,
    ) -> Result<Self, SchemaError> {
        let entry = definition
            .as_object()
            .ok_or_else(|| SchemaError::NotAMapping(describe(definition)))?;

        if let Some(unknown) = entry
            .keys()
            .find(|key| !FIELD_ATTRIBUTES.contains(&key.as_str()))
        {
            return Err(SchemaError::UnknownAttribute(unknown.clone()));
        }

        let name = match entry.get("name") {
            Some(value) => coerce_name(value)?,
            None => return Err(SchemaError::MissingName),
        };

        let multiline = match entry.get("multiline") {
            Some(value) => coerce_flag("multiline", value)?,
            None => false,
        };

        let builder = FieldBuilder {
            name,
            prefix: text_or_default(entry, "prefix")?,
            postfix: text_or_default(entry, "postfix")?,
            value: text_or_default(entry, "value")?,
            bbox: attribute_or_default(entry, "bbox")?,
            data_type: attribute_or_default(entry, "data_type")?,
            multiline,
            fontsize: attribute_or_default(entry, "fontsize")?,
            h_align: attribute_or_default(entry, "h_align")?,
            v_align: attribute_or_default(entry, "v_align")?,
            spacing: attribute_or_default(entry, "spacing")?,
            metadata: attribute_or_default(entry, "metadata")?,
        };

        Ok(builder.build_with(registry))
    }

    /// `prefix + value + postfix`.
    pub fn render_text(&self) -> String {
        let mut text =
            String::with_capacity(self.prefix.len() + self.value.len() + self.postfix.len());
        text.push_str(&self.prefix);
        text.push_str(&self.value);
        text.push_str(&self.postfix);
        text
    }

    /// Replace `value` with a fresh value from the bound generator.
    pub fn synthesize(&mut self) -> Result<(), GenerationError> {
        self.synthesize_with(&mut rand::thread_rng())
    }

    /// Replace `value` using a caller-supplied RNG.
    ///
    /// On failure `value` is left untouched.
    pub fn synthesize_with(&mut self, rng: &mut dyn RngCore) -> Result<(), GenerationError> {
        self.value = self.generator.generate(rng)?;
        trace!(field = %self.name, generator = self.generator.name(), "Synthesized field");
        Ok(())
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            name: self.name.clone(),
            value: self.render_text(),
            data_type: self.data_type.as_str().to_string(),
            bbox: self.bbox.to_tuple(),
        }
    }

    /// The generator bound at construction (or the last [`rebind`](Self::rebind)).
    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    /// Re-resolve the generator from the current `data_type`.
    pub fn rebind(&mut self, registry: &GeneratorRegistry) {
        self.generator = registry.resolve(self.data_type.as_str());
    }

    /// Read an attribute by name, falling back to metadata.
    pub fn get(&self, attribute: &str) -> Option<Value> {
        let value = match attribute {
            "name" => json!(self.name),
            "prefix" => json!(self.prefix),
            "postfix" => json!(self.postfix),
            "value" => json!(self.value),
            "bbox" => json!(self.bbox),
            "data_type" => json!(self.data_type),
            "multiline" => json!(self.multiline),
            "fontsize" => json!(self.fontsize),
            "h_align" => json!(self.h_align),
            "v_align" => json!(self.v_align),
            "spacing" => json!(self.spacing),
            "metadata" => json!(self.metadata),
            key => return self.metadata.get(key).cloned(),
        };
        Some(value)
    }

    /// Write an attribute by name, falling back to metadata.
    ///
    /// Fixed attributes are coerced with the same rules as construction;
    /// `null` resets them to their default. The generator is not re-resolved
    /// when `data_type` changes.
    pub fn set(&mut self, attribute: &str, value: Value) -> Result<(), SchemaError> {
        match attribute {
            "name" => self.name = coerce_name(&value)?,
            "prefix" => self.prefix = coerce_text(attribute, &value)?,
            "postfix" => self.postfix = coerce_text(attribute, &value)?,
            "value" => self.value = coerce_text(attribute, &value)?,
            "bbox" => self.bbox = coerce_nullable(attribute, &value)?,
            "data_type" => self.data_type = coerce_nullable(attribute, &value)?,
            "multiline" => self.multiline = coerce_flag(attribute, &value)?,
            "fontsize" => self.fontsize = coerce_nullable(attribute, &value)?,
            "h_align" => self.h_align = coerce_nullable(attribute, &value)?,
            "v_align" => self.v_align = coerce_nullable(attribute, &value)?,
            "spacing" => self.spacing = coerce_nullable(attribute, &value)?,
            "metadata" => self.metadata = coerce_nullable(attribute, &value)?,
            key => {
                self.metadata.insert(key, value);
            }
        }
        Ok(())
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.data_type)
    }
}

/// Typed construction of a [`CanonicalField`].
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    name: String,
    prefix: String,
    postfix: String,
    value: String,
    bbox: BoundingBox,
    data_type: DataType,
    multiline: bool,
    fontsize: FontSize,
    h_align: Alignment,
    v_align: Alignment,
    spacing: Spacing,
    metadata: FieldMetadata,
}

impl FieldBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: String::new(),
            postfix: String::new(),
            value: String::new(),
            bbox: BoundingBox::empty(),
            data_type: DataType::default(),
            multiline: false,
            fontsize: FontSize::default(),
            h_align: Alignment::default(),
            v_align: Alignment::default(),
            spacing: Spacing::default(),
            metadata: FieldMetadata::default(),
        }
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn postfix(mut self, postfix: impl Into<String>) -> Self {
        self.postfix = postfix.into();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn bbox(mut self, bbox: impl Into<BoundingBox>) -> Self {
        self.bbox = bbox.into();
        self
    }

    pub fn data_type(mut self, data_type: impl Into<DataType>) -> Self {
        self.data_type = data_type.into();
        self
    }

    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    pub fn fontsize(mut self, fontsize: FontSize) -> Self {
        self.fontsize = fontsize;
        self
    }

    pub fn h_align(mut self, h_align: Alignment) -> Self {
        self.h_align = h_align;
        self
    }

    pub fn v_align(mut self, v_align: Alignment) -> Self {
        self.v_align = v_align;
        self
    }

    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn metadata(mut self, metadata: FieldMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Finish the field, binding through the global registry.
    pub fn build(self) -> CanonicalField {
        self.build_with(GeneratorRegistry::global())
    }

    pub fn build_with(self, registry: &GeneratorRegistry) -> CanonicalField {
        let generator = registry.resolve(self.data_type.as_str());
        CanonicalField {
            name: self.name,
            prefix: self.prefix,
            postfix: self.postfix,
            value: self.value,
            bbox: self.bbox,
            data_type: self.data_type,
            multiline: self.multiline,
            fontsize: self.fontsize,
            h_align: self.h_align,
            v_align: self.v_align,
            spacing: self.spacing,
            metadata: self.metadata,
            generator,
        }
    }
}
