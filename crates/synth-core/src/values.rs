//! Generated output: per-field snapshots and per-copy records.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Rendered projection of one field, captured for one generated copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSnapshot {
    /// Field name
    pub name: String,
    /// Rendered text (`prefix + value + postfix`)
    pub value: String,
    /// Declared data type
    pub data_type: String,
    /// `(x0, y0, x2, y2)`
    pub bbox: (i64, i64, i64, i64),
}

/// One generated copy of a document: field name → snapshot.
///
/// Iteration follows field declaration order. Serializes as a JSON object
/// with keys in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntheticRecord {
    fields: Vec<FieldSnapshot>,
    /// Field name -> position in `fields`
    index: HashMap<String, usize>,
}

impl SyntheticRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Add a snapshot. A snapshot with an existing name replaces the earlier
    /// one in its original position.
    pub fn insert(&mut self, snapshot: FieldSnapshot) {
        match self.index.get(&snapshot.name) {
            Some(&position) => self.fields[position] = snapshot,
            None => {
                self.index.insert(snapshot.name.clone(), self.fields.len());
                self.fields.push(snapshot);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldSnapshot> {
        self.index.get(name).map(|&position| &self.fields[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Field names in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldSnapshot> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a SyntheticRecord {
    type Item = &'a FieldSnapshot;
    type IntoIter = std::slice::Iter<'a, FieldSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl IntoIterator for SyntheticRecord {
    type Item = FieldSnapshot;
    type IntoIter = std::vec::IntoIter<FieldSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl FromIterator<FieldSnapshot> for SyntheticRecord {
    fn from_iter<I: IntoIterator<Item = FieldSnapshot>>(iter: I) -> Self {
        let mut record = SyntheticRecord::new();
        for snapshot in iter {
            record.insert(snapshot);
        }
        record
    }
}

impl Serialize for SyntheticRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for snapshot in &self.fields {
            map.serialize_entry(&snapshot.name, snapshot)?;
        }
        map.end()
    }
}
