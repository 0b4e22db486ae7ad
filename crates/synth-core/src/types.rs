//! Canonical sub-value types of a document field.
//!
//! Each type accepts the loose literal shapes found in YAML/JSON field
//! definitions through its `Deserialize` impl:
//!
//! ```yaml
//! bbox: [10, 20, 110, 40]                        # positional
//! bbox: {x0: 10, y0: 20, x2: 110, y2: 40}        # keyed
//! data_type: postalcode                          # bare
//! data_type: {value: postalcode}                 # keyed
//! fontsize: 12
//! h_align: {value: 0.5}
//! ```
//!
//! Serialization always produces the compact form (bare scalars, keyed bbox).

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// ============================================================================
// Bounding Box
// ============================================================================

/// Placement of a field on the page: `(x0, y0)` to `(x2, y2)`.
///
/// No ordering is enforced between coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct BoundingBox {
    x0: i64,
    y0: i64,
    x2: i64,
    y2: i64,
}

impl BoundingBox {
    pub const fn new(x0: i64, y0: i64, x2: i64, y2: i64) -> Self {
        Self { x0, y0, x2, y2 }
    }

    /// The `(0, 0, 0, 0)` box.
    pub const fn empty() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    pub fn x0(&self) -> i64 {
        self.x0
    }

    pub fn y0(&self) -> i64 {
        self.y0
    }

    pub fn x2(&self) -> i64 {
        self.x2
    }

    pub fn y2(&self) -> i64 {
        self.y2
    }

    pub fn top_left(&self) -> (i64, i64) {
        (self.x0, self.y0)
    }

    pub fn bottom_right(&self) -> (i64, i64) {
        (self.x2, self.y2)
    }

    pub fn to_tuple(&self) -> (i64, i64, i64, i64) {
        (self.x0, self.y0, self.x2, self.y2)
    }
}

impl From<(i64, i64, i64, i64)> for BoundingBox {
    fn from((x0, y0, x2, y2): (i64, i64, i64, i64)) -> Self {
        Self::new(x0, y0, x2, y2)
    }
}

impl From<[i64; 4]> for BoundingBox {
    fn from([x0, y0, x2, y2]: [i64; 4]) -> Self {
        Self::new(x0, y0, x2, y2)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x0, self.y0, self.x2, self.y2)
    }
}

const BBOX_FIELDS: &[&str] = &["x0", "y0", "x2", "y2"];

impl<'de> Deserialize<'de> for BoundingBox {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BoundingBoxVisitor;

        impl<'de> Visitor<'de> for BoundingBoxVisitor {
            type Value = BoundingBox;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence of 4 integers or a map with x0, y0, x2, y2")
            }

            // Handle positional format: [x0, y0, x2, y2]
            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut coords = [0i64; 4];
                for (i, coord) in coords.iter_mut().enumerate() {
                    *coord = seq
                        .next_element()?
                        .ok_or_else(|| de::Error::invalid_length(i, &self))?;
                }
                if seq.next_element::<IgnoredAny>()?.is_some() {
                    let mut extra = 5;
                    while seq.next_element::<IgnoredAny>()?.is_some() {
                        extra += 1;
                    }
                    return Err(de::Error::invalid_length(extra, &self));
                }
                Ok(BoundingBox::from(coords))
            }

            // Handle keyed format: {x0: .., y0: .., x2: .., y2: ..}
            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut coords: [Option<i64>; 4] = [None; 4];

                while let Some(key) = map.next_key::<String>()? {
                    let slot = BBOX_FIELDS
                        .iter()
                        .position(|f| *f == key)
                        .ok_or_else(|| de::Error::unknown_field(&key, BBOX_FIELDS))?;
                    if coords[slot].is_some() {
                        return Err(de::Error::duplicate_field(BBOX_FIELDS[slot]));
                    }
                    coords[slot] = Some(map.next_value()?);
                }

                let mut resolved = [0i64; 4];
                for (slot, coord) in coords.iter().enumerate() {
                    resolved[slot] = coord.ok_or_else(|| de::Error::missing_field(BBOX_FIELDS[slot]))?;
                }
                Ok(BoundingBox::from(resolved))
            }
        }

        deserializer.deserialize_any(BoundingBoxVisitor)
    }
}

// ============================================================================
// Scalar Wrappers
// ============================================================================

/// Bare literal or `{value: literal}`.
#[derive(Deserialize)]
#[serde(untagged, expecting = "a bare value or a map with a single `value` key")]
enum Keyed<T> {
    Bare(T),
    Keyed { value: T },
}

impl<T> Keyed<T> {
    fn into_inner(self) -> T {
        match self {
            Keyed::Bare(value) | Keyed::Keyed { value } => value,
        }
    }
}

/// Semantic kind of value a field holds, used to pick its generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DataType(String);

impl DataType {
    /// Data type assigned when a field does not declare one.
    pub const DEFAULT: &'static str = "string";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DataType {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl From<&str> for DataType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DataType {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Keyed::<String>::deserialize(deserializer).map(|k| Self(k.into_inner()))
    }
}

/// Placement along one axis: 0 is start-aligned, 1 is end-aligned.
///
/// Values outside `[0, 1]` are accepted as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Alignment(pub f64);

impl Alignment {
    pub const START: Alignment = Alignment(0.0);
    pub const CENTER: Alignment = Alignment(0.5);
    pub const END: Alignment = Alignment(1.0);
}

impl<'de> Deserialize<'de> for Alignment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Keyed::<f64>::deserialize(deserializer).map(|k| Self(k.into_inner()))
    }
}

/// Spacing hint, not interpreted by generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Spacing(pub f64);

impl<'de> Deserialize<'de> for Spacing {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Keyed::<f64>::deserialize(deserializer).map(|k| Self(k.into_inner()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FontSize(pub f64);

impl FontSize {
    pub const DEFAULT: FontSize = FontSize(14.0);
}

impl Default for FontSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<'de> Deserialize<'de> for FontSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Keyed::<f64>::deserialize(deserializer).map(|k| Self(k.into_inner()))
    }
}

// ============================================================================
// Field Metadata
// ============================================================================

/// Open key-value attributes the core does not interpret.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMetadata(Map<String, Value>);

impl FieldMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Insert a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for FieldMetadata {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bbox_accessors() {
        let bbox = BoundingBox::new(1, 2, 3, 4);
        assert_eq!(bbox.to_tuple(), (1, 2, 3, 4));
        assert_eq!(bbox.top_left(), (1, 2));
        assert_eq!(bbox.bottom_right(), (3, 4));
        assert!(!bbox.is_empty());
        assert!(BoundingBox::default().is_empty());
    }

    #[test]
    fn test_bbox_from_sequence() {
        let bbox: BoundingBox = serde_json::from_value(json!([1, 2, 3, 4])).unwrap();
        assert_eq!(bbox.to_tuple(), (1, 2, 3, 4));
    }

    #[test]
    fn test_bbox_from_map() {
        let bbox: BoundingBox =
            serde_json::from_value(json!({"x0": 5, "y0": 6, "x2": 7, "y2": 8})).unwrap();
        assert_eq!(bbox, BoundingBox::new(5, 6, 7, 8));
    }

    #[test]
    fn test_bbox_from_yaml() {
        let bbox: BoundingBox = serde_yaml::from_str("[10, 20, 30, 40]").unwrap();
        assert_eq!(bbox.to_tuple(), (10, 20, 30, 40));
    }

    #[test]
    fn test_bbox_unordered_coordinates_accepted() {
        let bbox: BoundingBox = serde_json::from_value(json!([9, 9, 1, 1])).unwrap();
        assert_eq!(bbox.top_left(), (9, 9));
        assert_eq!(bbox.bottom_right(), (1, 1));
    }

    #[test]
    fn test_bbox_wrong_arity() {
        let short = serde_json::from_value::<BoundingBox>(json!([1, 2, 3]));
        assert!(short.unwrap_err().to_string().contains("invalid length 3"));

        let long = serde_json::from_value::<BoundingBox>(json!([1, 2, 3, 4, 5]));
        assert!(long.unwrap_err().to_string().contains("invalid length 5"));
    }

    #[test]
    fn test_bbox_rejects_bad_shapes() {
        assert!(serde_json::from_value::<BoundingBox>(json!("1,2,3,4")).is_err());
        assert!(serde_json::from_value::<BoundingBox>(json!([1, 2, 3, "4"])).is_err());
        assert!(serde_json::from_value::<BoundingBox>(json!([1.5, 2, 3, 4])).is_err());
        assert!(serde_json::from_value::<BoundingBox>(json!({"x0": 1, "y0": 2, "x2": 3})).is_err());
        assert!(
            serde_json::from_value::<BoundingBox>(json!({"x0": 1, "y0": 2, "x2": 3, "y2": 4, "z": 0}))
                .is_err()
        );
    }

    #[test]
    fn test_bbox_serializes_keyed() {
        let value = serde_json::to_value(BoundingBox::new(1, 2, 3, 4)).unwrap();
        assert_eq!(value, json!({"x0": 1, "y0": 2, "x2": 3, "y2": 4}));
    }

    #[test]
    fn test_data_type_shapes() {
        let bare: DataType = serde_json::from_value(json!("postalcode")).unwrap();
        let keyed: DataType = serde_json::from_value(json!({"value": "postalcode"})).unwrap();
        assert_eq!(bare, keyed);
        assert_eq!(bare.as_str(), "postalcode");
        assert!(serde_json::from_value::<DataType>(json!(12)).is_err());
        assert_eq!(DataType::default().as_str(), "string");
    }

    #[test]
    fn test_numeric_wrappers() {
        let size: FontSize = serde_json::from_value(json!(12)).unwrap();
        assert_eq!(size, FontSize(12.0));
        let align: Alignment = serde_json::from_value(json!({"value": 0.5})).unwrap();
        assert_eq!(align, Alignment::CENTER);
        let spacing: Spacing = serde_json::from_value(json!(2.5)).unwrap();
        assert_eq!(spacing, Spacing(2.5));
        assert!(serde_json::from_value::<Alignment>(json!("left")).is_err());
    }

    #[test]
    fn test_alignment_out_of_range_accepted() {
        let align: Alignment = serde_json::from_value(json!(3)).unwrap();
        assert_eq!(align, Alignment(3.0));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(FontSize::default(), FontSize(14.0));
        assert_eq!(Alignment::default(), Alignment(0.0));
        assert_eq!(Spacing::default(), Spacing(0.0));
    }

    #[test]
    fn test_metadata() {
        let mut metadata = FieldMetadata::new();
        assert!(metadata.insert("font", json!("Arial")).is_none());
        assert_eq!(metadata.get("font"), Some(&json!("Arial")));
        assert_eq!(metadata.insert("font", json!("Mono")), Some(json!("Arial")));
        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata.remove("font"), Some(json!("Mono")));
        assert!(metadata.is_empty());
    }
}
