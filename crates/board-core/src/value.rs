//! Property values, model snapshots, and patches.
//!
//! A component's model is plain structured data. Every editor reads one field
//! out of a [`Model`], and every committed edit travels upward as a
//! [`PropertyPatch`] until the sidebar applies it to the scene as one undoable
//! transaction.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::binding::Mapping;
use crate::fill::{FillValue, GradientValue};
use crate::property::OptionItem;
use crate::stops::ColorStop;

/// One field value as it appears in a model or a patch.
///
/// The untagged representation keeps the serialized board identical to the
/// plain-data document the rendering engine consumes: booleans, numbers and
/// strings stay bare, structured values stay plain objects/arrays. Variant
/// order matters for deserialization; anything unrecognized lands in
/// [`PropertyValue::Json`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    TextList(Vec<String>),
    ColorStops(Vec<ColorStop>),
    Options(Vec<OptionItem>),
    Mappings(Vec<Mapping>),
    Fill(FillValue),
    Gradient(GradientValue),
    Json(serde_json::Value),
}

impl PropertyValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Serializes any model-shaped value into a `PropertyValue`.
    pub fn encode<T: Serialize>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(json) => Self::Json(json),
            Err(_) => Self::Null,
        }
    }

    /// Re-interprets this value as `T` via its JSON form.
    pub fn decode<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_value(self.to_json()).ok()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_text_list(&self) -> Option<Vec<String>> {
        match self {
            Self::TextList(list) => Some(list.clone()),
            Self::Json(_) => self.decode(),
            _ => None,
        }
    }

    pub fn as_color_stops(&self) -> Option<Vec<ColorStop>> {
        match self {
            Self::ColorStops(stops) => Some(stops.clone()),
            Self::Json(_) => self.decode(),
            _ => None,
        }
    }

    pub fn as_options(&self) -> Option<Vec<OptionItem>> {
        match self {
            Self::Options(items) => Some(items.clone()),
            Self::Json(_) => self.decode(),
            _ => None,
        }
    }

    pub fn as_mappings(&self) -> Vec<Mapping> {
        match self {
            Self::Mappings(mappings) => mappings.clone(),
            Self::Json(_) => self.decode().unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Interprets this value as a fill, following the wire convention: a bare
    /// string is a solid fill, the empty string (or null) is no fill at all.
    pub fn as_fill(&self) -> FillValue {
        match self {
            Self::Null => FillValue::None,
            Self::Text(s) if s.is_empty() => FillValue::None,
            Self::Text(s) => FillValue::Solid(s.clone()),
            Self::Fill(fill) => fill.clone(),
            Self::Gradient(gradient) => FillValue::Gradient(gradient.clone()),
            Self::Json(_) => self.decode().unwrap_or(FillValue::None),
            _ => FillValue::None,
        }
    }
}

impl From<FillValue> for PropertyValue {
    fn from(fill: FillValue) -> Self {
        match fill {
            FillValue::None => Self::Text(String::new()),
            FillValue::Solid(color) => Self::Text(color),
            other => Self::Fill(other),
        }
    }
}

/// An entity's model snapshot: field name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Model(BTreeMap<String, PropertyValue>);

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.0.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: PropertyValue) {
        self.0.insert(name.into(), value);
    }

    pub fn remove(&mut self, name: &str) -> Option<PropertyValue> {
        self.0.remove(name)
    }

    /// Merges every entry of `patch` into this model.
    pub fn merge(&mut self, patch: &PropertyPatch) {
        for (name, value) in patch.iter() {
            self.0.insert(name.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropertyValue)> {
        self.0.iter()
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(PropertyValue::as_f64)
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(PropertyValue::as_str)
    }

    pub fn boolean(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(PropertyValue::as_bool)
    }
}

impl FromIterator<(String, PropertyValue)> for Model {
    fn from_iter<I: IntoIterator<Item = (String, PropertyValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One committed edit: field name to new value. Ephemeral; built per user
/// action and consumed immediately by the patch applier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyPatch(BTreeMap<String, PropertyValue>);

impl PropertyPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(name: impl Into<String>, value: PropertyValue) -> Self {
        let mut patch = Self::default();
        patch.0.insert(name.into(), value);
        patch
    }

    pub fn insert(&mut self, name: impl Into<String>, value: PropertyValue) {
        self.0.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropertyValue)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_values_round_trip_as_bare_json() {
        let json = serde_json::to_string(&PropertyValue::Number(1.5)).unwrap();
        assert_eq!(json, "1.5");
        let back: PropertyValue = serde_json::from_str("true").unwrap();
        assert_eq!(back, PropertyValue::Bool(true));
        let back: PropertyValue = serde_json::from_str("\"#ff0000\"").unwrap();
        assert_eq!(back, PropertyValue::text("#ff0000"));
    }

    #[test]
    fn color_stop_arrays_deserialize_structurally() {
        let back: PropertyValue =
            serde_json::from_str(r##"[{"position":0.0,"color":"#000"}]"##).unwrap();
        assert_eq!(
            back,
            PropertyValue::ColorStops(vec![ColorStop {
                position: 0.0,
                color: "#000".to_string()
            }])
        );
    }

    #[test]
    fn fill_objects_deserialize_with_their_discriminant() {
        let back: PropertyValue = serde_json::from_str(
            r#"{"type":"gradient","gradientType":"radial","colorStops":[],"rotation":0.0}"#,
        )
        .unwrap();
        let FillValue::Gradient(gradient) = back.as_fill() else {
            panic!("expected gradient fill, got {back:?}");
        };
        assert_eq!(gradient.kind, crate::fill::GradientKind::Radial);
    }

    #[test]
    fn model_merges_patches_by_key() {
        let mut model = Model::new();
        model.set("width", PropertyValue::Number(100.0));
        model.set("hidden", PropertyValue::Bool(false));

        let patch = PropertyPatch::single("hidden", PropertyValue::Bool(true));
        model.merge(&patch);

        assert_eq!(model.boolean("hidden"), Some(true));
        assert_eq!(model.number("width"), Some(100.0));
    }

    #[test]
    fn bare_string_reads_as_solid_fill() {
        assert_eq!(
            PropertyValue::text("#123456").as_fill(),
            FillValue::Solid("#123456".to_string())
        );
        assert_eq!(PropertyValue::text("").as_fill(), FillValue::None);
        assert_eq!(PropertyValue::Null.as_fill(), FillValue::None);
    }
}
