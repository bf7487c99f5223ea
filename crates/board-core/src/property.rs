//! Property descriptors, the closed editor-type enumeration, per-type
//! defaults, and the host-supplied editor registry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::value::PropertyValue;

/// The closed set of editor types a descriptor may name.
///
/// Serde names follow the descriptor metadata shipped by component natures
/// (`solidcolor-stops`, `editortable`, ...), so descriptors deserialize
/// straight out of the scene's component-type catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Legend,
    Number,
    Angle,
    String,
    Textarea,
    Checkbox,
    Select,
    Color,
    #[serde(rename = "solidcolor-stops")]
    SolidColorStops,
    #[serde(rename = "gradientcolor-stops")]
    GradientColorStops,
    #[serde(rename = "multiplecolor")]
    MultipleColor,
    #[serde(rename = "editortable")]
    EditorTable,
    #[serde(rename = "imageselector")]
    ImageSelector,
    Options,
    Date,
}

impl PropertyType {
    pub const ALL: [PropertyType; 15] = [
        Self::Legend,
        Self::Number,
        Self::Angle,
        Self::String,
        Self::Textarea,
        Self::Checkbox,
        Self::Select,
        Self::Color,
        Self::SolidColorStops,
        Self::GradientColorStops,
        Self::MultipleColor,
        Self::EditorTable,
        Self::ImageSelector,
        Self::Options,
        Self::Date,
    ];
}

/// Value used when a model has nothing under a descriptor's name.
pub fn default_value(kind: PropertyType) -> PropertyValue {
    match kind {
        PropertyType::Number | PropertyType::Angle => PropertyValue::Number(0.0),
        PropertyType::Checkbox => PropertyValue::Bool(false),
        PropertyType::Color => PropertyValue::text("#000000"),
        PropertyType::Legend
        | PropertyType::String
        | PropertyType::Textarea
        | PropertyType::Select
        | PropertyType::ImageSelector => PropertyValue::text(""),
        PropertyType::SolidColorStops
        | PropertyType::GradientColorStops
        | PropertyType::MultipleColor
        | PropertyType::EditorTable
        | PropertyType::Options
        | PropertyType::Date => PropertyValue::Null,
    }
}

/// One choice of a `select` descriptor. Natures ship both bare strings and
/// `{value, display}` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionSpec {
    Plain(String),
    Labelled { value: String, display: String },
}

impl OptionSpec {
    pub fn value(&self) -> &str {
        match self {
            Self::Plain(value) => value,
            Self::Labelled { value, .. } => value,
        }
    }

    pub fn display(&self) -> &str {
        match self {
            Self::Plain(value) => value,
            Self::Labelled { display, .. } => display,
        }
    }
}

/// One entry of an `options` property value (the list the options editor
/// edits, not the choices of a `select` descriptor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    pub text: String,
    pub value: String,
}

/// Declares one editable field of a component's nature. Immutable once
/// constructed; supplied by the scene's component-type metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, kind: PropertyType, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            label: label.into(),
            options: Vec::new(),
            min: None,
            max: None,
            placeholder: None,
        }
    }
}

/// Editor-type to editor-implementation map, supplied top-down by the host.
///
/// Lookups fail soft: a descriptor whose type is absent from the registry is
/// skipped by the builder, never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorRegistry {
    editors: HashMap<PropertyType, String>,
}

impl EditorRegistry {
    pub fn empty() -> Self {
        Self {
            editors: HashMap::new(),
        }
    }

    /// The registry covering every built-in editor type.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        for kind in PropertyType::ALL {
            registry.register(kind, standard_editor_id(kind));
        }
        registry
    }

    pub fn register(&mut self, kind: PropertyType, editor: impl Into<String>) {
        self.editors.insert(kind, editor.into());
    }

    pub fn lookup(&self, kind: PropertyType) -> Option<&str> {
        self.editors.get(&kind).map(String::as_str)
    }
}

impl Default for EditorRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_editor_id(kind: PropertyType) -> &'static str {
    match kind {
        PropertyType::Legend => "property-editor-legend",
        PropertyType::Number => "property-editor-number",
        PropertyType::Angle => "property-editor-angle",
        PropertyType::String => "property-editor-string",
        PropertyType::Textarea => "property-editor-textarea",
        PropertyType::Checkbox => "property-editor-checkbox",
        PropertyType::Select => "property-editor-select",
        PropertyType::Color => "property-editor-color",
        PropertyType::SolidColorStops => "property-editor-solid-colorstops",
        PropertyType::GradientColorStops => "property-editor-gradient-colorstops",
        PropertyType::MultipleColor => "property-editor-multiple-color",
        PropertyType::EditorTable => "property-editor-table",
        PropertyType::ImageSelector => "property-editor-image-selector",
        PropertyType::Options => "property-editor-options",
        PropertyType::Date => "property-editor-date",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_types_use_catalog_names() {
        assert_eq!(
            serde_json::to_string(&PropertyType::SolidColorStops).unwrap(),
            "\"solidcolor-stops\""
        );
        assert_eq!(
            serde_json::from_str::<PropertyType>("\"editortable\"").unwrap(),
            PropertyType::EditorTable
        );
        assert_eq!(
            serde_json::from_str::<PropertyType>("\"checkbox\"").unwrap(),
            PropertyType::Checkbox
        );
    }

    #[test]
    fn defaults_follow_the_table() {
        assert_eq!(default_value(PropertyType::Number), PropertyValue::Number(0.0));
        assert_eq!(default_value(PropertyType::Checkbox), PropertyValue::Bool(false));
        assert_eq!(default_value(PropertyType::Color), PropertyValue::text("#000000"));
        assert_eq!(default_value(PropertyType::Options), PropertyValue::Null);
        assert_eq!(default_value(PropertyType::String), PropertyValue::text(""));
    }

    #[test]
    fn option_specs_accept_both_forms() {
        let specs: Vec<OptionSpec> =
            serde_json::from_str(r#"["linear", {"value": "radial", "display": "Radial"}]"#)
                .unwrap();
        assert_eq!(specs[0].value(), "linear");
        assert_eq!(specs[0].display(), "linear");
        assert_eq!(specs[1].value(), "radial");
        assert_eq!(specs[1].display(), "Radial");
    }

    #[test]
    fn standard_registry_covers_every_type() {
        let registry = EditorRegistry::standard();
        for kind in PropertyType::ALL {
            assert!(registry.lookup(kind).is_some(), "missing editor for {kind:?}");
        }
    }

    #[test]
    fn empty_registry_fails_soft() {
        assert_eq!(EditorRegistry::empty().lookup(PropertyType::Color), None);
    }
}
