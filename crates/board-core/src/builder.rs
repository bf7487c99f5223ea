//! The schema-driven field builder.
//!
//! Given a descriptor array and a model, produces the exact list of editor
//! fields to render, each bound to its current (or default) value. One field
//! commit funnels back through [`commit`] into a single-key patch.

use crate::property::{EditorRegistry, PropertyDescriptor, default_value};
use crate::value::{Model, PropertyPatch, PropertyValue};

/// One rendered editor: its descriptor, the registered editor implementation,
/// and the bound value.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundField {
    pub descriptor: PropertyDescriptor,
    pub editor: String,
    pub value: PropertyValue,
}

/// Builds the field list for a descriptor array.
///
/// The result mirrors the descriptor array exactly, except that descriptors
/// whose type has no registered editor are skipped with a warning; one
/// malformed descriptor never takes the grid down. A model value that is
/// absent (or null) binds the type's default instead.
pub fn build_fields(
    registry: &EditorRegistry,
    props: &[PropertyDescriptor],
    model: &Model,
) -> Vec<BoundField> {
    props
        .iter()
        .filter_map(|prop| {
            let Some(editor) = registry.lookup(prop.kind) else {
                tracing::warn!(name = %prop.name, kind = ?prop.kind, "property editor not defined");
                return None;
            };
            let value = match model.get(&prop.name) {
                Some(value) if !value.is_null() => value.clone(),
                _ => default_value(prop.kind),
            };
            Some(BoundField {
                descriptor: prop.clone(),
                editor: editor.to_string(),
                value,
            })
        })
        .collect()
}

/// Applies one field commit to the model in place and returns the patch the
/// `property-change` event carries.
pub fn commit(model: &mut Model, name: &str, value: PropertyValue) -> PropertyPatch {
    model.set(name, value.clone());
    PropertyPatch::single(name, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::PropertyType;

    fn descriptors() -> Vec<PropertyDescriptor> {
        vec![
            PropertyDescriptor::new("started", PropertyType::Checkbox, "Started"),
            PropertyDescriptor::new("value", PropertyType::Number, "Value"),
            PropertyDescriptor::new("fontColor", PropertyType::Color, "Font Color"),
        ]
    }

    #[test]
    fn missing_fields_bind_their_type_default() {
        let registry = EditorRegistry::standard();
        let fields = build_fields(&registry, &descriptors(), &Model::new());
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].value, PropertyValue::Bool(false));
        assert_eq!(fields[1].value, PropertyValue::Number(0.0));
        assert_eq!(fields[2].value, PropertyValue::text("#000000"));
    }

    #[test]
    fn present_fields_bind_the_model_value() {
        let registry = EditorRegistry::standard();
        let mut model = Model::new();
        model.set("value", PropertyValue::Number(42.0));
        let fields = build_fields(&registry, &descriptors(), &model);
        assert_eq!(fields[1].value, PropertyValue::Number(42.0));
    }

    #[test]
    fn unregistered_types_are_skipped_not_fatal() {
        let mut registry = EditorRegistry::empty();
        registry.register(PropertyType::Number, "property-editor-number");
        let fields = build_fields(&registry, &descriptors(), &Model::new());
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].descriptor.name, "value");
    }

    #[test]
    fn the_field_set_mirrors_the_descriptor_array() {
        let registry = EditorRegistry::standard();
        let mut props = descriptors();
        let fields = build_fields(&registry, &props, &Model::new());
        assert_eq!(fields.len(), props.len());

        props.truncate(1);
        let rebuilt = build_fields(&registry, &props, &Model::new());
        assert_eq!(rebuilt.len(), 1);
        assert_eq!(rebuilt[0].descriptor.name, "started");
    }

    #[test]
    fn commit_updates_the_model_and_returns_a_single_key_patch() {
        let mut model = Model::new();
        let patch = commit(&mut model, "hidden", PropertyValue::Bool(true));
        assert_eq!(model.boolean("hidden"), Some(true));
        assert_eq!(patch.len(), 1);
        assert_eq!(patch.get("hidden"), Some(&PropertyValue::Bool(true)));
    }
}
