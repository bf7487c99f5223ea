//! Specific-properties panel: the schema-driven grid over the selection's
//! nature.

use board_core::table::{BorderCommand, TableOperation};
use board_core::{
    EditorRegistry, Model, PropertyDescriptor, PropertyPatch, build_fields,
};
use yew::prelude::*;

use crate::components::editors::PropertyField;

/// Props for the SpecificPanel component.
#[derive(Properties, PartialEq)]
pub struct SpecificPanelProps {
    pub descriptors: Vec<PropertyDescriptor>,
    pub model: Model,
    /// Host-supplied editor-type registry; unknown types are skipped.
    pub registry: EditorRegistry,
    pub on_apply: Callback<PropertyPatch>,
    /// Per-field observers: called with every committed value for their
    /// field, outside the patch chain.
    #[prop_or_default]
    pub observers: Vec<(String, Callback<board_core::PropertyValue>)>,
}

#[function_component(SpecificPanel)]
pub fn specific_panel(props: &SpecificPanelProps) -> Html {
    let fields = build_fields(&props.registry, &props.descriptors, &props.model);

    let on_field_change = {
        let on_apply = props.on_apply.clone();
        let observers = props.observers.clone();
        Callback::from(move |(name, value): (String, board_core::PropertyValue)| {
            for (observed, observer) in &observers {
                if *observed == name {
                    observer.emit(value.clone());
                }
            }
            on_apply.emit(PropertyPatch::single(name, value));
        })
    };

    // cell operations address a concrete table component; that lives beyond
    // the scene boundary, so they are only reported here
    let on_table_border = Callback::from(|command: BorderCommand| {
        tracing::info!(?command, "table border command");
    });
    let on_table_op = Callback::from(|op: TableOperation| {
        tracing::info!(operation = op.label(), "table cell operation");
    });

    let type_label = props.model.string("type").unwrap_or_default().to_string();

    html! {
        <div class="specific-panel">
            <label class="component-type">{type_label}</label>
            {for fields.into_iter().map(|field| {
                let key = field.descriptor.name.clone();
                html! {
                    <PropertyField
                        key={key}
                        descriptor={field.descriptor}
                        value={field.value}
                        on_change={on_field_change.clone()}
                        on_table_border={on_table_border.clone()}
                        on_table_op={on_table_op.clone()}
                    />
                }
            })}
        </div>
    }
}
