//! Data-binding panel: identity fields, the value JSON, and the seven
//! mapping slots.

use board_core::{
    Mapping, Model, PropertyPatch, PropertyValue, RawInput, coerce, enabled_slots,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::mapper::MapperEditor;
use crate::components::editors::CodeEditor;

/// Properties a mapping may spread onto its targets.
const MAPPABLE_PROPS: [(&str, &str); 17] = [
    ("", ""),
    ("text", "text"),
    ("fillStyle", "fill style"),
    ("strokeStyle", "stroke style"),
    ("fontColor", "font color"),
    ("ref", "reference"),
    ("rotate", "rotate"),
    ("scale", "scale"),
    ("translate", "translate"),
    ("dimension", "dimension"),
    ("hidden", "hidden"),
    ("location", "location"),
    ("value", "value"),
    ("data", "data"),
    ("accessor", "accessor"),
    ("options", "options"),
    ("started", "started"),
];

/// Props for the DataBindingPanel component.
#[derive(Properties, PartialEq)]
pub struct DataBindingPanelProps {
    pub model: Model,
    pub on_apply: Callback<PropertyPatch>,
    /// Flags the entities a mapping target matches, while the user edits it.
    pub on_flash: Callback<String>,
}

fn data_text(model: &Model) -> String {
    match model.get("data") {
        Some(PropertyValue::Text(text)) => text.clone(),
        Some(PropertyValue::Null) | None => String::new(),
        Some(other) => serde_json::to_string_pretty(&other.to_json()).unwrap_or_default(),
    }
}

#[function_component(DataBindingPanel)]
pub fn data_binding_panel(props: &DataBindingPanelProps) -> Html {
    let slot = use_state(|| 0_usize);

    let mappings = props
        .model
        .get("mappings")
        .map(PropertyValue::as_mappings)
        .unwrap_or_default();

    // clamp the active tab when an external change shrinks the mapping list
    let enabled = enabled_slots(&mappings);
    let active_slot = (*slot).min(enabled - 1);

    let text_field = |name: &'static str| {
        let on_apply = props.on_apply.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_apply.emit(PropertyPatch::single(
                name,
                coerce(RawInput::TextInput {
                    text: input.value(),
                }),
            ));
        })
    };

    let on_data_change = {
        let on_apply = props.on_apply.clone();
        Callback::from(move |text: String| {
            // parse as JSON when possible; otherwise the raw text stands
            let value = serde_json::from_str::<serde_json::Value>(&text)
                .map_or_else(|_| PropertyValue::Text(text.clone()), PropertyValue::Json);
            on_apply.emit(PropertyPatch::single("data", value));
        })
    };

    let tabs = (0..board_core::binding::MAX_MAPPINGS).map(|index| {
        let disabled = index >= enabled;
        let has_mapping = index < mappings.len();
        let on_click = {
            let slot = slot.clone();
            Callback::from(move |_: MouseEvent| {
                slot.set(index);
            })
        };
        html! {
            <button
                key={index}
                class={classes!(
                    "mapping-tab",
                    (index == active_slot).then_some("selected"),
                    has_mapping.then_some("has-set")
                )}
                disabled={disabled}
                onclick={on_click}
            >
                {(index + 1).to_string()}
            </button>
        }
    });

    let current = mappings.get(active_slot).cloned().unwrap_or_default();

    let on_mapping_change = {
        let mappings = mappings.clone();
        let on_apply = props.on_apply.clone();
        let on_flash = props.on_flash.clone();
        Callback::from(move |mapping: Mapping| {
            if !mapping.target.is_empty() {
                on_flash.emit(mapping.target.clone());
            }

            let mut slots: Vec<Option<Mapping>> = mappings.iter().cloned().map(Some).collect();
            let entry = if mapping.is_complete() {
                Some(mapping)
            } else {
                None
            };
            if active_slot < slots.len() {
                slots[active_slot] = entry;
            } else if let Some(entry) = entry {
                slots.push(Some(entry));
            }
            let dense: Vec<Mapping> = slots.into_iter().flatten().collect();
            // incomplete edits stay in the mapper's draft; only a real
            // difference becomes an undoable patch
            if dense != mappings {
                on_apply.emit(PropertyPatch::single(
                    "mappings",
                    PropertyValue::Mappings(dense),
                ));
            }
        })
    };

    html! {
        <div class="data-binding-panel">
            <fieldset>
                <div class="property-grid">
                    <label>{"ID"}</label>
                    <input
                        type="text"
                        value={props.model.string("id").unwrap_or_default().to_string()}
                        onchange={text_field("id")}
                    />
                    <label>{"Class"}</label>
                    <input
                        type="text"
                        value={props.model.string("class").unwrap_or_default().to_string()}
                        onchange={text_field("class")}
                    />
                    <label>{"Template Prefix"}</label>
                    <input
                        type="text"
                        value={props.model.string("templatePrefix").unwrap_or_default().to_string()}
                        onchange={text_field("templatePrefix")}
                    />
                </div>
            </fieldset>

            <fieldset>
                <legend>{"value"}</legend>
                <CodeEditor value={data_text(&props.model)} on_change={on_data_change} />
            </fieldset>

            <fieldset>
                <legend>{"Mapping"}</legend>
                <div class="mapping-tabs">{for tabs}</div>
                <MapperEditor
                    key={active_slot}
                    mapping={current}
                    properties={MAPPABLE_PROPS.to_vec()}
                    on_change={on_mapping_change}
                />
            </fieldset>
        </div>
    }
}
