//! Shape panel: identity, visibility flags, placement, and the board size
//! when the root is the target.

use board_core::{Model, PropertyPatch, RawInput, coerce};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Props for the ShapePanel component.
#[derive(Properties, PartialEq)]
pub struct ShapePanelProps {
    pub model: Model,
    /// True when the root pseudo-target is shown.
    pub is_root: bool,
    pub selected_count: usize,
    pub on_apply: Callback<PropertyPatch>,
}

#[function_component(ShapePanel)]
pub fn shape_panel(props: &ShapePanelProps) -> Html {
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

    let number_field = |name: &'static str| {
        let on_apply = props.on_apply.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_apply.emit(PropertyPatch::single(
                name,
                coerce(RawInput::NumberInput {
                    text: input.value(),
                }),
            ));
        })
    };

    let check_field = |name: &'static str| {
        let on_apply = props.on_apply.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_apply.emit(PropertyPatch::single(
                name,
                coerce(RawInput::Checkbox {
                    checked: input.checked(),
                }),
            ));
        })
    };

    let single = props.selected_count == 1;

    html! {
        <div class="shape-panel">
            <fieldset>
                <div class="property-grid">
                    if single {
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
                    }
                    if !props.is_root {
                        <div class="checkbox-row">
                            <input
                                type="checkbox"
                                checked={props.model.boolean("hidden").unwrap_or(false)}
                                onchange={check_field("hidden")}
                            />
                            <label>{"Item Hidden"}</label>
                            <input
                                type="checkbox"
                                checked={props.model.boolean("locked").unwrap_or(false)}
                                onchange={check_field("locked")}
                            />
                            <label>{"Locked"}</label>
                        </div>
                    }
                </div>
            </fieldset>

            if props.is_root {
                <fieldset>
                    <legend>{"size"}</legend>
                    <div class="property-grid">
                        <label>{"width"}</label>
                        <input
                            type="number"
                            value={props.model.number("width").unwrap_or(0.0).to_string()}
                            onchange={number_field("width")}
                        />
                        <label>{"height"}</label>
                        <input
                            type="number"
                            value={props.model.number("height").unwrap_or(0.0).to_string()}
                            onchange={number_field("height")}
                        />
                    </div>
                </fieldset>
            } else if single {
                <fieldset>
                    <legend>{"placement"}</legend>
                    <div class="property-grid">
                        <label>{"x"}</label>
                        <input
                            type="number"
                            value={props.model.number("x").unwrap_or(0.0).to_string()}
                            onchange={number_field("x")}
                        />
                        <label>{"y"}</label>
                        <input
                            type="number"
                            value={props.model.number("y").unwrap_or(0.0).to_string()}
                            onchange={number_field("y")}
                        />
                        <label>{"width"}</label>
                        <input
                            type="number"
                            value={props.model.number("width").unwrap_or(0.0).to_string()}
                            onchange={number_field("width")}
                        />
                        <label>{"height"}</label>
                        <input
                            type="number"
                            value={props.model.number("height").unwrap_or(0.0).to_string()}
                            onchange={number_field("height")}
                        />
                    </div>
                </fieldset>
            }
        </div>
    }
}
