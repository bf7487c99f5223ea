//! The generic property field: dispatches a descriptor to its editor,
//! coerces the editor's raw commit, and reports `(name, value)` upward.

use board_core::table::{BorderCommand, TableOperation};
use board_core::{
    PropertyDescriptor, PropertyType, PropertyValue, RawInput, StopBarMode, coerce,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::angle::AngleInput;
use super::code::CodeEditor;
use super::color::ColorEditor;
use super::color_stops::ColorStopsEditor;
use super::multiple_color::MultipleColorEditor;
use super::options::OptionsEditor;
use super::table::EditorTable;

/// Props for the PropertyField component.
#[derive(Properties, PartialEq)]
pub struct PropertyFieldProps {
    pub descriptor: PropertyDescriptor,
    pub value: PropertyValue,
    /// `(field name, coerced value)` of one committed edit.
    pub on_change: Callback<(String, PropertyValue)>,
    #[prop_or_default]
    pub on_table_border: Callback<BorderCommand>,
    #[prop_or_default]
    pub on_table_op: Callback<TableOperation>,
}

#[function_component(PropertyField)]
pub fn property_field(props: &PropertyFieldProps) -> Html {
    let descriptor = &props.descriptor;
    let name = descriptor.name.clone();

    let commit = {
        let name = name.clone();
        let on_change = props.on_change.clone();
        move |raw: RawInput| on_change.emit((name.clone(), coerce(raw)))
    };

    let editor = match descriptor.kind {
        PropertyType::Legend => {
            return html! {
                <legend class="property-legend">{&descriptor.label}</legend>
            };
        }
        PropertyType::Number => {
            let commit = commit.clone();
            let on_change = Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                commit(RawInput::NumberInput {
                    text: input.value(),
                });
            });
            html! {
                <input
                    type="number"
                    value={props.value.as_f64().unwrap_or(0.0).to_string()}
                    onchange={on_change}
                    placeholder={descriptor.placeholder.clone().unwrap_or_default()}
                />
            }
        }
        PropertyType::Angle => {
            let commit = commit.clone();
            let on_change = Callback::from(move |radian: f64| {
                commit(RawInput::AngleInput {
                    radian: Some(radian),
                });
            });
            html! {
                <AngleInput
                    radian={props.value.as_f64().unwrap_or(0.0)}
                    on_change={on_change}
                />
            }
        }
        PropertyType::String | PropertyType::ImageSelector => {
            let commit = commit.clone();
            let on_change = Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                commit(RawInput::TextInput {
                    text: input.value(),
                });
            });
            html! {
                <input
                    type="text"
                    value={props.value.as_str().unwrap_or_default().to_string()}
                    onchange={on_change}
                    placeholder={descriptor.placeholder.clone().unwrap_or_default()}
                />
            }
        }
        PropertyType::Textarea => {
            let commit = commit.clone();
            let on_change = Callback::from(move |text: String| {
                commit(RawInput::TextInput { text });
            });
            html! {
                <CodeEditor
                    value={props.value.as_str().unwrap_or_default().to_string()}
                    on_change={on_change}
                />
            }
        }
        PropertyType::Checkbox => {
            let commit = commit.clone();
            let on_change = Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                commit(RawInput::Checkbox {
                    checked: input.checked(),
                });
            });
            html! {
                <input
                    type="checkbox"
                    checked={props.value.as_bool().unwrap_or(false)}
                    onchange={on_change}
                />
            }
        }
        PropertyType::Select => {
            let commit = commit.clone();
            let on_change = Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                commit(RawInput::Listbox {
                    selected: select.value(),
                });
            });
            let current = props.value.as_str().unwrap_or_default().to_string();
            html! {
                <select onchange={on_change}>
                    {for descriptor.options.iter().map(|option| html! {
                        <option
                            value={option.value().to_string()}
                            selected={current == option.value()}
                        >
                            {option.display()}
                        </option>
                    })}
                </select>
            }
        }
        PropertyType::Color => {
            let commit = commit.clone();
            let on_change = Callback::from(move |color: String| {
                commit(RawInput::Generic {
                    value: PropertyValue::Text(color),
                });
            });
            html! {
                <ColorEditor
                    value={props.value.as_str().unwrap_or("#000000").to_string()}
                    on_change={on_change}
                    placeholder={descriptor.placeholder.clone().unwrap_or_default()}
                />
            }
        }
        PropertyType::SolidColorStops | PropertyType::GradientColorStops => {
            let commit = commit.clone();
            let on_change = Callback::from(move |stops| {
                commit(RawInput::Generic {
                    value: PropertyValue::ColorStops(stops),
                });
            });
            let mode = if descriptor.kind == PropertyType::SolidColorStops {
                StopBarMode::Solid
            } else {
                StopBarMode::Gradient
            };
            html! {
                <ColorStopsEditor
                    mode={mode}
                    value={props.value.as_color_stops().unwrap_or_default()}
                    min={descriptor.min.unwrap_or(0.0)}
                    max={descriptor.max.unwrap_or(1.0)}
                    on_change={on_change}
                />
            }
        }
        PropertyType::MultipleColor => {
            let commit = commit.clone();
            let on_change = Callback::from(move |values| {
                commit(RawInput::Generic {
                    value: PropertyValue::TextList(values),
                });
            });
            html! {
                <MultipleColorEditor
                    values={props.value.as_text_list().unwrap_or_default()}
                    on_change={on_change}
                />
            }
        }
        PropertyType::Options => {
            let commit = commit.clone();
            let on_change = Callback::from(move |items| {
                commit(RawInput::Generic {
                    value: PropertyValue::Options(items),
                });
            });
            html! {
                <OptionsEditor
                    value={props.value.as_options().unwrap_or_default()}
                    on_change={on_change}
                />
            }
        }
        PropertyType::EditorTable => {
            html! {
                <EditorTable
                    on_border_set={props.on_table_border.clone()}
                    on_cell_op={props.on_table_op.clone()}
                />
            }
        }
        PropertyType::Date => {
            let commit = commit.clone();
            let on_change = Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                commit(RawInput::TextInput {
                    text: input.value(),
                });
            });
            html! {
                <input
                    type="date"
                    value={props.value.as_str().unwrap_or_default().to_string()}
                    onchange={on_change}
                />
            }
        }
    };

    html! {
        <div class="property-field">
            {editor}
            if !descriptor.label.is_empty() {
                <label>{&descriptor.label}</label>
            }
        </div>
    }
}
