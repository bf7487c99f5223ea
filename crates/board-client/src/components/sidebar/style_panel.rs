//! Style panel: opacity, fill style, and line style.

use board_core::coerce::number_or_zero;
use board_core::style::{LINE_DASHES, LineStyle};
use board_core::{FillValue, Model, PropertyPatch, PropertyValue};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::editors::{ButtonsRadio, ColorEditor, FillStyleEditor, RadioButton};

/// Props for the StylePanel component.
#[derive(Properties, PartialEq)]
pub struct StylePanelProps {
    pub model: Model,
    pub on_apply: Callback<PropertyPatch>,
}

#[function_component(StylePanel)]
pub fn style_panel(props: &StylePanelProps) -> Html {
    let on_alpha_change = {
        let on_apply = props.on_apply.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_apply.emit(PropertyPatch::single(
                "alpha",
                PropertyValue::Number(number_or_zero(&input.value())),
            ));
        })
    };

    let fill = props
        .model
        .get("fillStyle")
        .map_or(FillValue::None, PropertyValue::as_fill);
    let on_fill_change = {
        let on_apply = props.on_apply.clone();
        Callback::from(move |fill: FillValue| {
            on_apply.emit(PropertyPatch::single("fillStyle", PropertyValue::from(fill)));
        })
    };

    let line_style: LineStyle = props
        .model
        .get("lineStyle")
        .and_then(PropertyValue::decode)
        .unwrap_or_default();

    let emit_line = {
        let on_apply = props.on_apply.clone();
        move |style: &LineStyle| {
            on_apply.emit(PropertyPatch::single(
                "lineStyle",
                PropertyValue::encode(style),
            ));
        }
    };

    let on_line_width = {
        let line_style = line_style.clone();
        let emit_line = emit_line.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = line_style.clone();
            next.line_width = number_or_zero(&input.value());
            emit_line(&next);
        })
    };

    let on_stroke_style = {
        let line_style = line_style.clone();
        let emit_line = emit_line.clone();
        Callback::from(move |color: String| {
            let mut next = line_style.clone();
            next.stroke_style = color;
            emit_line(&next);
        })
    };

    let on_line_dash = {
        let line_style = line_style.clone();
        let emit_line = emit_line.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = line_style.clone();
            next.line_dash = select.value();
            emit_line(&next);
        })
    };

    let on_line_cap = {
        let line_style = line_style.clone();
        let emit_line = emit_line.clone();
        Callback::from(move |cap: Option<String>| {
            let mut next = line_style.clone();
            next.line_cap = cap;
            emit_line(&next);
        })
    };

    html! {
        <div class="style-panel">
            <fieldset>
                <legend>{"opacity"}</legend>
                <input
                    type="range"
                    min="0"
                    max="1"
                    step="0.1"
                    value={props.model.number("alpha").unwrap_or(1.0).to_string()}
                    onchange={on_alpha_change}
                />
            </fieldset>

            <fieldset>
                <legend>{"fill style"}</legend>
                <FillStyleEditor value={fill} on_change={on_fill_change} />
            </fieldset>

            <fieldset>
                <legend>{"line style"}</legend>
                <div class="property-grid">
                    <label>{"width"}</label>
                    <input
                        type="number"
                        value={line_style.line_width.to_string()}
                        onchange={on_line_width}
                    />
                    <label>{"color"}</label>
                    <ColorEditor
                        value={line_style.stroke_style.clone()}
                        on_change={on_stroke_style}
                    />
                    <label>{"line type"}</label>
                    <select onchange={on_line_dash}>
                        {for LINE_DASHES.iter().map(|dash| html! {
                            <option value={*dash} selected={line_style.line_dash == *dash}>{*dash}</option>
                        })}
                    </select>
                    <label>{"line cap"}</label>
                    <ButtonsRadio
                        value={line_style.line_cap.clone()}
                        buttons={vec![
                            RadioButton::new("butt", "butt"),
                            RadioButton::new("round", "round"),
                            RadioButton::new("square", "square"),
                        ]}
                        on_change={on_line_cap}
                    />
                </div>
            </fieldset>
        </div>
    }
}
