//! Pattern fill editor: image source, alignment, offsets and sizing.

use board_core::PatternValue;
use board_core::coerce::number_or_zero;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

const ALIGNS: [&str; 9] = [
    "left-top",
    "top",
    "right-top",
    "left",
    "center",
    "right",
    "left-bottom",
    "bottom",
    "right-bottom",
];

/// Props for the PatternEditor component.
#[derive(Properties, PartialEq)]
pub struct PatternEditorProps {
    #[prop_or_default]
    pub value: PatternValue,
    pub on_change: Callback<PatternValue>,
}

#[function_component(PatternEditor)]
pub fn pattern_editor(props: &PatternEditorProps) -> Html {
    let merge = |apply: fn(&mut PatternValue, String)| {
        let value = props.value.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = value.clone();
            apply(&mut next, input.value());
            on_change.emit(next);
        })
    };

    let on_image = merge(|pattern, text| pattern.image = text);
    let on_offset_x = merge(|pattern, text| pattern.offset_x = number_or_zero(&text));
    let on_offset_y = merge(|pattern, text| pattern.offset_y = number_or_zero(&text));
    let on_width = merge(|pattern, text| pattern.width = text.parse().ok());
    let on_height = merge(|pattern, text| pattern.height = text.parse().ok());

    let on_align = {
        let value = props.value.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = value.clone();
            next.align = Some(select.value());
            on_change.emit(next);
        })
    };

    let on_fit = {
        let value = props.value.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = value.clone();
            next.fit = input.checked();
            on_change.emit(next);
        })
    };

    let align = props.value.align.clone().unwrap_or_default();

    html! {
        <div class="pattern-editor">
            <label>{"image"}</label>
            <input type="text" value={props.value.image.clone()} onchange={on_image} />

            <label>{"align"}</label>
            <select onchange={on_align}>
                {for ALIGNS.iter().map(|name| html! {
                    <option value={*name} selected={align == *name}>{*name}</option>
                })}
            </select>

            <label>{"offsetX"}</label>
            <input type="number" value={props.value.offset_x.to_string()} onchange={on_offset_x} />
            <label>{"offsetY"}</label>
            <input type="number" value={props.value.offset_y.to_string()} onchange={on_offset_y} />
            <label>{"width"}</label>
            <input
                type="number"
                value={props.value.width.map(|w| w.to_string()).unwrap_or_default()}
                onchange={on_width}
            />
            <label>{"height"}</label>
            <input
                type="number"
                value={props.value.height.map(|h| h.to_string()).unwrap_or_default()}
                onchange={on_height}
            />

            <label class="checkbox-row">
                <input type="checkbox" checked={props.value.fit} onchange={on_fit} />
                {"fit"}
            </label>
        </div>
    }
}
