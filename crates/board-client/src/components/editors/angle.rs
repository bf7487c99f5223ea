//! Angle input: the model keeps radians, the field shows rounded degrees.

use board_core::{to_degrees, to_radians};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Props for the AngleInput component.
#[derive(Properties, PartialEq)]
pub struct AngleInputProps {
    #[prop_or_default]
    pub radian: f64,
    #[prop_or(AttrValue::Static("0°"))]
    pub placeholder: AttrValue,
    pub on_change: Callback<f64>,
}

#[function_component(AngleInput)]
pub fn angle_input(props: &AngleInputProps) -> Html {
    let on_input_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let degree = input.value().parse::<f64>().unwrap_or(0.0);
            on_change.emit(to_radians(degree));
        })
    };

    html! {
        <input
            class="angle-input"
            type="number"
            value={to_degrees(props.radian).to_string()}
            onchange={on_input_change}
            placeholder={props.placeholder.clone()}
        />
    }
}
