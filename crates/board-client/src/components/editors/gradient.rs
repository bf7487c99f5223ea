//! Gradient editor: flavor, rotation (with directional presets), and the
//! nested color-stop list. Merges one sub-field at a time and re-emits the
//! whole gradient.

use board_core::fill::{
    LINEAR_DIRECTIONS, RADIAL_CENTERS, direction_to_rotation, rotation_to_direction,
};
use board_core::{GradientKind, GradientValue, StopBarMode};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::angle::AngleInput;
use super::color_stops::ColorStopsEditor;

/// Props for the GradientEditor component.
#[derive(Properties, PartialEq)]
pub struct GradientEditorProps {
    pub value: GradientValue,
    pub on_change: Callback<GradientValue>,
}

#[function_component(GradientEditor)]
pub fn gradient_editor(props: &GradientEditorProps) -> Html {
    let on_kind_change = {
        let value = props.value.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let kind = match select.value().as_str() {
                "radial" => GradientKind::Radial,
                _ => GradientKind::Linear,
            };
            on_change.emit(GradientValue {
                kind,
                ..value.clone()
            });
        })
    };

    let on_rotation_change = {
        let value = props.value.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |rotation: f64| {
            on_change.emit(GradientValue {
                rotation,
                ..value.clone()
            });
        })
    };

    let on_stops_change = {
        let value = props.value.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |color_stops| {
            on_change.emit(GradientValue {
                color_stops,
                ..value.clone()
            });
        })
    };

    let active_direction = rotation_to_direction(props.value.rotation);
    let direction_buttons = LINEAR_DIRECTIONS.into_iter().map(|direction| {
        let Some(rotation) = direction_to_rotation(direction) else {
            // center-to-corner carries no rotation; nothing to emit
            return html! {};
        };
        let on_click = {
            let value = props.value.clone();
            let on_change = props.on_change.clone();
            Callback::from(move |_: MouseEvent| {
                on_change.emit(GradientValue {
                    rotation,
                    ..value.clone()
                });
            })
        };
        html! {
            <button
                key={direction}
                class={classes!(
                    "direction-button",
                    (active_direction == Some(direction)).then_some("active")
                )}
                title={direction}
                onclick={on_click}
            >
                {direction}
            </button>
        }
    });

    let center = props.value.center.clone().unwrap_or_else(|| "center".to_string());
    let center_buttons = RADIAL_CENTERS.into_iter().map(|name| {
        let on_click = {
            let value = props.value.clone();
            let on_change = props.on_change.clone();
            let name = name.to_string();
            Callback::from(move |_: MouseEvent| {
                on_change.emit(GradientValue {
                    center: Some(name.clone()),
                    ..value.clone()
                });
            })
        };
        html! {
            <button
                key={name}
                class={classes!("direction-button", (center == name).then_some("active"))}
                title={name}
                onclick={on_click}
            >
                {name}
            </button>
        }
    });

    html! {
        <div class="gradient-editor">
            <label>{"type"}</label>
            <select onchange={on_kind_change}>
                <option value="linear" selected={props.value.kind == GradientKind::Linear}>{"linear"}</option>
                <option value="radial" selected={props.value.kind == GradientKind::Radial}>{"radial"}</option>
            </select>

            <label>{"rotation"}</label>
            <AngleInput radian={props.value.rotation} on_change={on_rotation_change} />

            <label>{"direction"}</label>
            if props.value.kind == GradientKind::Linear {
                <div class="direction-set">{for direction_buttons}</div>
            } else {
                <div class="direction-set">{for center_buttons}</div>
            }

            <ColorStopsEditor
                mode={StopBarMode::Gradient}
                value={props.value.color_stops.clone()}
                on_change={on_stops_change}
            />
        </div>
    }
}
