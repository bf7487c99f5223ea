//! Effects panel: shadow, retention, and animation.

use board_core::coerce::number_or_zero;
use board_core::style::{ANIMATION_DELTAS, ANIMATION_EASES, ANIMATION_TYPES, Animation, Shadow};
use board_core::{Model, PropertyPatch, PropertyValue};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::editors::{AngleInput, ColorEditor};

/// Props for the EffectsPanel component.
#[derive(Properties, PartialEq)]
pub struct EffectsPanelProps {
    pub model: Model,
    pub on_apply: Callback<PropertyPatch>,
}

#[function_component(EffectsPanel)]
pub fn effects_panel(props: &EffectsPanelProps) -> Html {
    let shadow: Shadow = props
        .model
        .get("shadow")
        .and_then(PropertyValue::decode)
        .unwrap_or_default();
    let animation: Animation = props
        .model
        .get("animation")
        .and_then(PropertyValue::decode)
        .unwrap_or_default();

    let emit_shadow = {
        let on_apply = props.on_apply.clone();
        move |shadow: &Shadow| {
            on_apply.emit(PropertyPatch::single(
                "shadow",
                PropertyValue::encode(shadow),
            ));
        }
    };

    let emit_animation = {
        let on_apply = props.on_apply.clone();
        move |animation: &Animation| {
            on_apply.emit(PropertyPatch::single(
                "animation",
                PropertyValue::encode(animation),
            ));
        }
    };

    let shadow_number = |apply: fn(&mut Shadow, f64)| {
        let shadow = shadow.clone();
        let emit_shadow = emit_shadow.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = shadow.clone();
            apply(&mut next, number_or_zero(&input.value()));
            emit_shadow(&next);
        })
    };

    let on_shadow_left = shadow_number(|shadow, v| shadow.left = v);
    let on_shadow_top = shadow_number(|shadow, v| shadow.top = v);
    let on_shadow_blur = shadow_number(|shadow, v| shadow.blur_size = v);

    let on_shadow_color = {
        let shadow = shadow.clone();
        let emit_shadow = emit_shadow.clone();
        Callback::from(move |color: String| {
            let mut next = shadow.clone();
            next.color = Some(color);
            emit_shadow(&next);
        })
    };

    let on_retention = {
        let on_apply = props.on_apply.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_apply.emit(PropertyPatch::single(
                "retention",
                PropertyValue::Number(number_or_zero(&input.value())),
            ));
        })
    };

    let on_animation_type = {
        let animation = animation.clone();
        let emit_animation = emit_animation.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = animation.clone();
            let value = select.value();
            next.kind = if value.is_empty() { None } else { Some(value) };
            emit_animation(&next);
        })
    };

    let animation_number = |apply: fn(&mut Animation, f64)| {
        let animation = animation.clone();
        let emit_animation = emit_animation.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = animation.clone();
            apply(&mut next, number_or_zero(&input.value()));
            emit_animation(&next);
        })
    };

    let on_delay = animation_number(|animation, v| animation.delay = v);
    let on_duration = animation_number(|animation, v| animation.duration = v);
    let on_scale = animation_number(|animation, v| animation.scale = Some(v));
    let on_x = animation_number(|animation, v| animation.x = Some(v));
    let on_y = animation_number(|animation, v| animation.y = Some(v));
    let on_start_alpha = animation_number(|animation, v| animation.start_alpha = Some(v));
    let on_end_alpha = animation_number(|animation, v| animation.end_alpha = Some(v));

    let on_theta = {
        let animation = animation.clone();
        let emit_animation = emit_animation.clone();
        Callback::from(move |radian: f64| {
            let mut next = animation.clone();
            next.theta = Some(radian);
            emit_animation(&next);
        })
    };

    let on_repeat = {
        let animation = animation.clone();
        let emit_animation = emit_animation.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = animation.clone();
            next.repeat = input.checked();
            emit_animation(&next);
        })
    };

    let animation_select = |apply: fn(&mut Animation, String)| {
        let animation = animation.clone();
        let emit_animation = emit_animation.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = animation.clone();
            apply(&mut next, select.value());
            emit_animation(&next);
        })
    };

    let on_delta = animation_select(|animation, v| animation.delta = Some(v));
    let on_ease = animation_select(|animation, v| animation.ease = Some(v));

    let kind = animation.kind.clone().unwrap_or_default();

    html! {
        <div class="effects-panel">
            <fieldset>
                <legend>{"shadow"}</legend>
                <div class="property-grid">
                    <label>{"offset-X"}</label>
                    <input type="number" value={shadow.left.to_string()} onchange={on_shadow_left} />
                    <label>{"offset-Y"}</label>
                    <input type="number" value={shadow.top.to_string()} onchange={on_shadow_top} />
                    <label>{"size"}</label>
                    <input type="number" value={shadow.blur_size.to_string()} onchange={on_shadow_blur} />
                    <label>{"color"}</label>
                    <ColorEditor
                        value={shadow.color.clone().unwrap_or_default()}
                        on_change={on_shadow_color}
                    />
                </div>
            </fieldset>

            <fieldset>
                <legend>{"retention"}</legend>
                <div class="property-grid">
                    <label>{"retention"}</label>
                    <input
                        type="number"
                        placeholder="ms"
                        value={props.model.number("retention").unwrap_or(0.0).to_string()}
                        onchange={on_retention}
                    />
                </div>
            </fieldset>

            <fieldset>
                <legend>{"animation"}</legend>
                <div class="property-grid">
                    <label>{"type"}</label>
                    <select onchange={on_animation_type}>
                        {for ANIMATION_TYPES.into_iter().map(|name| html! {
                            <option value={name} selected={kind == name}>
                                {if name.is_empty() { "(none)" } else { name }}
                            </option>
                        })}
                    </select>

                    <label>{"delay"}</label>
                    <input type="number" placeholder="ms" value={animation.delay.to_string()} onchange={on_delay} />
                    <label>{"duration"}</label>
                    <input type="number" placeholder="ms" value={animation.duration.to_string()} onchange={on_duration} />

                    {match kind.as_str() {
                        "rotation" => html! {
                            <>
                                <label>{"theta"}</label>
                                <AngleInput radian={animation.theta.unwrap_or(0.0)} on_change={on_theta} />
                            </>
                        },
                        "vibration" | "heartbeat" => html! {
                            <>
                                <label>{"scale"}</label>
                                <input type="number" value={animation.scale.unwrap_or(1.0).to_string()} onchange={on_scale} />
                            </>
                        },
                        "moving" => html! {
                            <>
                                <label>{"x"}</label>
                                <input type="number" value={animation.x.unwrap_or(0.0).to_string()} onchange={on_x} />
                                <label>{"y"}</label>
                                <input type="number" value={animation.y.unwrap_or(0.0).to_string()} onchange={on_y} />
                            </>
                        },
                        "fade" => html! {
                            <>
                                <label>{"start alpha"}</label>
                                <input type="number" value={animation.start_alpha.unwrap_or(0.0).to_string()} onchange={on_start_alpha} />
                                <label>{"end alpha"}</label>
                                <input type="number" value={animation.end_alpha.unwrap_or(1.0).to_string()} onchange={on_end_alpha} />
                            </>
                        },
                        _ => html! {},
                    }}

                    <div class="checkbox-row">
                        <input type="checkbox" checked={animation.repeat} onchange={on_repeat} />
                        <label>{"repeat"}</label>
                    </div>

                    <label>{"delta"}</label>
                    <select onchange={on_delta}>
                        {for ANIMATION_DELTAS.iter().map(|name| html! {
                            <option
                                value={*name}
                                selected={animation.delta.as_deref() == Some(*name)}
                            >
                                {*name}
                            </option>
                        })}
                    </select>
                    <label>{"ease"}</label>
                    <select onchange={on_ease}>
                        {for ANIMATION_EASES.iter().map(|name| html! {
                            <option
                                value={*name}
                                selected={animation.ease.as_deref() == Some(*name)}
                            >
                                {*name}
                            </option>
                        })}
                    </select>
                </div>
            </fieldset>
        </div>
    }
}
