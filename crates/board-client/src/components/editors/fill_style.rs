//! Fill-style editor: the no/solid/gradient/pattern discriminant plus one
//! sub-editor page per variant.
//!
//! Variant switching is non-destructive within a session: the core
//! `FillStyleState` caches each variant's last value, and only an external
//! value replacement resets the sibling caches.

use board_core::{FillKind, FillStyleState, FillValue, GradientValue, PatternValue};
use yew::prelude::*;

use super::color::ColorEditor;
use super::gradient::GradientEditor;
use super::pattern::PatternEditor;

/// Props for the FillStyleEditor component.
#[derive(Properties, PartialEq)]
pub struct FillStyleEditorProps {
    #[prop_or(FillValue::None)]
    pub value: FillValue,
    pub on_change: Callback<FillValue>,
}

#[function_component(FillStyleEditor)]
pub fn fill_style_editor(props: &FillStyleEditorProps) -> Html {
    let state = use_state(FillStyleState::default);
    // remembers our own last emit; its arrival back from the parent is a
    // user-edit echo, not an external replacement
    let last_emitted = use_mut_ref(|| None::<FillValue>);

    {
        let state = state.clone();
        let last_emitted = last_emitted.clone();
        use_effect_with(props.value.clone(), move |value| {
            if last_emitted.borrow_mut().take().as_ref() == Some(value) {
                return;
            }
            let mut next = (*state).clone();
            next.external_value_replaced(value);
            state.set(next);
        });
    }

    let emit = {
        let on_change = props.on_change.clone();
        let last_emitted = last_emitted.clone();
        move |fill: FillValue| {
            *last_emitted.borrow_mut() = Some(fill.clone());
            on_change.emit(fill);
        }
    };

    let kind_radios = FillKind::ALL.iter().map(|kind| {
        let checked = state.active() == *kind;
        let on_click = {
            let state = state.clone();
            let emit = emit.clone();
            let kind = *kind;
            Callback::from(move |_: Event| {
                let mut next = (*state).clone();
                let fill = next.select_kind(kind);
                state.set(next);
                emit(fill);
            })
        };
        html! {
            <label class="fill-kind" key={kind.label()}>
                <input type="radio" name="fill-kind" checked={checked} onchange={on_click} />
                {kind.label()}
            </label>
        }
    });

    let on_solid = {
        let state = state.clone();
        let emit = emit.clone();
        Callback::from(move |color: String| {
            let mut next = (*state).clone();
            if let Some(fill) = next.edit_solid(color) {
                state.set(next);
                emit(fill);
            }
        })
    };

    let on_gradient = {
        let state = state.clone();
        let emit = emit.clone();
        Callback::from(move |gradient: GradientValue| {
            let mut next = (*state).clone();
            if let Some(fill) = next.edit_gradient(gradient) {
                state.set(next);
                emit(fill);
            }
        })
    };

    let on_pattern = {
        let state = state.clone();
        let emit = emit.clone();
        Callback::from(move |pattern: PatternValue| {
            let mut next = (*state).clone();
            if let Some(fill) = next.edit_pattern(pattern) {
                state.set(next);
                emit(fill);
            }
        })
    };

    let page = match state.active() {
        FillKind::No => html! {},
        FillKind::Solid => html! {
            <ColorEditor
                value={state.solid().unwrap_or_default().to_string()}
                on_change={on_solid}
            />
        },
        FillKind::Gradient => html! {
            <GradientEditor
                value={state
                    .gradient()
                    .cloned()
                    .unwrap_or_else(|| GradientValue::default_with_seed(state.solid()))}
                on_change={on_gradient}
            />
        },
        FillKind::Pattern => html! {
            <PatternEditor
                value={state.pattern().cloned().unwrap_or_default()}
                on_change={on_pattern}
            />
        },
    };

    html! {
        <div class="fill-style-editor">
            <div class="fill-kinds">{for kind_radios}</div>
            <div class="fill-page">{page}</div>
        </div>
    }
}
