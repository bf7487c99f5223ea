//! Color input: a text field plus a swatch thumbnail.
//!
//! Named colors and hex/rgb notations are accepted. Invalid text stays
//! visible in the field so the user can correct it, but no change event
//! escapes until the color parses; the committed value is never corrupted.

use board_core::Color;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Props for the ColorEditor component.
#[derive(Properties, PartialEq)]
pub struct ColorEditorProps {
    #[prop_or_default]
    pub value: String,
    #[prop_or_default]
    pub placeholder: AttrValue,
    pub on_change: Callback<String>,
}

#[function_component(ColorEditor)]
pub fn color_editor(props: &ColorEditorProps) -> Html {
    // raw text of an invalid entry, kept until it parses or the value is
    // replaced from outside
    let draft = use_state(|| None::<String>);

    {
        let draft = draft.clone();
        use_effect_with(props.value.clone(), move |_| {
            draft.set(None);
        });
    }

    let on_input_change = {
        let draft = draft.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let text = input.value();
            if text.is_empty() || Color::is_valid(&text) {
                draft.set(None);
                on_change.emit(text);
            } else {
                draft.set(Some(text));
            }
        })
    };

    let shown = (*draft).clone().unwrap_or_else(|| props.value.clone());
    let swatch = Color::parse(&shown)
        .map_or_else(|_| "transparent".to_string(), Color::to_css_string);

    html! {
        <div class="color-editor">
            <input
                type="text"
                value={shown}
                onchange={on_input_change}
                placeholder={props.placeholder.clone()}
            />
            <span
                class="color-thumbnail"
                style={format!("background-color:{swatch}")}
            ></span>
        </div>
    }
}
