//! Radio-style button strip: at most one button active, or none at all when
//! not mandatory.

use yew::prelude::*;

/// One button of the strip.
#[derive(Debug, Clone, PartialEq)]
pub struct RadioButton {
    pub value: String,
    pub label: String,
}

impl RadioButton {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Props for the ButtonsRadio component.
#[derive(Properties, PartialEq)]
pub struct ButtonsRadioProps {
    #[prop_or_default]
    pub value: Option<String>,
    pub buttons: Vec<RadioButton>,
    /// When set, one button is always active; clicking the active button
    /// again keeps it. Otherwise it toggles off.
    #[prop_or_default]
    pub mandatory: bool,
    pub on_change: Callback<Option<String>>,
}

#[function_component(ButtonsRadio)]
pub fn buttons_radio(props: &ButtonsRadioProps) -> Html {
    let buttons = props.buttons.iter().map(|button| {
        let active = props.value.as_deref() == Some(button.value.as_str());
        let on_click = {
            let value = button.value.clone();
            let current = props.value.clone();
            let mandatory = props.mandatory;
            let on_change = props.on_change.clone();
            Callback::from(move |_: MouseEvent| {
                let next = if !mandatory && current.as_deref() == Some(value.as_str()) {
                    None
                } else {
                    Some(value.clone())
                };
                // unchanged state must not re-emit; a change handler that
                // writes the value back would loop otherwise
                if next != current {
                    on_change.emit(next);
                }
            })
        };
        html! {
            <button
                key={button.value.clone()}
                class={classes!("radio-button", active.then_some("active"))}
                onclick={on_click}
            >
                {&button.label}
            </button>
        }
    });

    html! {
        <span class="buttons-radio">
            {for buttons}
        </span>
    }
}
