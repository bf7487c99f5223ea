//! Plain-text code editor used for textarea properties, data JSON, and eval
//! rules.

use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

/// Props for the CodeEditor component.
#[derive(Properties, PartialEq)]
pub struct CodeEditorProps {
    #[prop_or_default]
    pub value: String,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(8)]
    pub rows: u32,
    pub on_change: Callback<String>,
}

#[function_component(CodeEditor)]
pub fn code_editor(props: &CodeEditorProps) -> Html {
    let on_input_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(area.value());
        })
    };

    html! {
        <textarea
            class="code-editor"
            value={props.value.clone()}
            rows={props.rows.to_string()}
            onchange={on_input_change}
            placeholder={props.placeholder.clone()}
        />
    }
}
