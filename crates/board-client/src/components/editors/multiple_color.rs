//! Color array editor: one color field per entry with add/remove buttons.

use yew::prelude::*;

use super::color::ColorEditor;

/// Props for the MultipleColorEditor component.
#[derive(Properties, PartialEq)]
pub struct MultipleColorEditorProps {
    #[prop_or_default]
    pub values: Vec<String>,
    pub on_change: Callback<Vec<String>>,
}

#[function_component(MultipleColorEditor)]
pub fn multiple_color_editor(props: &MultipleColorEditorProps) -> Html {
    let values = if props.values.is_empty() {
        vec!["black".to_string()]
    } else {
        props.values.clone()
    };

    let rows = values.iter().enumerate().map(|(index, value)| {
        let on_color_change = {
            let values = values.clone();
            let on_change = props.on_change.clone();
            Callback::from(move |color: String| {
                let mut values = values.clone();
                values[index] = color;
                on_change.emit(values);
            })
        };
        let on_append = {
            let values = values.clone();
            let on_change = props.on_change.clone();
            Callback::from(move |_: MouseEvent| {
                let mut values = values.clone();
                values.insert(index + 1, "black".to_string());
                on_change.emit(values);
            })
        };
        let on_remove = {
            let values = values.clone();
            let on_change = props.on_change.clone();
            Callback::from(move |_: MouseEvent| {
                let mut values = values.clone();
                values.remove(index);
                on_change.emit(values);
            })
        };
        html! {
            <div class="multiple-color-row" key={index}>
                <button class="record-action" onclick={on_append}>{"+"}</button>
                <ColorEditor value={value.clone()} on_change={on_color_change} />
                if values.len() > 1 {
                    <button class="record-action" onclick={on_remove}>{"-"}</button>
                }
            </div>
        }
    });

    html! {
        <div class="multiple-color-editor">
            {for rows}
        </div>
    }
}
