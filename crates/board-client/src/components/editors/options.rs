//! Options list editor: text/value row pairs with add and delete.

use board_core::OptionItem;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Props for the OptionsEditor component.
#[derive(Properties, PartialEq)]
pub struct OptionsEditorProps {
    #[prop_or_default]
    pub value: Vec<OptionItem>,
    pub on_change: Callback<Vec<OptionItem>>,
}

#[function_component(OptionsEditor)]
pub fn options_editor(props: &OptionsEditorProps) -> Html {
    let new_text = use_state(String::new);
    let new_value = use_state(String::new);

    let emit = {
        let on_change = props.on_change.clone();
        move |items: Vec<OptionItem>| {
            // rows without a text are dropped; a missing value falls back to
            // the text
            let built = items
                .into_iter()
                .filter(|item| !item.text.is_empty())
                .map(|item| OptionItem {
                    value: if item.value.is_empty() {
                        item.text.clone()
                    } else {
                        item.value
                    },
                    text: item.text,
                })
                .collect();
            on_change.emit(built);
        }
    };

    let commit_new = {
        let new_text = new_text.clone();
        let new_value = new_value.clone();
        let items = props.value.clone();
        let emit = emit.clone();
        move || {
            if new_text.is_empty() {
                return;
            }
            let mut items = items.clone();
            items.push(OptionItem {
                text: (*new_text).clone(),
                value: (*new_value).clone(),
            });
            new_text.set(String::new());
            new_value.set(String::new());
            emit(items);
        }
    };

    let rows = props.value.iter().enumerate().map(|(index, item)| {
        let on_text_change = {
            let items = props.value.clone();
            let emit = emit.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut items = items.clone();
                items[index].text = input.value();
                emit(items);
            })
        };
        let on_value_change = {
            let items = props.value.clone();
            let emit = emit.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut items = items.clone();
                items[index].value = input.value();
                emit(items);
            })
        };
        let on_delete = {
            let items = props.value.clone();
            let emit = emit.clone();
            Callback::from(move |_: MouseEvent| {
                let mut items = items.clone();
                items.remove(index);
                emit(items);
            })
        };
        html! {
            <div class="option-record" key={index}>
                <input type="text" placeholder="text" value={item.text.clone()} onchange={on_text_change} />
                <input type="text" placeholder="value" value={item.value.clone()} onchange={on_value_change} />
                <button class="record-action" onclick={on_delete} tabindex="-1">{"-"}</button>
            </div>
        }
    });

    let on_new_text_change = {
        let new_text = new_text.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_text.set(input.value());
        })
    };

    let on_new_value_change = {
        let new_text = new_text.clone();
        let new_value = new_value.clone();
        let items = props.value.clone();
        let emit = emit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            if new_text.is_empty() {
                new_value.set(value);
                return;
            }
            let mut items = items.clone();
            items.push(OptionItem {
                text: (*new_text).clone(),
                value,
            });
            new_text.set(String::new());
            new_value.set(String::new());
            emit(items);
        })
    };

    let on_add_click = Callback::from(move |_: MouseEvent| commit_new());

    html! {
        <div class="options-editor">
            {for rows}
            <div class="option-record option-record-new">
                <input type="text" placeholder="text" value={(*new_text).clone()} onchange={on_new_text_change} />
                <input type="text" placeholder="value" value={(*new_value).clone()} onchange={on_new_value_change} />
                <button class="record-action" onclick={on_add_click} tabindex="-1">{"+"}</button>
            </div>
        </div>
    }
}
