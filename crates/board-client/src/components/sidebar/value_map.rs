//! Value-map rule editor: key/value rows, a new-row line, and the reserved
//! `default` row with the sort action.

use board_core::{CellKind, CellValue, KeyKind, ValueMap};
use board_core::binding::MapEntry;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::editors::ColorEditor;

/// Props for the ValueMapEditor component.
#[derive(Properties, PartialEq)]
pub struct ValueMapEditorProps {
    #[prop_or_default]
    pub value: ValueMap,
    pub kind: CellKind,
    #[prop_or_default]
    pub key_kind: KeyKind,
    pub on_change: Callback<ValueMap>,
}

/// Renders one value cell for the editor kind and reports edits.
pub(super) fn cell_editor(kind: CellKind, value: &CellValue, on_change: Callback<CellValue>) -> Html {
    match kind {
        CellKind::Boolean => {
            let checked = matches!(value, CellValue::Bool(true));
            let on_cell = Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_change.emit(CellValue::Bool(input.checked()));
            });
            html! { <input type="checkbox" checked={checked} onchange={on_cell} /> }
        }
        CellKind::Color => {
            let current = match value {
                CellValue::Text(text) => text.clone(),
                CellValue::Bool(_) => String::new(),
            };
            let on_cell = Callback::from(move |color: String| {
                on_change.emit(CellValue::Text(color));
            });
            html! { <ColorEditor value={current} on_change={on_cell} /> }
        }
        CellKind::Number | CellKind::Object | CellKind::Text => {
            let current = match value {
                CellValue::Text(text) => text.clone(),
                CellValue::Bool(b) => b.to_string(),
            };
            let on_cell = Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_change.emit(CellValue::Text(input.value()));
            });
            html! { <input type="text" placeholder="value" value={current} onchange={on_cell} /> }
        }
    }
}

#[function_component(ValueMapEditor)]
pub fn value_map_editor(props: &ValueMapEditorProps) -> Html {
    let new_key = use_state(String::new);

    let rebuild = {
        let kind = props.kind;
        let on_change = props.on_change.clone();
        move |rows: Vec<MapEntry>, default: Option<CellValue>| {
            on_change.emit(ValueMap::build(rows, default, kind));
        }
    };

    let rows = props.value.rows().to_vec();
    let row_views = rows.iter().enumerate().map(|(index, entry)| {
        let on_key_change = {
            let rows = rows.clone();
            let rebuild = rebuild.clone();
            let default = props.value.default_value().cloned();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut rows = rows.clone();
                rows[index].key = input.value();
                rebuild(rows, default.clone());
            })
        };
        let on_cell_change = {
            let rows = rows.clone();
            let rebuild = rebuild.clone();
            let default = props.value.default_value().cloned();
            Callback::from(move |cell: CellValue| {
                let mut rows = rows.clone();
                rows[index].value = cell;
                rebuild(rows, default.clone());
            })
        };
        let on_delete = {
            let rows = rows.clone();
            let rebuild = rebuild.clone();
            let default = props.value.default_value().cloned();
            Callback::from(move |_: MouseEvent| {
                let mut rows = rows.clone();
                rows.remove(index);
                rebuild(rows, default.clone());
            })
        };
        html! {
            <div class="map-record" key={index}>
                <input type="text" placeholder="key" value={entry.key.clone()} onchange={on_key_change} />
                {cell_editor(props.kind, &entry.value, on_cell_change)}
                <button class="record-action" onclick={on_delete} tabindex="-1">{"-"}</button>
            </div>
        }
    });

    let on_new_key_change = {
        let new_key = new_key.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_key.set(input.value());
        })
    };

    let on_new_cell = {
        let rows = rows.clone();
        let rebuild = rebuild.clone();
        let new_key = new_key.clone();
        let default = props.value.default_value().cloned();
        Callback::from(move |cell: CellValue| {
            if new_key.is_empty() {
                return;
            }
            let mut rows = rows.clone();
            rows.push(MapEntry {
                key: (*new_key).clone(),
                value: cell,
            });
            new_key.set(String::new());
            rebuild(rows, default.clone());
        })
    };

    let on_default_change = {
        let rows = rows.clone();
        let rebuild = rebuild.clone();
        Callback::from(move |cell: CellValue| {
            rebuild(rows.clone(), Some(cell));
        })
    };

    let on_sort = {
        let value = props.value.clone();
        let key_kind = props.key_kind;
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            on_change.emit(value.sorted(key_kind));
        })
    };

    let default_cell_value = props
        .value
        .default_value()
        .cloned()
        .unwrap_or_else(|| CellValue::text(""));

    html! {
        <div class="value-map-editor">
            {for row_views}
            <div class="map-record map-record-new">
                <input type="text" placeholder="key" value={(*new_key).clone()} onchange={on_new_key_change} />
                {cell_editor(props.kind, &CellValue::text(""), on_new_cell)}
                <button class="record-action" tabindex="-1">{"+"}</button>
            </div>
            <div class="map-record map-record-default">
                <input type="text" value="default" disabled={true} />
                {cell_editor(props.kind, &default_cell_value, on_default_change)}
                <button class="record-action" onclick={on_sort} tabindex="-1">{">"}</button>
            </div>
        </div>
    }
}
