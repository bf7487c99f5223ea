//! Value-range rule editor: `from~to` rows over the same cell editors as the
//! value map.

use board_core::binding::RangeEntry;
use board_core::{CellKind, CellValue, KeyKind, ValueRange};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::value_map::cell_editor;

/// Props for the ValueRangeEditor component.
#[derive(Properties, PartialEq)]
pub struct ValueRangeEditorProps {
    #[prop_or_default]
    pub value: ValueRange,
    pub kind: CellKind,
    #[prop_or_default]
    pub key_kind: KeyKind,
    pub on_change: Callback<ValueRange>,
}

#[function_component(ValueRangeEditor)]
pub fn value_range_editor(props: &ValueRangeEditorProps) -> Html {
    let new_from = use_state(String::new);
    let new_to = use_state(String::new);

    let rebuild = {
        let kind = props.kind;
        let on_change = props.on_change.clone();
        move |rows: Vec<RangeEntry>, default: Option<CellValue>| {
            on_change.emit(ValueRange::build(rows, default, kind));
        }
    };

    let rows = props.value.rows().to_vec();
    let row_views = rows.iter().enumerate().map(|(index, entry)| {
        let on_from_change = {
            let rows = rows.clone();
            let rebuild = rebuild.clone();
            let default = props.value.default_value().cloned();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut rows = rows.clone();
                rows[index].from = input.value();
                rebuild(rows, default.clone());
            })
        };
        let on_to_change = {
            let rows = rows.clone();
            let rebuild = rebuild.clone();
            let default = props.value.default_value().cloned();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut rows = rows.clone();
                rows[index].to = input.value();
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
            <div class="range-record" key={index}>
                <input type="text" placeholder="from" value={entry.from.clone()} onchange={on_from_change} />
                <input type="text" placeholder="to" value={entry.to.clone()} onchange={on_to_change} />
                {cell_editor(props.kind, &entry.value, on_cell_change)}
                <button class="record-action" onclick={on_delete} tabindex="-1">{"-"}</button>
            </div>
        }
    });

    let on_new_from_change = {
        let new_from = new_from.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_from.set(input.value());
        })
    };

    let on_new_to_change = {
        let new_to = new_to.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_to.set(input.value());
        })
    };

    let on_new_cell = {
        let rows = rows.clone();
        let rebuild = rebuild.clone();
        let new_from = new_from.clone();
        let new_to = new_to.clone();
        let default = props.value.default_value().cloned();
        Callback::from(move |cell: CellValue| {
            if new_from.is_empty() {
                return;
            }
            let mut rows = rows.clone();
            rows.push(RangeEntry {
                from: (*new_from).clone(),
                to: (*new_to).clone(),
                value: cell,
            });
            new_from.set(String::new());
            new_to.set(String::new());
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
        <div class="value-range-editor">
            {for row_views}
            <div class="range-record range-record-new">
                <input type="text" placeholder="from" value={(*new_from).clone()} onchange={on_new_from_change} />
                <input type="text" placeholder="to" value={(*new_to).clone()} onchange={on_new_to_change} />
                {cell_editor(props.kind, &CellValue::text(""), on_new_cell)}
                <button class="record-action" tabindex="-1">{"+"}</button>
            </div>
            <div class="range-record range-record-default">
                <input type="text" value="default" disabled={true} />
                {cell_editor(props.kind, &default_cell_value, on_default_change)}
                <button class="record-action" onclick={on_sort} tabindex="-1">{">"}</button>
            </div>
        </div>
    }
}
