//! Table-cell editor: border styling for the selected cells and the
//! structural cell operations.
//!
//! The editor only emits typed commands; executing them against the table
//! component is the engine's job.

use board_core::coerce::number_or_zero;
use board_core::style::LINE_DASHES;
use board_core::table::{BorderCommand, BorderRegion, TableOperation};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::color::ColorEditor;

/// Props for the EditorTable component.
#[derive(Properties, PartialEq)]
pub struct EditorTableProps {
    pub on_border_set: Callback<BorderCommand>,
    pub on_cell_op: Callback<TableOperation>,
}

#[function_component(EditorTable)]
pub fn editor_table(props: &EditorTableProps) -> Html {
    let border_width = use_state(|| 1.0_f64);
    let border_color = use_state(|| "black".to_string());
    let border_style = use_state(|| "solid".to_string());

    let on_width_change = {
        let border_width = border_width.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            border_width.set(number_or_zero(&input.value()));
        })
    };

    let on_color_change = {
        let border_color = border_color.clone();
        Callback::from(move |color: String| {
            border_color.set(color);
        })
    };

    let on_style_change = {
        let border_style = border_style.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            border_style.set(select.value());
        })
    };

    let region_buttons = BorderRegion::ALL_REGIONS.iter().map(|region| {
        let on_click = {
            let on_border_set = props.on_border_set.clone();
            let border_width = border_width.clone();
            let border_color = border_color.clone();
            let border_style = border_style.clone();
            let region = *region;
            Callback::from(move |_: MouseEvent| {
                on_border_set.emit(BorderCommand {
                    region,
                    border_width: *border_width,
                    border_style: (*border_style).clone(),
                    border_color: (*border_color).clone(),
                });
            })
        };
        html! {
            <button
                key={format!("{region:?}")}
                class="border-region"
                onclick={on_click}
            >
                {format!("{region:?}").to_lowercase()}
            </button>
        }
    });

    let op_buttons = TableOperation::ALL.iter().map(|op| {
        let on_click = {
            let on_cell_op = props.on_cell_op.clone();
            let op = *op;
            Callback::from(move |_: MouseEvent| {
                on_cell_op.emit(op);
            })
        };
        html! {
            <button key={op.label()} class="table-op" onclick={on_click}>
                {op.label()}
            </button>
        }
    });

    html! {
        <div class="editor-table">
            <fieldset>
                <legend>{"border style"}</legend>
                <div class="border-regions">{for region_buttons}</div>
                <label>{"width"}</label>
                <input type="number" value={border_width.to_string()} onchange={on_width_change} />
                <label>{"color"}</label>
                <ColorEditor value={(*border_color).clone()} on_change={on_color_change} />
                <label>{"border type"}</label>
                <select onchange={on_style_change}>
                    {for LINE_DASHES.iter().map(|dash| html! {
                        <option value={*dash} selected={*border_style == *dash}>{*dash}</option>
                    })}
                </select>
            </fieldset>

            <fieldset>
                <legend>{"cells"}</legend>
                <div class="table-ops">{for op_buttons}</div>
            </fieldset>
        </div>
    }
}
