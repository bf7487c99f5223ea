//! Edit toolbar: undo/redo, delete, alignment, draw order, board file
//! import/export, and the sidebar toggle.

use gloo::file::callbacks::FileReader;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, Url};
use yew::prelude::*;

use crate::board::{AlignEdge, BoardDocument, ZOrderOp};

/// Props for the EditToolbar component.
#[derive(Properties, PartialEq)]
pub struct EditToolbarProps {
    pub document: BoardDocument,
    pub can_undo: bool,
    pub can_redo: bool,
    pub selected_count: usize,
    pub show_sidebar: bool,
    pub on_new: Callback<()>,
    pub on_load: Callback<BoardDocument>,
    pub on_undo: Callback<()>,
    pub on_redo: Callback<()>,
    pub on_delete: Callback<()>,
    pub on_align: Callback<AlignEdge>,
    pub on_zorder: Callback<ZOrderOp>,
    pub on_toggle_sidebar: Callback<()>,
}

#[function_component(EditToolbar)]
pub fn edit_toolbar(props: &EditToolbarProps) -> Html {
    let file_reader = use_state(|| None::<FileReader>);
    let file_input_ref = use_node_ref();

    let on_new_click = {
        let on_new = props.on_new.clone();
        Callback::from(move |_: MouseEvent| {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message("Start a new board? Unsaved changes will be lost.")
                        .ok()
                })
                .unwrap_or(false);
            if confirmed {
                on_new.emit(());
            }
        })
    };

    let on_export_click = {
        let document = props.document.clone();
        Callback::from(move |_: MouseEvent| {
            let Ok(json) = serde_json::to_string_pretty(&document) else {
                return;
            };
            let blob_options = web_sys::BlobPropertyBag::new();
            blob_options.set_type("application/json");
            let blob = web_sys::Blob::new_with_str_sequence_and_options(
                &js_sys::Array::of1(&json.into()),
                &blob_options,
            )
            .ok();

            if let Some(blob) = blob {
                if let Ok(url) = Url::create_object_url_with_blob(&blob) {
                    if let Some(dom) = web_sys::window().and_then(|w| w.document()) {
                        if let Ok(anchor) = dom.create_element("a") {
                            let _ = anchor.set_attribute("href", &url);
                            let _ = anchor.set_attribute("download", "board.json");
                            if let Some(anchor) = anchor.dyn_ref::<web_sys::HtmlElement>() {
                                anchor.click();
                            }
                            let _ = Url::revoke_object_url(&url);
                        }
                    }
                }
            }
        })
    };

    let on_import_click = {
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_file_selected = {
        let on_load = props.on_load.clone();
        let file_reader = file_reader.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let on_load = on_load.clone();
            let reader = gloo::file::callbacks::read_as_text(&file.into(), move |result| {
                match result {
                    Ok(text) => match serde_json::from_str::<BoardDocument>(&text) {
                        Ok(document) => on_load.emit(document),
                        Err(error) => tracing::warn!(%error, "board file did not parse"),
                    },
                    Err(error) => tracing::warn!(%error, "board file read failed"),
                }
            });
            file_reader.set(Some(reader));
            input.set_value("");
        })
    };

    let simple = |callback: &Callback<()>| {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    let align_button = |edge: AlignEdge, label: &'static str| {
        let on_align = props.on_align.clone();
        let disabled = props.selected_count < 2;
        let on_click = Callback::from(move |_: MouseEvent| on_align.emit(edge));
        html! {
            <button title={format!("align {label}")} disabled={disabled} onclick={on_click}>
                {label}
            </button>
        }
    };

    let zorder_button = |op: ZOrderOp, label: &'static str, disabled: bool| {
        let on_zorder = props.on_zorder.clone();
        let on_click = Callback::from(move |_: MouseEvent| on_zorder.emit(op));
        html! {
            <button title={label} disabled={disabled} onclick={on_click}>
                {label}
            </button>
        }
    };

    let none_selected = props.selected_count == 0;
    let single = props.selected_count == 1;

    html! {
        <div class="edit-toolbar">
            <span class="toolbar-group">
                <button title="new board" onclick={on_new_click}>{"new"}</button>
                <button title="import board" onclick={on_import_click}>{"import"}</button>
                <button title="export board" onclick={on_export_click}>{"export"}</button>
                <input
                    ref={file_input_ref}
                    type="file"
                    accept="application/json"
                    style="display:none"
                    onchange={on_file_selected}
                />
            </span>

            <span class="toolbar-group">
                <button title="undo" disabled={!props.can_undo} onclick={simple(&props.on_undo)}>
                    {"undo"}
                </button>
                <button title="redo" disabled={!props.can_redo} onclick={simple(&props.on_redo)}>
                    {"redo"}
                </button>
                <button title="delete" disabled={none_selected} onclick={simple(&props.on_delete)}>
                    {"delete"}
                </button>
            </span>

            <span class="toolbar-group">
                {align_button(AlignEdge::Left, "left")}
                {align_button(AlignEdge::Center, "center")}
                {align_button(AlignEdge::Right, "right")}
                {align_button(AlignEdge::Top, "top")}
                {align_button(AlignEdge::Middle, "middle")}
                {align_button(AlignEdge::Bottom, "bottom")}
            </span>

            <span class="toolbar-group">
                {zorder_button(ZOrderOp::Front, "front", none_selected)}
                {zorder_button(ZOrderOp::Back, "back", none_selected)}
                {zorder_button(ZOrderOp::Forward, "forward", !single)}
                {zorder_button(ZOrderOp::Backward, "backward", !single)}
            </span>

            <span class="toolbar-group">
                <button
                    title="toggle property panel"
                    class={classes!(props.show_sidebar.then_some("active"))}
                    onclick={simple(&props.on_toggle_sidebar)}
                >
                    {"properties"}
                </button>
            </span>
        </div>
    }
}
