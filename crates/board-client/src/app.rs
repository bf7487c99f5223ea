//! Main application component: the board modeller layout.

use board_core::EditorRegistry;
use yew::prelude::*;

use crate::components::{BoardViewer, EditToolbar, Outliner, PropertySidebar};
use crate::hooks::use_board_state;

/// The board modeller: toolbar on top, outliner and viewer in the middle,
/// property sidebar on the right.
#[function_component(BoardModeller)]
fn board_modeller() -> Html {
    let handle = use_board_state();
    let show_sidebar = use_state(|| true);
    // the editor-type to editor map is host configuration; the standard set
    // covers every built-in type
    let registry = use_memo((), |_| EditorRegistry::standard());

    let on_toggle_sidebar = {
        let show_sidebar = show_sidebar.clone();
        Callback::from(move |_: ()| {
            show_sidebar.set(!*show_sidebar);
        })
    };

    let on_item_select = {
        let handle = handle.clone();
        Callback::from(move |(id, extend): (usize, bool)| {
            if extend {
                handle.on_toggle_select.emit(id);
            } else {
                handle.on_select.emit(vec![id]);
            }
        })
    };

    let on_clear_selection = {
        let on_select = handle.on_select.clone();
        Callback::from(move |_: ()| {
            on_select.emit(Vec::new());
        })
    };

    let on_delete_selection = {
        let handle = handle.clone();
        Callback::from(move |_: ()| {
            let selection = handle.board.selected_ids();
            handle.on_delete.emit(selection);
        })
    };

    let on_delete_one = {
        let on_delete = handle.on_delete.clone();
        Callback::from(move |id: usize| {
            on_delete.emit(vec![id]);
        })
    };

    html! {
        <div class="board-modeller">
            <EditToolbar
                document={handle.board.to_document()}
                can_undo={handle.can_undo}
                can_redo={handle.can_redo}
                selected_count={handle.board.selected_ids().len()}
                show_sidebar={*show_sidebar}
                on_new={handle.on_new.clone()}
                on_load={handle.on_load.clone()}
                on_undo={handle.on_undo.clone()}
                on_redo={handle.on_redo.clone()}
                on_delete={on_delete_selection}
                on_align={handle.on_align.clone()}
                on_zorder={handle.on_zorder.clone()}
                on_toggle_sidebar={on_toggle_sidebar}
            />

            <div class="modeller-body">
                <Outliner
                    entities={handle.board.entities().to_vec()}
                    selection={handle.board.selected_ids()}
                    flagged={handle.flagged.clone()}
                    on_select={on_item_select.clone()}
                    on_add={handle.on_add.clone()}
                    on_delete={on_delete_one}
                />

                <BoardViewer
                    document={handle.board.to_document()}
                    selection={handle.board.selected_ids()}
                    on_select={on_item_select}
                    on_clear={on_clear_selection}
                />

                <PropertySidebar
                    source={handle.source.clone()}
                    registry={(*registry).clone()}
                    collapsed={!*show_sidebar}
                    on_apply={handle.on_apply.clone()}
                    on_flash={handle.on_flash.clone()}
                />
            </div>
        </div>
    }
}

/// Root application component.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BoardModeller />
    }
}
