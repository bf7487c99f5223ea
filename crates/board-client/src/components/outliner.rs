//! Outliner: the entity list with selection, deletion, and the add menu.

use board_core::{Entity, EntityId};
use yew::prelude::*;

use crate::board::{create_gauge, create_label, create_rect};

/// Props for the Outliner component.
#[derive(Properties, PartialEq)]
pub struct OutlinerProps {
    pub entities: Vec<Entity>,
    pub selection: Vec<EntityId>,
    /// Entities flagged as data-binding mapping targets.
    pub flagged: Vec<EntityId>,
    /// `(id, extend)`; extend toggles the entity within the selection.
    pub on_select: Callback<(EntityId, bool)>,
    pub on_add: Callback<Entity>,
    pub on_delete: Callback<EntityId>,
}

#[function_component(Outliner)]
pub fn outliner(props: &OutlinerProps) -> Html {
    let show_add_menu = use_state(|| false);

    let toggle_add_menu = {
        let show_add_menu = show_add_menu.clone();
        Callback::from(move |_: MouseEvent| {
            show_add_menu.set(!*show_add_menu);
        })
    };

    let add_button = |label: &'static str, create: fn() -> Entity| {
        let on_add = props.on_add.clone();
        let show_add_menu = show_add_menu.clone();
        let on_click = Callback::from(move |_: MouseEvent| {
            on_add.emit(create());
            show_add_menu.set(false);
        });
        html! {
            <button class="add-menu-item" onclick={on_click}>{label}</button>
        }
    };

    let items = props.entities.iter().enumerate().map(|(id, entity)| {
        let is_selected = props.selection.contains(&id);
        let is_flagged = props.flagged.contains(&id);

        let on_item_click = {
            let on_select = props.on_select.clone();
            Callback::from(move |e: MouseEvent| {
                on_select.emit((id, e.shift_key() || e.ctrl_key() || e.meta_key()));
            })
        };
        let on_delete_click = {
            let on_delete = props.on_delete.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                on_delete.emit(id);
            })
        };

        let type_name = entity.type_name().unwrap_or("component");
        let name = entity
            .dom_id()
            .map_or_else(|| format!("{type_name} {id}"), |id| id.to_string());

        html! {
            <div
                key={id}
                class={classes!(
                    "outliner-item",
                    is_selected.then_some("selected"),
                    is_flagged.then_some("flagged")
                )}
                onclick={on_item_click}
            >
                <span class="entity-type-badge">{type_name}</span>
                <span class="entity-name">{name}</span>
                <button class="entity-delete-btn" onclick={on_delete_click} title="Delete">
                    {"x"}
                </button>
            </div>
        }
    });

    html! {
        <div class="outliner">
            <div class="outliner-header">
                <span class="outliner-title">{"Components"}</span>
                <span class="outliner-count">{format!("({})", props.entities.len())}</span>
            </div>
            <div class="outliner-items">
                {for items}
                if props.entities.is_empty() {
                    <div class="outliner-empty">
                        {"No components. Click + to add."}
                    </div>
                }
            </div>
            <div class="outliner-footer">
                <button class="add-btn" onclick={toggle_add_menu}>{"+ Add"}</button>
                if *show_add_menu {
                    <div class="add-menu">
                        {add_button("Rect", create_rect)}
                        {add_button("Label", create_label)}
                        {add_button("Gauge", create_gauge)}
                    </div>
                }
            </div>
        </div>
    }
}
