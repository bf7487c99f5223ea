//! Viewer placeholder: a schematic rendering of the board model.
//!
//! This is the seam where the external scene/rendering engine mounts; the
//! placeholder only lays the components out so selections and edits stay
//! visible while editing.

use board_core::{EntityId, FillValue, PropertyValue};
use yew::prelude::*;

use crate::board::BoardDocument;

/// Props for the BoardViewer component.
#[derive(Properties, PartialEq)]
pub struct BoardViewerProps {
    pub document: BoardDocument,
    pub selection: Vec<EntityId>,
    pub on_select: Callback<(EntityId, bool)>,
    /// Clicking empty space clears the selection.
    pub on_clear: Callback<()>,
}

#[function_component(BoardViewer)]
pub fn board_viewer(props: &BoardViewerProps) -> Html {
    let root = &props.document.root;
    let width = root.model.number("width").unwrap_or(800.0);
    let height = root.model.number("height").unwrap_or(600.0);
    let name = root.model.string("reportName").unwrap_or_default();

    let boxes = props.document.entities.iter().enumerate().map(|(id, entity)| {
        if entity.model.boolean("hidden") == Some(true) {
            return html! {};
        }
        let x = entity.model.number("x").unwrap_or(0.0);
        let y = entity.model.number("y").unwrap_or(0.0);
        let w = entity.model.number("width").unwrap_or(40.0);
        let h = entity.model.number("height").unwrap_or(40.0);
        let fill = match entity
            .model
            .get("fillStyle")
            .map_or(FillValue::None, PropertyValue::as_fill)
        {
            FillValue::Solid(color) => color,
            _ => "transparent".to_string(),
        };
        let alpha = entity.model.number("alpha").unwrap_or(1.0);
        let selected = props.selection.contains(&id);

        let on_click = {
            let on_select = props.on_select.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                on_select.emit((id, e.shift_key() || e.ctrl_key() || e.meta_key()));
            })
        };

        html! {
            <div
                key={id}
                class={classes!("viewer-box", selected.then_some("selected"))}
                style={format!(
                    "left:{x}px;top:{y}px;width:{w}px;height:{h}px;background-color:{fill};opacity:{alpha};"
                )}
                onclick={on_click}
            >
                <span class="viewer-box-label">
                    {entity.model.string("text").unwrap_or_else(|| {
                        entity.type_name().unwrap_or("component")
                    })}
                </span>
            </div>
        }
    });

    let on_background_click = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| {
            on_clear.emit(());
        })
    };

    html! {
        <div class="board-viewer" onclick={on_background_click}>
            <div class="viewer-header">{name}</div>
            <div
                class="viewer-surface"
                style={format!("width:{width}px;height:{height}px;")}
            >
                {for boxes}
            </div>
        </div>
    }
}
