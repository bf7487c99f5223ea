//! The property sidebar: tabbed panels over the current selection, and the
//! terminal consumer of every `property-change` patch.

use board_core::{EditorRegistry, PanelSource, PropertyPatch, PropertyTarget};
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use super::data_binding::DataBindingPanel;
use super::effects_panel::EffectsPanel;
use super::shape_panel::ShapePanel;
use super::specific_panel::SpecificPanel;
use super::style_panel::StylePanel;

/// Props for the PropertySidebar component.
#[derive(Properties, PartialEq)]
pub struct PropertySidebarProps {
    pub source: PanelSource,
    pub registry: EditorRegistry,
    pub collapsed: bool,
    /// One committed patch; the board state applies it as one undoable
    /// transaction against the pinned target.
    pub on_apply: Callback<PropertyPatch>,
    pub on_flash: Callback<String>,
}

#[function_component(PropertySidebar)]
pub fn property_sidebar(props: &PropertySidebarProps) -> Html {
    let tab = use_state(|| 0_usize);

    if props.collapsed {
        return html! {};
    }

    let (is_root, selected_count) = match &props.source.target {
        PropertyTarget::Root => (true, 0),
        PropertyTarget::Single(_) => (false, 1),
        PropertyTarget::Multiple(ids) => (false, ids.len()),
    };

    let tabs = [
        IconData::LUCIDE_LIST,
        IconData::LUCIDE_SQUARE,
        IconData::LUCIDE_TIMER,
        IconData::LUCIDE_SETTINGS_2,
        IconData::LUCIDE_SEND,
    ]
    .into_iter()
    .enumerate()
    .map(|(index, icon)| {
        let on_click = {
            let tab = tab.clone();
            Callback::from(move |_: MouseEvent| {
                tab.set(index);
            })
        };
        html! {
            <button
                key={index}
                class={classes!("sidebar-tab", (*tab == index).then_some("selected"))}
                onclick={on_click}
            >
                <Icon data={icon} width="16px" height="16px" />
            </button>
        }
    });

    let page = match *tab {
        0 => html! {
            <ShapePanel
                model={props.source.model.clone()}
                is_root={is_root}
                selected_count={selected_count}
                on_apply={props.on_apply.clone()}
            />
        },
        1 => html! {
            <StylePanel
                model={props.source.model.clone()}
                on_apply={props.on_apply.clone()}
            />
        },
        2 => html! {
            <EffectsPanel
                model={props.source.model.clone()}
                on_apply={props.on_apply.clone()}
            />
        },
        3 => html! {
            <SpecificPanel
                descriptors={props.source.descriptors.clone()}
                model={props.source.model.clone()}
                registry={props.registry.clone()}
                on_apply={props.on_apply.clone()}
            />
        },
        _ => html! {
            <DataBindingPanel
                model={props.source.model.clone()}
                on_apply={props.on_apply.clone()}
                on_flash={props.on_flash.clone()}
            />
        },
    };

    html! {
        <div class="property-sidebar">
            <div class="sidebar-tabs">{for tabs}</div>
            <div class="sidebar-page">{page}</div>
        </div>
    }
}
