//! Property sidebar panels.

mod data_binding;
mod effects_panel;
mod mapper;
mod shape_panel;
#[allow(clippy::module_inception)]
mod sidebar;
mod specific_panel;
mod style_panel;
mod value_map;
mod value_range;

pub use sidebar::PropertySidebar;
