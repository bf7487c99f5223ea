//! Board modeller UI components.

pub mod editors;
pub mod outliner;
pub mod sidebar;
pub mod toolbar;
pub mod viewer;

pub use outliner::Outliner;
pub use sidebar::PropertySidebar;
pub use toolbar::EditToolbar;
pub use viewer::BoardViewer;
