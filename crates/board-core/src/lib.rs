//! Board Modeller Core Library
//!
//! The property-patch protocol behind the board modeller UI: typed property
//! values, the value coercer, editor state machines (color stops, fill
//! variants), data-binding mappings, the schema-driven field builder, and the
//! selection-aware patch applier.
//!
//! Everything here is plain data plus pure state transitions, so the whole
//! crate tests natively. The browser layer lives in `board-client`.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod binding;
pub mod builder;
pub mod coerce;
pub mod color;
pub mod fill;
pub mod property;
pub mod scene;
pub mod stops;
pub mod style;
pub mod table;
pub mod value;

pub use binding::{
    CellKind, CellValue, KeyKind, Mapping, MappingRule, ValueMap, ValueRange, enabled_slots,
    normalize_target, value_kind_for,
};
pub use builder::{BoundField, build_fields, commit};
pub use coerce::{RawInput, coerce, to_degrees, to_radians};
pub use color::{Color, ColorParseError};
pub use fill::{FillKind, FillStyleState, FillValue, GradientKind, GradientValue, PatternValue};
pub use property::{
    EditorRegistry, OptionItem, OptionSpec, PropertyDescriptor, PropertyType, default_value,
};
pub use scene::{
    Entity, EntityId, PanelSource, PatchTarget, PropertyTarget, Scene, Transaction, apply_patch,
    panel_source,
};
pub use stops::{ColorStop, FocusedStop, StopBarMode, StopPicker};
pub use value::{Model, PropertyPatch, PropertyValue};
