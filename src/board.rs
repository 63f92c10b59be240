//! Dashboard editor data logic.
//!
//! Plain-data helpers behind the board editor's panels: the filter panel's relation wiring,
//! the linkage panel's field choices, and the dropdown controller's option list. Nothing here
//! touches a UI toolkit or a state store; callers pass records in and get records back.

pub mod controller;
pub mod linkage;
pub mod relation;
pub mod types;

pub use controller::{ControlOption, SelectController};
pub use linkage::{linker_options, trigger_options, validate_linkages, FieldOption, ViewLinkageItem};
pub use relation::{
    build_filter_relations, related_views_for, resolve_field_props,
    selected_widgets_from_relations, FieldProps, FilterPanelMode,
};
pub use types::{
    ChartGroupColumn, DataView, FieldCategory, FieldValueType, FilterToWidgetConfig,
    FilterVisibility, RelatedView, Relation, RelationConfig, ViewField, VisibilityCondition,
    Widget,
};
