//! Board records as the editor persists them.
//!
//! Field names serialize in camelCase so the records round-trip with the dashboard's stored
//! JSON.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Value type of a data-view field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldValueType {
    #[default]
    String,
    Numeric,
    Date,
}

/// Whether a filter binds to a column or to a query variable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldCategory {
    #[default]
    Field,
    Variable,
}

/// Column metadata of a data view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewField {
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: FieldValueType,
}

impl ViewField {
    pub fn new(id: impl Into<String>, field_type: FieldValueType) -> Self {
        Self {
            id: id.into(),
            field_type,
        }
    }
}

/// A data view (query) that widgets read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataView {
    pub id: String,
    pub name: String,
    #[serde(default, rename = "meta")]
    pub fields: Vec<ViewField>,
}

/// A board widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub view_ids: Vec<String>,
    #[serde(default)]
    pub relations: Vec<Relation>,
}

impl Widget {
    pub fn new(id: impl Into<String>, view_ids: Vec<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            view_ids,
            relations: Vec::new(),
        }
    }
}

/// Directed association between two widgets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub id: Uuid,
    pub source_id: String,
    pub target_id: String,
    pub config: RelationConfig,
}

/// Relation payload, tagged by `type`.
///
/// Stored as `{ "type": "filterToWidget", "filterToWidget": { "widgetRelatedViewIds": [..] } }`
/// or `{ "type": "filterToFilter" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RelationConfig {
    /// A filter drives a widget through the listed views
    #[serde(rename_all = "camelCase")]
    FilterToWidget { filter_to_widget: FilterToWidgetConfig },
    /// A filter's visibility depends on another filter
    FilterToFilter,
}

impl RelationConfig {
    pub fn filter_to_widget(widget_related_view_ids: Vec<String>) -> Self {
        Self::FilterToWidget {
            filter_to_widget: FilterToWidgetConfig {
                widget_related_view_ids,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterToWidgetConfig {
    #[serde(default)]
    pub widget_related_view_ids: Vec<String>,
}

/// Binding of a filter to one view's field or variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedView {
    pub view_id: String,
    pub related_category: FieldCategory,
    #[serde(default)]
    pub field_value: String,
    pub field_value_type: Option<FieldValueType>,
}

impl RelatedView {
    /// Unbound entry for `view_id`
    pub fn unbound(view_id: impl Into<String>) -> Self {
        Self {
            view_id: view_id.into(),
            related_category: FieldCategory::Field,
            field_value: String::new(),
            field_value_type: Some(FieldValueType::String),
        }
    }
}

/// When a filter is displayed, tagged by `visibilityType`.
///
/// A conditional visibility nests its details:
/// `{ "visibilityType": "condition", "condition": { "dependentFilterId": .. } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "visibilityType", rename_all = "camelCase")]
pub enum FilterVisibility {
    #[default]
    Show,
    Hide,
    /// Shown depending on another filter's value
    Condition { condition: VisibilityCondition },
}

impl FilterVisibility {
    pub fn condition(dependent_filter_id: impl Into<String>) -> Self {
        Self::Condition {
            condition: VisibilityCondition {
                dependent_filter_id: dependent_filter_id.into(),
            },
        }
    }

    /// Filter this one's visibility depends on, if any
    pub fn dependent_filter_id(&self) -> Option<&str> {
        match self {
            Self::Condition { condition } => Some(&condition.dependent_filter_id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityCondition {
    pub dependent_filter_id: String,
}

/// Grouping column of a chart, offered as a linkage trigger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartGroupColumn {
    pub uid: String,
    pub col_name: String,
    #[serde(rename = "type")]
    pub field_type: FieldValueType,
}
