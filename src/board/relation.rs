//! Filter panel wiring: which views a filter binds to and which relations it persists.

use crate::board::types::{
    DataView, FieldCategory, FieldValueType, FilterVisibility, RelatedView, Relation,
    RelationConfig, Widget,
};
use log::debug;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Whether the filter panel creates a new filter or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterPanelMode {
    Add,
    Edit { filter_id: String },
}

impl FilterPanelMode {
    /// Id the relations should originate from; a new filter gets a fresh id
    pub fn source_id(&self) -> String {
        match self {
            FilterPanelMode::Add => Uuid::new_v4().to_string(),
            FilterPanelMode::Edit { filter_id } => filter_id.clone(),
        }
    }
}

/// Value type and category a filter takes on from its bound views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldProps {
    pub value_type: FieldValueType,
    pub category: FieldCategory,
}

/// One unbound [`RelatedView`] per distinct view used by the selected widgets.
///
/// Views are listed in selection order; widgets or views that no longer exist are skipped.
pub fn related_views_for(
    selected_widget_ids: &[String],
    widgets: &HashMap<String, Widget>,
    views: &HashMap<String, DataView>,
) -> Vec<RelatedView> {
    let mut seen = HashSet::new();
    let mut related = Vec::new();

    for widget_id in selected_widget_ids {
        let Some(widget) = widgets.get(widget_id) else {
            continue;
        };
        for view_id in &widget.view_ids {
            if !views.contains_key(view_id) || !seen.insert(view_id.as_str()) {
                continue;
            }
            related.push(RelatedView::unbound(view_id.clone()));
        }
    }
    related
}

/// Derive the filter's field props from the views that actually have a field bound.
///
/// The first bound view decides the value type. Any bound variable makes the whole filter a
/// variable filter. With nothing bound the result is the default (String, Field): the
/// category is reset rather than carried over from the filter's previous state, so callers
/// that want to keep an earlier category must do so themselves.
pub fn resolve_field_props(related_views: &[RelatedView]) -> FieldProps {
    let bound: Vec<&RelatedView> = related_views
        .iter()
        .filter(|view| !view.field_value.is_empty() && view.field_value_type.is_some())
        .collect();

    let Some(first) = bound.first() else {
        return FieldProps::default();
    };

    let category = if bound
        .iter()
        .any(|view| view.related_category == FieldCategory::Variable)
    {
        FieldCategory::Variable
    } else {
        FieldCategory::Field
    };

    FieldProps {
        value_type: first.field_value_type.unwrap_or_default(),
        category,
    }
}

/// Relations a filter persists: one per selected widget that still exists, plus a
/// filter-to-filter relation when its visibility depends on another filter.
pub fn build_filter_relations(
    source_id: &str,
    selected_widget_ids: &[String],
    widgets: &HashMap<String, Widget>,
    visibility: &FilterVisibility,
) -> Vec<Relation> {
    let mut relations: Vec<Relation> = selected_widget_ids
        .iter()
        .filter_map(|widget_id| widgets.get(widget_id))
        .map(|widget| Relation {
            id: Uuid::new_v4(),
            source_id: source_id.to_string(),
            target_id: widget.id.clone(),
            config: RelationConfig::filter_to_widget(widget.view_ids.clone()),
        })
        .collect();

    if let Some(dependent_filter_id) = visibility.dependent_filter_id() {
        relations.push(Relation {
            id: Uuid::new_v4(),
            source_id: source_id.to_string(),
            target_id: dependent_filter_id.to_string(),
            config: RelationConfig::FilterToFilter,
        });
    }

    debug!(
        "built {} relation(s) for filter {source_id}",
        relations.len()
    );
    relations
}

/// Widgets a persisted filter drives, in relation order
pub fn selected_widgets_from_relations(relations: &[Relation]) -> Vec<String> {
    relations
        .iter()
        .filter(|relation| matches!(relation.config, RelationConfig::FilterToWidget { .. }))
        .map(|relation| relation.target_id.clone())
        .collect()
}
