//! Linkage panel: field choices for trigger/linker pairs and their validation.
//!
//! A linkage maps a grouping column of the triggering chart onto a string field of the
//! linked widget's view, so selecting a value in one chart filters the other.

use crate::board::types::{ChartGroupColumn, DataView, FieldValueType};
use crate::error::{Result, VizboardError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One trigger-column → linker-column mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewLinkageItem {
    #[serde(default)]
    pub same_view: bool,
    pub trigger_view_id: String,
    pub trigger_column: Option<String>,
    pub linker_view_id: String,
    pub linker_column: Option<String>,
    pub linker_id: String,
    pub linker_name: String,
}

/// Selectable field: the value stored on selection plus its type as a hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOption {
    pub key: String,
    pub value: String,
    pub value_type: FieldValueType,
}

/// Trigger choices are the chart's grouping columns
pub fn trigger_options(group_columns: &[ChartGroupColumn]) -> Vec<FieldOption> {
    group_columns
        .iter()
        .map(|column| FieldOption {
            key: column.uid.clone(),
            value: column.col_name.clone(),
            value_type: column.field_type,
        })
        .collect()
}

/// Linker choices are the string fields of the linker's view
pub fn linker_options(views: &HashMap<String, DataView>, item: &ViewLinkageItem) -> Vec<FieldOption> {
    let Some(view) = views.get(&item.linker_view_id) else {
        return Vec::new();
    };
    view.fields
        .iter()
        .filter(|field| field.field_type == FieldValueType::String)
        .map(|field| FieldOption {
            key: field.id.clone(),
            value: field.id.clone(),
            value_type: field.field_type,
        })
        .collect()
}

/// Every linkage needs both columns selected
pub fn validate_linkages(items: &[ViewLinkageItem]) -> Result<()> {
    for (index, item) in items.iter().enumerate() {
        if is_blank(&item.trigger_column) {
            return Err(VizboardError::invalid_argument(format!(
                "linkage {index}: trigger column is required"
            )));
        }
        if is_blank(&item.linker_column) {
            return Err(VizboardError::invalid_argument(format!(
                "linkage {index} ({}): linker column is required",
                item.linker_name
            )));
        }
    }
    Ok(())
}

fn is_blank(column: &Option<String>) -> bool {
    column.as_deref().map_or(true, |c| c.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::ViewField;

    fn views() -> HashMap<String, DataView> {
        let view = DataView {
            id: "orders".into(),
            name: "Orders".into(),
            fields: vec![
                ViewField::new("region", FieldValueType::String),
                ViewField::new("amount", FieldValueType::Numeric),
                ViewField::new("channel", FieldValueType::String),
            ],
        };
        HashMap::from([(view.id.clone(), view)])
    }

    fn item(trigger: Option<&str>, linker: Option<&str>) -> ViewLinkageItem {
        ViewLinkageItem {
            trigger_view_id: "sales".into(),
            trigger_column: trigger.map(str::to_string),
            linker_view_id: "orders".into(),
            linker_column: linker.map(str::to_string),
            linker_id: "chart-2".into(),
            linker_name: "Orders by region".into(),
            ..ViewLinkageItem::default()
        }
    }

    #[test]
    fn test_trigger_options_follow_group_columns() {
        let columns = vec![
            ChartGroupColumn {
                uid: "u1".into(),
                col_name: "region".into(),
                field_type: FieldValueType::String,
            },
            ChartGroupColumn {
                uid: "u2".into(),
                col_name: "order_date".into(),
                field_type: FieldValueType::Date,
            },
        ];
        let options = trigger_options(&columns);
        assert_eq!(options.len(), 2);
        assert_eq!(options[1].key, "u2");
        assert_eq!(options[1].value, "order_date");
        assert_eq!(options[1].value_type, FieldValueType::Date);
    }

    #[test]
    fn test_linker_options_only_strings() {
        let options = linker_options(&views(), &item(None, None));
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["region", "channel"]);
    }

    #[test]
    fn test_linker_options_unknown_view() {
        let mut unknown = item(None, None);
        unknown.linker_view_id = "nope".into();
        assert!(linker_options(&views(), &unknown).is_empty());
    }

    #[test]
    fn test_validate_linkages() {
        assert!(validate_linkages(&[]).is_ok());
        assert!(validate_linkages(&[item(Some("region"), Some("region"))]).is_ok());

        let err = validate_linkages(&[item(Some("region"), Some("region")), item(None, Some("x"))])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: linkage 1: trigger column is required"
        );

        let err = validate_linkages(&[item(Some("region"), Some(" "))]).unwrap_err();
        assert!(err.to_string().contains("linker column is required"));
    }
}
