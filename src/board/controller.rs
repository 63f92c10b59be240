//! Dropdown-list filter controller options.

use serde::{Deserialize, Serialize};

/// One selectable entry. Either side may be missing; each falls back to the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlOption {
    pub label: Option<String>,
    pub value: Option<String>,
}

impl ControlOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            value: Some(value.into()),
        }
    }

    pub fn value_only(value: impl Into<String>) -> Self {
        Self {
            label: None,
            value: Some(value.into()),
        }
    }

    /// Reconciliation key: value, else label
    pub fn option_key(&self) -> &str {
        non_empty(&self.value)
            .or_else(|| non_empty(&self.label))
            .unwrap_or_default()
    }

    /// Text shown to the user: label, else value
    pub fn display_text(&self) -> &str {
        non_empty(&self.label)
            .or_else(|| non_empty(&self.value))
            .unwrap_or_default()
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Searchable single-select over a fixed option list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectController {
    options: Vec<ControlOption>,
    selected: Option<String>,
}

impl SelectController {
    pub fn new(options: Vec<ControlOption>) -> Self {
        Self {
            options,
            selected: None,
        }
    }

    /// Options whose display text contains `input`, ignoring case
    pub fn filter(&self, input: &str) -> Vec<&ControlOption> {
        let needle = input.to_lowercase();
        self.options
            .iter()
            .filter(|option| option.display_text().to_lowercase().contains(&needle))
            .collect()
    }

    /// Select by value; `None` clears. Returns false for a value not in the list.
    pub fn select(&mut self, value: Option<&str>) -> bool {
        match value {
            None => {
                self.selected = None;
                true
            }
            Some(value) => {
                let known = self
                    .options
                    .iter()
                    .any(|option| option.value.as_deref() == Some(value));
                if known {
                    self.selected = Some(value.to_string());
                }
                known
            }
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> SelectController {
        SelectController::new(vec![
            ControlOption::new("North America", "na"),
            ControlOption::new("Europe", "eu"),
            ControlOption::value_only("apac"),
        ])
    }

    #[test]
    fn test_key_and_text_fallbacks() {
        let labelled = ControlOption::new("Europe", "eu");
        assert_eq!(labelled.option_key(), "eu");
        assert_eq!(labelled.display_text(), "Europe");

        let bare = ControlOption::value_only("apac");
        assert_eq!(bare.option_key(), "apac");
        assert_eq!(bare.display_text(), "apac");

        let label_only = ControlOption {
            label: Some("Other".into()),
            value: Some(String::new()),
        };
        assert_eq!(label_only.option_key(), "Other");

        assert_eq!(ControlOption::default().display_text(), "");
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let c = controller();
        let hits: Vec<&str> = c.filter("EUR").iter().map(|o| o.option_key()).collect();
        assert_eq!(hits, vec!["eu"]);

        let hits: Vec<&str> = c.filter("a").iter().map(|o| o.option_key()).collect();
        assert_eq!(hits, vec!["na", "apac"]);
    }

    #[test]
    fn test_empty_filter_returns_all() {
        assert_eq!(controller().filter("").len(), 3);
    }

    #[test]
    fn test_select_and_clear() {
        let mut c = controller();
        assert!(c.select(Some("eu")));
        assert_eq!(c.selected(), Some("eu"));

        assert!(!c.select(Some("mars")));
        assert_eq!(c.selected(), Some("eu"));

        assert!(c.select(None));
        assert_eq!(c.selected(), None);
    }
}
