//! Layout hints and visibility styling for chart containers.
//!
//! Inactive containers stay mounted but are translated far outside the viewport and taken
//! out of normal flow. The active container gets its normal layout position back.

use crate::config::{DispatchConfig, DEFAULT_HIDDEN_OFFSET};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Optional layout dimensions supplied by the host on each render pass (pixels)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleHint {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl StyleHint {
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }
}

/// Whether a container is the one currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    pub fn is_shown(self) -> bool {
        matches!(self, Visibility::Shown)
    }
}

/// Translation applied to a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Offset {
    None,
    Translate { x: i32, y: i32 },
}

/// How the container participates in layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Normal document flow
    Relative,
    /// Removed from flow
    Absolute,
}

/// Final style handed to a renderer: the host's hint merged with visibility styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerStyle {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub offset: Offset,
    pub placement: Placement,
}

impl ContainerStyle {
    /// Render as CSS declarations, e.g. `width: 400px; transform: none; position: relative`
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(width) = self.width {
            let _ = write!(css, "width: {width}px; ");
        }
        if let Some(height) = self.height {
            let _ = write!(css, "height: {height}px; ");
        }
        match self.offset {
            Offset::None => css.push_str("transform: none; "),
            Offset::Translate { x, y } => {
                let _ = write!(css, "transform: translate({x}px, {y}px); ");
            }
        }
        css.push_str(match self.placement {
            Placement::Relative => "position: relative",
            Placement::Absolute => "position: absolute",
        });
        css
    }
}

/// Maps a container's visibility to its style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityPolicy {
    pub hidden_offset_x: i32,
    pub hidden_offset_y: i32,
}

impl Default for VisibilityPolicy {
    fn default() -> Self {
        Self {
            hidden_offset_x: DEFAULT_HIDDEN_OFFSET,
            hidden_offset_y: DEFAULT_HIDDEN_OFFSET,
        }
    }
}

impl From<&DispatchConfig> for VisibilityPolicy {
    fn from(config: &DispatchConfig) -> Self {
        Self {
            hidden_offset_x: config.hidden_offset_x,
            hidden_offset_y: config.hidden_offset_y,
        }
    }
}

impl VisibilityPolicy {
    pub fn style_for(&self, visibility: Visibility, hint: &StyleHint) -> ContainerStyle {
        match visibility {
            Visibility::Shown => ContainerStyle {
                width: hint.width,
                height: hint.height,
                offset: Offset::None,
                placement: Placement::Relative,
            },
            Visibility::Hidden => ContainerStyle {
                width: hint.width,
                height: hint.height,
                offset: Offset::Translate {
                    x: self.hidden_offset_x,
                    y: self.hidden_offset_y,
                },
                placement: Placement::Absolute,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shown_style() {
        let style = VisibilityPolicy::default().style_for(Visibility::Shown, &StyleHint::sized(400, 300));
        assert_eq!(style.offset, Offset::None);
        assert_eq!(style.placement, Placement::Relative);
        assert_eq!(style.width, Some(400));
        assert_eq!(style.height, Some(300));
    }

    #[test]
    fn test_hidden_style() {
        let style = VisibilityPolicy::default().style_for(Visibility::Hidden, &StyleHint::default());
        assert_eq!(style.offset, Offset::Translate { x: -9999, y: -9999 });
        assert_eq!(style.placement, Placement::Absolute);
        assert_eq!(style.width, None);
    }

    #[test]
    fn test_policy_from_config() {
        let config = DispatchConfig {
            hidden_offset_x: -100,
            hidden_offset_y: -200,
            ..DispatchConfig::default()
        };
        let style = VisibilityPolicy::from(&config).style_for(Visibility::Hidden, &StyleHint::default());
        assert_eq!(style.offset, Offset::Translate { x: -100, y: -200 });
    }

    #[test]
    fn test_css_output() {
        let policy = VisibilityPolicy::default();
        let shown = policy.style_for(Visibility::Shown, &StyleHint::sized(640, 480));
        assert_eq!(
            shown.to_css(),
            "width: 640px; height: 480px; transform: none; position: relative"
        );

        let hidden = policy.style_for(Visibility::Hidden, &StyleHint::default());
        assert_eq!(
            hidden.to_css(),
            "transform: translate(-9999px, -9999px); position: absolute"
        );
    }

    #[test]
    fn test_visibility_flag() {
        assert!(Visibility::Shown.is_shown());
        assert!(!Visibility::Hidden.is_shown());
    }
}
