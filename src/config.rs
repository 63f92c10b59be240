//! Configuration loading for vizboard.
//!
//! Settings live in a TOML file. When no explicit path is given the loader looks in
//! `<config_dir>/vizboard/config.toml` and falls back to defaults when that file is absent.

use crate::error::{Result, VizboardError};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Container id used when a host does not name one explicitly.
pub const DEFAULT_CONTAINER_ID: &str = "frame-container-1";

/// Environment tag handed to every container the multiplexer renders.
pub const DEFAULT_EDITOR_ENV: &str = "workbench";

/// Offset applied to hidden containers on both axes.
pub const DEFAULT_HIDDEN_OFFSET: i32 = -9999;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dispatch: DispatchConfig,
}

/// Settings for the chart container multiplexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Horizontal translation applied to inactive containers
    pub hidden_offset_x: i32,

    /// Vertical translation applied to inactive containers
    pub hidden_offset_y: i32,

    /// Container key used by hosts that omit one
    pub default_container: String,

    /// Environment tag passed through to renderers
    pub editor_env: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            hidden_offset_x: DEFAULT_HIDDEN_OFFSET,
            hidden_offset_y: DEFAULT_HIDDEN_OFFSET,
            default_container: DEFAULT_CONTAINER_ID.to_string(),
            editor_env: DEFAULT_EDITOR_ENV.to_string(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(text).map_err(|e| VizboardError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(VizboardError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|e| {
            VizboardError::file_error(format!("Failed to read config: {}", path.display()), e)
        })?;
        debug!("loaded configuration from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Load from `path` if given, otherwise from the default location.
    ///
    /// A missing default file is not an error; a malformed one is.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::load_from(&default),
                Some(default) => {
                    debug!("no config at {}, using defaults", default.display());
                    Ok(Self::default())
                }
                None => {
                    warn!("could not determine config directory, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// `<config_dir>/vizboard/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vizboard").join("config.toml"))
    }

    fn validate(&self) -> Result<()> {
        if self.dispatch.default_container.trim().is_empty() {
            return Err(VizboardError::config(
                "dispatch.default_container must not be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dispatch.hidden_offset_x, -9999);
        assert_eq!(config.dispatch.hidden_offset_y, -9999);
        assert_eq!(config.dispatch.default_container, "frame-container-1");
        assert_eq!(config.dispatch.editor_env, "workbench");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("[dispatch]\nhidden_offset_x = -5000\n").unwrap();
        assert_eq!(config.dispatch.hidden_offset_x, -5000);
        assert_eq!(config.dispatch.hidden_offset_y, -9999);
        assert_eq!(config.dispatch.editor_env, "workbench");
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_malformed_toml() {
        let err = Config::from_toml_str("[dispatch\n").unwrap_err();
        assert!(matches!(err, VizboardError::ConfigError { .. }));
    }

    #[test]
    fn test_blank_default_container_rejected() {
        let err = Config::from_toml_str("[dispatch]\ndefault_container = \"  \"\n").unwrap_err();
        assert!(matches!(err, VizboardError::ConfigError { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[dispatch]\neditor_env = \"board\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.dispatch.editor_env, "board");
    }

    #[test]
    fn test_explicit_missing_file() {
        let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, VizboardError::FileNotFound { .. }));
    }
}
