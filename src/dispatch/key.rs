//! Container identifiers.

use crate::error::{Result, VizboardError};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Stable identifier of a chart container slot.
///
/// Keys are non-empty and contain at least one non-whitespace character. The
/// original text is kept as given (no trimming) so hosts get back exactly the
/// key they supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContainerKey(String);

impl ContainerKey {
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(VizboardError::invalid_argument(
                "container key must not be empty",
            ));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ContainerKey {
    type Error = VizboardError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ContainerKey {
    type Error = VizboardError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ContainerKey> for String {
    fn from(key: ContainerKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ContainerKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets the registry be queried with plain `&str`.
impl Borrow<str> for ContainerKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_key() {
        let key = ContainerKey::new("frame-container-1").unwrap();
        assert_eq!(key.as_str(), "frame-container-1");
        assert_eq!(key.to_string(), "frame-container-1");
    }

    #[test]
    fn test_empty_and_blank_keys_rejected() {
        for raw in ["", " ", "\t\n"] {
            let err = ContainerKey::new(raw).unwrap_err();
            assert!(matches!(err, VizboardError::InvalidArgument { .. }));
        }
    }

    #[test]
    fn test_surrounding_whitespace_preserved() {
        let key = ContainerKey::new(" a ").unwrap();
        assert_eq!(key.as_str(), " a ");
        assert_ne!(key, ContainerKey::new("a").unwrap());
    }

    #[test]
    fn test_serde_validates() {
        let key: ContainerKey = serde_json::from_str("\"chart-7\"").unwrap();
        assert_eq!(key.as_str(), "chart-7");
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"chart-7\"");

        assert!(serde_json::from_str::<ContainerKey>("\"\"").is_err());
    }
}
