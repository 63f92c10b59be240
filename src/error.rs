//! Error types and handling infrastructure for vizboard.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types. The binary wraps these with `anyhow` for context at the
//! command-line boundary.
//!
//! ## Design Principles
//!
//! - **Fail fast**: Invalid container keys and malformed inputs are rejected before
//!   any registry mutation
//! - **Context preservation**: Render failures carry the container key that failed
//! - **Consistency**: Standardized Result type across all modules

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for vizboard operations.
#[derive(Error, Debug)]
pub enum VizboardError {
    /// Precondition violation (empty container key, incomplete linkage, ...)
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A downstream container renderer failed to produce output
    #[error("Render failed for container '{key}': {message}")]
    Render { key: String, message: String },

    /// File system related errors
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found specifically (common case for user feedback)
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Scenario file could not be parsed or contains an unusable step
    #[error("Scenario error: {message}")]
    ScenarioError { message: String },

    /// Generic error for cases not covered by specific variants
    #[error("Operation failed: {message}")]
    Other { message: String },
}

/// Standard Result type for vizboard operations.
pub type Result<T> = std::result::Result<T, VizboardError>;

impl VizboardError {
    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a Render error tagged with the failing container key
    pub fn render(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Render {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn scenario(message: impl Into<String>) -> Self {
        Self::ScenarioError {
            message: message.into(),
        }
    }

    /// Create a generic Other error with a descriptive message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for VizboardError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileError {
                message: "File not found".to_string(),
                source: err,
            },
            std::io::ErrorKind::PermissionDenied => Self::FileError {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::FileError {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}
