//! # vizboard - Dashboard Editor Core
//!
//! Library pieces of a BI dashboard editor that are worth having outside a UI toolkit.
//!
//! ## Features
//!
//! - **Container multiplexing**: Every chart container requested in a session stays mounted;
//!   only the latest is shown, so switching previews never rebuilds a chart
//! - **Filter wiring**: Relation and related-view construction for dropdown filters
//! - **Linkage fields**: Trigger/linker field choices and validation
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`config`] - TOML configuration
//! - [`dispatch`] - Keyed render cache / visibility multiplexer
//! - [`board`] - Filter, linkage, and controller data logic
//! - [`app`] - Scenario replay host used by the CLI

pub mod error;
pub mod config;

pub mod board;
pub mod dispatch;

pub mod app;

// Re-export commonly used types for convenience
pub use error::{Result, VizboardError};

pub use app::Application;
pub use config::Config;
pub use dispatch::{ContainerMultiplexer, ContainerRenderer, RenderInputs, StyleHint};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
