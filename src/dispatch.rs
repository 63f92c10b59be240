//! Chart container dispatch.
//!
//! Keeps every chart container that has been requested during an editor session mounted,
//! while only the most recently requested one is shown. Switching between containers is a
//! lookup plus a style change; nothing already built is recreated.
//!
//! - [`key`] - validated container identifiers
//! - [`style`] - layout hints and the visibility styling policy
//! - [`protocol`] - the contract between the multiplexer and downstream renderers
//! - [`multiplexer`] - the registry itself

pub mod key;
pub mod multiplexer;
pub mod protocol;
pub mod style;

pub use key::ContainerKey;
pub use multiplexer::{ContainerMultiplexer, ContainerSlot, MountId, RegistrySnapshot, SlotSnapshot};
pub use protocol::{ContainerFrame, ContainerRenderer, InputsOf, RenderInputs};
pub use style::{ContainerStyle, Offset, Placement, StyleHint, Visibility, VisibilityPolicy};
