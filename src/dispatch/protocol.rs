//! Contract between the container multiplexer and downstream renderers.

use crate::dispatch::key::ContainerKey;
use crate::dispatch::multiplexer::MountId;
use crate::dispatch::style::{ContainerStyle, Visibility};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// The inputs last supplied for one container. Opaque to the multiplexer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderInputs<P, D, C> {
    /// Chart specification
    pub payload: P,
    /// Rows/columns to plot
    pub dataset: D,
    /// Chart options
    pub configuration: C,
}

impl<P, D, C> RenderInputs<P, D, C> {
    pub fn new(payload: P, dataset: D, configuration: C) -> Self {
        Self {
            payload,
            dataset,
            configuration,
        }
    }
}

/// Everything a renderer needs to produce one container's output on a render pass.
#[derive(Debug)]
pub struct ContainerFrame<'a, P, D, C> {
    /// Key to tag the output with for reconciliation
    pub key: &'a ContainerKey,
    /// Assigned once when the container was first mounted
    pub mount_id: MountId,
    pub visibility: Visibility,
    pub style: ContainerStyle,
    pub inputs: &'a RenderInputs<P, D, C>,
    /// Host environment tag (e.g. `workbench`)
    pub editor_env: &'a str,
}

/// Downstream render capability invoked once per mounted container per render pass.
///
/// Implementations decide what a "renderable unit" is: a virtual-DOM node, a draw command
/// list, a test record. Errors are reported back to the caller tagged with the container key.
pub trait ContainerRenderer {
    type Payload;
    type Dataset;
    type Configuration;
    type Output;

    fn render(
        &mut self,
        frame: ContainerFrame<'_, Self::Payload, Self::Dataset, Self::Configuration>,
    ) -> Result<Self::Output>;
}

/// Input record type accepted by a given renderer
pub type InputsOf<R> = RenderInputs<
    <R as ContainerRenderer>::Payload,
    <R as ContainerRenderer>::Dataset,
    <R as ContainerRenderer>::Configuration,
>;
