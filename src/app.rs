//! Application orchestration layer
//!
//! Replays a scenario of chart-preview requests against a [`ContainerMultiplexer`], the way a
//! chart workbench drives it while the user flips between previews. Used by the CLI and by
//! integration tests.

use crate::config::Config;
use crate::dispatch::{
    ContainerFrame, ContainerMultiplexer, ContainerRenderer, MountId, RenderInputs, StyleHint,
    Visibility,
};
use crate::error::{Result, VizboardError};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// A sequence of host requests
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Step {
    Render(RenderStep),
    /// Editor session closed
    Reset,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RenderStep {
    /// Falls back to the configured default container
    pub container: Option<String>,
    #[serde(default)]
    pub payload: Value,
    #[serde(default)]
    pub dataset: Value,
    #[serde(default)]
    pub configuration: Value,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Scenario {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let scenario: Scenario =
            toml::from_str(text).map_err(|e| VizboardError::scenario(e.to_string()))?;
        if scenario.steps.is_empty() {
            return Err(VizboardError::scenario("scenario has no steps"));
        }
        Ok(scenario)
    }

    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(VizboardError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = tokio::fs::read_to_string(path).await.map_err(|e| {
            VizboardError::file_error(format!("Failed to read scenario: {}", path.display()), e)
        })?;
        Self::from_toml_str(&text)
    }
}

/// Textual stand-in for a mounted chart container
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerPreview {
    pub key: String,
    pub mount_id: MountId,
    pub visibility: Visibility,
    pub css: String,
    pub payload: String,
}

/// Renders each container frame as a [`ContainerPreview`]
#[derive(Debug, Default)]
pub struct PreviewRenderer;

impl ContainerRenderer for PreviewRenderer {
    type Payload = Value;
    type Dataset = Value;
    type Configuration = Value;
    type Output = ContainerPreview;

    fn render(&mut self, frame: ContainerFrame<'_, Value, Value, Value>) -> Result<ContainerPreview> {
        Ok(ContainerPreview {
            key: frame.key.to_string(),
            mount_id: frame.mount_id,
            visibility: frame.visibility,
            css: frame.style.to_css(),
            payload: frame.inputs.payload.to_string(),
        })
    }
}

/// Outcome of one scenario step
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum StepReport {
    Render {
        step: usize,
        containers: Vec<ContainerPreview>,
    },
    Reset {
        step: usize,
    },
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepReport::Render { step, containers } => {
                writeln!(f, "step {step}: render ({} mounted)", containers.len())?;
                for c in containers {
                    let marker = if c.visibility.is_shown() { '*' } else { ' ' };
                    writeln!(
                        f,
                        "  {marker} {} #{} [{}] {}",
                        c.key, c.mount_id, c.css, c.payload
                    )?;
                }
                Ok(())
            }
            StepReport::Reset { step } => writeln!(f, "step {step}: reset"),
        }
    }
}

/// Application orchestrator - owns one editor session's multiplexer
pub struct Application {
    scenario: Scenario,
    default_container: String,
    multiplexer: ContainerMultiplexer<PreviewRenderer>,
}

impl Application {
    /// Load the scenario at `scenario_path` and set up a fresh session
    pub async fn new(scenario_path: &Path, config: Config) -> Result<Self> {
        let scenario = Scenario::load(scenario_path).await?;
        Ok(Self::with_scenario(scenario, config))
    }

    pub fn with_scenario(scenario: Scenario, config: Config) -> Self {
        Self {
            scenario,
            default_container: config.dispatch.default_container.clone(),
            multiplexer: ContainerMultiplexer::new(PreviewRenderer, &config.dispatch),
        }
    }

    /// Replay every step in order, handing each report to `on_step` as soon as the step
    /// completes.
    ///
    /// Replay stops at the first failing step. Reports for the steps before it have already
    /// been delivered, so hosts still see the registry state leading up to the failure.
    pub fn run_with(&mut self, mut on_step: impl FnMut(StepReport)) -> Result<()> {
        for (index, step) in self.scenario.steps.iter().enumerate() {
            let step_no = index + 1;
            match step {
                Step::Render(render) => {
                    let key = render
                        .container
                        .as_deref()
                        .unwrap_or(self.default_container.as_str());
                    debug!("step {step_no}: render '{key}'");
                    let containers = self.multiplexer.request_render(
                        key,
                        RenderInputs::new(
                            render.payload.clone(),
                            render.dataset.clone(),
                            render.configuration.clone(),
                        ),
                        StyleHint {
                            width: render.width,
                            height: render.height,
                        },
                    )?;
                    on_step(StepReport::Render {
                        step: step_no,
                        containers,
                    });
                }
                Step::Reset => {
                    self.multiplexer.reset();
                    on_step(StepReport::Reset { step: step_no });
                }
            }
        }
        Ok(())
    }

    /// Replay every step and collect the reports. Use [`Application::run_with`] to keep the
    /// reports of a replay that fails part-way.
    pub fn run(&mut self) -> Result<Vec<StepReport>> {
        let mut reports = Vec::with_capacity(self.scenario.steps.len());
        self.run_with(|report| reports.push(report))?;
        Ok(reports)
    }

    pub fn multiplexer(&self) -> &ContainerMultiplexer<PreviewRenderer> {
        &self.multiplexer
    }

    /// Registry state as pretty JSON
    pub fn snapshot_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.multiplexer.snapshot())
            .map_err(|e| VizboardError::other(format!("failed to serialize snapshot: {e}")))
    }
}
