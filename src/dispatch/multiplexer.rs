//! Keyed render cache that keeps every requested chart container mounted.
//!
//! Each render request names a container. The multiplexer records the request's inputs
//! under that key, mounts a new slot the first time the key is seen, makes it the active
//! container, and then renders *every* mounted slot: the active one in normal flow, the rest
//! translated off-screen. Hosts mount all outputs, so switching back to an earlier chart is a
//! restyle rather than a rebuild and the chart keeps its internal state.
//!
//! Slots are never evicted individually. A long session that cycles through many distinct
//! keys grows the registry until [`ContainerMultiplexer::reset`] is called, which hosts do
//! when the editor session closes.

use crate::config::DispatchConfig;
use crate::dispatch::key::ContainerKey;
use crate::dispatch::protocol::{ContainerFrame, ContainerRenderer, InputsOf, RenderInputs};
use crate::dispatch::style::{StyleHint, Visibility, VisibilityPolicy};
use crate::error::{Result, VizboardError};
use indexmap::IndexMap;
use log::{debug, info, trace};
use serde::Serialize;

/// Identity of a mounted slot. Assigned once per mount and never reused.
pub type MountId = u64;

/// One mounted container: its key, mount identity, and latest inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerSlot<P, D, C> {
    pub key: ContainerKey,
    pub mount_id: MountId,
    pub inputs: RenderInputs<P, D, C>,
}

/// Owns the container registry for one editor session.
pub struct ContainerMultiplexer<R: ContainerRenderer> {
    renderer: R,
    policy: VisibilityPolicy,
    editor_env: String,
    active: Option<ContainerKey>,
    /// Insertion order is first-seen order and is the output order
    slots: IndexMap<ContainerKey, ContainerSlot<R::Payload, R::Dataset, R::Configuration>>,
    next_mount_id: MountId,
}

impl<R: ContainerRenderer> ContainerMultiplexer<R> {
    /// Create a multiplexer with settings from `config`
    pub fn new(renderer: R, config: &DispatchConfig) -> Self {
        Self {
            renderer,
            policy: VisibilityPolicy::from(config),
            editor_env: config.editor_env.clone(),
            active: None,
            slots: IndexMap::new(),
            next_mount_id: 1,
        }
    }

    /// Create a multiplexer with default settings
    pub fn with_defaults(renderer: R) -> Self {
        Self::new(renderer, &DispatchConfig::default())
    }

    /// Show `key` with `inputs` and render every mounted container.
    ///
    /// Returns one output per mounted container in first-seen order. The container named by
    /// `key` is rendered shown, every other one hidden.
    ///
    /// # Errors
    /// * `InvalidArgument` if `key` is empty or blank; the registry is left untouched
    /// * `Render` if the renderer fails for any container; the request itself stays recorded
    pub fn request_render(
        &mut self,
        key: &str,
        inputs: InputsOf<R>,
        hint: StyleHint,
    ) -> Result<Vec<R::Output>> {
        let key = ContainerKey::new(key)?;
        self.switch_container(key, inputs);
        self.render_all(&hint)
    }

    /// Drop every mounted container and clear the active key.
    pub fn reset(&mut self) {
        let purged = self.slots.len();
        self.slots.clear();
        self.active = None;
        info!("container registry reset, {purged} container(s) purged");
    }

    fn switch_container(&mut self, key: ContainerKey, inputs: InputsOf<R>) {
        if let Some(slot) = self.slots.get_mut(&key) {
            slot.inputs = inputs;
        } else {
            let mount_id = self.next_mount_id;
            self.next_mount_id += 1;
            debug!("mounting container '{key}' as mount #{mount_id}");
            self.slots.insert(
                key.clone(),
                ContainerSlot {
                    key: key.clone(),
                    mount_id,
                    inputs,
                },
            );
        }
        self.active = Some(key);
    }

    fn render_all(&mut self, hint: &StyleHint) -> Result<Vec<R::Output>> {
        trace!(
            "render pass over {} container(s), active = {:?}",
            self.slots.len(),
            self.active.as_ref().map(ContainerKey::as_str)
        );

        let mut outputs = Vec::with_capacity(self.slots.len());
        for (key, slot) in &self.slots {
            let visibility = if self.active.as_ref() == Some(key) {
                Visibility::Shown
            } else {
                Visibility::Hidden
            };
            let frame = ContainerFrame {
                key,
                mount_id: slot.mount_id,
                visibility,
                style: self.policy.style_for(visibility, hint),
                inputs: &slot.inputs,
                editor_env: &self.editor_env,
            };
            let output = self.renderer.render(frame).map_err(|err| match err {
                VizboardError::Render { .. } => err,
                other => VizboardError::render(key.as_str(), other.to_string()),
            })?;
            outputs.push(output);
        }
        Ok(outputs)
    }

    /// Currently shown container, `None` before the first request and after a reset
    pub fn active_key(&self) -> Option<&ContainerKey> {
        self.active.as_ref()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    /// Mounted keys in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = &ContainerKey> {
        self.slots.keys()
    }

    /// Latest inputs recorded for `key`
    pub fn inputs(&self, key: &str) -> Option<&InputsOf<R>> {
        self.slots.get(key).map(|slot| &slot.inputs)
    }

    pub fn mount_id(&self, key: &str) -> Option<MountId> {
        self.slots.get(key).map(|slot| slot.mount_id)
    }

    pub fn policy(&self) -> &VisibilityPolicy {
        &self.policy
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Inspectable view of the registry, serializable when the inputs are
    pub fn snapshot(&self) -> RegistrySnapshot<'_, R::Payload, R::Dataset, R::Configuration> {
        RegistrySnapshot {
            active: self.active.as_ref(),
            containers: self
                .slots
                .values()
                .map(|slot| SlotSnapshot {
                    key: &slot.key,
                    mount_id: slot.mount_id,
                    visibility: if self.active.as_ref() == Some(&slot.key) {
                        Visibility::Shown
                    } else {
                        Visibility::Hidden
                    },
                    inputs: &slot.inputs,
                })
                .collect(),
        }
    }
}

/// Borrowed view of the whole registry
#[derive(Debug, Serialize)]
pub struct RegistrySnapshot<'a, P, D, C> {
    pub active: Option<&'a ContainerKey>,
    pub containers: Vec<SlotSnapshot<'a, P, D, C>>,
}

/// Borrowed view of one slot
#[derive(Debug, Serialize)]
pub struct SlotSnapshot<'a, P, D, C> {
    pub key: &'a ContainerKey,
    pub mount_id: MountId,
    pub visibility: Visibility,
    pub inputs: &'a RenderInputs<P, D, C>,
}
