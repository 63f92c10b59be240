//! Property tests for the container multiplexer's registry invariants.

use proptest::prelude::*;
use vizboard::dispatch::{
    ContainerFrame, ContainerMultiplexer, ContainerRenderer, MountId, Offset, RenderInputs,
    StyleHint, Visibility,
};

#[derive(Debug, Clone)]
struct Frame {
    key: String,
    mount_id: MountId,
    visibility: Visibility,
    offset: Offset,
    payload: u32,
}

struct FrameRenderer;

impl ContainerRenderer for FrameRenderer {
    type Payload = u32;
    type Dataset = ();
    type Configuration = ();
    type Output = Frame;

    fn render(&mut self, frame: ContainerFrame<'_, u32, (), ()>) -> vizboard::Result<Frame> {
        Ok(Frame {
            key: frame.key.to_string(),
            mount_id: frame.mount_id,
            visibility: frame.visibility,
            offset: frame.style.offset,
            payload: frame.inputs.payload,
        })
    }
}

#[derive(Debug, Clone)]
enum Op {
    Render { key: usize, payload: u32 },
    Reset,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => (0usize..6, any::<u32>()).prop_map(|(key, payload)| Op::Render { key, payload }),
        1 => Just(Op::Reset),
    ]
}

const KEYS: [&str; 6] = ["A", "B", "C", "chart-1", "chart-2", "frame-container-1"];

proptest! {
    #[test]
    fn registry_tracks_a_simple_model(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let mut mux = ContainerMultiplexer::with_defaults(FrameRenderer);
        // model: first-seen order, latest payload, mount id per key
        let mut order: Vec<&str> = Vec::new();
        let mut latest: std::collections::HashMap<&str, u32> = Default::default();
        let mut mounts: std::collections::HashMap<String, MountId> = Default::default();

        for op in ops {
            match op {
                Op::Reset => {
                    mux.reset();
                    order.clear();
                    latest.clear();
                    mounts.clear();
                    prop_assert!(mux.is_empty());
                    prop_assert!(mux.active_key().is_none());
                }
                Op::Render { key, payload } => {
                    let key = KEYS[key];
                    if !order.contains(&key) {
                        order.push(key);
                    }
                    latest.insert(key, payload);

                    let frames = mux
                        .request_render(key, RenderInputs::new(payload, (), ()), StyleHint::default())
                        .unwrap();

                    // one output per distinct key, in first-seen order
                    let keys: Vec<&str> = frames.iter().map(|f| f.key.as_str()).collect();
                    prop_assert_eq!(&keys, &order);
                    prop_assert_eq!(mux.len(), order.len());

                    // exactly one shown, and it is the requested key
                    let shown: Vec<&Frame> = frames.iter().filter(|f| f.visibility == Visibility::Shown).collect();
                    prop_assert_eq!(shown.len(), 1);
                    prop_assert_eq!(shown[0].key.as_str(), key);
                    prop_assert_eq!(shown[0].offset, Offset::None);

                    for frame in &frames {
                        // freshest inputs for every key
                        prop_assert_eq!(frame.payload, latest[frame.key.as_str()]);
                        if frame.visibility == Visibility::Hidden {
                            prop_assert_ne!(frame.offset, Offset::None);
                        }
                        // mount identity never changes while mounted
                        let known = *mounts.entry(frame.key.clone()).or_insert(frame.mount_id);
                        prop_assert_eq!(known, frame.mount_id);
                    }
                }
            }
        }
    }
}
