mod memory_container;

pub use memory_container::MemoryContainer;

use serde::{Deserialize, Serialize};

use crate::core::{RING_SIZE, Slot};

/// Full slot layout pushed to the container after every ring change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotFrame {
    /// Slots in physical child order.
    pub slots: [Slot; RING_SIZE],
    /// Duration hosts should use for tag-keyed transitions.
    pub transition_ms: f64,
}

impl SlotFrame {
    /// Display texts in physical child order.
    #[must_use]
    pub fn texts(&self) -> [String; RING_SIZE] {
        self.slots.map(Slot::text)
    }
}

/// Contract implemented by whatever hosts a field's five slots.
///
/// The field fully owns the container's children: after construction it
/// rewrites them through `apply` and never reads them back.
pub trait SlotContainer {
    /// Text of the "active" marker at construction time, if present.
    fn active_text(&self) -> Option<String>;

    /// Current height of the field in pixels, used for edge-hold zones.
    ///
    /// Non-positive or non-finite heights disable edge-hold auto-repeat.
    fn height_px(&self) -> f64;

    fn apply(&mut self, frame: &SlotFrame);
}
