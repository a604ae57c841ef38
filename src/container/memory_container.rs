use crate::container::{SlotContainer, SlotFrame};
use crate::core::RING_SIZE;

/// In-memory container used by tests and headless hosts.
///
/// Records the latest frame and how many frames were applied.
#[derive(Debug, Clone, Default)]
pub struct MemoryContainer {
    pub seed_text: Option<String>,
    pub height_px: f64,
    pub last_frame: Option<SlotFrame>,
    pub frame_count: usize,
}

impl MemoryContainer {
    /// Container whose active marker reads `seed_text`.
    #[must_use]
    pub fn new(seed_text: impl Into<String>) -> Self {
        Self {
            seed_text: Some(seed_text.into()),
            height_px: 150.0,
            ..Self::default()
        }
    }

    /// Container without an active marker.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            height_px: 150.0,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_height(mut self, height_px: f64) -> Self {
        self.height_px = height_px;
        self
    }

    /// Texts of the last applied frame in child order.
    #[must_use]
    pub fn rendered_texts(&self) -> Option<[String; RING_SIZE]> {
        self.last_frame.as_ref().map(SlotFrame::texts)
    }
}

impl SlotContainer for MemoryContainer {
    fn active_text(&self) -> Option<String> {
        self.seed_text.clone()
    }

    fn height_px(&self) -> f64 {
        self.height_px
    }

    fn apply(&mut self, frame: &SlotFrame) {
        self.last_frame = Some(*frame);
        self.frame_count += 1;
    }
}
