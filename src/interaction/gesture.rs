use serde::{Deserialize, Serialize};

use crate::core::Direction;
use crate::interaction::timers::TimerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Phase of the per-field gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
    AutoRepeating,
    /// Coasting after a fast release; no pointer is down.
    Inertia,
}

/// Transient record of one interaction. Reset to default between interactions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    pub phase: GesturePhase,
    pub source: Option<PointerSource>,
    pub origin_y: f64,
    pub last_y: f64,
    /// Sum of absolute move deltas since the interaction started.
    pub accumulated_delta_px: f64,
    pub start_ms: f64,
    pub last_move_ms: f64,
    /// Time of the last committed step triggered by this interaction.
    pub last_step_ms: Option<f64>,
    pub direction: Direction,
    pub velocity_px_per_sec: f64,
    /// Start of the current auto-repeat hold, used by the acceleration curve.
    pub hold_start_ms: f64,
    pub inertia_speed: f64,
    pub inertia_last_frame_ms: f64,
    pub inertia_frames: u32,
    pub auto_repeat_timer: Option<TimerId>,
    pub continuous_hold_timer: Option<TimerId>,
    pub inertia_timer: Option<TimerId>,
}

impl GestureState {
    /// Fresh state for a pointer going down at `y`.
    #[must_use]
    pub fn pressed(source: PointerSource, y: f64, now_ms: f64) -> Self {
        Self {
            phase: GesturePhase::Dragging,
            source: Some(source),
            origin_y: y,
            last_y: y,
            start_ms: now_ms,
            last_move_ms: now_ms,
            hold_start_ms: now_ms,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.phase == GesturePhase::Idle
    }

    /// Whether a pointer is currently held down for this interaction.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.source.is_some()
            && matches!(
                self.phase,
                GesturePhase::Dragging | GesturePhase::AutoRepeating
            )
    }

    /// Timer handles owned by this interaction.
    #[must_use]
    pub fn timer_slots(&self) -> [Option<TimerId>; 3] {
        [
            self.auto_repeat_timer,
            self.continuous_hold_timer,
            self.inertia_timer,
        ]
    }
}
