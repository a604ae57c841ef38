use serde::{Deserialize, Serialize};

use crate::core::{Direction, UnitKind};
use crate::interaction::GesturePhase;

/// Read-only field snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollerContext {
    pub unit: UnitKind,
    pub value: i32,
    pub phase: GesturePhase,
    pub animating: bool,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScrollerEvent {
    /// A step was accepted and its transition started.
    StepStarted {
        direction: Direction,
        value: i32,
        duration_ms: f64,
    },
    /// A step's transition completed; `value` is the committed active value.
    ValueCommitted { value: i32 },
    GestureStarted,
    GestureEnded,
    InertiaStarted { direction: Direction, speed: f64 },
    InertiaEnded,
    AutoRepeatStarted { direction: Direction },
    AutoRepeatStopped,
}

/// Observer hook interface.
///
/// Observers see events and the field snapshot but cannot mutate the field;
/// a parent picker uses this to refresh its composed "HH:MM" display.
pub trait ScrollerObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: ScrollerEvent, context: ScrollerContext);
}
