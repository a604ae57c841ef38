pub mod gesture;
pub mod listeners;
pub mod motion;
pub mod timers;

use serde::{Deserialize, Serialize};

pub use gesture::{GesturePhase, GestureState, PointerSource};
pub use listeners::{ListenerHandle, ListenerKind, ListenerScope, ListenerSet};
pub use timers::{FiredTimer, TimerId, TimerKind, TimerQueue};

/// Input forwarded by the host.
///
/// `y` is the pointer position in pixels relative to the top of the field.
/// Document-scoped events (moves and releases) may fall outside the field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    MouseDown { y: f64 },
    MouseMove { y: f64 },
    MouseUp,
    TouchStart { y: f64 },
    TouchMove { y: f64 },
    TouchEnd,
    Wheel { delta_y: f64 },
}

impl InputEvent {
    /// Listener that must be attached for this event to be delivered.
    #[must_use]
    pub const fn listener(self) -> ListenerKind {
        match self {
            Self::MouseDown { .. } => ListenerKind::MouseDown,
            Self::MouseMove { .. } => ListenerKind::MouseMove,
            Self::MouseUp => ListenerKind::MouseUp,
            Self::TouchStart { .. } => ListenerKind::TouchStart,
            Self::TouchMove { .. } => ListenerKind::TouchMove,
            Self::TouchEnd => ListenerKind::TouchEnd,
            Self::Wheel { .. } => ListenerKind::Wheel,
        }
    }

    #[must_use]
    pub const fn source(self) -> Option<PointerSource> {
        match self {
            Self::MouseDown { .. } | Self::MouseMove { .. } | Self::MouseUp => {
                Some(PointerSource::Mouse)
            }
            Self::TouchStart { .. } | Self::TouchMove { .. } | Self::TouchEnd => {
                Some(PointerSource::Touch)
            }
            Self::Wheel { .. } => None,
        }
    }

    fn coordinate(self) -> Option<f64> {
        match self {
            Self::MouseDown { y }
            | Self::MouseMove { y }
            | Self::TouchStart { y }
            | Self::TouchMove { y } => Some(y),
            Self::Wheel { delta_y } => Some(delta_y),
            Self::MouseUp | Self::TouchEnd => None,
        }
    }

    /// Whether every coordinate carried by the event is finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.coordinate().is_none_or(f64::is_finite)
    }
}

/// What the host should do with the native event after dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputDisposition {
    /// No listener for this event is attached; let it propagate untouched.
    Ignored,
    /// The field handled the event; default scrolling/selection must be suppressed.
    Consumed,
}

impl InputDisposition {
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        matches!(self, Self::Consumed)
    }
}
