use tracing::debug;

use crate::container::SlotContainer;
use crate::core::Direction;
use crate::extensions::ScrollerEvent;
use crate::interaction::motion::{auto_repeat_interval_ms, hold_speed_factor};
use crate::interaction::{GesturePhase, PointerSource, TimerId, TimerKind};

use super::IntervalScroller;

impl<C: SlotContainer> IntervalScroller<C> {
    /// Starts auto-repeat stepping in `direction` without a pointer press,
    /// e.g. for host-provided increment/decrement buttons.
    ///
    /// Any running interaction is cancelled first. Returns `false` when the
    /// field is destroyed or `direction` is `None`.
    pub fn start_auto_repeat(&mut self, direction: Direction, now_ms: f64) -> bool {
        if self.destroyed || direction.is_none() || !now_ms.is_finite() {
            return false;
        }
        self.advance(now_ms);
        self.cancel_interaction();
        self.begin_auto_repeat(direction, now_ms);
        true
    }

    /// Stops auto-repeat started either by an edge hold or `start_auto_repeat`.
    ///
    /// Returns `true` when an auto-repeat was running.
    pub fn stop_auto_repeat(&mut self) -> bool {
        if self.gesture.phase != GesturePhase::AutoRepeating {
            return false;
        }
        self.cancel_interaction();
        true
    }

    pub(super) fn begin_auto_repeat(&mut self, direction: Direction, now_ms: f64) {
        self.timers.cancel_slot(&mut self.gesture.auto_repeat_timer);
        self.timers
            .cancel_slot(&mut self.gesture.continuous_hold_timer);
        self.gesture.phase = GesturePhase::AutoRepeating;
        self.gesture.direction = direction;
        self.gesture.hold_start_ms = now_ms;
        self.gesture.auto_repeat_timer = Some(self.timers.schedule(
            TimerKind::AutoRepeat,
            now_ms + self.config.auto_repeat_initial_interval_ms,
        ));
        debug!(unit = self.unit.label(), ?direction, "auto-repeat started");
        self.emit(ScrollerEvent::AutoRepeatStarted { direction });
    }

    pub(super) fn auto_repeat_tick(&mut self, timer: TimerId, now_ms: f64) {
        if self.gesture.auto_repeat_timer != Some(timer)
            || self.gesture.phase != GesturePhase::AutoRepeating
        {
            return;
        }
        self.gesture.auto_repeat_timer = None;

        let speed_factor = hold_speed_factor(
            now_ms - self.gesture.hold_start_ms,
            self.config.auto_repeat_acceleration_exponent,
            self.config.max_speed_factor,
        );
        if self
            .request_step(self.gesture.direction, speed_factor, now_ms)
            .is_committed()
        {
            self.gesture.last_step_ms = Some(now_ms);
        }

        let interval_ms = auto_repeat_interval_ms(
            self.config.auto_repeat_initial_interval_ms,
            self.config.auto_repeat_min_interval_ms,
            speed_factor,
        );
        self.gesture.auto_repeat_timer =
            Some(self.timers.schedule(TimerKind::AutoRepeat, now_ms + interval_ms));
    }

    /// A touch held still after a drag step keeps scrolling in that direction.
    pub(super) fn continuous_hold_elapsed(&mut self, timer: TimerId, now_ms: f64) {
        if self.gesture.continuous_hold_timer != Some(timer) {
            return;
        }
        self.gesture.continuous_hold_timer = None;
        if self.gesture.phase == GesturePhase::Dragging
            && self.gesture.source == Some(PointerSource::Touch)
            && !self.gesture.direction.is_none()
        {
            self.begin_auto_repeat(self.gesture.direction, now_ms);
        }
    }
}
