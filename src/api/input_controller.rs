use tracing::{debug, warn};

use crate::container::SlotContainer;
use crate::core::Direction;
use crate::extensions::ScrollerEvent;
use crate::interaction::motion::{drag_speed_factor, smoothed_velocity, wheel_speed_factor};
use crate::interaction::{
    GesturePhase, GestureState, InputDisposition, InputEvent, ListenerKind, ListenerScope,
    PointerSource, TimerKind,
};

use super::IntervalScroller;

impl<C: SlotContainer> IntervalScroller<C> {
    /// Dispatches one host input event at `now_ms`.
    ///
    /// Events are delivered only while their listener is attached: presses
    /// and wheel on the field for its lifetime, moves and releases on the
    /// document for the duration of an interaction. Due timers fire first.
    pub fn handle_input(&mut self, event: InputEvent, now_ms: f64) -> InputDisposition {
        if self.destroyed {
            return InputDisposition::Ignored;
        }
        if !now_ms.is_finite() || !event.is_finite() {
            warn!(?event, now_ms, "dropping input with non-finite coordinates");
            return InputDisposition::Ignored;
        }

        self.advance(now_ms);
        if !self.listeners.is_attached(event.listener()) {
            return InputDisposition::Ignored;
        }

        match event {
            InputEvent::MouseDown { y } => self.pointer_down(PointerSource::Mouse, y, now_ms),
            InputEvent::TouchStart { y } => self.pointer_down(PointerSource::Touch, y, now_ms),
            InputEvent::MouseMove { y } => self.pointer_move(PointerSource::Mouse, y, now_ms),
            InputEvent::TouchMove { y } => self.pointer_move(PointerSource::Touch, y, now_ms),
            InputEvent::MouseUp => self.pointer_up(PointerSource::Mouse, now_ms),
            InputEvent::TouchEnd => self.pointer_up(PointerSource::Touch, now_ms),
            InputEvent::Wheel { delta_y } => self.wheel(delta_y, now_ms),
        }
    }

    fn pointer_down(&mut self, source: PointerSource, y: f64, now_ms: f64) -> InputDisposition {
        if self.lock.held {
            return InputDisposition::Ignored;
        }
        if source == PointerSource::Touch && self.touch_cooldown_timer.is_some() {
            return InputDisposition::Ignored;
        }

        self.cancel_interaction();
        self.gesture = GestureState::pressed(source, y, now_ms);
        match source {
            PointerSource::Mouse => {
                self.listeners.attach(ListenerKind::MouseMove);
                self.listeners.attach(ListenerKind::MouseUp);
            }
            PointerSource::Touch => {
                self.listeners.attach(ListenerKind::TouchMove);
                self.listeners.attach(ListenerKind::TouchEnd);
            }
        }
        debug!(unit = self.unit.label(), ?source, y, "gesture started");
        self.emit(ScrollerEvent::GestureStarted);

        if let Some(direction) = self.edge_zone_direction(y) {
            self.begin_auto_repeat(direction, now_ms);
        }
        InputDisposition::Consumed
    }

    fn pointer_move(&mut self, source: PointerSource, y: f64, now_ms: f64) -> InputDisposition {
        if self.gesture.source != Some(source) || !self.gesture.is_pressed() {
            return InputDisposition::Ignored;
        }

        let delta_px = y - self.gesture.last_y;
        let elapsed_ms = now_ms - self.gesture.last_move_ms;
        self.gesture.last_y = y;
        self.gesture.accumulated_delta_px += delta_px.abs();

        if source == PointerSource::Touch && delta_px.abs() < self.config.touch_dead_zone_px {
            return InputDisposition::Consumed;
        }

        self.gesture.velocity_px_per_sec = smoothed_velocity(
            self.gesture.velocity_px_per_sec,
            delta_px,
            elapsed_ms,
            self.config.velocity_smoothing,
        );
        self.gesture.last_move_ms = now_ms;

        if delta_px.abs() <= self.config.drag_threshold_px {
            return InputDisposition::Consumed;
        }

        if self.gesture.phase == GesturePhase::AutoRepeating {
            self.timers.cancel_slot(&mut self.gesture.auto_repeat_timer);
            self.gesture.phase = GesturePhase::Dragging;
            self.emit(ScrollerEvent::AutoRepeatStopped);
        }

        let direction = Direction::from_delta(delta_px);
        self.gesture.direction = direction;
        let speed_factor = drag_speed_factor(
            self.gesture.velocity_px_per_sec,
            elapsed_ms,
            self.config.drag_speed_divisor,
            self.config.drag_speed_time_constant_ms,
            self.config.max_speed_factor,
        );
        if self
            .request_step(direction, speed_factor, now_ms)
            .is_committed()
        {
            self.gesture.last_step_ms = Some(now_ms);
        }

        if source == PointerSource::Touch {
            self.timers
                .cancel_slot(&mut self.gesture.continuous_hold_timer);
            self.gesture.continuous_hold_timer = Some(self.timers.schedule(
                TimerKind::ContinuousHold,
                now_ms + self.config.continuous_hold_delay_ms,
            ));
        }
        InputDisposition::Consumed
    }

    fn pointer_up(&mut self, source: PointerSource, now_ms: f64) -> InputDisposition {
        if self.gesture.source != Some(source) {
            return InputDisposition::Ignored;
        }

        let released = self.gesture;
        self.cancel_interaction();

        let fresh = now_ms - released.last_move_ms <= self.config.velocity_stale_ms;
        if released.phase == GesturePhase::Dragging
            && fresh
            && released.velocity_px_per_sec.abs() > self.config.inertia_velocity_threshold
        {
            self.start_inertia(released.velocity_px_per_sec, now_ms);
        }
        InputDisposition::Consumed
    }

    fn wheel(&mut self, delta_y: f64, now_ms: f64) -> InputDisposition {
        let direction = Direction::from_delta(delta_y);
        if direction.is_none() {
            return InputDisposition::Consumed;
        }
        let speed_factor = wheel_speed_factor(
            delta_y,
            self.config.wheel_delta_divisor,
            self.config.max_speed_factor,
        );
        let _ = self.request_step(direction, speed_factor, now_ms);
        InputDisposition::Consumed
    }

    /// Ends whatever interaction is running: cancels its timers and detaches
    /// its document listeners synchronously.
    pub(super) fn cancel_interaction(&mut self) {
        let ended = self.gesture;
        for timer in ended.timer_slots().into_iter().flatten() {
            self.timers.cancel(timer);
        }
        self.listeners.detach_scope(ListenerScope::Document);
        self.gesture = GestureState::default();

        match ended.phase {
            GesturePhase::Idle => return,
            GesturePhase::AutoRepeating => self.emit(ScrollerEvent::AutoRepeatStopped),
            GesturePhase::Inertia => self.emit(ScrollerEvent::InertiaEnded),
            GesturePhase::Dragging => {}
        }
        if ended.source.is_some() {
            debug!(unit = self.unit.label(), phase = ?ended.phase, "gesture ended");
            self.emit(ScrollerEvent::GestureEnded);
        }
    }

    fn edge_zone_direction(&self, y: f64) -> Option<Direction> {
        let height = self.container.height_px();
        let ratio = self.config.edge_zone_ratio;
        if !height.is_finite() || height <= 0.0 || ratio <= 0.0 {
            return None;
        }
        if y < height * ratio {
            Some(Direction::Up)
        } else if y > height * (1.0 - ratio) {
            Some(Direction::Down)
        } else {
            None
        }
    }
}
