use tracing::debug;

use crate::container::SlotContainer;
use crate::core::Direction;
use crate::extensions::ScrollerEvent;
use crate::interaction::motion::{damped_speed, inertia_initial_speed};
use crate::interaction::{GesturePhase, GestureState, TimerId, TimerKind};

use super::IntervalScroller;

impl<C: SlotContainer> IntervalScroller<C> {
    /// Starts coasting after a fast release.
    ///
    /// Each frame damps the speed by `inertia_deceleration` per reference
    /// frame and requests a step; coasting ends once the speed falls below
    /// `inertia_min_speed`.
    pub(super) fn start_inertia(&mut self, velocity_px_per_sec: f64, now_ms: f64) {
        let direction = Direction::from_delta(velocity_px_per_sec);
        let speed = inertia_initial_speed(
            velocity_px_per_sec,
            self.config.inertia_speed_divisor,
            self.config.max_speed_factor,
        );
        let frame = self
            .timers
            .schedule(TimerKind::InertiaFrame, now_ms + self.config.inertia_frame_ms);
        self.gesture = GestureState {
            phase: GesturePhase::Inertia,
            direction,
            velocity_px_per_sec,
            start_ms: now_ms,
            last_move_ms: now_ms,
            inertia_speed: speed,
            inertia_last_frame_ms: now_ms,
            inertia_timer: Some(frame),
            ..GestureState::default()
        };
        debug!(
            unit = self.unit.label(),
            ?direction,
            velocity_px_per_sec,
            speed,
            "inertia started"
        );
        self.emit(ScrollerEvent::InertiaStarted { direction, speed });
    }

    pub(super) fn inertia_frame(&mut self, timer: TimerId, now_ms: f64) {
        if self.gesture.inertia_timer != Some(timer) || self.gesture.phase != GesturePhase::Inertia
        {
            return;
        }
        self.gesture.inertia_timer = None;

        let elapsed_ms = now_ms - self.gesture.inertia_last_frame_ms;
        self.gesture.inertia_last_frame_ms = now_ms;
        self.gesture.inertia_frames += 1;
        self.gesture.inertia_speed = damped_speed(
            self.gesture.inertia_speed,
            self.config.inertia_deceleration,
            elapsed_ms,
            self.config.inertia_frame_ms,
        );

        if self.gesture.inertia_speed < self.config.inertia_min_speed {
            debug!(
                unit = self.unit.label(),
                frames = self.gesture.inertia_frames,
                "inertia finished"
            );
            self.cancel_interaction();
            return;
        }

        if self
            .request_step(self.gesture.direction, self.gesture.inertia_speed, now_ms)
            .is_committed()
        {
            self.gesture.last_step_ms = Some(now_ms);
        }
        self.gesture.inertia_timer = Some(self.timers.schedule(
            TimerKind::InertiaFrame,
            now_ms + self.config.inertia_frame_ms,
        ));
    }
}
