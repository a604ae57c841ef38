use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::container::SlotContainer;
use crate::core::Direction;
use crate::extensions::ScrollerEvent;
use crate::interaction::motion::transition_duration_ms;
use crate::interaction::{TimerId, TimerKind};

use super::{AnimationLock, IntervalScroller};

/// Why a step request was not committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepRejection {
    Destroyed,
    NoDirection,
    /// `now_ms` was NaN or infinite.
    InvalidTime,
    /// A transition is still in flight.
    AnimationLocked,
    /// The minimum inter-step interval has not elapsed.
    TooSoon,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StepOutcome {
    Committed { value: i32, duration_ms: f64 },
    Rejected(StepRejection),
}

impl StepOutcome {
    #[must_use]
    pub fn is_committed(self) -> bool {
        matches!(self, Self::Committed { .. })
    }

    #[must_use]
    pub fn rejection(self) -> Option<StepRejection> {
        match self {
            Self::Committed { .. } => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}

impl<C: SlotContainer> IntervalScroller<C> {
    /// Requests one ring step at `now_ms`.
    ///
    /// Due timers are fired first, so a request arriving after the previous
    /// transition settled is accepted. Higher speed factors shorten the
    /// transition down to the configured floor.
    pub fn step(&mut self, direction: Direction, speed_factor: f64, now_ms: f64) -> StepOutcome {
        if self.destroyed {
            return StepOutcome::Rejected(StepRejection::Destroyed);
        }
        if !now_ms.is_finite() {
            warn!(?direction, now_ms, "dropping step with non-finite timestamp");
            return StepOutcome::Rejected(StepRejection::InvalidTime);
        }
        self.advance(now_ms);
        self.request_step(direction, speed_factor, now_ms)
    }

    pub(super) fn request_step(
        &mut self,
        direction: Direction,
        speed_factor: f64,
        now_ms: f64,
    ) -> StepOutcome {
        if self.destroyed {
            return StepOutcome::Rejected(StepRejection::Destroyed);
        }
        if direction.is_none() {
            return StepOutcome::Rejected(StepRejection::NoDirection);
        }
        if self.lock.held {
            trace!(?direction, "step rejected: animation lock held");
            return StepOutcome::Rejected(StepRejection::AnimationLocked);
        }
        if let Some(last_step_ms) = self.last_step_ms {
            if now_ms - last_step_ms < self.config.min_step_interval_ms {
                trace!(?direction, "step rejected: inter-step interval");
                return StepOutcome::Rejected(StepRejection::TooSoon);
            }
        }

        let speed_factor = if speed_factor.is_finite() {
            speed_factor
        } else {
            1.0
        };
        let duration_ms = transition_duration_ms(
            self.config.base_duration_ms,
            self.config.min_duration_ms,
            speed_factor,
        );

        self.ring.rotate(direction);
        self.last_step_ms = Some(now_ms);
        let release_timer = self.timers.schedule(
            TimerKind::Settle,
            now_ms + duration_ms + self.config.settle_buffer_ms,
        );
        self.lock = AnimationLock {
            held: true,
            release_timer: Some(release_timer),
            duration_ms,
        };
        self.arm_touch_cooldown(now_ms);
        self.render(duration_ms);

        let value = self.ring.active();
        trace!(?direction, speed_factor, duration_ms, value, "step started");
        self.emit(ScrollerEvent::StepStarted {
            direction,
            value,
            duration_ms,
        });
        StepOutcome::Committed { value, duration_ms }
    }

    /// Completes the transition owned by `timer`: restages hidden slots,
    /// releases the lock and announces the committed value.
    pub(super) fn settle(&mut self, timer: TimerId) {
        if self.lock.release_timer != Some(timer) {
            return;
        }
        let duration_ms = self.lock.duration_ms;
        self.ring.refresh_hidden();
        self.lock = AnimationLock::default();
        self.render(duration_ms);

        let value = self.ring.active();
        trace!(value, "step settled");
        self.emit(ScrollerEvent::ValueCommitted { value });
    }

    fn arm_touch_cooldown(&mut self, now_ms: f64) {
        self.timers.cancel_slot(&mut self.touch_cooldown_timer);
        if self.config.touch_cooldown_ms > 0.0 {
            self.touch_cooldown_timer = Some(
                self.timers
                    .schedule(TimerKind::TouchCooldown, now_ms + self.config.touch_cooldown_ms),
            );
        }
    }
}
