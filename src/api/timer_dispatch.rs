use tracing::trace;

use crate::container::SlotContainer;
use crate::interaction::TimerKind;

use super::IntervalScroller;

impl<C: SlotContainer> IntervalScroller<C> {
    /// Advances the field clock to `now_ms`, firing every timer due by then.
    ///
    /// Timers fire in due order, each observing its own due time as "now";
    /// timers scheduled by a callback fire in the same call if they are due.
    /// Returns the number of timers fired. A destroyed field fires nothing.
    pub fn advance(&mut self, now_ms: f64) -> usize {
        if self.destroyed || !now_ms.is_finite() {
            return 0;
        }

        let mut fired = 0;
        while let Some(timer) = self.timers.pop_due(now_ms) {
            fired += 1;
            self.clock_ms = self.clock_ms.max(timer.due_ms);
            trace!(kind = ?timer.kind, due_ms = timer.due_ms, "timer fired");
            match timer.kind {
                TimerKind::Settle => self.settle(timer.id),
                TimerKind::TouchCooldown => {
                    if self.touch_cooldown_timer == Some(timer.id) {
                        self.touch_cooldown_timer = None;
                    }
                }
                TimerKind::AutoRepeat => self.auto_repeat_tick(timer.id, timer.due_ms),
                TimerKind::ContinuousHold => self.continuous_hold_elapsed(timer.id, timer.due_ms),
                TimerKind::InertiaFrame => self.inertia_frame(timer.id, timer.due_ms),
            }
        }
        self.clock_ms = self.clock_ms.max(now_ms);
        fired
    }

    /// Latest time observed through input, steps or `advance`.
    #[must_use]
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    /// Due time of the earliest pending timer, for hosts scheduling wakeups.
    #[must_use]
    pub fn next_timer_due_ms(&self) -> Option<f64> {
        self.timers.next_due_ms()
    }

    #[must_use]
    pub fn pending_timer_count(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn pending_timers_of(&self, kind: TimerKind) -> usize {
        self.timers.count_of(kind)
    }
}
