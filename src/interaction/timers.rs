use std::collections::{BTreeMap, HashMap};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Opaque handle returned when a timer is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(u64);

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// Ends a step transition: restages hidden slots and releases the lock.
    Settle,
    /// Ends the touch-start cooldown armed by a committed step.
    TouchCooldown,
    /// Next tick of an auto-repeat hold.
    AutoRepeat,
    /// Promotes a still touch hold into auto-repeat.
    ContinuousHold,
    /// Next inertia frame after release.
    InertiaFrame,
}

/// A timer popped from the queue once its due time was reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiredTimer {
    pub id: TimerId,
    pub kind: TimerKind,
    pub due_ms: f64,
}

/// Per-field virtual timer queue.
///
/// Timers fire in due-time order; ties fire in scheduling order. The queue
/// never consults a wall clock: callers pass `now_ms` explicitly so every
/// interaction is reproducible.
#[derive(Debug, Default)]
pub struct TimerQueue {
    next_id: u64,
    pending: BTreeMap<(OrderedFloat<f64>, TimerId), TimerKind>,
    due_by_id: HashMap<TimerId, OrderedFloat<f64>>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, kind: TimerKind, due_ms: f64) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due = OrderedFloat(due_ms);
        self.pending.insert((due, id), kind);
        self.due_by_id.insert(id, due);
        id
    }

    /// Cancels a pending timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.due_by_id.remove(&id) {
            Some(due) => self.pending.remove(&(due, id)).is_some(),
            None => false,
        }
    }

    /// Cancels the timer held in `slot`, if any, and clears the slot.
    pub fn cancel_slot(&mut self, slot: &mut Option<TimerId>) -> bool {
        slot.take().is_some_and(|id| self.cancel(id))
    }

    /// Cancels everything. Returns the number of timers dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        self.due_by_id.clear();
        dropped
    }

    /// Pops the earliest timer whose due time is `<= now_ms`.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<FiredTimer> {
        let (&(due, id), _) = self.pending.first_key_value()?;
        if due.0 > now_ms {
            return None;
        }
        let kind = self.pending.remove(&(due, id))?;
        self.due_by_id.remove(&id);
        Some(FiredTimer {
            id,
            kind,
            due_ms: due.0,
        })
    }

    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.due_by_id.contains_key(&id)
    }

    #[must_use]
    pub fn next_due_ms(&self) -> Option<f64> {
        self.pending.first_key_value().map(|(&(due, _), _)| due.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of pending timers of `kind`.
    #[must_use]
    pub fn count_of(&self, kind: TimerKind) -> usize {
        self.pending.values().filter(|&&pending| pending == kind).count()
    }
}
