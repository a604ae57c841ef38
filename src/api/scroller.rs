use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::container::{SlotContainer, SlotFrame};
use crate::core::{IntervalRange, Ring, UnitKind, parse_slot_text};
use crate::error::ScrollerResult;
use crate::extensions::{ScrollerContext, ScrollerEvent, ScrollerObserver};
use crate::interaction::{
    GesturePhase, GestureState, ListenerKind, ListenerScope, ListenerSet, TimerId, TimerQueue,
};

use super::ScrollerConfig;

/// Held while a step transition is in flight.
///
/// The lock is released only by its own settle timer; any step requested
/// while it is held is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationLock {
    pub(super) held: bool,
    pub(super) release_timer: Option<TimerId>,
    pub(super) duration_ms: f64,
}

impl AnimationLock {
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }

    #[must_use]
    pub fn release_timer(&self) -> Option<TimerId> {
        self.release_timer
    }

    /// Transition duration of the step holding the lock.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }
}

/// One circular value field (hours or minutes).
///
/// The field owns its ring, container, timers and listener handles. Hosts
/// forward input through `handle_input`, drive time through `advance`, and
/// must call `destroy` when the owning view is torn down.
pub struct IntervalScroller<C: SlotContainer> {
    pub(super) container: C,
    pub(super) unit: UnitKind,
    pub(super) config: ScrollerConfig,
    pub(super) ring: Ring,
    pub(super) lock: AnimationLock,
    pub(super) gesture: GestureState,
    pub(super) timers: TimerQueue,
    pub(super) listeners: ListenerSet,
    pub(super) observers: IndexMap<String, Box<dyn ScrollerObserver>>,
    pub(super) last_step_ms: Option<f64>,
    pub(super) touch_cooldown_timer: Option<TimerId>,
    pub(super) clock_ms: f64,
    pub(super) destroyed: bool,
}

impl<C: SlotContainer> IntervalScroller<C> {
    /// Mounts a field on `container`.
    ///
    /// The initial value is read from the container's active marker. Missing
    /// or malformed text degrades to `0`; out-of-range numbers wrap into the
    /// unit's range.
    pub fn new(container: C, unit: UnitKind, config: ScrollerConfig) -> ScrollerResult<Self> {
        config.validate()?;

        let range = unit.range();
        let seed = container.active_text();
        let initial = match seed.as_deref().map(parse_slot_text) {
            Some(Some(value)) => value,
            Some(None) => {
                warn!(
                    unit = unit.label(),
                    text = seed.as_deref().unwrap_or_default(),
                    "malformed active slot text, defaulting to 0"
                );
                0
            }
            None => {
                debug!(unit = unit.label(), "no active slot marker, defaulting to 0");
                0
            }
        };

        let mut listeners = ListenerSet::new();
        listeners.attach(ListenerKind::MouseDown);
        listeners.attach(ListenerKind::TouchStart);
        listeners.attach(ListenerKind::Wheel);

        let mut scroller = Self {
            container,
            unit,
            config,
            ring: Ring::new(range, initial),
            lock: AnimationLock::default(),
            gesture: GestureState::default(),
            timers: TimerQueue::new(),
            listeners,
            observers: IndexMap::new(),
            last_step_ms: None,
            touch_cooldown_timer: None,
            clock_ms: 0.0,
            destroyed: false,
        };
        scroller.render(config.base_duration_ms);
        debug!(
            unit = unit.label(),
            value = scroller.value(),
            "mounted interval scroller"
        );
        Ok(scroller)
    }

    /// Committed active value.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.ring.active()
    }

    #[must_use]
    pub fn unit(&self) -> UnitKind {
        self.unit
    }

    #[must_use]
    pub fn range(&self) -> IntervalRange {
        self.ring.range()
    }

    #[must_use]
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    #[must_use]
    pub fn config(&self) -> ScrollerConfig {
        self.config
    }

    #[must_use]
    pub fn container(&self) -> &C {
        &self.container
    }

    #[must_use]
    pub fn animation_lock(&self) -> AnimationLock {
        self.lock
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.lock.held
    }

    #[must_use]
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    #[must_use]
    pub fn gesture_phase(&self) -> GesturePhase {
        self.gesture.phase
    }

    /// Idle gesture and no transition in flight.
    #[must_use]
    pub fn is_quiescent(&self) -> bool {
        self.gesture.is_idle() && !self.lock.held
    }

    #[must_use]
    pub fn listeners(&self) -> &ListenerSet {
        &self.listeners
    }

    /// Number of document-scoped listeners held for the current interaction.
    #[must_use]
    pub fn document_listener_count(&self) -> usize {
        self.listeners.count(ListenerScope::Document)
    }

    #[must_use]
    pub fn is_touch_cooldown_active(&self) -> bool {
        self.touch_cooldown_timer.is_some()
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Tears the field down: cancels every timer, detaches every listener
    /// (field and document scoped) and drops observers.
    ///
    /// Returns `false` when the field was already destroyed.
    pub fn destroy(&mut self) -> bool {
        if self.destroyed {
            return false;
        }
        let dropped_timers = self.timers.cancel_all();
        let dropped_listeners = self.listeners.detach_all();
        self.gesture = GestureState::default();
        self.lock = AnimationLock::default();
        self.touch_cooldown_timer = None;
        self.observers.clear();
        self.destroyed = true;
        debug!(
            unit = self.unit.label(),
            value = self.value(),
            dropped_timers,
            dropped_listeners,
            "destroyed interval scroller"
        );
        true
    }

    pub(super) fn context(&self) -> ScrollerContext {
        ScrollerContext {
            unit: self.unit,
            value: self.ring.active(),
            phase: self.gesture.phase,
            animating: self.lock.held,
        }
    }

    pub(super) fn emit(&mut self, event: ScrollerEvent) {
        if self.observers.is_empty() {
            return;
        }
        let context = self.context();
        for observer in self.observers.values_mut() {
            observer.on_event(event, context);
        }
    }

    pub(super) fn render(&mut self, transition_ms: f64) {
        let frame = SlotFrame {
            slots: *self.ring.slots(),
            transition_ms,
        };
        self.container.apply(&frame);
    }
}
