use interval_scroller::api::{IntervalScroller, ScrollerConfig};
use interval_scroller::container::MemoryContainer;
use interval_scroller::core::{Direction, UnitKind};
use interval_scroller::interaction::{GesturePhase, InputEvent, TimerKind};

fn mount(seed: &str) -> IntervalScroller<MemoryContainer> {
    IntervalScroller::new(
        MemoryContainer::new(seed).with_height(150.0),
        UnitKind::Hours,
        ScrollerConfig::default(),
    )
    .expect("scroller init")
}

fn flick_down(scroller: &mut IntervalScroller<MemoryContainer>) {
    scroller.handle_input(InputEvent::MouseDown { y: 75.0 }, 0.0);
    scroller.handle_input(InputEvent::MouseMove { y: 85.0 }, 16.0);
    scroller.handle_input(InputEvent::MouseMove { y: 95.0 }, 32.0);
    scroller.handle_input(InputEvent::MouseUp, 40.0);
}

#[test]
fn fast_release_starts_inertia_in_drag_direction() {
    let mut scroller = mount("10");
    flick_down(&mut scroller);

    assert_eq!(scroller.gesture_phase(), GesturePhase::Inertia);
    assert_eq!(scroller.gesture().direction, Direction::Down);
    assert!((scroller.gesture().inertia_speed - 2.25).abs() <= 1e-9);
    assert_eq!(scroller.gesture().source, None);
    assert_eq!(scroller.document_listener_count(), 0);
    assert_eq!(scroller.pending_timers_of(TimerKind::InertiaFrame), 1);
}

#[test]
fn inertia_steps_with_damped_speed_then_returns_to_idle() {
    let mut scroller = mount("10");
    flick_down(&mut scroller);

    scroller.advance(300.0);
    assert_eq!(scroller.gesture_phase(), GesturePhase::Inertia);
    assert!(scroller.gesture().inertia_speed < 2.25);

    scroller.advance(2_000.0);
    assert_eq!(scroller.gesture_phase(), GesturePhase::Idle);
    assert_eq!(scroller.pending_timers_of(TimerKind::InertiaFrame), 0);
    assert_eq!(scroller.value(), 12);
    assert!(scroller.is_quiescent());
    assert!(scroller.ring().is_consistent());
}

#[test]
fn inertia_below_minimum_speed_stops_on_first_frame() {
    let config = ScrollerConfig::default().with_inertia(10.0, 0.95, 0.5);
    let mut scroller = IntervalScroller::new(
        MemoryContainer::new("10").with_height(150.0),
        UnitKind::Hours,
        config,
    )
    .expect("scroller init");

    scroller.handle_input(InputEvent::MouseDown { y: 75.0 }, 0.0);
    scroller.handle_input(InputEvent::MouseMove { y: 78.0 }, 30.0);
    scroller.handle_input(InputEvent::MouseUp, 31.0);
    assert_eq!(scroller.gesture_phase(), GesturePhase::Inertia);

    scroller.advance(47.0);
    assert_eq!(scroller.gesture_phase(), GesturePhase::Idle);
}

#[test]
fn new_press_cancels_inertia() {
    let mut scroller = mount("10");
    flick_down(&mut scroller);

    scroller.advance(600.0);
    assert_eq!(scroller.gesture_phase(), GesturePhase::Idle);

    let mut scroller = mount("10");
    flick_down(&mut scroller);
    scroller.advance(420.0);
    assert!(!scroller.is_animating());
    assert_eq!(scroller.gesture_phase(), GesturePhase::Inertia);
    scroller.handle_input(InputEvent::MouseDown { y: 75.0 }, 420.0);
    assert_eq!(scroller.gesture_phase(), GesturePhase::Dragging);
    assert_eq!(scroller.pending_timers_of(TimerKind::InertiaFrame), 0);
}

#[test]
fn stale_velocity_does_not_coast() {
    let mut scroller = mount("10");
    scroller.handle_input(InputEvent::MouseDown { y: 75.0 }, 0.0);
    scroller.handle_input(InputEvent::MouseMove { y: 95.0 }, 16.0);
    scroller.handle_input(InputEvent::MouseUp, 250.0);
    assert_eq!(scroller.gesture_phase(), GesturePhase::Idle);
}
