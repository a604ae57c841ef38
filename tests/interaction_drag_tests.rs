use interval_scroller::api::{IntervalScroller, ScrollerConfig};
use interval_scroller::container::MemoryContainer;
use interval_scroller::core::{Direction, UnitKind};
use interval_scroller::interaction::{
    GesturePhase, InputDisposition, InputEvent, PointerSource, TimerKind,
};

fn mount(seed: &str) -> IntervalScroller<MemoryContainer> {
    IntervalScroller::new(
        MemoryContainer::new(seed).with_height(150.0),
        UnitKind::Hours,
        ScrollerConfig::default(),
    )
    .expect("scroller init")
}

#[test]
fn press_in_middle_zone_starts_drag_and_attaches_document_listeners() {
    let mut scroller = mount("10");
    assert_eq!(scroller.document_listener_count(), 0);

    let disposition = scroller.handle_input(InputEvent::MouseDown { y: 75.0 }, 0.0);
    assert_eq!(disposition, InputDisposition::Consumed);
    assert!(disposition.prevents_default());
    assert_eq!(scroller.gesture_phase(), GesturePhase::Dragging);
    assert_eq!(scroller.gesture().source, Some(PointerSource::Mouse));
    assert_eq!(scroller.document_listener_count(), 2);
}

#[test]
fn drag_down_past_threshold_increments() {
    let mut scroller = mount("10");
    scroller.handle_input(InputEvent::MouseDown { y: 75.0 }, 0.0);
    scroller.handle_input(InputEvent::MouseMove { y: 85.0 }, 16.0);

    assert_eq!(scroller.value(), 11);
    assert_eq!(scroller.gesture().direction, Direction::Down);
    assert_eq!(scroller.gesture().last_step_ms, Some(16.0));
    assert!(scroller.gesture().velocity_px_per_sec > 0.0);
}

#[test]
fn drag_up_decrements_and_wraps() {
    let mut scroller = mount("0");
    scroller.handle_input(InputEvent::MouseDown { y: 75.0 }, 0.0);
    scroller.handle_input(InputEvent::MouseMove { y: 60.0 }, 16.0);
    assert_eq!(scroller.value(), 23);
}

#[test]
fn small_moves_are_not_treated_as_motion() {
    let mut scroller = mount("10");
    scroller.handle_input(InputEvent::MouseDown { y: 75.0 }, 0.0);
    scroller.handle_input(InputEvent::MouseMove { y: 77.0 }, 16.0);
    scroller.handle_input(InputEvent::MouseMove { y: 76.0 }, 32.0);
    assert_eq!(scroller.value(), 10);
    assert!(!scroller.is_animating());

    let mut scroller = mount("10");
    scroller.handle_input(InputEvent::TouchStart { y: 75.0 }, 0.0);
    scroller.handle_input(InputEvent::TouchMove { y: 79.0 }, 16.0);
    assert_eq!(scroller.value(), 10);
    assert!(scroller.gesture().velocity_px_per_sec.abs() <= 1e-12);
    assert!((scroller.gesture().accumulated_delta_px - 4.0).abs() <= 1e-12);
}

#[test]
fn moves_during_transition_are_consumed_without_stepping() {
    let mut scroller = mount("10");
    scroller.handle_input(InputEvent::MouseDown { y: 75.0 }, 0.0);
    scroller.handle_input(InputEvent::MouseMove { y: 85.0 }, 16.0);
    let disposition = scroller.handle_input(InputEvent::MouseMove { y: 95.0 }, 32.0);

    assert_eq!(disposition, InputDisposition::Consumed);
    assert_eq!(scroller.value(), 11);
    assert_eq!(scroller.gesture().last_y, 95.0);
}

#[test]
fn drag_outside_field_bounds_still_resolves() {
    let mut scroller = mount("10");
    scroller.handle_input(InputEvent::MouseDown { y: 75.0 }, 0.0);
    let disposition = scroller.handle_input(InputEvent::MouseMove { y: -400.0 }, 16.0);
    assert_eq!(disposition, InputDisposition::Consumed);
    assert_eq!(scroller.value(), 9);
}

#[test]
fn slow_release_returns_to_idle_and_detaches_listeners() {
    let mut scroller = mount("10");
    scroller.handle_input(InputEvent::MouseDown { y: 75.0 }, 0.0);
    scroller.handle_input(InputEvent::MouseMove { y: 85.0 }, 16.0);
    scroller.handle_input(InputEvent::MouseUp, 600.0);

    assert_eq!(scroller.gesture_phase(), GesturePhase::Idle);
    assert_eq!(scroller.document_listener_count(), 0);
    assert_eq!(scroller.pending_timers_of(TimerKind::InertiaFrame), 0);
    scroller.advance(5_000.0);
    assert_eq!(scroller.value(), 11);
}

#[test]
fn document_events_without_an_interaction_are_ignored() {
    let mut scroller = mount("10");
    assert_eq!(
        scroller.handle_input(InputEvent::MouseMove { y: 120.0 }, 0.0),
        InputDisposition::Ignored
    );
    assert_eq!(
        scroller.handle_input(InputEvent::TouchEnd, 0.0),
        InputDisposition::Ignored
    );

    scroller.handle_input(InputEvent::MouseDown { y: 75.0 }, 10.0);
    assert_eq!(
        scroller.handle_input(InputEvent::TouchMove { y: 120.0 }, 20.0),
        InputDisposition::Ignored
    );
    assert_eq!(scroller.value(), 10);
}

#[test]
fn press_while_animating_is_ignored() {
    let mut scroller = mount("10");
    scroller.step(Direction::Down, 1.0, 0.0);
    let disposition = scroller.handle_input(InputEvent::MouseDown { y: 75.0 }, 10.0);
    assert_eq!(disposition, InputDisposition::Ignored);
    assert_eq!(scroller.gesture_phase(), GesturePhase::Idle);
    assert_eq!(scroller.document_listener_count(), 0);
}

#[test]
fn repeated_interactions_never_accumulate_listeners() {
    let mut scroller = mount("10");
    for round in 0..10 {
        let start = f64::from(round) * 1_000.0;
        scroller.handle_input(InputEvent::MouseDown { y: 75.0 }, start);
        scroller.handle_input(InputEvent::MouseDown { y: 75.0 }, start + 1.0);
        assert_eq!(scroller.document_listener_count(), 2);
        scroller.handle_input(InputEvent::MouseUp, start + 500.0);
        assert_eq!(scroller.document_listener_count(), 0);
        assert_eq!(scroller.listeners().iter().count(), 3);
    }
}

#[test]
fn non_finite_input_is_dropped() {
    let mut scroller = mount("10");
    assert_eq!(
        scroller.handle_input(InputEvent::MouseDown { y: f64::NAN }, 0.0),
        InputDisposition::Ignored
    );
    assert_eq!(
        scroller.handle_input(InputEvent::Wheel { delta_y: 10.0 }, f64::INFINITY),
        InputDisposition::Ignored
    );
    assert_eq!(scroller.gesture_phase(), GesturePhase::Idle);
    assert_eq!(scroller.value(), 10);
}
