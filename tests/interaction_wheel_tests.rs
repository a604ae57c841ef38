use interval_scroller::api::{IntervalScroller, ScrollerConfig};
use interval_scroller::container::MemoryContainer;
use interval_scroller::core::UnitKind;
use interval_scroller::interaction::{GesturePhase, InputDisposition, InputEvent};

fn mount(seed: &str) -> IntervalScroller<MemoryContainer> {
    IntervalScroller::new(
        MemoryContainer::new(seed),
        UnitKind::Minutes,
        ScrollerConfig::default(),
    )
    .expect("scroller init")
}

#[test]
fn each_wheel_event_triggers_one_step_by_sign() {
    let mut scroller = mount("30");

    assert_eq!(
        scroller.handle_input(InputEvent::Wheel { delta_y: 3.0 }, 0.0),
        InputDisposition::Consumed
    );
    assert_eq!(scroller.value(), 31);

    scroller.handle_input(InputEvent::Wheel { delta_y: -3.0 }, 1_000.0);
    assert_eq!(scroller.value(), 30);
    assert_eq!(scroller.gesture_phase(), GesturePhase::Idle);
}

#[test]
fn wheel_speed_factor_scales_duration_and_is_capped() {
    let mut scroller = mount("30");
    scroller.handle_input(InputEvent::Wheel { delta_y: 10.0 }, 0.0);
    let lock = scroller.animation_lock();
    assert!((lock.duration_ms() - 175.0).abs() <= 1e-9);

    scroller.advance(1_000.0);
    scroller.handle_input(InputEvent::Wheel { delta_y: 10_000.0 }, 1_000.0);
    let lock = scroller.animation_lock();
    assert!((lock.duration_ms() - 87.5).abs() <= 1e-9);
}

#[test]
fn wheel_burst_during_transition_commits_once() {
    let mut scroller = mount("30");
    for i in 0..5 {
        let disposition =
            scroller.handle_input(InputEvent::Wheel { delta_y: 40.0 }, f64::from(i) * 5.0);
        assert!(disposition.prevents_default());
    }
    scroller.advance(2_000.0);
    assert_eq!(scroller.value(), 31);
}

#[test]
fn zero_wheel_delta_suppresses_default_without_stepping() {
    let mut scroller = mount("30");
    let disposition = scroller.handle_input(InputEvent::Wheel { delta_y: 0.0 }, 0.0);
    assert_eq!(disposition, InputDisposition::Consumed);
    assert!(!scroller.is_animating());
    assert_eq!(scroller.value(), 30);
}

#[test]
fn wheel_and_drag_overlap_resolves_first_come_first_served() {
    let mut scroller = IntervalScroller::new(
        MemoryContainer::new("30").with_height(150.0),
        UnitKind::Minutes,
        ScrollerConfig::default(),
    )
    .expect("scroller init");
    scroller.handle_input(InputEvent::MouseDown { y: 75.0 }, 0.0);
    scroller.handle_input(InputEvent::Wheel { delta_y: -5.0 }, 5.0);
    scroller.handle_input(InputEvent::MouseMove { y: 95.0 }, 16.0);

    assert_eq!(scroller.value(), 29);
    scroller.handle_input(InputEvent::MouseUp, 1_000.0);
    scroller.advance(2_000.0);
    assert_eq!(scroller.value(), 29);
}
