use chrono::NaiveTime;
use interval_scroller::api::{IntervalPicker, ScrollerConfig, parse_hh_mm};
use interval_scroller::container::MemoryContainer;
use interval_scroller::core::{Direction, UnitKind};
use interval_scroller::interaction::InputEvent;
use interval_scroller::ScrollerError;

fn open(initial: &str) -> IntervalPicker<MemoryContainer> {
    IntervalPicker::open(initial, ScrollerConfig::default(), |_, text| {
        MemoryContainer::new(text).with_height(150.0)
    })
    .expect("picker open")
}

#[test]
fn parse_hh_mm_splits_components() {
    assert_eq!(parse_hh_mm("09:45").expect("parse"), (9, 45));
    assert_eq!(parse_hh_mm(" 7:05 ").expect("parse"), (7, 5));
    assert_eq!(parse_hh_mm("ab:7").expect("parse"), (0, 7));
    assert!(matches!(
        parse_hh_mm("0945"),
        Err(ScrollerError::InvalidTimeText(_))
    ));
}

#[test]
fn open_seeds_both_fields_with_two_digit_text() {
    let mut seen = Vec::new();
    let picker = IntervalPicker::open("9:5", ScrollerConfig::default(), |unit, text| {
        seen.push((unit, text.clone()));
        MemoryContainer::new(text)
    })
    .expect("picker open");

    assert_eq!(
        seen,
        vec![
            (UnitKind::Hours, "09".to_owned()),
            (UnitKind::Minutes, "05".to_owned()),
        ]
    );
    assert_eq!(picker.hours().value(), 9);
    assert_eq!(picker.minutes().value(), 5);
    assert_eq!(picker.formatted(), "09:05");
}

#[test]
fn hours_step_updates_composed_time() {
    let mut picker = open("09:45");
    assert!(
        picker
            .hours_mut()
            .step(Direction::Down, 1.0, 0.0)
            .is_committed()
    );
    picker.advance(1_000.0);

    assert_eq!(picker.formatted(), "10:45");
    assert_eq!(
        picker.time().expect("time of day"),
        NaiveTime::from_hms_opt(10, 45, 0).expect("valid time")
    );
}

#[test]
fn fields_are_independent() {
    let mut picker = open("12:00");
    picker
        .minutes_mut()
        .handle_input(InputEvent::Wheel { delta_y: -5.0 }, 0.0);
    picker
        .hours_mut()
        .handle_input(InputEvent::Wheel { delta_y: 5.0 }, 0.0);
    picker.advance(1_000.0);

    assert_eq!(picker.formatted(), "13:59");
}

#[test]
fn out_of_range_components_wrap() {
    let picker = open("24:60");
    assert_eq!(picker.formatted(), "00:00");

    let picker = open("-1:-1");
    assert_eq!(picker.formatted(), "23:59");
}

#[test]
fn malformed_initial_text_fails_to_open() {
    let result = IntervalPicker::open("noon", ScrollerConfig::default(), |_, text| {
        MemoryContainer::new(text)
    });
    assert!(result.is_err());
}

#[test]
fn close_destroys_both_fields_once() {
    let mut picker = open("08:30");
    picker
        .hours_mut()
        .handle_input(InputEvent::MouseDown { y: 75.0 }, 0.0);

    assert!(picker.close());
    assert!(picker.is_closed());
    assert!(picker.hours().is_destroyed());
    assert!(picker.minutes().is_destroyed());
    assert!(picker.hours().listeners().is_empty());
    assert_eq!(picker.hours().pending_timer_count(), 0);
    assert!(!picker.close());
    assert_eq!(picker.formatted(), "08:30");
}
