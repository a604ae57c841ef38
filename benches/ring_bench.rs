use criterion::{Criterion, criterion_group, criterion_main};
use interval_scroller::api::{IntervalScroller, ScrollerConfig};
use interval_scroller::container::MemoryContainer;
use interval_scroller::core::{Direction, IntervalRange, Ring, UnitKind};
use interval_scroller::interaction::InputEvent;
use std::hint::black_box;

fn bench_bounded_neighbors(c: &mut Criterion) {
    let range = IntervalRange::MINUTES;

    c.bench_function("bounded_neighbors_10k", |b| {
        b.iter(|| {
            for value in -5_000..5_000 {
                let active = range.bounded_value(black_box(value));
                let _ = black_box(range.compute_neighbors(active));
            }
        })
    });
}

fn bench_ring_rotate_settle(c: &mut Criterion) {
    c.bench_function("ring_rotate_settle_1k", |b| {
        b.iter(|| {
            let mut ring = Ring::new(IntervalRange::HOURS, 12);
            for i in 0..1_000 {
                let direction = if i % 3 == 0 {
                    Direction::Up
                } else {
                    Direction::Down
                };
                ring.rotate(black_box(direction));
                ring.refresh_hidden();
            }
            black_box(ring.active())
        })
    });
}

fn bench_drag_and_inertia_session(c: &mut Criterion) {
    c.bench_function("drag_and_inertia_session", |b| {
        b.iter(|| {
            let mut scroller = IntervalScroller::new(
                MemoryContainer::new("30").with_height(150.0),
                UnitKind::Minutes,
                ScrollerConfig::default(),
            )
            .expect("scroller init");

            scroller.handle_input(InputEvent::MouseDown { y: 75.0 }, 0.0);
            for frame in 1..=20 {
                let now_ms = f64::from(frame) * 16.0;
                let y = 75.0 + f64::from(frame) * 12.0;
                scroller.handle_input(InputEvent::MouseMove { y }, now_ms);
            }
            scroller.handle_input(InputEvent::MouseUp, 330.0);
            scroller.advance(black_box(5_000.0));
            black_box(scroller.value())
        })
    });
}

criterion_group!(
    benches,
    bench_bounded_neighbors,
    bench_ring_rotate_settle,
    bench_drag_and_inertia_session
);
criterion_main!(benches);
