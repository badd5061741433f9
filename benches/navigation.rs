use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use henon_explorer::{
    ButtonState, CartesianRect, NavEvent, Navigator, PixelPoint, PixelSize, Point, PointerButton,
    ScrollDirection, Viewport,
};

fn create_navigator() -> Navigator {
    let bounds = CartesianRect::new(Point::new(-5.0, -5.0), Point::new(5.0, 5.0))
        .expect("benchmark region is valid");

    Navigator::new(Viewport::new(bounds, PixelSize::new(1920, 1080)))
}

fn bench_pixel_to_cartesian(c: &mut Criterion) {
    let navigator = create_navigator();
    let viewport = navigator.viewport();

    c.bench_function("pixel_to_cartesian", |b| {
        b.iter(|| viewport.pixel_to_cartesian(black_box(PixelPoint::new(960.5, 540.25))))
    });
}

fn bench_gestures(c: &mut Criterion) {
    let drag = [
        NavEvent::Button {
            button: PointerButton::Secondary,
            state: ButtonState::Pressed,
            position: PixelPoint::new(400.0, 300.0),
        },
        NavEvent::Button {
            button: PointerButton::Secondary,
            state: ButtonState::Released,
            position: PixelPoint::new(900.0, 500.0),
        },
    ];

    c.bench_function("select_gesture", |b| {
        let mut navigator = create_navigator();
        b.iter(|| {
            for event in drag {
                black_box(navigator.handle_event(black_box(event)));
            }
        })
    });

    c.bench_function("scroll_tick", |b| {
        let mut navigator = create_navigator();
        b.iter(|| {
            black_box(navigator.on_scroll(ScrollDirection::Down, PixelPoint::new(0.0, 0.0)));
            black_box(navigator.on_scroll(ScrollDirection::Up, PixelPoint::new(0.0, 0.0)));
        })
    });
}

criterion_group!(benches, bench_pixel_to_cartesian, bench_gestures);
criterion_main!(benches);
