// Copyright 2026 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use pantograph_events::{
    BasicSurface, ButtonPhase, Capabilities, EventNormalizer, PointerClass, RawEvent,
};
use pantograph_gestures::GestureController;
use pantograph_timing::ManualTimer;
use pantograph_view2d::BasicView;

/// Tiny deterministic generator so streams are reproducible across runs.
#[derive(Clone)]
struct Jitter(u64);

impl Jitter {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // Map the top bits onto [-4, 4].
        f64::from((self.0 >> 32) as u32 % 9) - 4.0
    }
}

fn pointer(phase: ButtonPhase, id: u64, x: f64, y: f64) -> RawEvent<'static> {
    RawEvent::Pointer {
        phase,
        id,
        class: PointerClass::Touch,
        position: Point::new(x, y),
    }
}

fn pointer_caps() -> Capabilities {
    Capabilities {
        pointer_events: true,
        touch_events: false,
    }
}

fn build_pipeline() -> (GestureController, BasicSurface, BasicView, ManualTimer) {
    let mut surface = BasicSurface::new(Point::ORIGIN);
    let controller = GestureController::new(pointer_caps(), &mut surface);
    let view = BasicView::new(Size::new(1920.0, 1080.0));
    (controller, surface, view, ManualTimer::new())
}

fn drag_stream(moves: u32, seed: u64) -> Vec<RawEvent<'static>> {
    let mut rng = Jitter::new(seed);
    let (mut x, mut y) = (200.0, 200.0);
    let mut events = Vec::with_capacity(moves as usize + 2);
    events.push(pointer(ButtonPhase::Down, 1, x, y));
    for _ in 0..moves {
        x += 5.0 + rng.next();
        y += 3.0 + rng.next();
        events.push(pointer(ButtonPhase::Move, 1, x, y));
    }
    events.push(pointer(ButtonPhase::Up, 1, x, y));
    events
}

fn pinch_stream(moves: u32, seed: u64) -> Vec<RawEvent<'static>> {
    let mut rng = Jitter::new(seed);
    let mut x = 500.0;
    let mut events = Vec::with_capacity(moves as usize + 4);
    events.push(pointer(ButtonPhase::Down, 1, 400.0, 400.0));
    events.push(pointer(ButtonPhase::Down, 2, x, 400.0));
    for _ in 0..moves {
        x += 4.0 + rng.next();
        events.push(pointer(ButtonPhase::Move, 2, x, 400.0));
    }
    events.push(pointer(ButtonPhase::Up, 2, x, 400.0));
    events.push(pointer(ButtonPhase::Up, 1, 400.0, 400.0));
    events
}

fn bench_gesture_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pantograph_pipeline");
    group.sample_size(50);

    for &moves in &[16_u32, 256_u32] {
        let events = drag_stream(moves, 0x9A27_0000_0000_0001);
        group.bench_function(format!("drag_stream(moves={moves})"), |b| {
            b.iter_batched(
                build_pipeline,
                |(mut controller, mut surface, mut view, mut timer)| {
                    for raw in &events {
                        controller.handle_raw(*raw, &mut surface, &mut view, &mut timer);
                    }
                    black_box(view);
                },
                BatchSize::LargeInput,
            );
        });

        let events = pinch_stream(moves, 0x9A27_0000_0000_0002);
        group.bench_function(format!("pinch_stream(moves={moves})"), |b| {
            b.iter_batched(
                build_pipeline,
                |(mut controller, mut surface, mut view, mut timer)| {
                    for raw in &events {
                        controller.handle_raw(*raw, &mut surface, &mut view, &mut timer);
                    }
                    black_box(view);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.bench_function("wheel_notch_with_ticks", |b| {
        b.iter_batched(
            build_pipeline,
            |(mut controller, mut surface, mut view, mut timer)| {
                controller.handle_raw(
                    RawEvent::Wheel {
                        position: Point::new(960.0, 540.0),
                        delta_y: -3.0,
                    },
                    &mut surface,
                    &mut view,
                    &mut timer,
                );
                for tick in timer.advance(50) {
                    controller.timer_tick(tick, &mut surface, &mut view, &mut timer);
                }
                black_box(view);
            },
            BatchSize::LargeInput,
        );
    });

    group.bench_function("double_tap", |b| {
        b.iter_batched(
            build_pipeline,
            |(mut controller, mut surface, mut view, mut timer)| {
                for _ in 0..2 {
                    for phase in [ButtonPhase::Down, ButtonPhase::Up] {
                        let raw = pointer(phase, 1, 320.0, 240.0);
                        controller.handle_raw(raw, &mut surface, &mut view, &mut timer);
                    }
                }
                black_box(view);
            },
            BatchSize::LargeInput,
        );
    });

    // The normalizer alone, on the hottest path: a move against an open
    // two-contact session.
    let events = pinch_stream(256, 0x9A27_0000_0000_0003);
    group.bench_function("normalize_pinch_moves(moves=256)", |b| {
        b.iter_batched(
            || {
                let mut surface = BasicSurface::new(Point::ORIGIN);
                let normalizer = EventNormalizer::new(pointer_caps(), &mut surface);
                (normalizer, surface, ManualTimer::new())
            },
            |(mut normalizer, mut surface, mut timer)| {
                for raw in &events {
                    black_box(normalizer.handle(*raw, &mut surface, &mut timer));
                }
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_gesture_pipeline);
criterion_main!(benches);
