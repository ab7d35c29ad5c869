// Copyright 2026 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted pan/zoom session.
//!
//! Replays a drag, a pinch, a double tap, and a wheel notch through the full
//! pipeline and prints the view state after each gesture.
//!
//! Run:
//! - `cargo run -p pantograph_demos --example scripted_session`

use kurbo::{Point, Size};
use pantograph_demos::ScriptedHost;
use pantograph_events::{ButtonPhase, Capabilities, PointerClass, RawEvent};

fn pointer(phase: ButtonPhase, id: u64, x: f64, y: f64) -> RawEvent<'static> {
    RawEvent::Pointer {
        phase,
        id,
        class: PointerClass::Touch,
        position: Point::new(x, y),
    }
}

fn report(label: &str, host: &ScriptedHost) {
    let state = host.state();
    println!(
        "{label}: position=({:.1}, {:.1}) scale={:.2} pivot=({:.1}, {:.1})",
        state.position.x, state.position.y, state.scale, state.pivot.x, state.pivot.y
    );
}

fn main() {
    let mut host = ScriptedHost::new(
        Capabilities {
            pointer_events: true,
            touch_events: true,
        },
        Size::new(640.0, 480.0),
    );
    report("initial", &host);

    // Drag 30 units right, 15 down.
    host.raw(pointer(ButtonPhase::Down, 1, 10.0, 10.0));
    host.raw(pointer(ButtonPhase::Move, 1, 25.0, 18.0));
    host.raw(pointer(ButtonPhase::Move, 1, 40.0, 25.0));
    host.raw(pointer(ButtonPhase::Up, 1, 40.0, 25.0));
    report("after drag", &host);

    // Pinch outwards to double the separation.
    host.raw(pointer(ButtonPhase::Down, 1, 200.0, 200.0));
    host.raw(pointer(ButtonPhase::Down, 2, 300.0, 200.0));
    host.raw(pointer(ButtonPhase::Move, 2, 350.0, 200.0));
    host.raw(pointer(ButtonPhase::Move, 2, 400.0, 200.0));
    host.raw(pointer(ButtonPhase::Up, 2, 400.0, 200.0));
    host.raw(pointer(ButtonPhase::Up, 1, 200.0, 200.0));
    report("after pinch", &host);

    // Idle for a moment so the lifted fingers do not pair with the taps
    // below.
    host.pump(300);

    // Two quick taps on the same spot.
    for _ in 0..2 {
        host.raw(pointer(ButtonPhase::Down, 1, 320.0, 240.0));
        host.raw(pointer(ButtonPhase::Up, 1, 320.0, 240.0));
    }
    report("after double tap", &host);

    // One wheel notch towards the screen; the synthetic pinch needs its
    // ticks delivered.
    host.raw(RawEvent::Wheel {
        position: Point::new(320.0, 240.0),
        delta_y: -3.0,
    });
    let ticks = host.pump(50);
    println!("wheel sequence produced {} synthetic events", ticks.len());
    report("after wheel notch", &host);

    host.teardown();
    let drops = host.controller().normalizer().drop_stats();
    println!("dropped notifications: {}", drops.total());
}
