// Copyright 2026 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! How capability detection picks an input strategy.
//!
//! Builds a pipeline against each capability combination and prints which
//! input families it claims, then shows the drop counters reacting to input
//! the normalizer refuses.
//!
//! Run:
//! - `cargo run -p pantograph_demos --example input_families`

use kurbo::{Point, Size};
use pantograph_demos::ScriptedHost;
use pantograph_events::{ButtonPhase, Capabilities, PointerClass, RawEvent};

const IMAGE: Size = Size::new(640.0, 480.0);

fn main() {
    println!("strategy and bindings by capability:");
    for (pointer_events, touch_events) in
        [(true, true), (true, false), (false, true), (false, false)]
    {
        let capabilities = Capabilities {
            pointer_events,
            touch_events,
        };
        let host = ScriptedHost::new(capabilities, IMAGE);
        println!(
            "  pointer={pointer_events} touch={touch_events} -> {:?} {:?}",
            host.controller().normalizer().strategy(),
            host.surface().bound(),
        );
    }

    // Now feed a pipeline input it refuses and watch the counters.
    let mut host = ScriptedHost::new(
        Capabilities {
            pointer_events: true,
            touch_events: false,
        },
        IMAGE,
    );

    // A pen press: the class is not supported.
    host.raw(RawEvent::Pointer {
        phase: ButtonPhase::Down,
        id: 1,
        class: PointerClass::Pen,
        position: Point::new(10.0, 10.0),
    });

    // A move with no press tracked: the family is not bound.
    host.raw(RawEvent::Pointer {
        phase: ButtonPhase::Move,
        id: 1,
        class: PointerClass::Mouse,
        position: Point::new(20.0, 20.0),
    });

    // A lift for a contact that was never pressed.
    host.raw(RawEvent::Pointer {
        phase: ButtonPhase::Down,
        id: 2,
        class: PointerClass::Touch,
        position: Point::new(30.0, 30.0),
    });
    host.raw(RawEvent::Pointer {
        phase: ButtonPhase::Up,
        id: 99,
        class: PointerClass::Touch,
        position: Point::new(30.0, 30.0),
    });

    let drops = host.controller().normalizer().drop_stats();
    println!("drop counters after refused input: {drops:?}");
    println!("total dropped: {}", drops.total());
}
