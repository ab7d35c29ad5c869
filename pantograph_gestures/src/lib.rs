// Copyright 2026 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pantograph_gestures --heading-base-level=0

//! Pantograph Gestures: the canonical event stream interpreted as pan/zoom
//! edits of a 2D view.
//!
//! [`GestureInterpreter`] consumes the canonical stream produced by
//! [`pantograph_events`] and edits a [`View`](pantograph_view2d::View).
//! Every non-move event opens a session (a snapshot of the view plus the
//! event itself); the first qualifying move selects one behavior for the
//! rest of the session:
//!
//! - [`Behavior::Drag`]: one contact, no prior tap. The view translates by
//!   the travel since the session opened.
//! - [`Behavior::OneTouchZoom`]: one touch contact right after a clean tap.
//!   Vertical travel maps linearly onto the scale, anchored where the press
//!   landed.
//! - [`Behavior::MultiTouch`]: separated contacts. The scale follows the
//!   ratio of the current separation to the session's, anchored at the
//!   current midpoint.
//!
//! Ends also count as taps. Two clean taps inside a 300ms pairing window
//! step the scale up by `0.2` around the second tap.
//!
//! [`GestureController`] bundles an
//! [`EventNormalizer`](pantograph_events::EventNormalizer) with an
//! interpreter for hosts that want the whole pipeline behind one pair of
//! entry points: `handle_raw` for raw notifications and `timer_tick` for
//! due ticks.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use pantograph_events::{BasicSurface, ButtonPhase, Capabilities, PointerClass, RawEvent};
//! use pantograph_gestures::GestureController;
//! use pantograph_timing::ManualTimer;
//! use pantograph_view2d::{BasicView, View};
//!
//! let mut surface = BasicSurface::new(Point::ORIGIN);
//! let mut view = BasicView::new(Size::new(640.0, 480.0));
//! let mut timer = ManualTimer::new();
//! let mut controller = GestureController::new(
//!     Capabilities {
//!         pointer_events: true,
//!         touch_events: false,
//!     },
//!     &mut surface,
//! );
//!
//! // Press and drag: the view pans by the pointer's travel.
//! for (phase, x, y) in [
//!     (ButtonPhase::Down, 10.0, 10.0),
//!     (ButtonPhase::Move, 40.0, 25.0),
//!     (ButtonPhase::Up, 40.0, 25.0),
//! ] {
//!     let raw = RawEvent::Pointer {
//!         phase,
//!         id: 1,
//!         class: PointerClass::Mouse,
//!         position: Point::new(x, y),
//!     };
//!     controller.handle_raw(raw, &mut surface, &mut view, &mut timer);
//! }
//! assert_eq!(view.state().position, Vec2::new(30.0, 15.0));
//! ```
//!
//! Edits are absolute against the session snapshot rather than deltas
//! against the previous move, so a dropped or reordered move never leaves
//! residue in the view.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod interpreter;

pub use controller::GestureController;
pub use interpreter::{Behavior, GestureInterpreter, InterpreterDebugInfo};
