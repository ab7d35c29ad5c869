// Copyright 2026 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pantograph_events --heading-base-level=0

//! Pantograph Events: raw input normalized into one canonical gesture stream.
//!
//! Hosts expose pointing input as several overlapping families: a unified
//! pointer family, separate mouse and touch families, and a wheel. This crate
//! collapses whichever subset a host offers into one stream of
//! [`GestureEvent`]s, so gesture interpretation can be written once against
//! three phases and two device classes.
//!
//! - [`EventNormalizer`] claims input families on a [`Surface`] according to
//!   the host's [`Capabilities`], tracks unified-pointer contacts, and
//!   fabricates pinch-like sequences from wheel input via a host-pumped
//!   [`Timer`](pantograph_timing::Timer).
//! - [`GestureEvent`] carries a [`Phase`], a surface-relative target point, a
//!   contact separation distance, and the [`PointerType`] that produced it.
//! - [`ContactSet`] tracks unified-pointer contacts in arrival order and
//!   locks each session to the device class that opened it.
//!
//! Out-of-domain input (pen contacts, competing device classes, unbound
//! families, unknown contact ids, stale timer ticks) is dropped silently and
//! counted in [`DropStats`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use pantograph_events::{
//!     BasicSurface, ButtonPhase, Capabilities, EventNormalizer, Phase, PointerType, RawEvent,
//! };
//! use pantograph_timing::ManualTimer;
//!
//! let mut surface = BasicSurface::new(Point::new(100.0, 50.0));
//! let mut timer = ManualTimer::new();
//! let mut normalizer = EventNormalizer::new(Capabilities::default(), &mut surface);
//!
//! // A mouse press starts move tracking and emits a canonical start.
//! let down = RawEvent::Mouse {
//!     phase: ButtonPhase::Down,
//!     position: Point::new(140.0, 80.0),
//! };
//! let event = normalizer.handle(down, &mut surface, &mut timer).unwrap();
//! assert_eq!(event.phase, Phase::Start);
//! assert_eq!(event.pointer, PointerType::Mouse);
//! // Positions are translated into surface-relative coordinates.
//! assert_eq!(event.target_point, Point::new(40.0, 30.0));
//! ```
//!
//! ## Host integration
//!
//! The normalizer is a pure state machine; the host owns the event loop and
//! the clock:
//!
//! - Forward each raw input notification to [`EventNormalizer::handle`]. At
//!   most one canonical event comes back per notification.
//! - Pump the [`Timer`](pantograph_timing::Timer) and deliver due
//!   [`Tick`](pantograph_timing::Tick)s to [`EventNormalizer::timer_tick`];
//!   this is what advances synthetic wheel sequences.
//! - Call [`EventNormalizer::teardown`] when detaching from the surface. It
//!   releases every binding and cancels the in-flight wheel schedule.
//!
//! Collaborators ([`Surface`], [`Timer`](pantograph_timing::Timer)) are
//! passed into each call and never stored, so the normalizer holds no
//! references and moves freely.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

mod contacts;
mod event;
mod normalizer;
mod surface;

pub use contacts::{Contact, ContactSet};
pub use event::{
    ButtonPhase, GestureEvent, Phase, PointerClass, PointerType, RawEvent, TouchPhase, TouchPoint,
};
pub use normalizer::{DropStats, EventNormalizer, NormalizerDebugInfo, Strategy};
pub use surface::{BasicSurface, Binding, BindingSet, Capabilities, Surface};
