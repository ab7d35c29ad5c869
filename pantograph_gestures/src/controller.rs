// Copyright 2026 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-facing pipeline: raw input in, view edits out.

use pantograph_events::{Capabilities, EventNormalizer, GestureEvent, RawEvent, Surface};
use pantograph_timing::{Tick, Timer};
use pantograph_view2d::View;

use crate::interpreter::GestureInterpreter;

/// One-stop pipeline from raw input notifications to pan/zoom edits.
///
/// A controller owns an [`EventNormalizer`] and a [`GestureInterpreter`] and
/// wires them together: each raw notification is normalized, and the
/// canonical event (if any) is interpreted against the view in the same
/// call. Hosts that want the two halves separately can use the crates
/// individually; this type is the common arrangement.
///
/// Collaborators are passed per call, so one controller can outlive
/// surface or view reconfigurations as long as the host stays consistent
/// about which it passes.
///
/// ## Example
///
/// ```rust
/// use kurbo::{Point, Size};
/// use pantograph_events::{BasicSurface, Capabilities, RawEvent};
/// use pantograph_gestures::GestureController;
/// use pantograph_timing::ManualTimer;
/// use pantograph_view2d::{BasicView, View};
///
/// let mut surface = BasicSurface::new(Point::ORIGIN);
/// let mut view = BasicView::new(Size::new(640.0, 480.0));
/// let mut timer = ManualTimer::new();
/// let mut controller = GestureController::new(
///     Capabilities {
///         pointer_events: true,
///         touch_events: false,
///     },
///     &mut surface,
/// );
///
/// // One wheel notch zooms in through a short synthetic pinch.
/// let wheel = RawEvent::Wheel {
///     position: Point::new(320.0, 240.0),
///     delta_y: -3.0,
/// };
/// controller.handle_raw(wheel, &mut surface, &mut view, &mut timer);
/// for tick in timer.advance(50) {
///     controller.timer_tick(tick, &mut surface, &mut view, &mut timer);
/// }
///
/// // Four move ticks applied the ratios 1.15, 1.30, 1.45, 1.60; the final
/// // tick closes the sequence without scaling further.
/// assert!((view.state().scale - 1.6).abs() < 1e-9);
/// assert_eq!(view.state().pivot, Point::new(320.0, 240.0));
/// ```
#[derive(Clone, Debug)]
pub struct GestureController {
    normalizer: EventNormalizer,
    interpreter: GestureInterpreter,
}

impl GestureController {
    /// Creates the pipeline and claims input families on `surface`.
    pub fn new(capabilities: Capabilities, surface: &mut impl Surface) -> Self {
        Self {
            normalizer: EventNormalizer::new(capabilities, surface),
            interpreter: GestureInterpreter::new(),
        }
    }

    /// Returns the normalization half of the pipeline.
    #[must_use]
    pub fn normalizer(&self) -> &EventNormalizer {
        &self.normalizer
    }

    /// Returns the interpretation half of the pipeline.
    #[must_use]
    pub fn interpreter(&self) -> &GestureInterpreter {
        &self.interpreter
    }

    /// Processes one raw notification end to end.
    ///
    /// Returns the canonical event that was interpreted, or `None` when
    /// normalization dropped or consumed the notification. Any resulting
    /// view edit has already been applied by the time this returns.
    pub fn handle_raw(
        &mut self,
        event: RawEvent<'_>,
        surface: &mut impl Surface,
        view: &mut impl View,
        timer: &mut impl Timer,
    ) -> Option<GestureEvent> {
        let event = self.normalizer.handle(event, surface, timer)?;
        self.interpreter.handle(event, view, timer);
        Some(event)
    }

    /// Processes one delivered timer tick end to end.
    ///
    /// The interpreter gets first claim (tap pairing windows); unclaimed
    /// ticks go to the normalizer, and any synthetic wheel event they
    /// produce is interpreted immediately.
    pub fn timer_tick(
        &mut self,
        tick: Tick,
        surface: &mut impl Surface,
        view: &mut impl View,
        timer: &mut impl Timer,
    ) -> Option<GestureEvent> {
        if self.interpreter.timer_tick(tick) {
            return None;
        }
        let event = self.normalizer.timer_tick(tick, surface)?;
        self.interpreter.handle(event, view, timer);
        Some(event)
    }

    /// Releases the surface and drops all gesture state.
    ///
    /// Idempotent, like the underlying [`EventNormalizer::teardown`].
    pub fn teardown(&mut self, surface: &mut impl Surface, timer: &mut impl Timer) {
        self.normalizer.teardown(surface, timer);
        self.interpreter.reset(timer);
    }
}
