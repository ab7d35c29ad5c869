// Copyright 2026 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the Pantograph demo binaries.

use kurbo::Size;

use pantograph_events::{BasicSurface, Capabilities, GestureEvent, RawEvent};
use pantograph_gestures::GestureController;
use pantograph_timing::ManualTimer;
use pantograph_view2d::{BasicView, View, ViewState};

/// Stand-in for a real windowing host.
///
/// Owns the collaborators a [`GestureController`] needs and replays scripted
/// input through them: raw notifications via [`ScriptedHost::raw`] and clock
/// time via [`ScriptedHost::pump`].
#[derive(Clone, Debug)]
pub struct ScriptedHost {
    controller: GestureController,
    surface: BasicSurface,
    view: BasicView,
    timer: ManualTimer,
}

impl ScriptedHost {
    /// Creates a host viewing an image of `image_size` with the given input
    /// capabilities.
    pub fn new(capabilities: Capabilities, image_size: Size) -> Self {
        let mut surface = BasicSurface::new(kurbo::Point::ORIGIN);
        let controller = GestureController::new(capabilities, &mut surface);
        Self {
            controller,
            surface,
            view: BasicView::new(image_size),
            timer: ManualTimer::new(),
        }
    }

    /// Delivers one raw notification through the pipeline.
    pub fn raw(&mut self, raw: RawEvent<'_>) -> Option<GestureEvent> {
        self.controller
            .handle_raw(raw, &mut self.surface, &mut self.view, &mut self.timer)
    }

    /// Advances the clock by `ms` and delivers every due tick, returning the
    /// canonical events the ticks produced.
    pub fn pump(&mut self, ms: u64) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        for tick in self.timer.advance(ms) {
            let forwarded = self.controller.timer_tick(
                tick,
                &mut self.surface,
                &mut self.view,
                &mut self.timer,
            );
            events.extend(forwarded);
        }
        events
    }

    /// Current view state.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.view.state()
    }

    /// The pipeline, for inspecting strategy, behavior, and drop counters.
    #[must_use]
    pub fn controller(&self) -> &GestureController {
        &self.controller
    }

    /// The surface, for inspecting which families are bound.
    #[must_use]
    pub fn surface(&self) -> &BasicSurface {
        &self.surface
    }

    /// Detaches the pipeline from the surface.
    pub fn teardown(&mut self) {
        self.controller.teardown(&mut self.surface, &mut self.timer);
    }
}
