// Copyright 2026 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture interpretation over the canonical event stream.

use kurbo::Point;

use pantograph_events::{GestureEvent, Phase, PointerType};
use pantograph_timing::{ScheduleHandle, Tick, Timer};
use pantograph_view2d::{View, ViewState};

/// Scale step applied by a double tap.
const DOUBLE_TAP_SCALE_STEP: f64 = 0.2;
/// Vertical travel, in surface units, that maps to one whole scale unit
/// during a one-touch zoom.
const ONE_TOUCH_ZOOM_TRAVEL: f64 = 300.0;
/// Movement beyond this many units on either axis stops counting as a tap.
const TAP_SLOP: f64 = 3.0;
/// Window within which two taps pair into a double tap.
const TAP_PAIR_WINDOW_MS: u64 = 300;

/// Continuous gesture selected for the current session.
///
/// Selection happens on the first qualifying `Move` of a session and sticks
/// until a non-move event closes the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Behavior {
    /// No continuous gesture is active.
    #[default]
    Idle,
    /// Single contact translating the view.
    Drag,
    /// Single touch contact zooming by vertical travel, after one clean tap.
    OneTouchZoom,
    /// Two contacts zooming by separation ratio.
    MultiTouch,
}

/// Snapshot of interpreter state for debugging and inspection.
#[derive(Clone, Copy, Debug)]
pub struct InterpreterDebugInfo {
    /// Active continuous gesture.
    pub behavior: Behavior,
    /// Clean taps counted inside the current pairing window.
    pub taps: u32,
    /// `true` while a tap pairing window schedule is armed.
    pub tap_window_armed: bool,
    /// `true` once a session reference (event and view snapshot) exists.
    pub session_open: bool,
}

/// Interprets the canonical gesture stream as pan/zoom edits of a [`View`].
///
/// Every non-move event opens a session: the interpreter snapshots the view
/// state and keeps the event as the session reference. The first `Move` that
/// qualifies selects a [`Behavior`], and every `Move` after that maps the
/// distance travelled since the reference into an absolute view edit. Ends
/// are also counted as taps; two clean taps inside the pairing window step
/// the scale up around the second tap.
///
/// Like the normalizer, the interpreter is host-driven: the view and timer
/// are passed per call, and the tap pairing window expires only when the
/// host delivers the matching [`Tick`] to [`GestureInterpreter::timer_tick`].
#[derive(Clone, Debug, Default)]
pub struct GestureInterpreter {
    behavior: Behavior,
    start_event: Option<GestureEvent>,
    start_state: Option<ViewState>,
    taps: u32,
    tap_reset: Option<ScheduleHandle>,
}

impl GestureInterpreter {
    /// Creates an idle interpreter with no session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            behavior: Behavior::Idle,
            start_event: None,
            start_state: None,
            taps: 0,
            tap_reset: None,
        }
    }

    /// Returns the active continuous gesture.
    #[must_use]
    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    /// Returns the number of clean taps counted in the current window.
    #[must_use]
    pub fn taps(&self) -> u32 {
        self.taps
    }

    /// Snapshot of the current interpreter state for debugging and
    /// inspection.
    #[must_use]
    pub fn debug_info(&self) -> InterpreterDebugInfo {
        InterpreterDebugInfo {
            behavior: self.behavior,
            taps: self.taps,
            tap_window_armed: self.tap_reset.is_some(),
            session_open: self.start_event.is_some(),
        }
    }

    /// Processes one canonical event, applying any resulting edit to `view`.
    ///
    /// The order of business is fixed: tap bookkeeping first, then the
    /// double-tap shortcut, then behavior selection and dispatch for moves,
    /// and finally the session snapshot for everything that is not a move.
    /// A double tap consumes its event entirely, so the closing end of the
    /// second tap does not re-snapshot the session.
    pub fn handle(&mut self, event: GestureEvent, view: &mut impl View, timer: &mut impl Timer) {
        self.count_taps(event, timer);

        if self.behavior == Behavior::Idle && self.taps == 2 {
            self.taps = 0;
            let state = view.state();
            let scale = state.scale + DOUBLE_TAP_SCALE_STEP;
            view.set_state(state.scaled_about(event.target_point, scale, view.image_size()));
            return;
        }

        if event.phase == Phase::Move {
            if self.behavior == Behavior::Idle {
                self.behavior = self.classify(event);
            }
            self.dispatch(event, view);
        } else {
            self.start_state = Some(view.state());
            self.start_event = Some(event);
            if self.behavior != Behavior::Idle {
                self.taps = 0;
            }
            self.behavior = Behavior::Idle;
        }
    }

    /// Processes one delivered timer tick.
    ///
    /// Returns `true` when the tick matched the armed tap pairing window and
    /// was consumed. Ticks from other schedules are left for their owners.
    pub fn timer_tick(&mut self, tick: Tick) -> bool {
        if self.tap_reset != Some(tick.handle) {
            return false;
        }
        self.taps = 0;
        if tick.last {
            self.tap_reset = None;
        }
        true
    }

    /// Drops all session state and cancels the armed tap window.
    pub fn reset(&mut self, timer: &mut impl Timer) {
        if let Some(handle) = self.tap_reset.take() {
            timer.cancel(handle);
        }
        self.behavior = Behavior::Idle;
        self.start_event = None;
        self.start_state = None;
        self.taps = 0;
    }

    /// Tap bookkeeping, on end events only.
    ///
    /// The pairing window arms when the first tap of a potential pair lands,
    /// before the count changes. One retained schedule backs the window; a
    /// stale one is cancelled rather than left to fire early.
    fn count_taps(&mut self, event: GestureEvent, timer: &mut impl Timer) {
        if event.phase != Phase::End {
            return;
        }
        if self.taps == 0 {
            if let Some(handle) = self.tap_reset.take() {
                timer.cancel(handle);
            }
            self.tap_reset = Some(timer.schedule(1, TAP_PAIR_WINDOW_MS));
        }

        let stationary = self
            .start_event
            .is_some_and(|start| !exceeds_slop(start.target_point, event.target_point));
        if stationary {
            self.taps += 1;
        } else {
            self.taps = 0;
        }
    }

    fn classify(&self, event: GestureEvent) -> Behavior {
        let Some(start) = self.start_event else {
            return Behavior::Idle;
        };
        let moved = exceeds_slop(start.target_point, event.target_point);

        if event.pointer == PointerType::Touch
            && self.taps == 1
            && moved
            && start.phase == Phase::Start
        {
            Behavior::OneTouchZoom
        } else if event.distance > 0.0 {
            Behavior::MultiTouch
        } else if moved {
            Behavior::Drag
        } else {
            Behavior::Idle
        }
    }

    /// Applies the active behavior's edit for one move event.
    ///
    /// Every edit is absolute against the session snapshot, so dropped or
    /// reordered moves never accumulate error.
    fn dispatch(&mut self, event: GestureEvent, view: &mut impl View) {
        let (Some(start), Some(start_state)) = (self.start_event, self.start_state) else {
            return;
        };

        match self.behavior {
            Behavior::Idle => {}
            Behavior::Drag => {
                let mut state = view.state();
                state.position = start_state.position + (event.target_point - start.target_point);
                view.set_state(state);
            }
            Behavior::OneTouchZoom => {
                let travel = event.target_point.y - start.target_point.y;
                let scale = start_state.scale + travel / ONE_TOUCH_ZOOM_TRAVEL;
                let next = view
                    .state()
                    .scaled_about(start.target_point, scale, view.image_size());
                view.set_state(next);
            }
            Behavior::MultiTouch => {
                let scale = start_state.scale * (event.distance / start.distance);
                let next = view
                    .state()
                    .scaled_about(event.target_point, scale, view.image_size());
                view.set_state(next);
            }
        }
    }
}

/// `true` when the two points differ by more than the tap slop on either
/// axis.
fn exceeds_slop(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() > TAP_SLOP || (a.y - b.y).abs() > TAP_SLOP
}
