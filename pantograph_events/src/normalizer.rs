// Copyright 2026 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input normalization: one canonical stream from heterogeneous raw input.

use kurbo::Point;

use pantograph_timing::{ScheduleHandle, Tick, Timer};

use crate::contacts::ContactSet;
use crate::event::{
    ButtonPhase, GestureEvent, Phase, PointerClass, PointerType, RawEvent, TouchPhase, TouchPoint,
};
use crate::surface::{Binding, BindingSet, Capabilities, Surface};

/// Fabricated contact distance at the start of a synthetic wheel sequence.
const WHEEL_START_DISTANCE: f64 = 100.0;
/// Distance change applied by each synthetic wheel tick.
const WHEEL_DISTANCE_STEP: f64 = 15.0;
/// Ticks in one synthetic wheel sequence.
const WHEEL_TICKS: u32 = 5;
/// Spacing of the synthetic wheel ticks in milliseconds.
const WHEEL_TICK_INTERVAL_MS: u64 = 10;

/// Which native input families the normalizer claims on its surface.
///
/// Chosen once at construction from the host [`Capabilities`] and never
/// revisited: the unified-pointer family is preferred, with the separate
/// mouse and touch families as the fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Claim the unified-pointer family; raw touch is bound only to
    /// suppress the platform default action.
    Pointer,
    /// Claim the separate mouse family, plus touch where available.
    MouseTouch,
}

impl Strategy {
    /// Selects the strategy for the given host capabilities.
    #[must_use]
    pub const fn for_capabilities(capabilities: Capabilities) -> Self {
        if capabilities.pointer_events {
            Self::Pointer
        } else {
            Self::MouseTouch
        }
    }
}

/// Counters for raw input the normalizer silently dropped.
///
/// Dropping is the designed response to out-of-domain input; these counters
/// only observe it. Hosts can snapshot them to notice integration problems
/// (for example, delivering events for a family that was never claimed).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropStats {
    /// Notifications whose device class is not supported (for example pen).
    pub unsupported_class: u64,
    /// Notifications whose class competes with the session's locked class.
    pub mismatched_class: u64,
    /// Notifications for a family that is not currently bound.
    pub unsubscribed: u64,
    /// Notifications carrying no usable contact: an end for an id that is
    /// not tracked, a move before any contact, a touch list with no touches.
    pub untracked: u64,
    /// Timer ticks whose handle does not match the retained schedule.
    pub stale_ticks: u64,
}

impl DropStats {
    /// Total number of dropped notifications.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.unsupported_class
            + self.mismatched_class
            + self.unsubscribed
            + self.untracked
            + self.stale_ticks
    }
}

/// In-flight synthetic wheel sequence.
#[derive(Clone, Copy, Debug)]
struct WheelRun {
    handle: ScheduleHandle,
    /// Surface-relative cursor position, captured once at the wheel event.
    target_point: Point,
    step: f64,
    distance: f64,
}

/// Snapshot of normalizer state for debugging and inspection.
#[derive(Clone, Copy, Debug)]
pub struct NormalizerDebugInfo {
    /// Selected input strategy.
    pub strategy: Strategy,
    /// Families currently bound on the surface.
    pub bound: BindingSet,
    /// Number of active unified-pointer contacts.
    pub active_contacts: usize,
    /// Device class locked by the current session, if any.
    pub locked: Option<PointerType>,
    /// `true` while a synthetic wheel sequence is in flight.
    pub wheel_active: bool,
    /// Drop counters.
    pub drops: DropStats,
}

/// Normalizes heterogeneous raw input into the canonical gesture stream.
///
/// Construction claims the best-available input families on the surface per
/// [`Strategy`]. Each raw notification produces at most one canonical
/// [`GestureEvent`]; out-of-domain input is silently dropped and counted in
/// [`DropStats`].
///
/// The normalizer is a host-driven state machine: the host forwards raw
/// notifications to [`EventNormalizer::handle`] and delivers due timer ticks
/// to [`EventNormalizer::timer_tick`]. Collaborators are passed per call and
/// never stored.
///
/// ## Example
///
/// ```rust
/// use kurbo::Point;
/// use pantograph_events::{
///     BasicSurface, ButtonPhase, Capabilities, EventNormalizer, Phase, PointerClass, RawEvent,
/// };
/// use pantograph_timing::ManualTimer;
///
/// let mut surface = BasicSurface::new(Point::ORIGIN);
/// let mut timer = ManualTimer::new();
/// let capabilities = Capabilities { pointer_events: true, touch_events: false };
/// let mut normalizer = EventNormalizer::new(capabilities, &mut surface);
///
/// let down = RawEvent::Pointer {
///     phase: ButtonPhase::Down,
///     id: 1,
///     class: PointerClass::Touch,
///     position: Point::new(40.0, 30.0),
/// };
/// let event = normalizer.handle(down, &mut surface, &mut timer).unwrap();
/// assert_eq!(event.phase, Phase::Start);
/// assert_eq!(event.distance, 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct EventNormalizer {
    strategy: Strategy,
    bound: BindingSet,
    contacts: ContactSet,
    wheel: Option<WheelRun>,
    drops: DropStats,
}

impl EventNormalizer {
    /// Creates a normalizer and claims input families on `surface`.
    ///
    /// - With unified-pointer support: binds [`Binding::PointerDown`], plus
    ///   [`Binding::TouchSuppress`] when a native touch family also exists.
    /// - Otherwise: binds [`Binding::MouseDown`], plus [`Binding::Touch`]
    ///   when a native touch family exists.
    /// - Always binds [`Binding::Wheel`].
    pub fn new(capabilities: Capabilities, surface: &mut impl Surface) -> Self {
        let strategy = Strategy::for_capabilities(capabilities);
        let mut normalizer = Self {
            strategy,
            bound: BindingSet::empty(),
            contacts: ContactSet::new(),
            wheel: None,
            drops: DropStats::default(),
        };

        match strategy {
            Strategy::Pointer => {
                normalizer.bind(Binding::PointerDown, surface);
                if capabilities.touch_events {
                    normalizer.bind(Binding::TouchSuppress, surface);
                }
            }
            Strategy::MouseTouch => {
                normalizer.bind(Binding::MouseDown, surface);
                if capabilities.touch_events {
                    normalizer.bind(Binding::Touch, surface);
                }
            }
        }
        normalizer.bind(Binding::Wheel, surface);
        normalizer
    }

    /// Returns the selected input strategy.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the drop counters.
    #[must_use]
    pub fn drop_stats(&self) -> DropStats {
        self.drops
    }

    /// Snapshot of the current normalizer state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> NormalizerDebugInfo {
        NormalizerDebugInfo {
            strategy: self.strategy,
            bound: self.bound,
            active_contacts: self.contacts.len(),
            locked: self.contacts.locked(),
            wheel_active: self.wheel.is_some(),
            drops: self.drops,
        }
    }

    /// Processes one raw notification.
    ///
    /// Returns the canonical event it produced, or `None` when the
    /// notification was consumed for suppression or dropped. Positions are
    /// translated to surface-relative coordinates with the origin re-queried
    /// on every call.
    pub fn handle(
        &mut self,
        event: RawEvent<'_>,
        surface: &mut impl Surface,
        timer: &mut impl Timer,
    ) -> Option<GestureEvent> {
        match event {
            RawEvent::Mouse { phase, position } => self.handle_mouse(phase, position, surface),
            RawEvent::Touch {
                phase,
                touches,
                changed,
            } => self.handle_touch(phase, touches, changed, surface),
            RawEvent::Pointer {
                phase,
                id,
                class,
                position,
            } => self.handle_pointer(phase, id, class, position, surface),
            RawEvent::Wheel { position, delta_y } => {
                self.handle_wheel(position, delta_y, surface, timer)
            }
        }
    }

    /// Processes one delivered timer tick.
    ///
    /// Ticks advance the synthetic wheel sequence: ticks before the final
    /// one emit `Move`, the final tick emits `End` and rebinds the wheel
    /// family. A tick whose handle does not match the retained schedule is
    /// dropped and counted.
    pub fn timer_tick(&mut self, tick: Tick, surface: &mut impl Surface) -> Option<GestureEvent> {
        let Some(run) = self.wheel.as_mut() else {
            self.drops.stale_ticks += 1;
            return None;
        };
        if run.handle != tick.handle {
            self.drops.stale_ticks += 1;
            return None;
        }

        run.distance += run.step;
        let event = GestureEvent {
            phase: if tick.last { Phase::End } else { Phase::Move },
            target_point: run.target_point,
            distance: run.distance,
            pointer: PointerType::Mouse,
        };

        if tick.last {
            self.wheel = None;
            self.bind(Binding::Wheel, surface);
        }
        Some(event)
    }

    /// Releases the surface: unbinds everything bound and cancels the
    /// in-flight wheel schedule.
    ///
    /// Idempotent; afterwards every raw notification is dropped as
    /// unsubscribed.
    pub fn teardown(&mut self, surface: &mut impl Surface, timer: &mut impl Timer) {
        for binding in Binding::ALL {
            if self.bound.contains(binding.as_set()) {
                surface.unbind(binding);
            }
        }
        self.bound = BindingSet::empty();

        if let Some(run) = self.wheel.take() {
            timer.cancel(run.handle);
        }
        self.contacts.clear();
    }

    fn handle_mouse(
        &mut self,
        phase: ButtonPhase,
        position: Point,
        surface: &mut impl Surface,
    ) -> Option<GestureEvent> {
        match phase {
            ButtonPhase::Down => {
                if !self.is_bound(Binding::MouseDown) {
                    self.drops.unsubscribed += 1;
                    return None;
                }
                if !self.is_bound(Binding::MouseTrack) {
                    self.bind(Binding::MouseTrack, surface);
                }
            }
            ButtonPhase::Move | ButtonPhase::Up => {
                if !self.is_bound(Binding::MouseTrack) {
                    self.drops.unsubscribed += 1;
                    return None;
                }
                if phase == ButtonPhase::Up {
                    self.unbind(Binding::MouseTrack, surface);
                }
            }
        }

        Some(GestureEvent {
            phase: phase.canonical(),
            target_point: position - surface.origin().to_vec2(),
            distance: 0.0,
            pointer: PointerType::Mouse,
        })
    }

    fn handle_touch(
        &mut self,
        phase: TouchPhase,
        touches: &[TouchPoint],
        changed: &[TouchPoint],
        surface: &mut impl Surface,
    ) -> Option<GestureEvent> {
        if self.is_bound(Binding::TouchSuppress) {
            // Bound purely to suppress the platform default; consumed, not dropped.
            return None;
        }
        if !self.is_bound(Binding::Touch) {
            self.drops.unsubscribed += 1;
            return None;
        }

        // A closing notification has an empty active list; the changed list
        // still carries the lifted touch's coordinates.
        let list = if touches.is_empty() { changed } else { touches };
        let Some(first) = list.first() else {
            self.drops.untracked += 1;
            return None;
        };
        let (target_point, distance) = aggregate(first.position, list.get(1).map(|t| t.position));

        Some(GestureEvent {
            phase: phase.canonical(),
            target_point: target_point - surface.origin().to_vec2(),
            distance,
            pointer: PointerType::Touch,
        })
    }

    fn handle_pointer(
        &mut self,
        phase: ButtonPhase,
        id: u64,
        class: PointerClass,
        position: Point,
        surface: &mut impl Surface,
    ) -> Option<GestureEvent> {
        let required = match phase {
            ButtonPhase::Down => Binding::PointerDown,
            ButtonPhase::Move | ButtonPhase::Up => Binding::PointerTrack,
        };
        if !self.is_bound(required) {
            self.drops.unsubscribed += 1;
            return None;
        }

        let Some(class) = class.canonical() else {
            self.drops.unsupported_class += 1;
            return None;
        };
        if let Some(locked) = self.contacts.locked()
            && locked != class
        {
            self.drops.mismatched_class += 1;
            return None;
        }

        let canonical_phase = phase.canonical();
        let (target_point, distance, pointer) = match canonical_phase {
            Phase::End => {
                if !self.contacts.contains(id) {
                    self.drops.untracked += 1;
                    return None;
                }
                let closing = self.contacts.len() == 1;
                // The lock clears when the last contact is removed; the
                // closing event still reports the session's class.
                let pointer = self.contacts.locked().unwrap_or(class);
                let Some(removed) = self.contacts.remove(id) else {
                    return None;
                };

                if closing {
                    self.unbind(Binding::PointerTrack, surface);
                    (removed.position, 0.0, pointer)
                } else {
                    let remaining = self.contacts.contacts();
                    let (point, distance) =
                        aggregate(remaining[0].position, remaining.get(1).map(|c| c.position));
                    (point, distance, pointer)
                }
            }
            Phase::Start | Phase::Move => {
                if canonical_phase == Phase::Move && self.contacts.is_empty() {
                    self.drops.untracked += 1;
                    return None;
                }
                if canonical_phase == Phase::Start && !self.is_bound(Binding::PointerTrack) {
                    self.bind(Binding::PointerTrack, surface);
                }
                self.contacts.upsert(id, position, class);

                let contacts = self.contacts.contacts();
                let (point, distance) =
                    aggregate(contacts[0].position, contacts.get(1).map(|c| c.position));
                (point, distance, class)
            }
        };

        Some(GestureEvent {
            phase: canonical_phase,
            target_point: target_point - surface.origin().to_vec2(),
            distance,
            pointer,
        })
    }

    fn handle_wheel(
        &mut self,
        position: Point,
        delta_y: f64,
        surface: &mut impl Surface,
        timer: &mut impl Timer,
    ) -> Option<GestureEvent> {
        if !self.is_bound(Binding::Wheel) {
            self.drops.unsubscribed += 1;
            return None;
        }
        // The wheel family stays unbound until the synthetic sequence ends,
        // so a scroll burst cannot start overlapping sequences.
        self.unbind(Binding::Wheel, surface);

        let target_point = position - surface.origin().to_vec2();
        let step = if delta_y < 0.0 {
            WHEEL_DISTANCE_STEP
        } else {
            -WHEEL_DISTANCE_STEP
        };
        let handle = timer.schedule(WHEEL_TICKS, WHEEL_TICK_INTERVAL_MS);
        self.wheel = Some(WheelRun {
            handle,
            target_point,
            step,
            distance: WHEEL_START_DISTANCE,
        });

        Some(GestureEvent {
            phase: Phase::Start,
            target_point,
            distance: WHEEL_START_DISTANCE,
            pointer: PointerType::Mouse,
        })
    }

    fn bind(&mut self, binding: Binding, surface: &mut impl Surface) {
        surface.bind(binding);
        self.bound.insert(binding.as_set());
    }

    fn unbind(&mut self, binding: Binding, surface: &mut impl Surface) {
        surface.unbind(binding);
        self.bound.remove(binding.as_set());
    }

    fn is_bound(&self, binding: Binding) -> bool {
        self.bound.contains(binding.as_set())
    }
}

/// Canonical target point and distance for an ordered contact list.
///
/// One contact is its own target with zero distance; with two or more, the
/// first two define the midpoint and separation.
fn aggregate(first: Point, second: Option<Point>) -> (Point, f64) {
    match second {
        Some(second) => (first.midpoint(second), first.distance(second)),
        None => (first, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use pantograph_timing::ManualTimer;

    use super::{EventNormalizer, Strategy};
    use crate::event::{
        ButtonPhase, Phase, PointerClass, PointerType, RawEvent, TouchPhase, TouchPoint,
    };
    use crate::surface::{BasicSurface, BindingSet, Capabilities};

    fn pointer(
        phase: ButtonPhase,
        id: u64,
        class: PointerClass,
        x: f64,
        y: f64,
    ) -> RawEvent<'static> {
        RawEvent::Pointer {
            phase,
            id,
            class,
            position: Point::new(x, y),
        }
    }

    fn pointer_setup() -> (EventNormalizer, BasicSurface, ManualTimer) {
        let mut surface = BasicSurface::new(Point::ORIGIN);
        let timer = ManualTimer::new();
        let normalizer = EventNormalizer::new(
            Capabilities {
                pointer_events: true,
                touch_events: false,
            },
            &mut surface,
        );
        (normalizer, surface, timer)
    }

    #[test]
    fn strategy_prefers_unified_pointer() {
        let caps = Capabilities {
            pointer_events: true,
            touch_events: true,
        };
        assert_eq!(Strategy::for_capabilities(caps), Strategy::Pointer);

        let caps = Capabilities {
            pointer_events: false,
            touch_events: true,
        };
        assert_eq!(Strategy::for_capabilities(caps), Strategy::MouseTouch);
    }

    #[test]
    fn pointer_strategy_claims_pointer_and_wheel() {
        let mut surface = BasicSurface::new(Point::ORIGIN);
        let _normalizer = EventNormalizer::new(
            Capabilities {
                pointer_events: true,
                touch_events: false,
            },
            &mut surface,
        );

        assert_eq!(surface.bound(), BindingSet::POINTER_DOWN | BindingSet::WHEEL);
    }

    #[test]
    fn pointer_strategy_with_touch_adds_suppression() {
        let mut surface = BasicSurface::new(Point::ORIGIN);
        let _normalizer = EventNormalizer::new(
            Capabilities {
                pointer_events: true,
                touch_events: true,
            },
            &mut surface,
        );

        assert_eq!(
            surface.bound(),
            BindingSet::POINTER_DOWN | BindingSet::TOUCH_SUPPRESS | BindingSet::WHEEL
        );
    }

    #[test]
    fn fallback_strategy_claims_mouse_touch_and_wheel() {
        let mut surface = BasicSurface::new(Point::ORIGIN);
        let _normalizer = EventNormalizer::new(
            Capabilities {
                pointer_events: false,
                touch_events: true,
            },
            &mut surface,
        );

        assert_eq!(
            surface.bound(),
            BindingSet::MOUSE_DOWN | BindingSet::TOUCH | BindingSet::WHEEL
        );
    }

    #[test]
    fn mouse_down_starts_tracking_and_up_stops() {
        let mut surface = BasicSurface::new(Point::ORIGIN);
        let mut timer = ManualTimer::new();
        let mut normalizer = EventNormalizer::new(Capabilities::default(), &mut surface);

        let down = normalizer
            .handle(
                RawEvent::Mouse {
                    phase: ButtonPhase::Down,
                    position: Point::new(5.0, 6.0),
                },
                &mut surface,
                &mut timer,
            )
            .unwrap();
        assert_eq!(down.phase, Phase::Start);
        assert_eq!(down.pointer, PointerType::Mouse);
        assert_eq!(down.distance, 0.0);
        assert!(surface.bound().contains(BindingSet::MOUSE_TRACK));

        let up = normalizer
            .handle(
                RawEvent::Mouse {
                    phase: ButtonPhase::Up,
                    position: Point::new(9.0, 6.0),
                },
                &mut surface,
                &mut timer,
            )
            .unwrap();
        assert_eq!(up.phase, Phase::End);
        assert!(!surface.bound().contains(BindingSet::MOUSE_TRACK));
    }

    #[test]
    fn mouse_move_without_tracking_is_dropped() {
        let mut surface = BasicSurface::new(Point::ORIGIN);
        let mut timer = ManualTimer::new();
        let mut normalizer = EventNormalizer::new(Capabilities::default(), &mut surface);

        let result = normalizer.handle(
            RawEvent::Mouse {
                phase: ButtonPhase::Move,
                position: Point::new(5.0, 6.0),
            },
            &mut surface,
            &mut timer,
        );

        assert_eq!(result, None);
        assert_eq!(normalizer.drop_stats().unsubscribed, 1);
    }

    #[test]
    fn positions_are_translated_by_the_current_origin() {
        let mut surface = BasicSurface::new(Point::new(100.0, 50.0));
        let mut timer = ManualTimer::new();
        let mut normalizer = EventNormalizer::new(Capabilities::default(), &mut surface);

        let down = normalizer
            .handle(
                RawEvent::Mouse {
                    phase: ButtonPhase::Down,
                    position: Point::new(140.0, 80.0),
                },
                &mut surface,
                &mut timer,
            )
            .unwrap();
        assert_eq!(down.target_point, Point::new(40.0, 30.0));

        // The surface moves; the next event uses the fresh origin.
        surface.set_origin(Point::new(90.0, 50.0));
        let moved = normalizer
            .handle(
                RawEvent::Mouse {
                    phase: ButtonPhase::Move,
                    position: Point::new(140.0, 80.0),
                },
                &mut surface,
                &mut timer,
            )
            .unwrap();
        assert_eq!(moved.target_point, Point::new(50.0, 30.0));
    }

    #[test]
    fn pen_class_is_dropped_and_counted() {
        let (mut normalizer, mut surface, mut timer) = pointer_setup();

        let result = normalizer.handle(
            pointer(ButtonPhase::Down, 1, PointerClass::Pen, 10.0, 10.0),
            &mut surface,
            &mut timer,
        );

        assert_eq!(result, None);
        assert_eq!(normalizer.drop_stats().unsupported_class, 1);
    }

    #[test]
    fn competing_class_is_dropped_while_locked() {
        let (mut normalizer, mut surface, mut timer) = pointer_setup();

        normalizer.handle(
            pointer(ButtonPhase::Down, 1, PointerClass::Touch, 10.0, 10.0),
            &mut surface,
            &mut timer,
        );
        let result = normalizer.handle(
            pointer(ButtonPhase::Down, 2, PointerClass::Mouse, 20.0, 20.0),
            &mut surface,
            &mut timer,
        );

        assert_eq!(result, None);
        assert_eq!(normalizer.drop_stats().mismatched_class, 1);

        // The same class is accepted again once the session closes.
        normalizer.handle(
            pointer(ButtonPhase::Up, 1, PointerClass::Touch, 10.0, 10.0),
            &mut surface,
            &mut timer,
        );
        let reopened = normalizer.handle(
            pointer(ButtonPhase::Down, 2, PointerClass::Mouse, 20.0, 20.0),
            &mut surface,
            &mut timer,
        );
        assert!(reopened.is_some());
        assert_eq!(reopened.unwrap().pointer, PointerType::Mouse);
    }

    #[test]
    fn second_contact_reports_midpoint_and_distance() {
        let (mut normalizer, mut surface, mut timer) = pointer_setup();

        normalizer.handle(
            pointer(ButtonPhase::Down, 1, PointerClass::Touch, 0.0, 0.0),
            &mut surface,
            &mut timer,
        );
        let second = normalizer
            .handle(
                pointer(ButtonPhase::Down, 2, PointerClass::Touch, 30.0, 40.0),
                &mut surface,
                &mut timer,
            )
            .unwrap();

        assert_eq!(second.phase, Phase::Start);
        assert_eq!(second.target_point, Point::new(15.0, 20.0));
        assert_eq!(second.distance, 50.0);
    }

    #[test]
    fn closing_end_keeps_coordinates_and_class() {
        let (mut normalizer, mut surface, mut timer) = pointer_setup();

        normalizer.handle(
            pointer(ButtonPhase::Down, 1, PointerClass::Touch, 12.0, 34.0),
            &mut surface,
            &mut timer,
        );
        assert!(surface.bound().contains(BindingSet::POINTER_TRACK));

        let end = normalizer
            .handle(
                pointer(ButtonPhase::Up, 1, PointerClass::Touch, 12.0, 34.0),
                &mut surface,
                &mut timer,
            )
            .unwrap();

        assert_eq!(end.phase, Phase::End);
        assert_eq!(end.target_point, Point::new(12.0, 34.0));
        assert_eq!(end.pointer, PointerType::Touch);
        assert!(!surface.bound().contains(BindingSet::POINTER_TRACK));
        assert_eq!(normalizer.debug_info().locked, None);
    }

    #[test]
    fn non_last_end_reports_the_remaining_contact() {
        let (mut normalizer, mut surface, mut timer) = pointer_setup();

        normalizer.handle(
            pointer(ButtonPhase::Down, 1, PointerClass::Touch, 0.0, 0.0),
            &mut surface,
            &mut timer,
        );
        normalizer.handle(
            pointer(ButtonPhase::Down, 2, PointerClass::Touch, 30.0, 40.0),
            &mut surface,
            &mut timer,
        );

        let end = normalizer
            .handle(
                pointer(ButtonPhase::Up, 1, PointerClass::Touch, 0.0, 0.0),
                &mut surface,
                &mut timer,
            )
            .unwrap();

        // Distance collapses to zero; the session stays open and tracked.
        assert_eq!(end.phase, Phase::End);
        assert_eq!(end.target_point, Point::new(30.0, 40.0));
        assert_eq!(end.distance, 0.0);
        assert!(surface.bound().contains(BindingSet::POINTER_TRACK));
        assert_eq!(normalizer.debug_info().locked, Some(PointerType::Touch));
    }

    #[test]
    fn end_for_untracked_id_is_dropped() {
        let (mut normalizer, mut surface, mut timer) = pointer_setup();

        normalizer.handle(
            pointer(ButtonPhase::Down, 1, PointerClass::Touch, 0.0, 0.0),
            &mut surface,
            &mut timer,
        );
        let result = normalizer.handle(
            pointer(ButtonPhase::Up, 99, PointerClass::Touch, 5.0, 5.0),
            &mut surface,
            &mut timer,
        );

        assert_eq!(result, None);
        assert_eq!(normalizer.drop_stats().untracked, 1);
        // The session is untouched.
        assert_eq!(normalizer.debug_info().active_contacts, 1);
        assert!(surface.bound().contains(BindingSet::POINTER_TRACK));
    }

    #[test]
    fn move_upserts_an_unknown_contact_into_an_open_session() {
        let (mut normalizer, mut surface, mut timer) = pointer_setup();

        normalizer.handle(
            pointer(ButtonPhase::Down, 1, PointerClass::Touch, 0.0, 0.0),
            &mut surface,
            &mut timer,
        );
        let joined = normalizer
            .handle(
                pointer(ButtonPhase::Move, 2, PointerClass::Touch, 10.0, 0.0),
                &mut surface,
                &mut timer,
            )
            .unwrap();

        assert_eq!(joined.phase, Phase::Move);
        assert_eq!(joined.distance, 10.0);
        assert_eq!(normalizer.debug_info().active_contacts, 2);
    }

    #[test]
    fn touch_notifications_fall_back_to_the_changed_list() {
        let mut surface = BasicSurface::new(Point::ORIGIN);
        let mut timer = ManualTimer::new();
        let mut normalizer = EventNormalizer::new(
            Capabilities {
                pointer_events: false,
                touch_events: true,
            },
            &mut surface,
        );

        let lifted = [TouchPoint {
            id: 1,
            position: Point::new(25.0, 35.0),
        }];
        let end = normalizer
            .handle(
                RawEvent::Touch {
                    phase: TouchPhase::End,
                    touches: &[],
                    changed: &lifted,
                },
                &mut surface,
                &mut timer,
            )
            .unwrap();

        assert_eq!(end.phase, Phase::End);
        assert_eq!(end.target_point, Point::new(25.0, 35.0));
        assert_eq!(end.pointer, PointerType::Touch);
    }

    #[test]
    fn touch_notification_with_no_touches_at_all_is_dropped() {
        let mut surface = BasicSurface::new(Point::ORIGIN);
        let mut timer = ManualTimer::new();
        let mut normalizer = EventNormalizer::new(
            Capabilities {
                pointer_events: false,
                touch_events: true,
            },
            &mut surface,
        );

        let result = normalizer.handle(
            RawEvent::Touch {
                phase: TouchPhase::End,
                touches: &[],
                changed: &[],
            },
            &mut surface,
            &mut timer,
        );

        assert_eq!(result, None);
        assert_eq!(normalizer.drop_stats().untracked, 1);
    }

    #[test]
    fn touch_cancel_maps_to_end() {
        let mut surface = BasicSurface::new(Point::ORIGIN);
        let mut timer = ManualTimer::new();
        let mut normalizer = EventNormalizer::new(
            Capabilities {
                pointer_events: false,
                touch_events: true,
            },
            &mut surface,
        );

        let touches = [
            TouchPoint {
                id: 1,
                position: Point::new(0.0, 0.0),
            },
            TouchPoint {
                id: 2,
                position: Point::new(60.0, 80.0),
            },
        ];
        let cancel = normalizer
            .handle(
                RawEvent::Touch {
                    phase: TouchPhase::Cancel,
                    touches: &touches,
                    changed: &[],
                },
                &mut surface,
                &mut timer,
            )
            .unwrap();

        assert_eq!(cancel.phase, Phase::End);
        assert_eq!(cancel.target_point, Point::new(30.0, 40.0));
        assert_eq!(cancel.distance, 100.0);
    }

    #[test]
    fn suppressed_touch_is_consumed_without_counting() {
        let mut surface = BasicSurface::new(Point::ORIGIN);
        let mut timer = ManualTimer::new();
        let mut normalizer = EventNormalizer::new(
            Capabilities {
                pointer_events: true,
                touch_events: true,
            },
            &mut surface,
        );

        let touches = [TouchPoint {
            id: 1,
            position: Point::new(5.0, 5.0),
        }];
        let result = normalizer.handle(
            RawEvent::Touch {
                phase: TouchPhase::Start,
                touches: &touches,
                changed: &[],
            },
            &mut surface,
            &mut timer,
        );

        assert_eq!(result, None);
        assert_eq!(normalizer.drop_stats().total(), 0);
    }
}
