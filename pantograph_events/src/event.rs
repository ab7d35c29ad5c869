// Copyright 2026 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical gesture events and the raw input vocabulary they are built from.

use kurbo::Point;

/// Lifecycle phase of a canonical gesture event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// A contact landed or a synthetic sequence began.
    Start,
    /// Positions changed while at least one contact is active.
    Move,
    /// The reported configuration of contacts ended.
    End,
}

/// Canonical device class of a gesture.
///
/// Raw input arrives from several native families; by the time an event is
/// canonical it is either mouse-like or touch-like. Pen input is not
/// supported and never reaches this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerType {
    /// Mouse-driven, including synthetic wheel-zoom sequences.
    Mouse,
    /// Touch-driven.
    Touch,
}

/// One canonical gesture event.
///
/// This is the single vocabulary the gesture interpreter consumes, whatever
/// native family the input arrived on. `target_point` is surface-relative.
/// `distance` is `0.0` while one contact is active and the Euclidean distance
/// between the first two contacts otherwise; the synthetic wheel sequence
/// fabricates distances to express zoom speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureEvent {
    /// Lifecycle phase.
    pub phase: Phase,
    /// Representative point of the gesture, relative to the surface origin.
    ///
    /// The single contact's position, or the midpoint of the first two.
    pub target_point: Point,
    /// Separation of the first two contacts, `0.0` for a single contact.
    pub distance: f64,
    /// Device class of the gesture.
    pub pointer: PointerType,
}

/// Phase of a button-driven native event (mouse or unified pointer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonPhase {
    /// Button or contact pressed.
    Down,
    /// Position changed.
    Move,
    /// Button or contact released.
    Up,
}

/// Phase of a native touch notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// One or more touches landed.
    Start,
    /// One or more touches moved.
    Move,
    /// One or more touches lifted.
    End,
    /// The platform aborted the touch sequence.
    Cancel,
}

impl TouchPhase {
    /// Maps this native phase to the canonical [`Phase`].
    ///
    /// `Cancel` folds into [`Phase::End`]; the canonical stream does not
    /// distinguish an aborted sequence from a completed one.
    #[must_use]
    pub const fn canonical(self) -> Phase {
        match self {
            Self::Start => Phase::Start,
            Self::Move => Phase::Move,
            Self::End | Self::Cancel => Phase::End,
        }
    }
}

impl ButtonPhase {
    /// Maps this native phase to the canonical [`Phase`].
    #[must_use]
    pub const fn canonical(self) -> Phase {
        match self {
            Self::Down => Phase::Start,
            Self::Move => Phase::Move,
            Self::Up => Phase::End,
        }
    }
}

/// Device class reported by a unified-pointer notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerClass {
    /// A mouse.
    Mouse,
    /// A finger.
    Touch,
    /// A stylus. Not supported; notifications with this class are dropped.
    Pen,
}

impl PointerClass {
    /// Returns the canonical pointer type for this class, if it is supported.
    #[must_use]
    pub const fn canonical(self) -> Option<PointerType> {
        match self {
            Self::Mouse => Some(PointerType::Mouse),
            Self::Touch => Some(PointerType::Touch),
            Self::Pen => None,
        }
    }
}

/// One touch in a native touch notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Stable identity of the touch across its lifetime.
    pub id: u64,
    /// Position in viewport-absolute coordinates.
    pub position: Point,
}

/// A raw native input notification, as delivered by the host.
///
/// Positions are viewport-absolute; the normalizer translates them to
/// surface-relative coordinates using [`Surface::origin`]. Touch
/// notifications borrow the host's touch lists for the duration of the call.
///
/// [`Surface::origin`]: crate::Surface::origin
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawEvent<'a> {
    /// A mouse button or movement notification.
    Mouse {
        /// Native phase.
        phase: ButtonPhase,
        /// Cursor position in viewport-absolute coordinates.
        position: Point,
    },
    /// A touch notification carrying the full active-touch list.
    Touch {
        /// Native phase.
        phase: TouchPhase,
        /// All currently active touches.
        touches: &'a [TouchPoint],
        /// The touches that changed in this notification.
        ///
        /// Consulted when `touches` is empty, so a closing notification
        /// still carries the coordinates of the lifted touch.
        changed: &'a [TouchPoint],
    },
    /// A unified-pointer notification for a single contact.
    Pointer {
        /// Native phase.
        phase: ButtonPhase,
        /// Stable identity of the contact.
        id: u64,
        /// Device class reported by the platform.
        class: PointerClass,
        /// Contact position in viewport-absolute coordinates.
        position: Point,
    },
    /// A wheel notification.
    Wheel {
        /// Cursor position in viewport-absolute coordinates.
        position: Point,
        /// Vertical scroll amount; negative values zoom in.
        delta_y: f64,
    },
}
