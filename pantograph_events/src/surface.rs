// Copyright 2026 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The surface collaborator: listener binding and coordinate origin.

use kurbo::Point;

/// One listener family the normalizer can bind on a surface.
///
/// `MouseDown`, `Touch`, `PointerDown`, and `Wheel` live on the surface
/// itself. The `*Track` families stand for the beyond-surface move/up
/// listeners a session needs so a gesture keeps reporting after the pointer
/// leaves the surface. `TouchSuppress` installs raw touch listeners only to
/// suppress the platform default action; their notifications never enter the
/// canonical stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Binding {
    /// Mouse press notifications on the surface.
    MouseDown,
    /// Mouse move/release notifications beyond the surface, during a drag.
    MouseTrack,
    /// Touch notifications on the surface.
    Touch,
    /// Touch listeners installed purely to suppress the platform default.
    TouchSuppress,
    /// Unified-pointer press notifications on the surface.
    PointerDown,
    /// Unified-pointer move/release notifications beyond the surface.
    PointerTrack,
    /// Wheel notifications on the surface.
    Wheel,
}

impl Binding {
    /// Every binding, in a fixed order.
    pub const ALL: [Self; 7] = [
        Self::MouseDown,
        Self::MouseTrack,
        Self::Touch,
        Self::TouchSuppress,
        Self::PointerDown,
        Self::PointerTrack,
        Self::Wheel,
    ];

    /// Returns the singleton [`BindingSet`] for this binding.
    #[must_use]
    pub const fn as_set(self) -> BindingSet {
        match self {
            Self::MouseDown => BindingSet::MOUSE_DOWN,
            Self::MouseTrack => BindingSet::MOUSE_TRACK,
            Self::Touch => BindingSet::TOUCH,
            Self::TouchSuppress => BindingSet::TOUCH_SUPPRESS,
            Self::PointerDown => BindingSet::POINTER_DOWN,
            Self::PointerTrack => BindingSet::POINTER_TRACK,
            Self::Wheel => BindingSet::WHEEL,
        }
    }
}

bitflags::bitflags! {
    /// Set of listener families, used to track what is currently bound.
    ///
    /// The normalizer keeps one of these so teardown can unbind exactly what
    /// is bound, whatever state the session is in.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct BindingSet: u8 {
        /// [`Binding::MouseDown`] is bound.
        const MOUSE_DOWN = 0b0000_0001;
        /// [`Binding::MouseTrack`] is bound.
        const MOUSE_TRACK = 0b0000_0010;
        /// [`Binding::Touch`] is bound.
        const TOUCH = 0b0000_0100;
        /// [`Binding::TouchSuppress`] is bound.
        const TOUCH_SUPPRESS = 0b0000_1000;
        /// [`Binding::PointerDown`] is bound.
        const POINTER_DOWN = 0b0001_0000;
        /// [`Binding::PointerTrack`] is bound.
        const POINTER_TRACK = 0b0010_0000;
        /// [`Binding::Wheel`] is bound.
        const WHEEL = 0b0100_0000;
    }
}

/// Native input families available on the host, probed once at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// The host delivers unified-pointer notifications.
    pub pointer_events: bool,
    /// The host delivers native touch notifications.
    pub touch_events: bool,
}

/// An interactive surface the normalizer claims input on.
///
/// The surface is the screen region the gestures are relative to. Hosts
/// implement listener installation however their platform works; the
/// normalizer only says *which* families it wants and asks for the surface
/// origin to translate viewport-absolute positions into surface-relative
/// ones. The origin is re-queried on every raw event because the surface may
/// move.
pub trait Surface {
    /// Installs listeners for one family.
    fn bind(&mut self, binding: Binding);

    /// Removes the listeners for one family.
    fn unbind(&mut self, binding: Binding);

    /// Returns the surface origin in viewport-absolute coordinates.
    fn origin(&self) -> Point;
}

/// Minimal [`Surface`] that records its bound set.
///
/// Useful for demos, headless hosts, and as a starting point for real
/// integrations: the embedding reads [`BasicSurface::bound`] and installs
/// whatever its platform needs.
#[derive(Clone, Copy, Debug)]
pub struct BasicSurface {
    origin: Point,
    bound: BindingSet,
}

impl BasicSurface {
    /// Creates a surface with the given origin and nothing bound.
    #[must_use]
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            bound: BindingSet::empty(),
        }
    }

    /// Returns the currently bound set.
    #[must_use]
    pub fn bound(&self) -> BindingSet {
        self.bound
    }

    /// Moves the surface origin.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }
}

impl Surface for BasicSurface {
    fn bind(&mut self, binding: Binding) {
        self.bound.insert(binding.as_set());
    }

    fn unbind(&mut self, binding: Binding) {
        self.bound.remove(binding.as_set());
    }

    fn origin(&self) -> Point {
        self.origin
    }
}
