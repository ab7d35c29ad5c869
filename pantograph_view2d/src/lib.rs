// Copyright 2026 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pantograph_view2d --heading-base-level=0

//! Pantograph View 2D: viewport state and anchor-preserving scale math.
//!
//! This crate provides the small, headless model of a pan/zoom view over a
//! 2D image that the rest of the workspace drives:
//!
//! - [`ViewState`]: image-origin position, uniform scale, and the pivot of
//!   the most recent scale change. Scale is floored at [`MIN_SCALE`].
//! - [`ViewState::scaled_about`]: rescaling with a chosen screen-space anchor
//!   held visually fixed, the core of pinch/double-tap zoom.
//! - [`View`]: the trait through which gesture interpretation reads and
//!   replaces viewport state, with [`BasicView`] as a minimal owner.
//!
//! It does **not** own rendering or input. Hosts render from the state and
//! wire input through the interpreter crates built on top of this one.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use pantograph_view2d::ViewState;
//!
//! let image = Size::new(640.0, 480.0);
//! let state = ViewState::new(Vec2::new(10.0, 10.0), 1.0, Point::ORIGIN);
//!
//! // Zoom in around a point; the image pixel under the anchor keeps its
//! // screen coordinate.
//! let anchor = Point::new(100.0, 100.0);
//! let zoomed = state.scaled_about(anchor, 2.0, image);
//!
//! let before = (anchor.to_vec2() - state.position) / state.scale;
//! let after = (anchor.to_vec2() - zoomed.position) / zoomed.scale;
//! assert!((before.x - after.x).abs() < 1e-9);
//! assert!((before.y - after.y).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - The view model is axis-aligned with a uniform scale; rotation is out of
//!   scope.
//! - `ViewState` is plain `Copy` data. The image size is passed into the
//!   operations that need it rather than stored, so one state value can be
//!   snapshotted and compared freely.
//! - Scale changes clamp at a strictly positive floor instead of erroring;
//!   gesture streams routinely request out-of-range scales mid-pinch.
//!
//! This crate is `no_std`.

#![no_std]

mod state;
mod view;

pub use state::{MIN_SCALE, ViewState};
pub use view::{BasicView, View};
