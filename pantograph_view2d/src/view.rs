// Copyright 2026 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::state::ViewState;

/// Owner of viewport state and image geometry.
///
/// Gesture interpretation reads the current [`ViewState`], computes a
/// replacement, and writes it back as a whole; there are no partial updates.
/// The image's natural size is treated as fixed for the duration of a gesture
/// session (from one contact landing to the last one lifting).
pub trait View {
    /// Returns the current viewport state.
    fn state(&self) -> ViewState;

    /// Replaces the viewport state.
    fn set_state(&mut self, state: ViewState);

    /// Returns the image's natural (unscaled) size.
    fn image_size(&self) -> Size;
}

/// Minimal [`View`] that owns its state directly.
///
/// Suitable for tests and for hosts whose rendering reads the state each
/// frame rather than reacting to writes.
#[derive(Clone, Copy, Debug)]
pub struct BasicView {
    state: ViewState,
    image_size: Size,
}

impl BasicView {
    /// Creates a view over an image of the given natural size, with default state.
    #[must_use]
    pub fn new(image_size: Size) -> Self {
        Self {
            state: ViewState::default(),
            image_size,
        }
    }

    /// Creates a view with an explicit starting state.
    #[must_use]
    pub fn with_state(image_size: Size, state: ViewState) -> Self {
        Self { state, image_size }
    }
}

impl View for BasicView {
    fn state(&self) -> ViewState {
        self.state
    }

    fn set_state(&mut self, state: ViewState) {
        self.state = state;
    }

    fn image_size(&self) -> Size {
        self.image_size
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{BasicView, View};
    use crate::state::ViewState;

    #[test]
    fn basic_view_starts_with_default_state() {
        let view = BasicView::new(Size::new(800.0, 600.0));

        assert_eq!(view.state(), ViewState::default());
        assert_eq!(view.image_size(), Size::new(800.0, 600.0));
    }

    #[test]
    fn set_state_replaces_the_whole_state() {
        let mut view = BasicView::new(Size::new(800.0, 600.0));
        let state = ViewState::new(Vec2::new(5.0, 6.0), 2.0, Point::new(1.0, 2.0));

        view.set_state(state);

        assert_eq!(view.state(), state);
    }
}
