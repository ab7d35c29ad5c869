// Copyright 2026 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

/// Smallest scale factor a [`ViewState`] will accept.
///
/// Every scale write goes through [`ViewState::new`] or
/// [`ViewState::scaled_about`], both of which floor the requested scale here.
/// The floor is strictly positive so the image never collapses or mirrors.
pub const MIN_SCALE: f64 = 0.01;

/// Pan/zoom state of a 2D image viewport.
///
/// `position` is the screen-space location of the image origin, `scale` the
/// uniform zoom factor applied to the image's natural size, and `pivot` the
/// screen-space anchor of the most recent scale change. The image occupies
/// the rectangle from `position` to `position + image_size * scale`.
///
/// The struct is plain data; it does not know the image size. Operations that
/// need it, like [`ViewState::scaled_about`], take it as an argument so the
/// state stays a small `Copy` value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Screen-space position of the image origin.
    pub position: Vec2,
    /// Uniform scale factor, at least [`MIN_SCALE`].
    pub scale: f64,
    /// Screen-space anchor of the most recent scale change.
    pub pivot: Point,
}

impl ViewState {
    /// Creates a view state, flooring `scale` at [`MIN_SCALE`].
    #[must_use]
    pub fn new(position: Vec2, scale: f64, pivot: Point) -> Self {
        Self {
            position,
            // `max` also maps NaN to the floor.
            scale: scale.max(MIN_SCALE),
            pivot,
        }
    }

    /// Returns this state rescaled to `new_scale` with `anchor` held fixed.
    ///
    /// The image pixel under `anchor` stays at the same screen coordinate
    /// across the scale change: the position shifts to compensate for the
    /// image growing or shrinking around it. `new_scale` is floored at
    /// [`MIN_SCALE`], and the returned state records `anchor` as its pivot.
    ///
    /// `image_size` is the image's natural (unscaled) size. A zero extent on
    /// either axis is tolerated; the compensation for that axis reduces to a
    /// pure ratio of the two scales, which keeps the anchor fixed without
    /// dividing by the degenerate extent.
    #[must_use]
    pub fn scaled_about(&self, anchor: Point, new_scale: f64, image_size: Size) -> Self {
        let new_scale = new_scale.max(MIN_SCALE);
        let origin = anchor.to_vec2() - self.position;

        let position = Vec2::new(
            self.position.x + origin.x
                - rescaled_offset(origin.x, image_size.width, self.scale, new_scale),
            self.position.y + origin.y
                - rescaled_offset(origin.y, image_size.height, self.scale, new_scale),
        );

        Self {
            position,
            scale: new_scale,
            pivot: anchor,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: 1.0,
            pivot: Point::ORIGIN,
        }
    }
}

/// Screen-space offset of the anchor from the image origin after rescaling.
///
/// `offset / (extent * scale)` is the anchor's relative coordinate within the
/// scaled image; multiplying by the newly scaled extent yields its offset
/// after the change. When the scaled extent is zero that ratio is undefined,
/// so the expression falls back to its algebraic reduction
/// `offset * (new_scale / scale)`, which is the same value whenever both are
/// defined. `scale` is positive by the [`MIN_SCALE`] invariant.
fn rescaled_offset(offset: f64, extent: f64, scale: f64, new_scale: f64) -> f64 {
    let scaled_extent = extent * scale;
    if scaled_extent == 0.0 {
        offset * (new_scale / scale)
    } else {
        let relative = offset / scaled_extent;
        extent * new_scale * relative
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{MIN_SCALE, ViewState};

    const IMAGE: Size = Size::new(640.0, 480.0);

    /// Image-space coordinate of a screen point under the given state.
    fn image_point(state: &ViewState, screen: Point) -> Point {
        let origin = screen.to_vec2() - state.position;
        Point::new(origin.x / state.scale, origin.y / state.scale)
    }

    #[test]
    fn scaled_about_keeps_anchor_image_point_fixed() {
        let state = ViewState::new(Vec2::new(12.0, -7.0), 1.5, Point::ORIGIN);
        let anchor = Point::new(200.0, 130.0);

        let before = image_point(&state, anchor);
        let scaled = state.scaled_about(anchor, 2.75, IMAGE);
        let after = image_point(&scaled, anchor);

        assert!((after.x - before.x).abs() < 1e-9);
        assert!((after.y - before.y).abs() < 1e-9);
        assert_eq!(scaled.scale, 2.75);
    }

    #[test]
    fn scaled_about_records_anchor_as_pivot() {
        let state = ViewState::default();
        let anchor = Point::new(33.0, 44.0);

        let scaled = state.scaled_about(anchor, 1.2, IMAGE);

        assert_eq!(scaled.pivot, anchor);
    }

    #[test]
    fn scale_requests_at_or_below_zero_floor_at_minimum() {
        let state = ViewState::default();

        let zero = state.scaled_about(Point::ORIGIN, 0.0, IMAGE);
        let negative = state.scaled_about(Point::ORIGIN, -3.0, IMAGE);

        assert_eq!(zero.scale, MIN_SCALE);
        assert_eq!(negative.scale, MIN_SCALE);
    }

    #[test]
    fn new_floors_scale_and_maps_nan_to_minimum() {
        let tiny = ViewState::new(Vec2::ZERO, 0.001, Point::ORIGIN);
        let nan = ViewState::new(Vec2::ZERO, f64::NAN, Point::ORIGIN);

        assert_eq!(tiny.scale, MIN_SCALE);
        assert_eq!(nan.scale, MIN_SCALE);
    }

    #[test]
    fn anchor_at_image_origin_leaves_position_unchanged() {
        let position = Vec2::new(50.0, 60.0);
        let state = ViewState::new(position, 1.0, Point::ORIGIN);

        // The anchor coincides with the image origin, so nothing shifts.
        let scaled = state.scaled_about(Point::new(50.0, 60.0), 3.0, IMAGE);

        assert_eq!(scaled.position, position);
    }

    #[test]
    fn rescaling_to_the_same_scale_is_a_fixed_point() {
        let state = ViewState::new(Vec2::new(-4.0, 9.0), 2.0, Point::ORIGIN);
        let anchor = Point::new(17.0, 3.0);

        let scaled = state.scaled_about(anchor, 2.0, IMAGE);

        assert!((scaled.position.x - state.position.x).abs() < 1e-12);
        assert!((scaled.position.y - state.position.y).abs() < 1e-12);
        assert_eq!(scaled.scale, state.scale);
    }

    #[test]
    fn degenerate_image_extent_still_keeps_anchor_fixed() {
        let state = ViewState::new(Vec2::new(10.0, 10.0), 2.0, Point::ORIGIN);
        let anchor = Point::new(30.0, 50.0);

        let scaled = state.scaled_about(anchor, 4.0, Size::ZERO);

        // With a zero extent the compensation reduces to the scale ratio:
        // the anchor's offset from the image origin doubles with the scale.
        let origin = anchor.to_vec2() - state.position;
        let expected = anchor.to_vec2() - origin * (4.0 / 2.0);
        assert!((scaled.position.x - expected.x).abs() < 1e-12);
        assert!((scaled.position.y - expected.y).abs() < 1e-12);
    }

    #[test]
    fn successive_rescales_compose() {
        let state = ViewState::new(Vec2::ZERO, 1.0, Point::ORIGIN);
        let anchor = Point::new(100.0, 100.0);

        let once = state.scaled_about(anchor, 4.0, IMAGE);
        let twice = state.scaled_about(anchor, 2.0, IMAGE).scaled_about(anchor, 4.0, IMAGE);

        assert!((once.position.x - twice.position.x).abs() < 1e-9);
        assert!((once.position.y - twice.position.y).abs() < 1e-9);
        assert_eq!(once.scale, twice.scale);
    }
}
