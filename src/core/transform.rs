use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::core::types::{AxisPosition, ScreenPoint, ScreenRect};

/// Screen coordinate reported for values outside an axis' domain
/// (e.g. non-positive values on a logarithmic axis).
pub const INVALID_SCREEN_COORDINATE: f64 = f64::NAN;

/// Linear map between transformed data units and screen units.
///
/// `screen = (pre(value) - offset) * scale`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTransform {
    pub scale: f64,
    pub offset: f64,
}

impl Default for AxisTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: 0.0,
        }
    }
}

impl AxisTransform {
    /// Solves scale/offset so that `transformed_min -> start` and
    /// `transformed_max -> end`.
    #[must_use]
    pub fn solve(endpoints: ScreenEndpoints, transformed_min: f64, transformed_max: f64) -> Self {
        let span = transformed_max - transformed_min;
        let screen_span = endpoints.start - endpoints.end;
        if span.abs() < f64::EPSILON || !span.is_finite() || screen_span == 0.0 {
            return Self::default();
        }

        Self {
            offset: endpoints.start / screen_span * transformed_max
                - endpoints.end / screen_span * transformed_min,
            scale: (endpoints.end - endpoints.start) / span,
        }
    }

    #[must_use]
    pub fn apply(self, transformed: f64) -> f64 {
        (transformed - self.offset) * self.scale
    }

    #[must_use]
    pub fn invert(self, screen: f64) -> f64 {
        screen / self.scale + self.offset
    }
}

/// Pixel coordinates of the axis' minimum and maximum along its orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenEndpoints {
    pub start: f64,
    pub end: f64,
}

impl ScreenEndpoints {
    #[must_use]
    pub fn length(self) -> f64 {
        (self.end - self.start).abs()
    }
}

/// Resolves the pixel endpoints of an axis laid out inside `rect`.
///
/// Horizontal axes run left to right, vertical axes bottom to top; the
/// position fractions select a sub-span (`start > end` reverses the axis).
#[must_use]
pub fn axis_endpoints(
    rect: ScreenRect,
    position: AxisPosition,
    start_position: f64,
    end_position: f64,
) -> ScreenEndpoints {
    let (base, far) = if position.is_horizontal() {
        (rect.left, rect.right())
    } else {
        (rect.bottom(), rect.top)
    };
    let extent = far - base;
    ScreenEndpoints {
        start: base + start_position * extent,
        end: base + end_position * extent,
    }
}

/// Angle axis transform: the actual range maps onto `[start_angle, end_angle]`
/// degrees, expressed in radians.
#[must_use]
pub fn angle_transform(minimum: f64, maximum: f64, start_angle: f64, end_angle: f64) -> AxisTransform {
    let span = maximum - minimum;
    if span.abs() < f64::EPSILON || !span.is_finite() {
        return AxisTransform::default();
    }
    let start = start_angle.to_radians();
    let scale = (end_angle.to_radians() - start) / span;
    if scale == 0.0 {
        return AxisTransform::default();
    }
    AxisTransform {
        scale,
        offset: minimum - start / scale,
    }
}

/// Magnitude axis transform: radius `0..min(width, height)/2` around the
/// rectangle centre. Returns the transform and the polar midpoint.
#[must_use]
pub fn magnitude_transform(rect: ScreenRect, minimum: f64, maximum: f64) -> (AxisTransform, ScreenPoint) {
    let midpoint = rect.center();
    let span = maximum - minimum;
    if span.abs() < f64::EPSILON || !span.is_finite() {
        return (AxisTransform::default(), midpoint);
    }
    let radius = 0.5 * rect.width.min(rect.height);
    (
        AxisTransform {
            scale: radius / span,
            offset: minimum,
        },
        midpoint,
    )
}

/// Projects `(magnitude, angle)` data values onto the screen.
#[must_use]
pub fn polar_to_screen(
    magnitude: AxisTransform,
    angle: AxisTransform,
    midpoint: ScreenPoint,
    radius_value: f64,
    angle_value: f64,
) -> ScreenPoint {
    let r = magnitude.apply(radius_value);
    let theta = angle.apply(angle_value);
    ScreenPoint::new(midpoint.x + r * theta.cos(), midpoint.y - r * theta.sin())
}

/// Recovers `(magnitude, angle)` data values from a screen point.
///
/// `angle_start` is the screen angle (radians) of the angle axis minimum; the
/// recovered angle is wrapped into the sweep starting there.
#[must_use]
pub fn screen_to_polar(
    magnitude: AxisTransform,
    angle: AxisTransform,
    midpoint: ScreenPoint,
    angle_start: f64,
    point: ScreenPoint,
) -> (f64, f64) {
    let dx = point.x - midpoint.x;
    let dy = midpoint.y - point.y;
    let r = (dx * dx + dy * dy).sqrt();

    let mut theta = dy.atan2(dx);
    if angle_start.is_finite() {
        let turns = if angle.scale >= 0.0 {
            ((theta - angle_start) / TAU).floor()
        } else {
            ((theta - angle_start) / TAU).ceil()
        };
        theta -= turns * TAU;
    }
    (magnitude.invert(r), angle.invert(theta))
}

#[cfg(test)]
mod tests {
    use super::{
        AxisTransform, ScreenEndpoints, angle_transform, axis_endpoints, magnitude_transform,
        polar_to_screen, screen_to_polar,
    };
    use crate::core::types::{AxisPosition, ScreenRect};

    #[test]
    fn horizontal_endpoints_run_left_to_right() {
        let rect = ScreenRect::new(10.0, 20.0, 200.0, 100.0).expect("rect");
        let ends = axis_endpoints(rect, AxisPosition::Bottom, 0.0, 1.0);
        assert_eq!(ends, ScreenEndpoints { start: 10.0, end: 210.0 });
    }

    #[test]
    fn vertical_endpoints_run_bottom_to_top() {
        let rect = ScreenRect::new(10.0, 20.0, 200.0, 100.0).expect("rect");
        let ends = axis_endpoints(rect, AxisPosition::Left, 0.0, 0.5);
        assert_eq!(ends, ScreenEndpoints { start: 120.0, end: 70.0 });
    }

    #[test]
    fn solved_transform_hits_both_endpoints() {
        let ends = ScreenEndpoints { start: 50.0, end: 450.0 };
        let transform = AxisTransform::solve(ends, -2.0, 6.0);
        assert!((transform.apply(-2.0) - 50.0).abs() <= 1e-9);
        assert!((transform.apply(6.0) - 450.0).abs() <= 1e-9);
        assert!((transform.invert(250.0) - 2.0).abs() <= 1e-9);
    }

    #[test]
    fn degenerate_range_falls_back_to_identity() {
        let ends = ScreenEndpoints { start: 0.0, end: 100.0 };
        assert_eq!(AxisTransform::solve(ends, 3.0, 3.0), AxisTransform::default());
    }

    #[test]
    fn angle_transform_maps_range_onto_full_turn() {
        let transform = angle_transform(0.0, 360.0, 0.0, 360.0);
        assert!((transform.apply(90.0) - std::f64::consts::FRAC_PI_2).abs() <= 1e-12);
        assert!((transform.apply(0.0)).abs() <= 1e-12);
    }

    #[test]
    fn polar_round_trip_covers_lower_half_plane() {
        let rect = ScreenRect::new(0.0, 0.0, 200.0, 200.0).expect("rect");
        let (magnitude, midpoint) = magnitude_transform(rect, 0.0, 10.0);
        let angle = angle_transform(0.0, 360.0, 0.0, 360.0);
        let screen = polar_to_screen(magnitude, angle, midpoint, 5.0, 270.0);
        assert!((screen.x - 100.0).abs() <= 1e-9);
        assert!((screen.y - 150.0).abs() <= 1e-9);

        let (radius, theta) = screen_to_polar(magnitude, angle, midpoint, angle.apply(0.0), screen);
        assert!((radius - 5.0).abs() <= 1e-9);
        assert!((theta - 270.0).abs() <= 1e-9);
    }
}
