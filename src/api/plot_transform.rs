use crate::core::transform::{polar_to_screen, screen_to_polar};
use crate::core::{Axis, AxisKey, AxisKind, DataPoint, ScreenPoint};
use crate::error::{AxisError, AxisResult};

use super::PlotAxes;

enum PointSpace<'a> {
    Cartesian,
    /// Magnitude axis first, angle axis second.
    Polar(&'a Axis, &'a Axis),
}

impl PlotAxes {
    /// Projects a data point through the axis pair `(x_key, y_key)`.
    ///
    /// For polar plots `x_key` names the magnitude axis and `y_key` the angle
    /// axis, so `point.x` is the radius and `point.y` the angle.
    pub fn transform_point(&self, x_key: &AxisKey, y_key: &AxisKey, point: DataPoint) -> AxisResult<ScreenPoint> {
        let x_axis = self.axis(x_key)?;
        let y_axis = self.axis(y_key)?;
        match self.point_space(x_axis, y_axis)? {
            PointSpace::Cartesian => Ok(ScreenPoint::new(
                x_axis.transform(point.x),
                y_axis.transform(point.y),
            )),
            PointSpace::Polar(magnitude, angle) => Ok(polar_to_screen(
                magnitude.computed().transform,
                angle.computed().transform,
                magnitude.midpoint(),
                point.x,
                point.y,
            )),
        }
    }

    pub fn inverse_transform_point(&self, x_key: &AxisKey, y_key: &AxisKey, point: ScreenPoint) -> AxisResult<DataPoint> {
        let x_axis = self.axis(x_key)?;
        let y_axis = self.axis(y_key)?;
        match self.point_space(x_axis, y_axis)? {
            PointSpace::Cartesian => Ok(DataPoint::new(
                x_axis.inverse_transform(point.x),
                y_axis.inverse_transform(point.y),
            )),
            PointSpace::Polar(magnitude, angle) => {
                let angle_start = angle.transform(angle.actual_minimum());
                let (radius, theta) = screen_to_polar(
                    magnitude.computed().transform,
                    angle.computed().transform,
                    magnitude.midpoint(),
                    angle_start,
                    point,
                );
                Ok(DataPoint::new(radius, theta))
            }
        }
    }

    fn point_space<'a>(&'a self, x_axis: &'a Axis, y_axis: &'a Axis) -> AxisResult<PointSpace<'a>> {
        match (x_axis.kind(), y_axis.kind()) {
            (AxisKind::Magnitude, AxisKind::Angle { .. }) => {
                let companion = self.companion_of(x_axis)?;
                if companion.key() != y_axis.key() {
                    return Err(AxisError::MissingCompanion {
                        key: x_axis.key().clone(),
                    });
                }
                Ok(PointSpace::Polar(x_axis, y_axis))
            }
            _ if x_axis.is_polar() || y_axis.is_polar() => Err(AxisError::PolarAxisMisuse(format!(
                "axes `{}`/`{}` must be a magnitude/angle pair",
                x_axis.key(),
                y_axis.key()
            ))),
            _ => Ok(PointSpace::Cartesian),
        }
    }
}
