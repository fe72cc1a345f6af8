//! Pan/zoom controller.
//!
//! Interactive view bounds live next to the nominal configuration so a reset
//! always returns to the data/nominal range.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Axis, AxisKey, ScreenPoint};
use crate::error::{AxisError, AxisResult};

/// Whether an axis follows its nominal/data range or a user-chosen window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum ViewState {
    #[default]
    Nominal,
    Interactive { minimum: f64, maximum: f64 },
}

impl ViewState {
    #[must_use]
    pub fn bounds(self) -> (Option<f64>, Option<f64>) {
        match self {
            Self::Nominal => (None, None),
            Self::Interactive { minimum, maximum } => (Some(minimum), Some(maximum)),
        }
    }

    #[must_use]
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Interactive { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisChangeKind {
    Pan,
    Zoom,
    Reset,
}

/// Notification sent to axis observers after every pan/zoom/reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisChangedEvent {
    pub key: AxisKey,
    pub kind: AxisChangeKind,
    pub actual_minimum: f64,
    pub actual_maximum: f64,
}

impl Axis {
    /// Shifts the view by `delta` screen units along the axis.
    ///
    /// The shift happens in transformed space, so logarithmic axes keep their
    /// ratio. Hitting an absolute bound slides the window instead of shrinking it.
    pub fn pan(&mut self, delta: f64) -> AxisResult<()> {
        if !self.is_pan_enabled() {
            return Ok(());
        }
        if !delta.is_finite() {
            return Err(AxisError::InvalidData("pan delta must be finite".to_owned()));
        }

        let shift = delta / self.scale();
        let (lower, upper) = self.transformed_absolute_bounds();
        let minimum = self.pre_transform(self.actual_minimum());
        let maximum = self.pre_transform(self.actual_maximum());
        let width = maximum - minimum;

        let mut new_minimum = minimum - shift;
        let mut new_maximum = maximum - shift;
        if new_minimum < lower {
            new_minimum = lower;
            new_maximum = (new_minimum + width).min(upper);
        }
        if new_maximum > upper {
            new_maximum = upper;
            new_minimum = (new_maximum - width).max(lower);
        }

        self.view = ViewState::Interactive {
            minimum: self.post_inverse_transform(new_minimum),
            maximum: self.post_inverse_transform(new_maximum),
        };
        self.finish_view_change(AxisChangeKind::Pan)
    }

    /// Pans by the pointer movement between two screen points.
    pub fn pan_between(&mut self, previous: ScreenPoint, current: ScreenPoint) -> AxisResult<()> {
        let delta = if self.is_horizontal() {
            current.x - previous.x
        } else {
            current.y - previous.y
        };
        self.pan(delta)
    }

    /// Zooms around the midpoint of the visible range to `new_scale` screen
    /// units per transformed unit.
    pub fn zoom(&mut self, new_scale: f64) -> AxisResult<()> {
        if !self.is_zoom_enabled() {
            return Ok(());
        }
        if !new_scale.is_finite() || new_scale == 0.0 {
            return Err(AxisError::InvalidData(format!(
                "zoom scale must be finite and non-zero, got {new_scale}"
            )));
        }

        let factor = new_scale.abs() / self.scale().abs();
        let midpoint = 0.5
            * (self.pre_transform(self.actual_minimum()) + self.pre_transform(self.actual_maximum()));
        self.zoom_about_transformed(factor, midpoint)
    }

    /// Zooms by `factor` (> 1 zooms in) keeping data value `pivot` at its
    /// screen position.
    pub fn zoom_at(&mut self, factor: f64, pivot: f64) -> AxisResult<()> {
        if !self.is_zoom_enabled() {
            return Ok(());
        }
        if !factor.is_finite() || factor <= 0.0 {
            return Err(AxisError::InvalidData(format!(
                "zoom factor must be finite and > 0, got {factor}"
            )));
        }
        let pivot = self.pre_transform(pivot);
        if !pivot.is_finite() {
            return Err(AxisError::InvalidData(
                "zoom pivot is outside the axis domain".to_owned(),
            ));
        }
        self.zoom_about_transformed(factor, pivot)
    }

    /// Shows exactly `[min(x0, x1), max(x0, x1)]`, clamped to the absolute range.
    pub fn zoom_to(&mut self, x0: f64, x1: f64) -> AxisResult<()> {
        if !self.is_zoom_enabled() {
            return Ok(());
        }
        if !x0.is_finite() || !x1.is_finite() {
            return Err(AxisError::InvalidData("zoom bounds must be finite".to_owned()));
        }

        self.view = ViewState::Interactive {
            minimum: x0.min(x1).max(self.config.absolute_minimum),
            maximum: x0.max(x1).min(self.config.absolute_maximum),
        };
        self.finish_view_change(AxisChangeKind::Zoom)
    }

    /// Drops the interactive window and follows the nominal/data range again.
    pub fn reset(&mut self) -> AxisResult<()> {
        self.view = ViewState::Nominal;
        self.finish_view_change(AxisChangeKind::Reset)
    }

    fn zoom_about_transformed(&mut self, factor: f64, pivot: f64) -> AxisResult<()> {
        let minimum = self.pre_transform(self.actual_minimum());
        let maximum = self.pre_transform(self.actual_maximum());

        let new_minimum = self.post_inverse_transform(pivot + (minimum - pivot) / factor);
        let new_maximum = self.post_inverse_transform(pivot + (maximum - pivot) / factor);
        self.view = ViewState::Interactive {
            minimum: new_minimum.max(self.config.absolute_minimum),
            maximum: new_maximum.min(self.config.absolute_maximum),
        };
        self.finish_view_change(AxisChangeKind::Zoom)
    }

    fn transformed_absolute_bounds(&self) -> (f64, f64) {
        let lower = self.pre_transform(self.config.absolute_minimum);
        let upper = self.pre_transform(self.config.absolute_maximum);
        (
            if lower.is_nan() { f64::NEG_INFINITY } else { lower },
            if upper.is_nan() { f64::INFINITY } else { upper },
        )
    }

    fn finish_view_change(&mut self, kind: AxisChangeKind) -> AxisResult<()> {
        self.update_actual_range()?;
        self.refresh_layout();
        debug!(
            key = %self.config.key,
            change = ?kind,
            minimum = self.actual_minimum(),
            maximum = self.actual_maximum(),
            "axis view changed"
        );

        let event = AxisChangedEvent {
            key: self.config.key.clone(),
            kind,
            actual_minimum: self.actual_minimum(),
            actual_maximum: self.actual_maximum(),
        };
        for observer in &mut self.observers {
            observer.on_axis_changed(&event);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ViewState;
    use crate::core::{Axis, AxisConfig, AxisPosition, ScreenRect};

    fn laid_out(config: AxisConfig) -> Axis {
        let mut axis = Axis::linear(config.with_position(AxisPosition::Bottom)).expect("axis");
        axis.update_layout(ScreenRect::new(0.0, 0.0, 100.0, 100.0).expect("rect"))
            .expect("layout");
        axis
    }

    #[test]
    fn pan_shifts_both_bounds() {
        let mut axis = laid_out(AxisConfig::new("x").with_range(0.0, 10.0));
        axis.pan(10.0).expect("pan");
        assert!((axis.actual_minimum() + 1.0).abs() <= 1e-9);
        assert!((axis.actual_maximum() - 9.0).abs() <= 1e-9);
    }

    #[test]
    fn disabled_pan_is_a_no_op() {
        let mut axis = laid_out(AxisConfig::new("x").with_range(0.0, 10.0).with_pan_enabled(false));
        axis.pan(10.0).expect("pan");
        assert_eq!(axis.view_state(), ViewState::Nominal);
        assert_eq!(axis.actual_minimum(), 0.0);
    }

    #[test]
    fn zoom_to_orders_bounds() {
        let mut axis = laid_out(AxisConfig::new("x").with_range(0.0, 10.0));
        axis.zoom_to(8.0, 2.0).expect("zoom");
        assert_eq!(
            axis.view_state(),
            ViewState::Interactive {
                minimum: 2.0,
                maximum: 8.0
            }
        );
    }
}
