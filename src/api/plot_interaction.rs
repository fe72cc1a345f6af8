use crate::core::AxisKey;
use crate::error::AxisResult;

use super::PlotAxes;

impl PlotAxes {
    pub fn pan_axis(&mut self, key: &AxisKey, delta: f64) -> AxisResult<()> {
        self.axis_mut(key)?.pan(delta)
    }

    pub fn zoom_axis(&mut self, key: &AxisKey, new_scale: f64) -> AxisResult<()> {
        self.axis_mut(key)?.zoom(new_scale)
    }

    pub fn zoom_axis_at(&mut self, key: &AxisKey, factor: f64, pivot: f64) -> AxisResult<()> {
        self.axis_mut(key)?.zoom_at(factor, pivot)
    }

    pub fn zoom_axis_to(&mut self, key: &AxisKey, x0: f64, x1: f64) -> AxisResult<()> {
        self.axis_mut(key)?.zoom_to(x0, x1)
    }

    /// Returns every axis to its nominal/data range.
    pub fn reset_axes(&mut self) -> AxisResult<()> {
        for axis in self.axes.values_mut() {
            axis.reset()?;
        }
        Ok(())
    }
}
