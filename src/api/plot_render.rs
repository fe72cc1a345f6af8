use tracing::trace;

use crate::error::AxisResult;
use crate::render::{AxisRenderFrame, AxisRenderer};

use super::PlotAxes;

impl PlotAxes {
    /// Builds one frame per laid-out axis and hands it to `renderer`.
    ///
    /// Axes that have not been laid out yet are skipped, as are polar axes,
    /// which need a radial renderer.
    pub fn render<R: AxisRenderer>(&self, renderer: &mut R) -> AxisResult<()> {
        for axis in self.axes.values() {
            if axis.computed().endpoints.is_none() || axis.is_polar() {
                trace!(key = %axis.key(), kind = axis.kind().name(), "axis frame skipped");
                continue;
            }
            let frame = AxisRenderFrame::from_axis(axis, self.label_locale)?;
            trace!(
                key = %frame.key,
                ticks = frame.ticks.len(),
                labels = frame.labels.len(),
                "axis frame built"
            );
            renderer.render_axis(&frame)?;
        }
        Ok(())
    }
}
