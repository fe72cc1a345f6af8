use crate::error::AxisResult;
use crate::render::{AxisRenderFrame, AxisRenderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frames so tests catch invalid projections.
#[derive(Debug, Default)]
pub struct NullAxisRenderer {
    pub frames_rendered: usize,
    pub last_tick_count: usize,
    pub last_label_count: usize,
}

impl AxisRenderer for NullAxisRenderer {
    fn render_axis(&mut self, frame: &AxisRenderFrame) -> AxisResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_tick_count = frame.ticks.len();
        self.last_label_count = frame.labels.len();
        Ok(())
    }
}
