mod frame;
mod null_renderer;

pub use frame::{AxisRenderFrame, TickLabel, TickLevel, TickMark};
pub use null_renderer::NullAxisRenderer;

use crate::error::AxisResult;

/// Contract implemented by any axis drawing backend.
///
/// Backends receive fully materialized frames, so drawing code never touches
/// transform or tick selection logic.
pub trait AxisRenderer {
    fn render_axis(&mut self, frame: &AxisRenderFrame) -> AxisResult<()>;
}
