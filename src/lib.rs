//! axis-rs: axis transform and adaptive tick engine for 2D plots.
//!
//! Each [`Axis`] maps data values onto screen coordinates, keeps an
//! interactive pan/zoom window separate from its nominal range and picks
//! "nice" tick positions for the pixel space it is given. Linear,
//! logarithmic, category, date-time, time-span and polar (angle/magnitude)
//! axes share the same layout chain and differ only in their [`AxisKind`]
//! strategy.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{PlotAxes, PlotSnapshot};
pub use core::{Axis, AxisConfig, AxisKind};
pub use error::{AxisError, AxisResult};
