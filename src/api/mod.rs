//! Owning plot model.
//!
//! `PlotAxes` stores every axis of one plot, runs the layout chain in order
//! and resolves polar pairings by key.

mod plot_axes;
mod plot_interaction;
mod plot_render;
mod plot_snapshot;
mod plot_transform;

pub use crate::core::label_format::{LabelFormat, LabelLocale};
pub use plot_axes::PlotAxes;
pub use plot_snapshot::PlotSnapshot;
