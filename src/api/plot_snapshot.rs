use serde::{Deserialize, Serialize};

use crate::core::{AxisSnapshot, ScreenRect};
use crate::error::{AxisError, AxisResult};

use super::PlotAxes;

/// Computed state of every axis, for regression fixtures and debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSnapshot {
    pub plot_area: Option<ScreenRect>,
    pub axes: Vec<AxisSnapshot>,
}

impl PlotAxes {
    #[must_use]
    pub fn snapshot(&self) -> PlotSnapshot {
        PlotSnapshot {
            plot_area: self.plot_area,
            axes: self.axes.values().map(|axis| axis.snapshot()).collect(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> AxisResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| AxisError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
