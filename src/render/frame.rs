use serde::{Deserialize, Serialize};

use crate::core::{Axis, AxisKey, AxisPosition, LabelLocale, ScreenEndpoints};
use crate::error::{AxisError, AxisResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickLevel {
    Major,
    Minor,
}

/// Tick mark at a data value and its screen coordinate along the axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickMark {
    pub value: f64,
    pub screen: f64,
    pub level: TickLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickLabel {
    pub value: f64,
    pub screen: f64,
    pub text: String,
}

/// Backend-agnostic description of one axis for a draw pass.
///
/// Only values that project onto finite screen coordinates are included, and
/// labels with empty text are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisRenderFrame {
    pub key: AxisKey,
    pub position: AxisPosition,
    pub endpoints: ScreenEndpoints,
    pub ticks: Vec<TickMark>,
    pub labels: Vec<TickLabel>,
}

impl AxisRenderFrame {
    /// Materializes ticks and labels of a laid-out Cartesian axis.
    ///
    /// Angle and magnitude axes project to radians and radii rather than a
    /// coordinate along a line, so they are rejected.
    pub fn from_axis(axis: &Axis, locale: LabelLocale) -> AxisResult<Self> {
        if axis.is_polar() {
            return Err(AxisError::PolarAxisMisuse(format!(
                "axis `{}` has no linear render frame",
                axis.key()
            )));
        }
        let endpoints = axis.computed().endpoints.ok_or_else(|| {
            AxisError::InvalidData(format!("axis `{}` has not been laid out", axis.key()))
        })?;
        let values = axis.tick_values()?;

        let project = |value: f64, level: TickLevel| {
            let screen = axis.transform(value);
            screen.is_finite().then_some(TickMark {
                value,
                screen,
                level,
            })
        };
        let ticks = values
            .major_ticks
            .iter()
            .filter_map(|value| project(*value, TickLevel::Major))
            .chain(
                values
                    .minor_ticks
                    .iter()
                    .filter_map(|value| project(*value, TickLevel::Minor)),
            )
            .collect();
        let labels = values
            .major_labels
            .iter()
            .filter_map(|value| {
                let screen = axis.transform(*value);
                if !screen.is_finite() {
                    return None;
                }
                let text = axis.format_value(*value, locale);
                (!text.is_empty()).then_some(TickLabel {
                    value: *value,
                    screen,
                    text,
                })
            })
            .collect();

        Ok(Self {
            key: axis.key().clone(),
            position: axis.position(),
            endpoints,
            ticks,
            labels,
        })
    }

    pub fn validate(&self) -> AxisResult<()> {
        if !self.endpoints.start.is_finite() || !self.endpoints.end.is_finite() {
            return Err(AxisError::InvalidData(format!(
                "axis `{}` has non-finite endpoints",
                self.key
            )));
        }
        let finite_ticks = self.ticks.iter().all(|tick| tick.screen.is_finite());
        let finite_labels = self.labels.iter().all(|label| label.screen.is_finite());
        if !finite_ticks || !finite_labels {
            return Err(AxisError::InvalidData(format!(
                "axis `{}` has ticks with non-finite screen coordinates",
                self.key
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn major_count(&self) -> usize {
        self.ticks
            .iter()
            .filter(|tick| tick.level == TickLevel::Major)
            .count()
    }
}
