//! Per-kind axis behaviour.
//!
//! Every [`AxisKind`] resolves to a static [`AxisStrategy`] record; `Axis`
//! keeps the shared logic and delegates only the operations listed there.

mod category;
mod date_time;
mod linear;
mod logarithmic;
mod polar;
mod time_span;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

pub use category::{CategoryBar, CategoryLayout};

use crate::core::axis::Axis;
use crate::core::interval::{CalendarUnit, minor_step, nice_step};
use crate::core::label_format::{LabelLocale, format_number};
use crate::core::range::{ActualRange, DataRange, RangeInputs};
use crate::core::ticks::{TickValues, arithmetic_ticks};
use crate::core::transform::{AxisTransform, ScreenEndpoints};
use crate::core::types::{ScreenPoint, ScreenRect};
use crate::error::{AxisError, AxisResult};

/// Coordinate system of an axis.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisKind {
    Linear,
    Logarithmic(LogarithmicOptions),
    Category(CategoryOptions),
    /// Values are UNIX seconds (UTC).
    DateTime(DateTimeOptions),
    /// Values are elapsed seconds.
    TimeSpan,
    /// Angles of a polar plot; the range maps onto `start_angle..end_angle` degrees.
    Angle { start_angle: f64, end_angle: f64 },
    /// Radii of a polar plot.
    Magnitude,
}

impl AxisKind {
    #[must_use]
    pub fn logarithmic(base: f64) -> Self {
        Self::Logarithmic(LogarithmicOptions::new(base))
    }

    #[must_use]
    pub fn category<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Category(CategoryOptions::new(labels))
    }

    #[must_use]
    pub fn date_time() -> Self {
        Self::DateTime(DateTimeOptions::default())
    }

    #[must_use]
    pub fn angle() -> Self {
        Self::Angle {
            start_angle: 0.0,
            end_angle: 360.0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.strategy().name
    }

    #[must_use]
    pub fn is_polar(&self) -> bool {
        matches!(self, Self::Angle { .. } | Self::Magnitude)
    }

    #[must_use]
    pub fn strategy(&self) -> &'static AxisStrategy {
        match self {
            Self::Linear => &linear::STRATEGY,
            Self::Logarithmic(_) => &logarithmic::STRATEGY,
            Self::Category(_) => &category::STRATEGY,
            Self::DateTime(_) => &date_time::STRATEGY,
            Self::TimeSpan => &time_span::STRATEGY,
            Self::Angle { .. } => &polar::ANGLE_STRATEGY,
            Self::Magnitude => &polar::MAGNITUDE_STRATEGY,
        }
    }

    pub(crate) fn validate(&self) -> AxisResult<()> {
        match self {
            Self::Logarithmic(options) => {
                if !options.base.is_finite() || options.base <= 1.0 {
                    return Err(AxisError::InvalidConfiguration(format!(
                        "logarithmic base must be finite and > 1, got {}",
                        options.base
                    )));
                }
            }
            Self::Category(options) => {
                if !options.gap_width.is_finite() || options.gap_width < 0.0 {
                    return Err(AxisError::InvalidConfiguration(
                        "category gap width must be finite and >= 0".to_owned(),
                    ));
                }
            }
            Self::Angle {
                start_angle,
                end_angle,
            } => {
                if !start_angle.is_finite() || !end_angle.is_finite() || start_angle == end_angle {
                    return Err(AxisError::InvalidConfiguration(
                        "angle axis needs distinct finite start/end angles".to_owned(),
                    ));
                }
            }
            Self::Linear | Self::DateTime(_) | Self::TimeSpan | Self::Magnitude => {}
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogarithmicOptions {
    pub base: f64,
    /// Snap data-derived bounds outward to integer powers of the base.
    pub power_padding: bool,
}

impl LogarithmicOptions {
    #[must_use]
    pub fn new(base: f64) -> Self {
        Self {
            base,
            power_padding: false,
        }
    }

    #[must_use]
    pub fn with_power_padding(mut self, enabled: bool) -> Self {
        self.power_padding = enabled;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryOptions {
    pub labels: Vec<String>,
    /// Ticks on category centres instead of between categories.
    pub is_tick_centered: bool,
    /// Gap between bar groups relative to the bar width.
    pub gap_width: f64,
}

impl CategoryOptions {
    #[must_use]
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            is_tick_centered: false,
            gap_width: 1.0,
        }
    }

    #[must_use]
    pub fn with_tick_centered(mut self, centered: bool) -> Self {
        self.is_tick_centered = centered;
        self
    }

    #[must_use]
    pub fn with_gap_width(mut self, gap_width: f64) -> Self {
        self.gap_width = gap_width;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateTimeOptions {
    /// Forced major granularity; `None` picks one from the visible range.
    pub interval_unit: Option<CalendarUnit>,
    pub minor_interval_unit: Option<CalendarUnit>,
    pub first_day_of_week: Weekday,
}

impl Default for DateTimeOptions {
    fn default() -> Self {
        Self {
            interval_unit: None,
            minor_interval_unit: None,
            first_day_of_week: Weekday::Mon,
        }
    }
}

impl DateTimeOptions {
    #[must_use]
    pub fn with_interval_unit(mut self, unit: CalendarUnit) -> Self {
        self.interval_unit = Some(unit);
        self
    }

    #[must_use]
    pub fn with_minor_interval_unit(mut self, unit: CalendarUnit) -> Self {
        self.minor_interval_unit = Some(unit);
        self
    }

    #[must_use]
    pub fn with_first_day_of_week(mut self, day: Weekday) -> Self {
        self.first_day_of_week = day;
        self
    }
}

/// Defaults applied where the axis configuration leaves a value unset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindDefaults {
    pub padding: f64,
    pub major_step: Option<f64>,
    pub minor_step: Option<f64>,
    pub interactive: bool,
}

impl KindDefaults {
    pub const GEOMETRIC: Self = Self {
        padding: 0.01,
        major_step: None,
        minor_step: None,
        interactive: true,
    };
}

/// Major/minor steps chosen for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalChoice {
    pub major_step: f64,
    pub minor_step: f64,
    pub major_unit: Option<CalendarUnit>,
    pub minor_unit: Option<CalendarUnit>,
}

impl IntervalChoice {
    #[must_use]
    pub fn plain(major_step: f64, minor_step: f64) -> Self {
        Self {
            major_step,
            minor_step,
            major_unit: None,
            minor_unit: None,
        }
    }
}

/// Operations that differ between axis kinds.
pub struct AxisStrategy {
    pub name: &'static str,
    pub defaults: KindDefaults,
    /// Data value to the space in which the transform is linear.
    pub pre_transform: fn(&AxisKind, f64) -> f64,
    pub post_inverse_transform: fn(&AxisKind, f64) -> f64,
    /// Whether the value lies in the kind's domain.
    pub accepts_value: fn(&AxisKind, f64) -> bool,
    /// Extends the data range before coercion.
    pub prepare_data: fn(&Axis, &mut DataRange),
    pub adjust_range: fn(&Axis, &RangeInputs, &mut ActualRange),
    /// Scale/offset (and polar midpoint) for the laid-out plot area.
    pub solve_transform: fn(&Axis, ScreenRect, ScreenEndpoints) -> (AxisTransform, ScreenPoint),
    /// Resolves steps for `available` pixels, honouring configured overrides.
    pub calculate_intervals: fn(&Axis, f64) -> IntervalChoice,
    pub tick_values: fn(&Axis) -> AxisResult<TickValues>,
    pub format_value: fn(&Axis, f64, LabelLocale) -> String,
}

fn identity(_: &AxisKind, value: f64) -> f64 {
    value
}

fn finite(_: &AxisKind, value: f64) -> bool {
    value.is_finite()
}

fn keep_data(_: &Axis, _: &mut DataRange) {}

fn keep_range(_: &Axis, _: &RangeInputs, _: &mut ActualRange) {}

fn cartesian_transform(
    axis: &Axis,
    rect: ScreenRect,
    endpoints: ScreenEndpoints,
) -> (AxisTransform, ScreenPoint) {
    let strategy = axis.kind().strategy();
    let transformed_min = (strategy.pre_transform)(axis.kind(), axis.actual_minimum());
    let transformed_max = (strategy.pre_transform)(axis.kind(), axis.actual_maximum());
    (
        AxisTransform::solve(endpoints, transformed_min, transformed_max),
        rect.center(),
    )
}

fn geometric_intervals(axis: &Axis, available: f64) -> IntervalChoice {
    let range = axis.actual_maximum() - axis.actual_minimum();
    let major = axis
        .major_step_override()
        .unwrap_or_else(|| nice_step(available, axis.config().interval_length, range));
    let minor = axis
        .minor_step_override()
        .unwrap_or_else(|| minor_step(major));
    IntervalChoice::plain(major, minor)
}

fn arithmetic_tick_values(axis: &Axis) -> AxisResult<TickValues> {
    let minimum = axis.actual_minimum();
    let maximum = axis.actual_maximum();
    let major_ticks = arithmetic_ticks(minimum, maximum, axis.actual_major_step());
    Ok(TickValues {
        major_labels: major_ticks.clone(),
        major_ticks,
        minor_ticks: arithmetic_ticks(minimum, maximum, axis.actual_minor_step()),
    })
}

fn format_geometric(axis: &Axis, value: f64, locale: LabelLocale) -> String {
    format_number(value, &axis.config().label_format, locale)
}
