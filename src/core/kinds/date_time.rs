use super::{
    AxisKind, AxisStrategy, DateTimeOptions, IntervalChoice, KindDefaults, cartesian_transform,
    finite, identity, keep_data, keep_range,
};
use crate::core::axis::Axis;
use crate::core::interval::{CalendarUnit, calendar_interval, calendar_minor_step};
use crate::core::label_format::{LabelFormat, LabelLocale, default_date_pattern, format_date_time};
use crate::core::ticks::{TickValues, arithmetic_ticks, calendar_ticks};
use crate::error::AxisResult;

pub(super) static STRATEGY: AxisStrategy = AxisStrategy {
    name: "date_time",
    defaults: KindDefaults::GEOMETRIC,
    pre_transform: identity,
    post_inverse_transform: identity,
    accepts_value: finite,
    prepare_data: keep_data,
    adjust_range: keep_range,
    solve_transform: cartesian_transform,
    calculate_intervals,
    tick_values,
    format_value,
};

fn options(axis: &Axis) -> DateTimeOptions {
    match axis.kind() {
        AxisKind::DateTime(options) => *options,
        _ => DateTimeOptions::default(),
    }
}

fn calculate_intervals(axis: &Axis, available: f64) -> IntervalChoice {
    let options = options(axis);
    let range = axis.actual_maximum() - axis.actual_minimum();
    let mut interval = calendar_interval(
        available,
        axis.config().interval_length,
        range,
        options.interval_unit,
        options.minor_interval_unit,
    );

    if let Some(major) = axis.major_step_override() {
        interval.major_step = major;
        interval.minor_step =
            calendar_minor_step(major, interval.major_unit, interval.minor_unit);
    }
    if let Some(minor) = axis.minor_step_override() {
        interval.minor_step = minor;
    }

    IntervalChoice {
        major_step: interval.major_step,
        minor_step: interval.minor_step,
        major_unit: Some(interval.major_unit),
        minor_unit: Some(interval.minor_unit),
    }
}

fn ticks_for(axis: &Axis, step: f64, unit: Option<CalendarUnit>) -> AxisResult<Vec<f64>> {
    let minimum = axis.actual_minimum();
    let maximum = axis.actual_maximum();
    match unit {
        Some(unit) if unit.is_calendar_aligned() => {
            calendar_ticks(minimum, maximum, step, unit, options(axis).first_day_of_week)
        }
        _ => Ok(arithmetic_ticks(minimum, maximum, step)),
    }
}

fn tick_values(axis: &Axis) -> AxisResult<TickValues> {
    let major_ticks = ticks_for(axis, axis.actual_major_step(), axis.actual_major_unit())?;
    let minor_ticks = ticks_for(axis, axis.actual_minor_step(), axis.actual_minor_unit())?;
    Ok(TickValues {
        major_labels: major_ticks.clone(),
        major_ticks,
        minor_ticks,
    })
}

fn format_value(axis: &Axis, value: f64, locale: LabelLocale) -> String {
    let pattern = match &axis.config().label_format {
        LabelFormat::Pattern(pattern) => pattern.as_str(),
        _ => default_date_pattern(
            axis.actual_major_unit().unwrap_or(CalendarUnit::Days),
            locale,
        ),
    };
    format_date_time(value, pattern, locale)
}
