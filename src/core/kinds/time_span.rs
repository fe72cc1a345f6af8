use super::{
    AxisStrategy, IntervalChoice, KindDefaults, arithmetic_tick_values, cartesian_transform,
    finite, identity, keep_data, keep_range,
};
use crate::core::axis::Axis;
use crate::core::interval::{clock_minor_step, clock_step};
use crate::core::label_format::{
    DEFAULT_TIME_SPAN_PATTERN, LabelFormat, LabelLocale, format_number, format_time_span,
};

pub(super) static STRATEGY: AxisStrategy = AxisStrategy {
    name: "time_span",
    defaults: KindDefaults::GEOMETRIC,
    pre_transform: identity,
    post_inverse_transform: identity,
    accepts_value: finite,
    prepare_data: keep_data,
    adjust_range: keep_range,
    solve_transform: cartesian_transform,
    calculate_intervals,
    tick_values: arithmetic_tick_values,
    format_value,
};

fn calculate_intervals(axis: &Axis, available: f64) -> IntervalChoice {
    let range = (axis.actual_maximum() - axis.actual_minimum()).abs();
    let major = axis
        .major_step_override()
        .unwrap_or_else(|| clock_step(available, axis.config().interval_length, range));
    let minor = axis
        .minor_step_override()
        .unwrap_or_else(|| clock_minor_step(major));
    IntervalChoice::plain(major, minor)
}

fn format_value(axis: &Axis, value: f64, locale: LabelLocale) -> String {
    match &axis.config().label_format {
        LabelFormat::Pattern(pattern) => format_time_span(value, pattern),
        LabelFormat::Auto => format_time_span(value, DEFAULT_TIME_SPAN_PATTERN),
        other => format_number(value, other, locale),
    }
}
