use super::{
    AxisKind, AxisStrategy, KindDefaults, arithmetic_tick_values, finite, format_geometric,
    geometric_intervals, identity, keep_data, keep_range,
};
use crate::core::axis::Axis;
use crate::core::range::{ActualRange, RangeInputs};
use crate::core::transform::{AxisTransform, ScreenEndpoints, angle_transform, magnitude_transform};
use crate::core::types::{ScreenPoint, ScreenRect};

const POLAR_DEFAULTS: KindDefaults = KindDefaults {
    interactive: false,
    ..KindDefaults::GEOMETRIC
};

pub(super) static ANGLE_STRATEGY: AxisStrategy = AxisStrategy {
    name: "angle",
    defaults: POLAR_DEFAULTS,
    pre_transform: identity,
    post_inverse_transform: identity,
    accepts_value: finite,
    prepare_data: keep_data,
    adjust_range: keep_range,
    solve_transform: solve_angle,
    calculate_intervals: geometric_intervals,
    tick_values: arithmetic_tick_values,
    format_value: format_geometric,
};

pub(super) static MAGNITUDE_STRATEGY: AxisStrategy = AxisStrategy {
    name: "magnitude",
    defaults: POLAR_DEFAULTS,
    pre_transform: identity,
    post_inverse_transform: identity,
    accepts_value: finite,
    prepare_data: keep_data,
    adjust_range: magnitude_range,
    solve_transform: solve_magnitude,
    calculate_intervals: geometric_intervals,
    tick_values: arithmetic_tick_values,
    format_value: format_geometric,
};

fn magnitude_range(_: &Axis, _: &RangeInputs, range: &mut ActualRange) {
    range.minimum = 0.0;
}

fn solve_angle(axis: &Axis, rect: ScreenRect, _: ScreenEndpoints) -> (AxisTransform, ScreenPoint) {
    let (start_angle, end_angle) = match axis.kind() {
        AxisKind::Angle {
            start_angle,
            end_angle,
        } => (*start_angle, *end_angle),
        _ => (0.0, 360.0),
    };
    (
        angle_transform(
            axis.actual_minimum(),
            axis.actual_maximum(),
            start_angle,
            end_angle,
        ),
        rect.center(),
    )
}

fn solve_magnitude(axis: &Axis, rect: ScreenRect, _: ScreenEndpoints) -> (AxisTransform, ScreenPoint) {
    magnitude_transform(rect, axis.actual_minimum(), axis.actual_maximum())
}
