use super::{
    AxisKind, AxisStrategy, KindDefaults, arithmetic_tick_values, cartesian_transform,
    format_geometric, geometric_intervals, keep_data,
};
use crate::core::axis::Axis;
use crate::core::primitives::remove_noise;
use crate::core::range::{ActualRange, RangeInputs};
use crate::core::ticks::{TickValues, logarithmic_ticks};
use crate::error::AxisResult;

pub(super) static STRATEGY: AxisStrategy = AxisStrategy {
    name: "logarithmic",
    defaults: KindDefaults::GEOMETRIC,
    pre_transform,
    post_inverse_transform,
    accepts_value,
    prepare_data: keep_data,
    adjust_range,
    solve_transform: cartesian_transform,
    calculate_intervals: geometric_intervals,
    tick_values,
    format_value: format_geometric,
};

fn pre_transform(_: &AxisKind, value: f64) -> f64 {
    if value > 0.0 { value.ln() } else { f64::NAN }
}

fn post_inverse_transform(_: &AxisKind, value: f64) -> f64 {
    value.exp()
}

fn accepts_value(_: &AxisKind, value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn base(axis: &Axis) -> f64 {
    match axis.kind() {
        AxisKind::Logarithmic(options) => options.base,
        _ => 10.0,
    }
}

fn adjust_range(axis: &Axis, inputs: &RangeInputs, range: &mut ActualRange) {
    if !(range.minimum > 0.0) {
        range.minimum = 1.0;
    }
    if !(range.maximum > range.minimum) {
        range.maximum = range.minimum * 100.0;
    }

    let AxisKind::Logarithmic(options) = axis.kind() else {
        return;
    };
    if !options.power_padding {
        return;
    }
    let ln_base = options.base.ln();
    if inputs.minimum_follows_data() {
        let exponent = (range.minimum.ln() / ln_base).floor();
        range.minimum = remove_noise(options.base.powf(exponent));
    }
    if inputs.maximum_follows_data() {
        let exponent = (range.maximum.ln() / ln_base).ceil();
        range.maximum = remove_noise(options.base.powf(exponent));
    }
}

fn tick_values(axis: &Axis) -> AxisResult<TickValues> {
    match logarithmic_ticks(axis.actual_minimum(), axis.actual_maximum(), base(axis)) {
        Some((major_ticks, minor_ticks)) => Ok(TickValues {
            major_labels: major_ticks.clone(),
            major_ticks,
            minor_ticks,
        }),
        None => arithmetic_tick_values(axis),
    }
}
