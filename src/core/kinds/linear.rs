use super::{
    AxisStrategy, KindDefaults, arithmetic_tick_values, cartesian_transform, finite,
    format_geometric, geometric_intervals, identity, keep_data, keep_range,
};

pub(super) static STRATEGY: AxisStrategy = AxisStrategy {
    name: "linear",
    defaults: KindDefaults::GEOMETRIC,
    pre_transform: identity,
    post_inverse_transform: identity,
    accepts_value: finite,
    prepare_data: keep_data,
    adjust_range: keep_range,
    solve_transform: cartesian_transform,
    calculate_intervals: geometric_intervals,
    tick_values: arithmetic_tick_values,
    format_value: format_geometric,
};
