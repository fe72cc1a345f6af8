use approx::assert_relative_eq;
use axis_rs::core::{Axis, AxisConfig, AxisKind, AxisPosition, ScreenRect};

fn rect() -> ScreenRect {
    ScreenRect::new(0.0, 0.0, 800.0, 600.0).expect("valid rect")
}

fn bottom_axis(kind: AxisKind, config: AxisConfig) -> Axis {
    let mut axis =
        Axis::new(kind, config.with_position(AxisPosition::Bottom)).expect("axis init");
    axis.update_layout(rect()).expect("layout");
    axis
}

#[test]
fn linear_axis_maps_range_onto_plot_width() {
    let axis = bottom_axis(AxisKind::Linear, AxisConfig::new("x").with_range(-50.0, 250.0));

    assert!((axis.transform(-50.0) - 0.0).abs() <= 1e-9);
    assert!((axis.transform(250.0) - 800.0).abs() <= 1e-9);
    for value in [-50.0, -12.5, 0.0, 17.25, 249.0] {
        let recovered = axis.inverse_transform(axis.transform(value));
        assert!((recovered - value).abs() <= 1e-9);
    }
}

#[test]
fn partial_axis_uses_position_fractions() {
    let axis = bottom_axis(
        AxisKind::Linear,
        AxisConfig::new("x")
            .with_range(0.0, 10.0)
            .with_screen_fractions(0.25, 0.75),
    );

    assert!((axis.transform(0.0) - 200.0).abs() <= 1e-9);
    assert!((axis.transform(10.0) - 600.0).abs() <= 1e-9);
}

#[test]
fn logarithmic_axis_spaces_decades_evenly() {
    let axis = bottom_axis(
        AxisKind::logarithmic(10.0),
        AxisConfig::new("x").with_range(1.0, 1000.0),
    );

    assert_relative_eq!(axis.transform(10.0), 800.0 / 3.0, epsilon = 1e-9);
    assert_relative_eq!(axis.transform(100.0), 1600.0 / 3.0, epsilon = 1e-9);
    assert_relative_eq!(axis.inverse_transform(400.0), 10_f64.powf(1.5), max_relative = 1e-12);
}

#[test]
fn logarithmic_axis_rejects_non_positive_values() {
    let axis = bottom_axis(
        AxisKind::logarithmic(10.0),
        AxisConfig::new("x").with_range(1.0, 1000.0),
    );

    assert!(axis.transform(0.0).is_nan());
    assert!(axis.transform(-5.0).is_nan());
    assert!(!axis.is_valid_value(0.0));
    assert!(axis.is_valid_value(1e-3));
}

#[test]
fn collapsed_overrides_widen_to_hundred() {
    let axis = bottom_axis(AxisKind::Linear, AxisConfig::new("x").with_range(5.0, 5.0));
    assert_eq!(axis.actual_minimum(), 5.0);
    assert_eq!(axis.actual_maximum(), 105.0);
}

#[test]
fn empty_axis_defaults_to_zero_hundred() {
    let axis = bottom_axis(AxisKind::Linear, AxisConfig::new("x"));
    assert_eq!(axis.actual_minimum(), 0.0);
    assert_eq!(axis.actual_maximum(), 100.0);
    assert!(axis.scale().is_finite());
}

#[test]
fn single_value_is_expanded_then_padded() {
    let mut axis = Axis::linear(AxisConfig::new("x").with_position(AxisPosition::Bottom))
        .expect("axis init");
    axis.include(10.0);
    axis.update_layout(rect()).expect("layout");

    assert_relative_eq!(axis.actual_minimum(), 4.9, epsilon = 1e-9);
    assert_relative_eq!(axis.actual_maximum(), 15.1, epsilon = 1e-9);
}

#[test]
fn minimum_range_recenters_narrow_data() {
    let mut axis = Axis::linear(
        AxisConfig::new("x")
            .with_position(AxisPosition::Bottom)
            .with_padding(0.0, 0.0)
            .with_minimum_range(10.0),
    )
    .expect("axis init");
    axis.include(0.0);
    axis.include(1.0);
    axis.update_layout(rect()).expect("layout");

    assert_relative_eq!(axis.actual_minimum(), -4.5, epsilon = 1e-12);
    assert_relative_eq!(axis.actual_maximum(), 5.5, epsilon = 1e-12);
}

#[test]
fn minimum_range_stays_inside_logarithmic_domain() {
    let mut axis = Axis::new(
        AxisKind::logarithmic(10.0),
        AxisConfig::new("x")
            .with_position(AxisPosition::Bottom)
            .with_minimum_range(10.0),
    )
    .expect("axis init");
    axis.include(1.0);
    axis.include(2.0);
    axis.update_layout(rect()).expect("layout");

    assert!(axis.actual_minimum() > 0.0);
    assert!(axis.actual_minimum() <= 1.0);
    assert_relative_eq!(axis.actual_maximum() - axis.actual_minimum(), 10.0, epsilon = 1e-9);
    assert!((axis.transform(axis.actual_minimum())).abs() <= 1e-9);
    assert!((axis.transform(axis.actual_maximum()) - 800.0).abs() <= 1e-9);
}

#[test]
fn absolute_range_clamps_nominal_bounds() {
    let axis = bottom_axis(
        AxisKind::Linear,
        AxisConfig::new("x")
            .with_range(-10.0, 80.0)
            .with_absolute_range(0.0, 50.0),
    );
    assert_eq!(axis.actual_minimum(), 0.0);
    assert_eq!(axis.actual_maximum(), 50.0);
}

#[test]
fn transform_many_matches_scalar_transform() {
    let axis = bottom_axis(AxisKind::Linear, AxisConfig::new("x").with_range(0.0, 8.0));
    let values = [0.0, 1.0, 2.5, 8.0];
    let projected = axis.transform_many(&values);
    for (value, screen) in values.iter().zip(projected) {
        assert!((axis.transform(*value) - screen).abs() <= 1e-12);
    }
}
