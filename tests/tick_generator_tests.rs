use axis_rs::AxisError;
use axis_rs::core::ticks::{MAX_TICK_ITERATIONS, enumerate_ticks, logarithmic_ticks};
use axis_rs::core::{Axis, AxisConfig, AxisKind, AxisPosition, ScreenRect};

fn laid_out(kind: AxisKind, config: AxisConfig) -> Axis {
    let mut axis =
        Axis::new(kind, config.with_position(AxisPosition::Bottom)).expect("axis init");
    axis.update_layout(ScreenRect::new(0.0, 0.0, 500.0, 300.0).expect("rect"))
        .expect("layout");
    axis
}

#[test]
fn zero_to_hundred_by_ten_has_eleven_ticks() {
    let ticks: Vec<f64> = enumerate_ticks(0.0, 100.0, 10.0).expect("ticks").collect();
    assert_eq!(ticks.len(), 11);
    assert_eq!(ticks.first().copied(), Some(0.0));
    assert_eq!(ticks.last().copied(), Some(100.0));
}

#[test]
fn decimal_steps_come_out_clean() {
    let ticks: Vec<f64> = enumerate_ticks(0.0, 1.0, 0.1).expect("ticks").collect();
    assert_eq!(ticks.len(), 11);
    assert_eq!(ticks[3], 0.3);
    assert_eq!(ticks[7], 0.7);
}

#[test]
fn unaligned_minimum_starts_at_next_multiple() {
    let ticks: Vec<f64> = enumerate_ticks(3.0, 27.0, 5.0).expect("ticks").collect();
    assert_eq!(ticks, vec![5.0, 10.0, 15.0, 20.0, 25.0]);
}

#[test]
fn inverted_range_is_a_caller_error() {
    let err = enumerate_ticks(10.0, 0.0, 1.0).expect_err("inverted range");
    assert!(matches!(err, AxisError::InvalidTickArguments { .. }));
    let err = enumerate_ticks(0.0, 10.0, f64::NAN).expect_err("nan step");
    assert!(matches!(err, AxisError::InvalidTickArguments { .. }));
}

#[test]
fn runaway_enumeration_is_capped() {
    let count = enumerate_ticks(0.0, 1e9, 1.0).expect("ticks").count();
    assert_eq!(count, MAX_TICK_ITERATIONS);
}

#[test]
fn logarithmic_ticks_need_two_powers() {
    assert!(logarithmic_ticks(2.0, 9.0, 10.0).is_none());
    let (majors, minors) = logarithmic_ticks(1.0, 100.0, 10.0).expect("two decades");
    assert_eq!(majors, vec![1.0, 10.0, 100.0]);
    assert_eq!(minors.len(), 16);
}

#[test]
fn linear_axis_ticks_follow_selected_steps() {
    let axis = laid_out(AxisKind::Linear, AxisConfig::new("x").with_range(0.0, 100.0));
    let ticks = axis.tick_values().expect("ticks");

    assert_eq!(ticks.major_ticks, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    assert_eq!(ticks.major_labels, ticks.major_ticks);
    assert_eq!(ticks.minor_ticks.len(), 26);
}

#[test]
fn narrow_log_axis_falls_back_to_arithmetic_ticks() {
    let axis = laid_out(
        AxisKind::logarithmic(10.0),
        AxisConfig::new("x").with_range(2.0, 8.0),
    );
    let ticks = axis.tick_values().expect("ticks");
    assert!(!ticks.major_ticks.is_empty());
    assert!(
        ticks
            .major_ticks
            .iter()
            .all(|tick| *tick >= 2.0 - 1e-9 && *tick <= 8.0 + 1e-9)
    );
}

#[test]
fn log_axis_labels_powers() {
    let axis = laid_out(
        AxisKind::logarithmic(10.0),
        AxisConfig::new("x").with_range(1.0, 1000.0),
    );
    let ticks = axis.tick_values().expect("ticks");
    assert_eq!(ticks.major_labels, vec![1.0, 10.0, 100.0, 1000.0]);
    assert_eq!(ticks.minor_ticks.len(), 24);
}
