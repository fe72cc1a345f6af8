use axis_rs::core::kinds::CategoryOptions;
use axis_rs::core::{
    Axis, AxisConfig, AxisKind, AxisPosition, CategoryBar, LabelLocale, ScreenRect,
};
use axis_rs::render::AxisRenderFrame;

fn category_axis(options: CategoryOptions) -> Axis {
    let mut axis = Axis::new(
        AxisKind::Category(options),
        AxisConfig::new("category").with_position(AxisPosition::Bottom),
    )
    .expect("axis init");
    axis.update_layout(ScreenRect::new(0.0, 0.0, 300.0, 200.0).expect("rect"))
        .expect("layout");
    axis
}

#[test]
fn three_labels_span_half_unit_margins() {
    let axis = category_axis(CategoryOptions::new(["a", "b", "c"]));
    assert_eq!(axis.actual_minimum(), -0.5);
    assert_eq!(axis.actual_maximum(), 2.5);
    assert_eq!(axis.actual_major_step(), 1.0);
}

#[test]
fn ticks_sit_between_categories() {
    let axis = category_axis(CategoryOptions::new(["a", "b", "c"]));
    let ticks = axis.tick_values().expect("ticks");
    assert_eq!(ticks.major_ticks, vec![-0.5, 0.5, 1.5, 2.5]);
    assert_eq!(ticks.major_labels, vec![0.0, 1.0, 2.0]);
    assert!(ticks.minor_ticks.is_empty());
}

#[test]
fn centred_ticks_sit_on_categories() {
    let axis = category_axis(CategoryOptions::new(["a", "b", "c"]).with_tick_centered(true));
    let ticks = axis.tick_values().expect("ticks");
    assert_eq!(ticks.major_ticks, vec![0.0, 1.0, 2.0]);
}

#[test]
fn wide_step_closes_axis_one_unit_after_last_tick() {
    let mut axis = Axis::new(
        AxisKind::category(["a", "b", "c", "d", "e"]),
        AxisConfig::new("category")
            .with_position(AxisPosition::Bottom)
            .with_major_step(2.0),
    )
    .expect("axis init");
    axis.update_layout(ScreenRect::new(0.0, 0.0, 300.0, 200.0).expect("rect"))
        .expect("layout");

    assert_eq!(axis.actual_minimum(), -0.5);
    assert_eq!(axis.actual_maximum(), 4.5);
    let ticks = axis.tick_values().expect("ticks");
    assert_eq!(ticks.major_ticks, vec![-0.5, 1.5, 3.5, 4.5]);
    assert_eq!(ticks.major_labels, vec![0.0, 2.0, 4.0]);
    assert!(ticks.major_ticks.iter().all(|tick| *tick <= axis.actual_maximum()));
}

#[test]
fn panned_axis_keeps_gridlines_past_last_category() {
    let mut axis = category_axis(CategoryOptions::new(["a", "b", "c"]));
    axis.pan(-100.0).expect("pan");
    assert!((axis.actual_minimum() - 0.5).abs() <= 1e-9);
    assert!((axis.actual_maximum() - 3.5).abs() <= 1e-9);

    let ticks = axis.tick_values().expect("ticks");
    assert_eq!(ticks.major_ticks, vec![0.5, 1.5, 2.5, 3.5]);
    assert_eq!(ticks.major_labels, vec![1.0, 2.0, 3.0]);

    let frame = AxisRenderFrame::from_axis(&axis, LabelLocale::EnUs).expect("frame");
    assert_eq!(frame.major_count(), 4);
    let texts: Vec<&str> = frame.labels.iter().map(|label| label.text.as_str()).collect();
    assert_eq!(texts, vec!["b", "c"]);
}

#[test]
fn labels_resolve_by_truncated_index() {
    let axis = category_axis(CategoryOptions::new(["a", "b", "c"]));
    assert_eq!(axis.format_value(1.0, LabelLocale::EnUs), "b");
    assert_eq!(axis.format_value(1.4, LabelLocale::EnUs), "b");
    assert_eq!(axis.format_value(-0.4, LabelLocale::EnUs), "a");
    assert_eq!(axis.format_value(3.0, LabelLocale::EnUs), "");
    assert_eq!(axis.format_value(-1.0, LabelLocale::EnUs), "");
    assert_eq!(axis.format_value_for_tracker(2.0, LabelLocale::EnUs), "c");
}

#[test]
fn categories_share_equal_screen_slots() {
    let axis = category_axis(CategoryOptions::new(["a", "b", "c"]));
    assert!((axis.transform(-0.5)).abs() <= 1e-9);
    assert!((axis.transform(0.5) - 100.0).abs() <= 1e-9);
    assert!((axis.transform(2.5) - 300.0).abs() <= 1e-9);
}

#[test]
fn bookkeeping_synthesizes_missing_labels() {
    let mut axis = Axis::new(AxisKind::category(Vec::<String>::new()), AxisConfig::new("c"))
        .expect("axis init");
    let bars = [CategoryBar::new(0, 1.0), CategoryBar::new(2, 1.0)];
    axis.update_category_layout(&bars).expect("bookkeeping");

    let AxisKind::Category(options) = axis.kind() else {
        panic!("category kind expected");
    };
    assert_eq!(options.labels, vec!["1", "2", "3"]);
    let layout = axis.category_layout().expect("layout");
    assert_eq!(layout.total_width_per_category, vec![1.0, 0.0, 1.0]);
    assert_eq!(layout.bar_offset, vec![0.25, 0.5, 0.25]);
}

#[test]
fn bookkeeping_rejects_other_kinds() {
    let mut axis = Axis::linear(AxisConfig::new("x")).expect("axis init");
    assert!(axis.update_category_layout(&[]).is_err());
}

#[test]
fn gap_width_narrows_bars() {
    let mut axis = Axis::new(
        AxisKind::Category(CategoryOptions::new(["a", "b"]).with_gap_width(0.0)),
        AxisConfig::new("c"),
    )
    .expect("axis init");
    axis.update_category_layout(&[CategoryBar::new(0, 1.0), CategoryBar::new(1, 1.0)])
        .expect("bookkeeping");
    let layout = axis.category_layout().expect("layout");
    assert_eq!(layout.bar_offset, vec![0.0, 0.0]);
    assert_eq!(layout.category_value(1), Some(0.5));
}
