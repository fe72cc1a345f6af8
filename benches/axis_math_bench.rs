use axis_rs::api::PlotAxes;
use axis_rs::core::interval::{CalendarUnit, DAY, calendar_interval, nice_step};
use axis_rs::core::ticks::{calendar_ticks, enumerate_ticks};
use axis_rs::core::{Axis, AxisConfig, AxisKey, AxisKind, AxisPosition, ScreenRect};
use axis_rs::render::NullAxisRenderer;
use chrono::Weekday;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn laid_out_axis(kind: AxisKind) -> Axis {
    let config = AxisConfig::new("x")
        .with_position(AxisPosition::Bottom)
        .with_range(1.0, 10_000.0);
    let mut axis = Axis::new(kind, config).expect("valid axis");
    axis.update_layout(ScreenRect::new(0.0, 0.0, 1920.0, 1080.0).expect("valid rect"))
        .expect("layout");
    axis
}

fn bench_transform_round_trip(c: &mut Criterion) {
    let linear = laid_out_axis(AxisKind::Linear);
    let logarithmic = laid_out_axis(AxisKind::logarithmic(10.0));

    c.bench_function("linear_transform_round_trip", |b| {
        b.iter(|| {
            let px = linear.transform(black_box(4_321.123));
            let _ = linear.inverse_transform(px);
        })
    });
    c.bench_function("log_transform_round_trip", |b| {
        b.iter(|| {
            let px = logarithmic.transform(black_box(4_321.123));
            let _ = logarithmic.inverse_transform(px);
        })
    });
}

fn bench_transform_many_10k(c: &mut Criterion) {
    let axis = laid_out_axis(AxisKind::Linear);
    let values: Vec<f64> = (0..10_000).map(|i| 1.0 + i as f64 * 0.999).collect();

    c.bench_function("transform_many_10k", |b| {
        b.iter(|| {
            let _ = axis.transform_many(black_box(&values));
        })
    });
}

fn bench_interval_selection(c: &mut Criterion) {
    c.bench_function("nice_step", |b| {
        b.iter(|| nice_step(black_box(1920.0), black_box(60.0), black_box(12_345.678)))
    });
    c.bench_function("calendar_interval_auto", |b| {
        b.iter(|| calendar_interval(black_box(1920.0), 60.0, black_box(400.0 * DAY), None, None))
    });
}

fn bench_tick_enumeration(c: &mut Criterion) {
    c.bench_function("enumerate_ticks_1k", |b| {
        b.iter(|| {
            enumerate_ticks(black_box(0.0), black_box(999.0), black_box(1.0))
                .expect("valid ticks")
                .count()
        })
    });
    c.bench_function("calendar_ticks_monthly_decade", |b| {
        b.iter(|| {
            calendar_ticks(
                black_box(1_577_836_800.0),
                black_box(1_893_456_000.0),
                1.0,
                CalendarUnit::Months,
                Weekday::Mon,
            )
            .expect("valid calendar ticks")
        })
    });
}

fn bench_plot_layout_and_render(c: &mut Criterion) {
    let mut plot = PlotAxes::new();
    plot.add_axis(
        Axis::linear(AxisConfig::new("x").with_position(AxisPosition::Bottom)).expect("x"),
    )
    .expect("add x");
    plot.add_axis(Axis::new(AxisKind::logarithmic(10.0), AxisConfig::new("y")).expect("y"))
        .expect("add y");
    let (x, y) = (AxisKey::from("x"), AxisKey::from("y"));
    for i in 1..=1_000 {
        plot.include(&x, i as f64).expect("include x");
        plot.include(&y, (i * i) as f64).expect("include y");
    }
    let rect = ScreenRect::new(0.0, 0.0, 1920.0, 1080.0).expect("valid rect");

    c.bench_function("plot_layout_and_render", |b| {
        b.iter(|| {
            plot.update_layout(black_box(rect)).expect("layout");
            let mut renderer = NullAxisRenderer::default();
            plot.render(&mut renderer).expect("render");
        })
    });
}

criterion_group!(
    benches,
    bench_transform_round_trip,
    bench_transform_many_10k,
    bench_interval_selection,
    bench_tick_enumeration,
    bench_plot_layout_and_render
);
criterion_main!(benches);
